use std::fmt;
use std::str::FromStr;

use thiserror::Error;

//////////////////////////////
/// GAME STRUCTS AND ENUMS ///
//////////////////////////////

/// Index of a room inside a [`World`]. Rooms never own each other; exits hold ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(pub usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    name: String,
}

impl Item {
    pub fn new(name: impl Into<String>) -> Self {
        Item { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Back,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Forward,
        Direction::Back,
        Direction::Left,
        Direction::Right,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Forward => "forward",
            Direction::Back => "back",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    fn slot(self) -> usize {
        match self {
            Direction::Forward => 0,
            Direction::Back => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown direction '{0}'")]
pub struct DirectionError(pub String);

impl FromStr for Direction {
    type Err = DirectionError;

    /// Whole-word, case-insensitive. Prefixes such as "forw" are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| DirectionError(s.to_string()))
    }
}

/// Four independently settable exits. Setting one never touches the target room.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Exits {
    slots: [Option<RoomId>; 4],
}

impl Exits {
    pub fn get(&self, dir: Direction) -> Option<RoomId> {
        self.slots[dir.slot()]
    }

    pub fn set(&mut self, dir: Direction, target: RoomId) {
        self.slots[dir.slot()] = Some(target);
    }

    /// Set exits in direction order.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, RoomId)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(|d| self.get(d).map(|target| (d, target)))
    }
}

#[derive(Debug, Clone)]
pub struct Room {
    pub name: String,
    pub description: String,
    pub exits: Exits,
    items: Vec<Item>,
}

impl Room {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Room {
            name: name.into(),
            description: description.into(),
            exits: Exits::default(),
            items: Vec::new(),
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Case-sensitive exact match; the first item with that name wins.
    pub fn item_named(&self, name: &str) -> Option<&Item> {
        self.position_of(name).map(|idx| &self.items[idx])
    }

    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.name == name)
    }

    /// Removes the item at `index` (its identity within this room).
    pub fn remove_item(&mut self, index: usize) -> Option<Item> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// Removes exactly the entry `item_named` would return.
    pub fn take_item(&mut self, name: &str) -> Option<Item> {
        let idx = self.position_of(name)?;
        self.remove_item(idx)
    }
}

/// Runtime world: an arena of rooms plus the room the player starts in.
#[derive(Debug, Clone)]
pub struct World {
    rooms: Vec<Room>,
    start_room: RoomId,
}

impl World {
    /// A world whose first room is also the start room.
    pub fn new(first_room: Room) -> Self {
        World {
            rooms: vec![first_room],
            start_room: RoomId(0),
        }
    }

    pub fn add_room(&mut self, room: Room) -> RoomId {
        self.rooms.push(room);
        RoomId(self.rooms.len() - 1)
    }

    pub fn start_room(&self) -> RoomId {
        self.start_room
    }

    /// Returns false (and leaves the start room alone) if `id` is not in this world.
    pub fn set_start_room(&mut self, id: RoomId) -> bool {
        if self.contains(id) {
            self.start_room = id;
            true
        } else {
            false
        }
    }

    pub fn contains(&self, id: RoomId) -> bool {
        id.0 < self.rooms.len()
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.0)
    }

    pub fn room_mut(&mut self, id: RoomId) -> Option<&mut Room> {
        self.rooms.get_mut(id.0)
    }

    /// One-way link. Callers wanting a way back set the reverse exit themselves.
    pub fn set_exit(&mut self, from: RoomId, dir: Direction, to: RoomId) -> bool {
        if !self.contains(to) {
            return false;
        }
        match self.rooms.get_mut(from.0) {
            Some(room) => {
                room.exits.set(dir, to);
                true
            }
            None => false,
        }
    }

    pub fn rooms(&self) -> impl Iterator<Item = (RoomId, &Room)> {
        self.rooms.iter().enumerate().map(|(i, r)| (RoomId(i), r))
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }
}

#[derive(Debug, Clone)]
pub struct Player {
    current_room: RoomId,
    inventory: Vec<Item>,
}

impl Player {
    pub fn new(start: RoomId) -> Self {
        Player {
            current_room: start,
            inventory: Vec::new(),
        }
    }

    pub fn current_room(&self) -> RoomId {
        self.current_room
    }

    pub fn set_current_room(&mut self, room: RoomId) {
        self.current_room = room;
    }

    /// Appends; two items with the same name may both be carried.
    pub fn add_item(&mut self, item: Item) {
        self.inventory.push(item);
    }

    pub fn inventory(&self) -> &[Item] {
        &self.inventory
    }
}
