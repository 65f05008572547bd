use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::error::WorldError;
use super::model::{Direction, Item, Room, RoomId, World};

////////////////////
/// TOML STRUCTS ///
////////////////////

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct WorldFile {
    world: WorldHeader,
    #[serde(default)]
    room: Vec<RoomConfig>, // [[room]] blocks
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct WorldHeader {
    start_room: String,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RoomConfig {
    id: String,
    name: String,
    #[serde(default)]
    desc: String,

    #[serde(default)]
    items: Vec<String>,

    #[serde(default)]
    exits: ExitsConfig, // [room.exits]
}

/// Only the four known directions are accepted; "up = ..." is a parse error.
#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct ExitsConfig {
    forward: Option<String>,
    back: Option<String>,
    left: Option<String>,
    right: Option<String>,
}

impl ExitsConfig {
    fn entries(&self) -> impl Iterator<Item = (Direction, &str)> {
        [
            (Direction::Forward, self.forward.as_deref()),
            (Direction::Back, self.back.as_deref()),
            (Direction::Left, self.left.as_deref()),
            (Direction::Right, self.right.as_deref()),
        ]
        .into_iter()
        .filter_map(|(dir, target)| target.map(|t| (dir, t)))
    }
}

/////////////////////////////
/// TOML PARSER FUNCTIONS ///
/////////////////////////////

/// Public API: load a world from a .toml file on disk.
pub fn load_world_from_file(path: &Path) -> Result<World, WorldError> {
    let contents = fs::read_to_string(path).map_err(|source| WorldError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let world = load_world_from_str(&contents)?;
    log::info!(
        "Loaded world file {} ({} rooms)",
        path.display(),
        world.room_count()
    );
    Ok(world)
}

pub fn load_world_from_str(contents: &str) -> Result<World, WorldError> {
    let world_file: WorldFile = toml::from_str(contents)?;

    let start_key = world_file.world.start_room.trim().to_string();

    // First pass: rooms and their items, so exits can refer forward.
    let mut ids: HashMap<String, RoomId> = HashMap::new();
    let mut world: Option<World> = None;

    for room_cfg in &world_file.room {
        let id = room_cfg.id.trim();
        if id.is_empty() {
            return Err(WorldError::EmptyRoomId);
        }
        if ids.contains_key(id) {
            return Err(WorldError::DuplicateRoom(id.to_string()));
        }
        if room_cfg.name.trim().is_empty() {
            return Err(WorldError::EmptyRoomName(id.to_string()));
        }

        let mut room = Room::new(
            room_cfg.name.trim(),
            normalize_multiline_desc(&room_cfg.desc),
        );
        for item_name in &room_cfg.items {
            let item_name = item_name.trim();
            if item_name.is_empty() {
                return Err(WorldError::EmptyItemName(id.to_string()));
            }
            room.add_item(Item::new(item_name));
        }

        let room_id = match world.as_mut() {
            Some(w) => w.add_room(room),
            None => {
                let w = World::new(room);
                let first = w.start_room();
                world = Some(w);
                first
            }
        };
        ids.insert(id.to_string(), room_id);
    }

    let mut world = world.ok_or(WorldError::NoRooms)?;

    // Second pass: exits. Nothing here adds a reverse link.
    for room_cfg in &world_file.room {
        let from = ids[room_cfg.id.trim()];
        for (dir, target) in room_cfg.exits.entries() {
            let to = ids
                .get(target.trim())
                .copied()
                .ok_or_else(|| WorldError::UnknownExitTarget {
                    room: room_cfg.id.trim().to_string(),
                    direction: dir.to_string(),
                    target: target.to_string(),
                })?;
            world.set_exit(from, dir, to);
        }
    }

    let start = ids
        .get(&start_key)
        .copied()
        .ok_or(WorldError::UnknownStartRoom(start_key))?;
    world.set_start_room(start);

    Ok(world)
}

fn normalize_multiline_desc(raw: &str) -> String {
    let mut result = String::new();
    let mut pending_blank_lines = 0usize;

    for line in raw.lines() {
        // Indentation inside TOML strings never reaches the player.
        let trimmed = line.trim();

        if trimmed.is_empty() {
            pending_blank_lines += 1;
            continue;
        }

        if !result.is_empty() {
            match pending_blank_lines {
                0 => result.push(' '),
                1 => result.push('\n'),
                _ => result.push_str("\n\n"),
            }
        }
        result.push_str(trimmed);
        pending_blank_lines = 0;
    }

    result
}
