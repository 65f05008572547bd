use super::model::{Direction, Item, Room, World};

/// The built-in two-room world used when no world file is given.
pub fn sample_world() -> World {
    let mut start = Room::new("Start Room", "A small stone chamber.");
    start.add_item(Item::new("sword"));

    let mut world = World::new(start);
    let start_id = world.start_room();
    let corridor = world.add_room(Room::new("Dark Corridor", "A dark, narrow corridor."));

    // Both directions wired by hand; exits are one-way links.
    world.set_exit(start_id, Direction::Forward, corridor);
    world.set_exit(corridor, Direction::Back, start_id);

    world
}
