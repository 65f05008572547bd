use crate::engine::output::Output;
use crate::world;

pub fn handle_inventory(out: &mut Output, player: &world::Player) {
    let carried = player.inventory();

    if carried.is_empty() {
        out.say("You are not carrying anything.");
        return;
    }

    out.say("You are carrying:");
    for item in carried {
        out.say(format!("- {}", item.name()));
    }
}

/// Moves the first item called exactly `target_name` from the current room
/// into the inventory.
pub fn handle_pick_up(
    out: &mut Output,
    world: &mut world::World,
    player: &mut world::Player,
    target_name: &str,
) {
    let taken = world
        .room_mut(player.current_room())
        .and_then(|room| room.take_item(target_name));

    match taken {
        Some(item) => {
            log::debug!("picked up '{}'", item.name());
            out.say(format!("You picked up {}", item.name()));
            player.add_item(item);
        }
        None => {
            out.say(format!("No item named {} here!", target_name));
        }
    }
}
