use crate::engine::output::Output;
use crate::engine::render::render_room;
use crate::world;

const BLOCKED: &str = "You can't go that way!";

/// Moves the player through the named exit and describes the new room.
///
/// A word that is not a direction and a direction with no exit get the same
/// reply; the player is left where they were in both cases.
pub fn handle_move(
    out: &mut Output,
    world: &world::World,
    player: &mut world::Player,
    direction: &str,
) {
    let Ok(dir) = direction.parse::<world::Direction>() else {
        log::debug!("move: '{}' is not a direction", direction);
        out.say(BLOCKED);
        return;
    };

    let target = world
        .room(player.current_room())
        .and_then(|room| room.exits.get(dir));

    match target.and_then(|id| world.room(id).map(|room| (id, room))) {
        Some((id, room)) => {
            log::debug!("move: {} -> {}", dir, room.name);
            player.set_current_room(id);
            render_room(out, room);
        }
        None => {
            log::debug!("move: no exit {}", dir);
            out.say(BLOCKED);
        }
    }
}
