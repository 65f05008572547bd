use std::collections::{HashSet, VecDeque};
use std::fmt;

use super::model::{Direction, RoomId, World};

/// Something an author probably wants to know about, but that still plays fine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationWarning {
    Unreachable {
        room: String,
    },
    OneWayExit {
        from: String,
        direction: Direction,
        to: String,
    },
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationWarning::Unreachable { room } => {
                write!(f, "room '{}' cannot be reached from the start room", room)
            }
            ValidationWarning::OneWayExit {
                from,
                direction,
                to,
            } => write!(
                f,
                "exit '{}' from '{}' to '{}' has no way back",
                direction, from, to
            ),
        }
    }
}

pub fn validate_world(world: &World) -> Vec<ValidationWarning> {
    let mut warnings: Vec<ValidationWarning> = Vec::new();

    let reachable = reachable_from(world, world.start_room());
    for (id, room) in world.rooms() {
        if !reachable.contains(&id) {
            warnings.push(ValidationWarning::Unreachable {
                room: room.name.clone(),
            });
        }
    }

    for (id, room) in world.rooms() {
        for (direction, target) in room.exits.iter() {
            let leads_back = world
                .room(target)
                .map(|t| t.exits.iter().any(|(_, back)| back == id))
                .unwrap_or(false);

            if !leads_back {
                let to = world
                    .room(target)
                    .map(|t| t.name.clone())
                    .unwrap_or_default();
                warnings.push(ValidationWarning::OneWayExit {
                    from: room.name.clone(),
                    direction,
                    to,
                });
            }
        }
    }

    warnings
}

fn reachable_from(world: &World, start: RoomId) -> HashSet<RoomId> {
    let mut seen: HashSet<RoomId> = HashSet::new();
    let mut queue: VecDeque<RoomId> = VecDeque::new();

    seen.insert(start);
    queue.push_back(start);

    while let Some(id) = queue.pop_front() {
        let Some(room) = world.room(id) else {
            continue;
        };
        for (_, next) in room.exits.iter() {
            if seen.insert(next) {
                queue.push_back(next);
            }
        }
    }

    seen
}
