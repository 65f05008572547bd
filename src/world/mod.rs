mod error;
mod loader;
mod model;
mod sample;
mod validator;

pub use error::WorldError;
pub use loader::{load_world_from_file, load_world_from_str};

// Minimal, intentional surface area: re-export only what the game/engine uses.
pub use model::{Direction, DirectionError, Exits, Item, Player, Room, RoomId, World};
pub use sample::sample_world;
pub use validator::{ValidationWarning, validate_world};
