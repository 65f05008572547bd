use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Reasons a world file cannot be turned into a playable [`super::World`].
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("could not read world file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid world file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("world has no rooms")]
    NoRooms,

    #[error("room id may not be empty")]
    EmptyRoomId,

    #[error("room '{0}' has an empty name")]
    EmptyRoomName(String),

    #[error("duplicate room id: {0}")]
    DuplicateRoom(String),

    #[error("room '{0}' has an item with an empty name")]
    EmptyItemName(String),

    #[error("room '{room}' exit '{direction}' targets missing room '{target}'")]
    UnknownExitTarget {
        room: String,
        direction: String,
        target: String,
    },

    #[error("start_room '{0}' not found among rooms")]
    UnknownStartRoom(String),
}
