use std::env;
use std::io;
use std::path::PathBuf;

use stone_mud::world::{self, World};
use stone_mud::{Session, terminal};

fn load_world(path: Option<PathBuf>) -> World {
    let Some(world_path) = path else {
        log::info!("Using built-in world");
        return world::sample_world();
    };

    match world::load_world_from_file(&world_path) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("Failed to load world file '{}': {e}", world_path.display());
            std::process::exit(1);
        }
    }
}

fn main() -> io::Result<()> {
    // Diagnostics go to stderr; stdout carries only the game transcript.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    log::info!("Starting stone_mud v{}", env!("CARGO_PKG_VERSION"));

    let world = load_world(env::args().nth(1).map(PathBuf::from));

    for warning in world::validate_world(&world) {
        log::warn!("{}", warning);
    }

    let mut session = Session::new(world);

    let stdin = io::stdin();
    let stdout = io::stdout();
    terminal::run(&mut session, stdin.lock(), stdout.lock())
}
