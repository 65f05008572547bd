pub mod engine;
pub mod terminal;
pub mod world;

use engine::{
    Command, Output, handle_inventory, handle_move, handle_pick_up, parse_command, render_help,
    render_room,
};
use world::{Player, World};

pub use world::{load_world_from_file, load_world_from_str, sample_world};

/// One player walking one world. Interprets a line at a time.
pub struct Session {
    pub world: World,
    pub player: Player,
}

#[cfg(feature = "wasm")]
mod wasm_bindings {
    use super::*;
    use serde::Serialize;
    use serde_wasm_bindgen::to_value;
    use wasm_bindgen::prelude::*;

    #[derive(Serialize)]
    struct WasmStepResult {
        blocks: Vec<engine::OutputBlock>,
        quit: bool,
    }

    #[wasm_bindgen]
    pub struct WasmGame {
        session: Session,
    }

    #[wasm_bindgen]
    impl WasmGame {
        /// Create a new game from a TOML world string.
        #[wasm_bindgen(constructor)]
        pub fn new(world_toml: &str) -> Result<WasmGame, JsValue> {
            let world =
                load_world_from_str(world_toml).map_err(|e| JsValue::from_str(&e.to_string()))?;
            Ok(WasmGame {
                session: Session::new(world),
            })
        }

        /// A game in the built-in two-room world.
        #[wasm_bindgen]
        pub fn sample() -> WasmGame {
            WasmGame {
                session: Session::new(sample_world()),
            }
        }

        /// Process a player command and return the resulting output blocks and quit flag.
        #[wasm_bindgen]
        pub fn step(&mut self, input: &str) -> JsValue {
            let (out, quit) = self.session.step(input);
            to_value(&WasmStepResult {
                blocks: out.blocks,
                quit,
            })
            .unwrap_or(JsValue::NULL)
        }
    }
}

impl Session {
    pub fn new(world: World) -> Self {
        let player = Player::new(world.start_room());
        Session { world, player }
    }

    /// Process a single player input; returns (output, quit?)
    pub fn step(&mut self, input: &str) -> (Output, bool) {
        let mut out = Output::new();

        let command = match parse_command(input) {
            Ok(Some(command)) => command,
            Ok(None) => return (out, false),
            Err(e) => {
                log::debug!("rejected input {:?}: {:?}", input, e);
                out.say(e.to_string());
                return (out, false);
            }
        };

        log::debug!("dispatching {:?}", command);

        let mut quit = false;
        match command {
            Command::Look => match self.world.room(self.player.current_room()) {
                Some(room) => render_room(&mut out, room),
                None => log::warn!("player is in unknown room {:?}", self.player.current_room()),
            },
            Command::Move(direction) => {
                handle_move(&mut out, &self.world, &mut self.player, &direction);
            }
            Command::PickUp(name) => {
                handle_pick_up(&mut out, &mut self.world, &mut self.player, &name);
            }
            Command::Inventory => handle_inventory(&mut out, &self.player),
            Command::Help => render_help(&mut out),
            Command::Quit => {
                out.say("Goodbye!");
                quit = true;
            }
        }

        (out, quit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::RoomId;

    fn lines(out: &Output) -> Vec<String> {
        out.lines().map(str::to_string).collect()
    }

    #[test]
    fn start_room_scenario() {
        let mut session = Session::new(sample_world());

        let (out, quit) = session.step("look");
        assert!(!quit);
        assert_eq!(
            lines(&out),
            vec!["Start Room", "A small stone chamber.", "Items here: sword"]
        );

        let (out, _) = session.step("pick up sword");
        assert_eq!(lines(&out), vec!["You picked up sword"]);
        assert_eq!(session.player.inventory().len(), 1);

        let (out, _) = session.step("move forward");
        assert_eq!(
            lines(&out),
            vec!["Dark Corridor", "A dark, narrow corridor.", "No items here."]
        );
        assert_eq!(session.player.current_room(), RoomId(1));

        let (out, _) = session.step("move forward");
        assert_eq!(lines(&out), vec!["You can't go that way!"]);
        assert_eq!(session.player.current_room(), RoomId(1));

        let (out, quit) = session.step("quit");
        assert!(quit);
        assert_eq!(lines(&out), vec!["Goodbye!"]);
    }

    #[test]
    fn malformed_input_is_reported_without_quitting() {
        let mut session = Session::new(sample_world());
        for (input, expected) in [
            ("dance", "Unknown command."),
            ("move", "Direction required. Usage: move <forward|back|left|right>"),
            ("pick sword", "Invalid command. Usage: pick up <itemName>"),
            ("pick up", "Item name required. Usage: pick up <itemName>"),
            ("pick up shield", "No item named shield here!"),
        ] {
            let (out, quit) = session.step(input);
            assert!(!quit, "{input} should not end the session");
            assert_eq!(lines(&out), vec![expected.to_string()], "input: {input}");
        }
        assert_eq!(session.player.current_room(), session.world.start_room());
        assert!(session.player.inventory().is_empty());
    }

    #[test]
    fn blank_input_produces_nothing() {
        let mut session = Session::new(sample_world());
        let (out, quit) = session.step("   ");
        assert!(out.is_empty());
        assert!(!quit);
    }

    #[test]
    fn exit_is_quit() {
        let mut session = Session::new(sample_world());
        let (out, quit) = session.step("EXIT");
        assert!(quit);
        assert_eq!(lines(&out), vec!["Goodbye!"]);
    }
}
