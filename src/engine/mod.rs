mod command;
mod items;
mod movement;
mod output;
mod render;

pub use command::{Command, CommandError, parse_command};
pub use items::{handle_inventory, handle_pick_up};
pub use movement::handle_move;
pub use output::{Output, OutputBlock};
pub use render::{render_help, render_room};
