use crate::engine::output::Output;
use crate::world;

const HELP_LINES: [&str; 7] = [
    "Available commands:",
    "look - Describes the current room.",
    "move <forward|back|left|right> - Moves in the specified direction.",
    "pick up <itemName> - Picks up an item from the ground.",
    "inventory - Lists items in your inventory.",
    "help - Shows this help message.",
    "quit/exit - Exits the game.",
];

/// Name, description, then the items on the floor. Reads the room only.
pub fn render_room(out: &mut Output, room: &world::Room) {
    out.title(room.name.clone());
    out.line(room.description.clone());

    if room.items().is_empty() {
        out.say("No items here.");
    } else {
        let list = room
            .items()
            .iter()
            .map(world::Item::name)
            .collect::<Vec<&str>>()
            .join(", ");
        out.say(format!("Items here: {}", list));
    }
}

pub fn render_help(out: &mut Output) {
    for line in HELP_LINES {
        out.say(line);
    }
}
