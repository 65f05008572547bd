use stone_mud::{Session, load_world_from_str, sample_world, terminal};

fn play(session: &mut Session, input: &str) -> String {
    let mut buf: Vec<u8> = Vec::new();
    terminal::run(session, input.as_bytes(), &mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

const SCENARIO_INPUT: &str = "look\npick up sword\nmove forward\nmove forward\nquit\n";

const SCENARIO_OUTPUT: &str = concat!(
    "> Start Room\n",
    "A small stone chamber.\n",
    "Items here: sword\n",
    "> You picked up sword\n",
    "> Dark Corridor\n",
    "A dark, narrow corridor.\n",
    "No items here.\n",
    "> You can't go that way!\n",
    "> Goodbye!\n",
);

#[test]
fn start_room_walkthrough() {
    let mut session = Session::new(sample_world());
    assert_eq!(play(&mut session, SCENARIO_INPUT), SCENARIO_OUTPUT);
    assert_eq!(session.player.inventory().len(), 1);
    assert_eq!(session.player.inventory()[0].name(), "sword");
}

#[test]
fn bundled_world_file_plays_like_the_built_in_world() {
    let world = load_world_from_str(include_str!("../worlds/stone_chamber.toml")).unwrap();
    let mut session = Session::new(world);
    assert_eq!(play(&mut session, SCENARIO_INPUT), SCENARIO_OUTPUT);
}

#[test]
fn walk_back_and_check_inventory() {
    let mut session = Session::new(sample_world());
    let input = "pick up sword\nmove forward\nMOVE BACK\nlook\ninventory\npick up sword\n";
    assert_eq!(
        play(&mut session, input),
        concat!(
            "> You picked up sword\n",
            "> Dark Corridor\n",
            "A dark, narrow corridor.\n",
            "No items here.\n",
            "> Start Room\n",
            "A small stone chamber.\n",
            "No items here.\n",
            "> Start Room\n",
            "A small stone chamber.\n",
            "No items here.\n",
            "> You are carrying:\n",
            "- sword\n",
            "> No item named sword here!\n",
            "> ",
        )
    );
}

#[test]
fn unknown_verb_prints_exactly_one_line() {
    let mut session = Session::new(sample_world());
    assert_eq!(play(&mut session, "dance\n"), "> Unknown command.\n> ");
}

#[test]
fn multi_word_items_keep_their_case() {
    let src = r#"
        [world]
        start_room = "attic"

        [[room]]
        id = "attic"
        name = "Attic"
        desc = "Dusty beams."
        items = ["Old Map", "old map"]
    "#;
    let mut session = Session::new(load_world_from_str(src).unwrap());
    assert_eq!(
        play(&mut session, "pick up   Old   Map\nlook\n"),
        concat!(
            "> You picked up Old Map\n",
            "> Attic\n",
            "Dusty beams.\n",
            "Items here: old map\n",
            "> ",
        )
    );
}

#[test]
fn room_without_description_still_prints_three_look_lines() {
    let src = r#"
        [world]
        start_room = "a"

        [[room]]
        id = "a"
        name = "A"
    "#;
    let mut session = Session::new(load_world_from_str(src).unwrap());
    assert_eq!(play(&mut session, "look\n"), "> A\n\nNo items here.\n> ");
}
