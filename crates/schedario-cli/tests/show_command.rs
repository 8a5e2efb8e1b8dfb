use schedario_testing::TestWorld;
use schedario_testing::assertions::{assert_badge_level, find_field};

const GEOMORFOLOGIA: &str = "Geomorfologia (CAE) [5000 caratteri]";

#[test]
fn test_show_truncates_long_fields_collapsed() {
    let world = TestWorld::new().with_sample_data();

    let json = world
        .run_json(&["show", "--dataset", "mopr", "--index", "0"])
        .unwrap()
        .json()
        .unwrap();
    let card = &json["content"];
    assert_eq!(card["title"], "Raddoppio ferroviario");

    let field = find_field(card, GEOMORFOLOGIA).expect("geomorfologia field");
    assert_eq!(field["truncated"], true);
    assert_eq!(field["expanded"], false);
    assert!(field["text"].as_str().unwrap().chars().count() < 600);

    let tips = json["suggestions"].as_array().unwrap();
    let mut commands = tips.iter().filter_map(|tip| tip["command"].as_str());
    assert!(commands.any(|c| c.contains("--expand")));
}

#[test]
fn test_show_expand_reveals_full_text() {
    let world = TestWorld::new().with_sample_data();

    let json = world
        .run_json(&["show", "--dataset", "mopr", "--expand", GEOMORFOLOGIA])
        .unwrap()
        .json()
        .unwrap();
    let field = find_field(&json["content"], GEOMORFOLOGIA).unwrap();
    assert_eq!(field["expanded"], true);
    assert!(field["text"].as_str().unwrap().chars().count() >= 600);
}

#[test]
fn test_show_surfaces_dropped_keys() {
    let world = TestWorld::new().with_sample_data();

    let json = world
        .run_json(&["show", "--dataset", "mopr", "--index", "0"])
        .unwrap()
        .json()
        .unwrap();
    let dropped: Vec<&str> = json["content"]["dropped_keys"]
        .as_array()
        .unwrap()
        .iter()
        .map(|k| k.as_str().unwrap())
        .collect();
    assert!(dropped.contains(&"legacy_id"));
    assert_badge_level(&json, "warning").unwrap();

    let clean = world
        .run_json(&["show", "--dataset", "mopr", "--index", "1"])
        .unwrap()
        .json()
        .unwrap();
    assert_eq!(clean["content"]["dropped_keys"], serde_json::json!([]));
    assert!(clean.get("badge").is_none());
}

#[test]
fn test_show_survey_units_sorted_and_expandable_independently() {
    let world = TestWorld::new().with_sample_data();

    let json = world
        .run_json(&["show", "--dataset", "rcg", "--expand", "0:Note (CTN)"])
        .unwrap()
        .json()
        .unwrap();
    let children = json["content"]["children"].as_array().unwrap();
    let titles: Vec<&str> = children
        .iter()
        .map(|c| c["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["U.R. 1", "U.R. 2", "U.R. 10"]);

    let first = find_field(&children[0], "Note (CTN)").unwrap();
    assert_eq!(first["expanded"], true);

    let last = find_field(&children[2], "Note (CTN)").unwrap();
    assert_eq!(last["truncated"], true);
    assert_eq!(last["expanded"], false);

    let short = find_field(&children[1], "Note (CTN)").unwrap();
    assert_eq!(short["truncated"], false);
    assert_eq!(short["text"], "breve");
}

#[test]
fn test_show_out_of_range_index_fails() {
    let world = TestWorld::new().with_sample_data();

    let result = world
        .run(&["show", "--dataset", "mosi", "--index", "9"])
        .unwrap();
    assert!(!result.success());
    assert!(result.stderr().contains("Record 9 not found"));
}

#[test]
fn test_show_unavailable_dataset_reports_empty_state() {
    let world = TestWorld::new().without_file("mopr.geojson");

    let result = world.run(&["show", "--dataset", "mopr"]).unwrap();
    assert!(result.success());
    let stdout = result.stdout();
    assert!(stdout.contains("Nessuna scheda disponibile per questa sezione."));
}

#[test]
fn test_show_plain_card_lists_sections() {
    let world = TestWorld::new().with_sample_data();

    let result = world
        .run(&["show", "--dataset", "mosi", "--index", "0", "--compact"])
        .unwrap();
    assert!(result.success());
    assert!(result.stdout().contains("Necropoli dei Monterozzi"));
    assert!(result.stdout().contains("Tarquinia"));
}
