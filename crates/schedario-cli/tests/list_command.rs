use schedario_testing::TestWorld;
use schedario_testing::assertions::{assert_badge_level, assert_entry_count, entry_indices};

#[test]
fn test_list_mosi_keeps_source_order() {
    let world = TestWorld::new().with_sample_data();

    let result = world.run_json(&["list", "--dataset", "mosi"]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json().unwrap();
    assert_entry_count(&json, 3).unwrap();
    assert_eq!(json["content"]["total"], 3);
    assert_badge_level(&json, "success").unwrap();

    let titles: Vec<&str> = json["content"]["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["title"].as_str().unwrap())
        .collect();
    insta::assert_json_snapshot!("mosi_titles", titles);
}

#[test]
fn test_list_search_reports_unfiltered_indices() {
    let world = TestWorld::new().with_sample_data();

    let json = world
        .run_json(&["list", "--dataset", "mosi", "--query", "  ROMA "])
        .unwrap()
        .json()
        .unwrap();
    assert_eq!(entry_indices(&json).unwrap(), vec![2]);
    assert_eq!(json["content"]["query"], "ROMA");
    assert_eq!(json["content"]["total"], 3);

    let json = world
        .run_json(&["list", "--dataset", "mosi", "--query", "necropoli"])
        .unwrap()
        .json()
        .unwrap();
    assert_eq!(entry_indices(&json).unwrap(), vec![0]);
}

#[test]
fn test_list_without_match_is_info() {
    let world = TestWorld::new().with_sample_data();

    let json = world
        .run_json(&["list", "--dataset", "mopr", "--query", "atlantide"])
        .unwrap()
        .json()
        .unwrap();
    assert_entry_count(&json, 0).unwrap();
    assert_badge_level(&json, "info").unwrap();
}

#[test]
fn test_list_survey_ignores_query() {
    let world = TestWorld::new().with_sample_data();

    let json = world
        .run_json(&["list", "--dataset", "rcg", "--query", "nessun esito"])
        .unwrap()
        .json()
        .unwrap();
    assert_entry_count(&json, 1).unwrap();
    assert_eq!(
        json["content"]["entries"][0]["title"],
        "Ricognizione Monterozzi"
    );
}

#[test]
fn test_list_default_dataset_is_mopr() {
    let world = TestWorld::new().with_sample_data();

    let json = world.run_json(&["list"]).unwrap().json().unwrap();
    assert_eq!(json["content"]["dataset"], "mopr");
    assert_entry_count(&json, 2).unwrap();
}

#[test]
fn test_list_default_dataset_from_config() {
    let world = TestWorld::new()
        .with_sample_data()
        .with_file("config.toml", "default_dataset = \"mosi\"\n");

    let json = world.run_json(&["list"]).unwrap().json().unwrap();
    assert_eq!(json["content"]["dataset"], "mosi");
}

#[test]
fn test_list_missing_dataset_shows_empty_state() {
    let world = TestWorld::new()
        .with_sample_data()
        .without_file("mosi.geojson");

    let result = world.run_json(&["list", "--dataset", "mosi"]).unwrap();
    assert!(result.success());

    let json = result.json().unwrap();
    assert_eq!(
        json["content"]["message"],
        "Nessuna scheda disponibile per questa sezione."
    );
    assert_badge_level(&json, "warning").unwrap();
}

#[test]
fn test_list_malformed_survey_shows_survey_empty_state() {
    let world = TestWorld::new()
        .with_sample_data()
        .with_file("rcg.geojson", "{ not json");

    let json = world
        .run_json(&["list", "--dataset", "ricognizioni"])
        .unwrap()
        .json()
        .unwrap();
    assert_eq!(
        json["content"]["message"],
        "Nessuna ricognizione disponibile."
    );
}

#[test]
fn test_list_plain_quiet_prints_titles_only() {
    let world = TestWorld::new().with_sample_data();

    let result = world
        .run(&["list", "--dataset", "mosi", "--quiet"])
        .unwrap();
    assert!(result.success());
    assert!(result.stdout().contains("Villa rustica"));
    assert!(!result.stdout().contains("Tips:"));
}
