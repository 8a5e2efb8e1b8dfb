use assert_cmd::Command;
use predicates::prelude::*;
use schedario_testing::TestWorld;
use schedario_testing::assertions::assert_badge_level;
use schedario_testing::fixtures::CORRECTION_NOTES;

#[test]
fn test_datasets_reports_record_counts() {
    let world = TestWorld::new().with_sample_data();

    let json = world.run_json(&["datasets"]).unwrap().json().unwrap();
    let datasets = json["content"]["datasets"].as_array().unwrap();
    let counts: Vec<(&str, u64)> = datasets
        .iter()
        .map(|d| (d["key"].as_str().unwrap(), d["records"].as_u64().unwrap()))
        .collect();
    assert_eq!(counts, vec![("mosi", 3), ("mopr", 2), ("ricognizioni", 1)]);
    assert_eq!(json["content"]["default_dataset"], "mopr");
    assert_badge_level(&json, "success").unwrap();
}

#[test]
fn test_datasets_marks_missing_inputs() {
    let world = TestWorld::new()
        .with_sample_data()
        .without_file("mopr.geojson");

    let json = world.run_json(&["datasets"]).unwrap().json().unwrap();
    let mopr = &json["content"]["datasets"][1];
    assert_eq!(mopr["key"], "mopr");
    assert_eq!(mopr["available"], false);
    assert!(mopr.get("records").is_none());

    let failed = json["content"]["inputs"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|input| input["loaded"] == false)
        .count();
    assert_eq!(failed, 1);
}

#[test]
fn test_no_subcommand_shows_datasets() {
    let world = TestWorld::new();

    let result = world.run(&[]).unwrap();
    assert!(result.success());
    assert!(result.stdout().contains("No dataset available"));
}

#[test]
fn test_notes_passes_html_through() {
    let world = TestWorld::new().with_sample_data();

    let json = world.run_json(&["notes"]).unwrap().json().unwrap();
    assert_eq!(json["content"]["available"], true);
    assert_eq!(json["content"]["html"], CORRECTION_NOTES.trim());
}

#[test]
fn test_notes_fallback_when_missing() {
    let world = TestWorld::new()
        .with_sample_data()
        .without_file("correzioni.html");

    let json = world.run_json(&["notes"]).unwrap().json().unwrap();
    assert_eq!(json["content"]["available"], false);
    assert_eq!(
        json["content"]["html"],
        "Impossibile caricare le note sulle correzioni."
    );
    assert_badge_level(&json, "warning").unwrap();
}

#[test]
fn test_sources_resolved_from_config() {
    let mosi = schedario_testing::fixtures::mosi().to_string();
    let world = TestWorld::new()
        .with_file("siti.geojson", &mosi)
        .with_file("config.toml", "[sources]\nmosi = \"siti.geojson\"\n");

    let json = world.run_json(&["datasets"]).unwrap().json().unwrap();
    assert_eq!(json["content"]["datasets"][0]["records"], 3);
}

#[test]
fn test_data_dir_from_environment() {
    let world = TestWorld::new().with_sample_data();

    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("schedario").unwrap();
    cmd.env("SCHEDARIO_PATH", world.data_dir())
        .env("NO_COLOR", "1")
        .current_dir(world.temp_dir())
        .args(["--format", "json", "list", "--dataset", "mosi"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Necropoli dei Monterozzi"));
}

#[test]
fn test_invalid_config_is_reported() {
    let world = TestWorld::new()
        .with_sample_data()
        .with_file("config.toml", "default_dataset = [");

    let result = world.run(&["list"]).unwrap();
    assert!(!result.success());
    assert!(result.stderr().contains("Failed to load config"));
}

#[test]
fn test_logs_go_to_stderr() {
    let world = TestWorld::new()
        .with_sample_data()
        .without_file("mosi.geojson")
        .with_env("RUST_LOG", "debug");

    let result = world.run_json(&["show", "--dataset", "mopr"]).unwrap();
    assert!(result.success());
    assert!(
        result.json().is_ok(),
        "stdout must stay JSON: {}",
        result.stdout()
    );
    assert!(result.stderr().contains("input unavailable"));
    assert!(result.stderr().contains("legacy_id"));
}
