use schedario_runtime::{
    Config, DocumentWriter, MarkdownWriter, Notification, PrintPage, Session, SessionEvent,
    Sources, load_catalog_blocking, print_all,
};
use schedario_types::DatasetKey;
use std::fs;
use tempfile::TempDir;

fn mopr_feature(name: &str, comune: &str) -> String {
    format!(
        r#"{{"type": "Feature", "geometry": {{"type": "Point", "coordinates": [12.5, 41.9]}},
            "properties": {{"Denominazione (OGN) [*]": "{name}", "Comune (LCC) [*]": "{comune}"}}}}"#
    )
}

fn data_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    let features = [
        mopr_feature("Scavo A", "Roma"),
        mopr_feature("Scavo B", "Ostia"),
        mopr_feature("Scavo C", "Ostia"),
        mopr_feature("Scavo D", "Tivoli"),
        mopr_feature("Scavo E", "Roma"),
    ];
    fs::write(
        dir.path().join("mopr.geojson"),
        format!(
            r#"{{"type": "FeatureCollection", "features": [{}]}}"#,
            features.join(",")
        ),
    )
    .unwrap();
    dir
}

#[test]
fn test_search_does_not_move_selection() {
    let dir = data_dir();
    let catalog = load_catalog_blocking(&Sources::default().resolve(dir.path())).unwrap();
    let mut session = Session::new(&catalog, DatasetKey::Mopr);

    session.apply(SessionEvent::SelectDataset(DatasetKey::Mopr));
    session.apply(SessionEvent::SelectRecord(3));

    let filtered = session.apply(SessionEvent::Search("ostia".to_string()));
    let Notification::ShowList { entries, .. } = &filtered[0] else {
        panic!("expected a list, got {:?}", filtered);
    };
    assert_eq!(
        entries.iter().map(|e| e.index).collect::<Vec<_>>(),
        vec![1, 2]
    );
    assert_eq!(session.selection().current(), Some(3));

    let cleared = session.apply(SessionEvent::Search(String::new()));
    let Notification::ShowList { entries, .. } = &cleared[0] else {
        panic!("expected a list, got {:?}", cleared);
    };
    assert_eq!(entries.len(), 5);
    assert!(entries[3].selected);
    assert_eq!(session.selection().current(), Some(3));
}

#[test]
fn test_missing_inputs_leave_other_datasets_usable() {
    let dir = data_dir();
    let catalog = load_catalog_blocking(&Sources::default().resolve(dir.path())).unwrap();

    assert!(catalog.is_available(DatasetKey::Mopr));
    assert!(!catalog.is_available(DatasetKey::Mosi));
    assert!(!catalog.is_available(DatasetKey::Ricognizioni));

    let cards = print_all(&catalog);
    assert_eq!(cards.len(), 5);
    let html = PrintPage::new("Schede", &cards).render();
    assert_eq!(html.matches("<div class=\"scheda\">").count(), 5);
    assert!(html.contains("Scavo D"));
}

#[test]
fn test_export_current_writes_markdown() {
    let dir = data_dir();
    let config = Config::load_from(&Config::default_path(dir.path())).unwrap();
    let catalog = load_catalog_blocking(&config.sources.resolve(dir.path())).unwrap();
    let mut session = Session::new(&catalog, config.default_dataset);

    session.apply(SessionEvent::SelectDataset(config.default_dataset));
    session.apply(SessionEvent::SelectRecord(1));
    let exported = session.apply(SessionEvent::ExportCurrent);
    let Notification::ExportReady { document } = &exported[0] else {
        panic!("expected an export, got {:?}", exported);
    };

    let out = TempDir::new().unwrap();
    let path = MarkdownWriter.write(document, out.path()).unwrap();
    let content = fs::read_to_string(path).unwrap();
    assert!(content.starts_with("# Scavo B"));
    assert!(content.contains("Ostia"));
}
