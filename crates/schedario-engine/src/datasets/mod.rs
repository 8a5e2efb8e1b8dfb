//! Built-in dataset catalog.

pub mod mopr;
pub mod mosi;
pub mod ricognizioni;

use crate::config::DatasetConfig;
use schedario_types::{DatasetKey, PropertyMap};

/// Placeholder shown for missing header values.
pub const EMPTY_MARK: &str = "vuoto";

pub fn config(key: DatasetKey) -> &'static DatasetConfig {
    match key {
        DatasetKey::Mosi => &mosi::CONFIG,
        DatasetKey::Mopr => &mopr::CONFIG,
        DatasetKey::Ricognizioni => &ricognizioni::CONFIG,
    }
}

/// "Comune: X (Prov. Y) – Regione: Z", omitting the parts that are empty.
pub(crate) fn place_line(
    props: &PropertyMap,
    comune: &str,
    provincia: &str,
    regione: &str,
) -> String {
    let mut line = format!("Comune: {}", props.text_or(comune, EMPTY_MARK));
    if props.is_populated(provincia) {
        line.push_str(&format!(" (Prov. {})", props.text(provincia)));
    }
    if props.is_populated(regione) {
        line.push_str(&format!(" – Regione: {}", props.text(regione)));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_keys_match() {
        for key in DatasetKey::ALL {
            assert_eq!(config(key).key, key);
        }
        assert!(config(DatasetKey::Ricognizioni).children.is_some());
        assert!(!config(DatasetKey::Ricognizioni).is_searchable());
    }

    #[test]
    fn test_place_line() {
        let props: PropertyMap = [("C", "Tarquinia"), ("R", "Lazio")].into_iter().collect();
        let line = place_line(&props, "C", "P", "R");
        assert_eq!(line, "Comune: Tarquinia – Regione: Lazio");
    }
}
