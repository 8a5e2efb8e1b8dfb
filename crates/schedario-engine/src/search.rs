use crate::config::DatasetConfig;
use schedario_types::{Feature, PropertyMap};

/// Lowercased, space-joined searchable text of one record.
pub fn haystack(props: &PropertyMap, config: &DatasetConfig) -> String {
    config
        .search_fields
        .iter()
        .map(|key| props.text(key))
        .filter(|value| !value.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

pub fn matches(props: &PropertyMap, config: &DatasetConfig, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() || !config.is_searchable() {
        return true;
    }
    haystack(props, config).contains(&needle)
}

/// Indices (into `features`) of the records matching `query`, in source order.
///
/// An empty query, or a dataset without searchable fields, matches everything.
pub fn filter_indices(features: &[Feature], config: &DatasetConfig, query: &str) -> Vec<usize> {
    features
        .iter()
        .enumerate()
        .filter(|(_, feature)| matches(&feature.properties, config, query))
        .map(|(idx, _)| idx)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets;
    use schedario_types::DatasetKey;

    fn mosi(pairs: &[(&str, &str)]) -> Feature {
        Feature::new(pairs.iter().copied().collect())
    }

    #[test]
    fn test_case_insensitive_substring() {
        let config = datasets::config(DatasetKey::Mosi);
        let features = vec![
            mosi(&[("OGN", "Tomba dei Rilievi"), ("LCC", "Cerveteri")]),
            mosi(&[("OGN", "Villa"), ("LCC", "Roma")]),
            mosi(&[("DES", "Resti di una TOMBA a camera")]),
        ];
        assert_eq!(filter_indices(&features, config, "tomba"), vec![0, 2]);
        assert_eq!(filter_indices(&features, config, "  ROMA "), vec![1]);
        assert_eq!(filter_indices(&features, config, ""), vec![0, 1, 2]);
    }

    #[test]
    fn test_only_search_fields_are_considered() {
        let config = datasets::config(DatasetKey::Mosi);
        let features = vec![mosi(&[("DTR", "età romana")])];
        assert!(filter_indices(&features, config, "romana").is_empty());
    }

    #[test]
    fn test_query_spans_joined_fields() {
        let config = datasets::config(DatasetKey::Mosi);
        let features = vec![mosi(&[("OGN", "Tomba"), ("LCC", "Tarquinia")])];
        assert_eq!(filter_indices(&features, config, "tomba tarq"), vec![0]);
    }

    #[test]
    fn test_unsearchable_dataset_ignores_query() {
        let config = datasets::config(DatasetKey::Ricognizioni);
        let features = vec![mosi(&[]), mosi(&[])];
        assert_eq!(filter_indices(&features, config, "qualsiasi"), vec![0, 1]);
    }
}
