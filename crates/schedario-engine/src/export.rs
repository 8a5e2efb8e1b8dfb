//! Document model handed to export writers.

use crate::composer::{ComposedRecord, compose_with_children};
use crate::config::{DatasetConfig, HeaderContext};
use crate::target::Target;
use regex::Regex;
use schedario_types::{Feature, RecordId};
use serde::Serialize;
use std::sync::LazyLock;

static UNSAFE_FILE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[\\/:*?"<>|]+"#).expect("valid file name pattern"));

const MAX_FILE_STEM: usize = 80;
const FALLBACK_FILE_STEM: &str = "scheda";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportEntry {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportBlock {
    pub heading: String,
    pub entries: Vec<ExportEntry>,
}

/// A fully untruncated record, as ordered labelled text blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportDocument {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// "Sezione: <dataset label>" line.
    pub section_line: String,
    pub blocks: Vec<ExportBlock>,
}

impl ExportDocument {
    /// Build the export document of a record (and its children, if any).
    pub fn build(
        feature: &Feature,
        children: &[Feature],
        config: &DatasetConfig,
        record_id: RecordId,
    ) -> Self {
        let composed = compose_with_children(feature, children, config, record_id, Target::Export);
        let summary = config.list_item(&feature.properties, HeaderContext::new(Target::Export));

        let mut blocks = section_blocks(&composed);
        for child in &composed.children {
            let mut entries = Vec::new();
            if let Some(subtitle) = &child.header.subtitle {
                entries.push(ExportEntry {
                    label: "Riepilogo".to_string(),
                    value: subtitle.clone(),
                });
            }
            entries.extend(section_blocks(child).into_iter().flat_map(|b| b.entries));
            blocks.push(ExportBlock {
                heading: child.header.title.clone(),
                entries,
            });
        }

        Self {
            title: if summary.title.is_empty() {
                FALLBACK_FILE_STEM.to_string()
            } else {
                summary.title
            },
            subtitle: Some(summary.meta).filter(|meta| !meta.is_empty()),
            section_line: format!("Sezione: {}", config.label),
            blocks,
        }
    }

    /// File stem derived from the title, safe on every common file system.
    pub fn file_stem(&self) -> String {
        sanitize_file_stem(&self.title)
    }
}

fn section_blocks(composed: &ComposedRecord) -> Vec<ExportBlock> {
    composed
        .sections
        .iter()
        .map(|section| ExportBlock {
            heading: section.name.clone(),
            entries: section
                .fields
                .iter()
                .map(|field| ExportEntry {
                    label: field.label.clone(),
                    value: field.complete_text().to_string(),
                })
                .collect(),
        })
        .collect()
}

/// Replace runs of `\ / : * ? " < > |` with `_` and keep the first 80 characters.
pub fn sanitize_file_stem(title: &str) -> String {
    let replaced = UNSAFE_FILE_CHARS.replace_all(title, "_");
    let stem: String = replaced.chars().take(MAX_FILE_STEM).collect();
    if stem.is_empty() {
        FALLBACK_FILE_STEM.to_string()
    } else {
        stem
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets;
    use schedario_types::{DatasetKey, PropertyMap};

    fn feature(pairs: &[(&str, &str)]) -> Feature {
        Feature::new(pairs.iter().copied().collect::<PropertyMap>())
    }

    #[test]
    fn test_sanitize_file_stem() {
        assert_eq!(sanitize_file_stem(r#"Via a/b: "c"?"#), "Via a_b_ _c_");
        assert_eq!(sanitize_file_stem(""), "scheda");
        assert_eq!(sanitize_file_stem(&"x".repeat(120)).len(), 80);
    }

    #[test]
    fn test_export_is_untruncated() {
        let config = datasets::config(DatasetKey::Mopr);
        let long = "a".repeat(900);
        let props: PropertyMap = [
            ("Denominazione (OGN) [*]", "Metanodotto"),
            ("Comune (LCC) [*]", "Viterbo"),
            ("Geomorfologia (CAE) [5000 caratteri]", long.as_str()),
        ]
        .into_iter()
        .collect();
        let doc = ExportDocument::build(
            &Feature::new(props),
            &[],
            config,
            RecordId::new(DatasetKey::Mopr, 0),
        );

        assert_eq!(doc.title, "Metanodotto");
        assert_eq!(doc.subtitle.as_deref(), Some("Viterbo"));
        assert_eq!(doc.section_line, "Sezione: MOPR");
        let headings: Vec<&str> = doc.blocks.iter().map(|b| b.heading.as_str()).collect();
        assert_eq!(
            headings,
            vec![
                "Identificazione progetto",
                "Localizzazione",
                "Quadro ambientale",
            ]
        );
        assert_eq!(doc.blocks[2].entries[0].value.len(), 900);
        assert_eq!(doc.file_stem(), "Metanodotto");
    }

    #[test]
    fn test_survey_units_become_blocks() {
        let config = datasets::config(DatasetKey::Ricognizioni);
        let key = datasets::ricognizioni::UNIT_IDENTIFIER;
        let root = feature(&[("Descrizione (NSC)", "Survey")]);
        let units = vec![
            feature(&[(key, "U.R. 2"), ("Note (CTN)", "campo arato")]),
            feature(&[(key, "U.R. 1")]),
        ];
        let id = RecordId::new(DatasetKey::Ricognizioni, 0);
        let doc = ExportDocument::build(&root, &units, config, id);

        let headings: Vec<&str> = doc.blocks.iter().map(|b| b.heading.as_str()).collect();
        assert_eq!(headings, vec!["Ricognizione", "U.R. 1", "U.R. 2"]);
        let note = doc.blocks[2].entries.last().map(|e| e.value.as_str());
        assert_eq!(note, Some("campo arato"));
        assert_eq!(doc.title, "Ricognizione territoriale");
    }
}
