//! Concurrent loading of the five inputs. A failed input degrades only itself.

use crate::config::Sources;
use crate::{Error, Result};
use schedario_types::{DatasetKey, Feature, FeatureCollection};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Shown in place of the correction notes when they could not be loaded.
pub const NOTES_UNAVAILABLE: &str = "Impossibile caricare le note sulle correzioni.";

/// Outcome of one input. Failures are kept as a reason string, never raised.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum LoadOutcome<T> {
    Loaded { value: T },
    Unavailable { reason: String },
}

impl<T> LoadOutcome<T> {
    pub fn ok(&self) -> Option<&T> {
        match self {
            LoadOutcome::Loaded { value } => Some(value),
            LoadOutcome::Unavailable { .. } => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded { .. })
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            LoadOutcome::Loaded { .. } => None,
            LoadOutcome::Unavailable { reason } => Some(reason),
        }
    }

    fn settle(path: &Path, label: &str, result: Result<T>) -> Self {
        match result {
            Ok(value) => LoadOutcome::Loaded { value },
            Err(err) => {
                tracing::warn!(
                    input = label,
                    path = %path.display(),
                    error = %err,
                    "input unavailable"
                );
                LoadOutcome::Unavailable {
                    reason: err.to_string(),
                }
            }
        }
    }
}

/// Every loaded input. Immutable once built.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub mosi: LoadOutcome<FeatureCollection>,
    pub mopr: LoadOutcome<FeatureCollection>,
    pub survey: LoadOutcome<FeatureCollection>,
    pub survey_units: LoadOutcome<FeatureCollection>,
    pub correction_notes: LoadOutcome<String>,
}

impl Catalog {
    /// Records of a dataset, or `None` when its input is unavailable.
    ///
    /// The reconnaissance dataset exposes only the first feature of its root
    /// collection as its single record.
    pub fn records(&self, key: DatasetKey) -> Option<&[Feature]> {
        match key {
            DatasetKey::Mosi => self.mosi.ok().map(|c| c.features.as_slice()),
            DatasetKey::Mopr => self.mopr.ok().map(|c| c.features.as_slice()),
            DatasetKey::Ricognizioni => self
                .survey
                .ok()
                .map(|c| &c.features[..c.features.len().min(1)]),
        }
    }

    /// Child records of `key`. Missing unit input means no children.
    pub fn children(&self, key: DatasetKey) -> &[Feature] {
        match key {
            DatasetKey::Ricognizioni => self
                .survey_units
                .ok()
                .map(|c| c.features.as_slice())
                .unwrap_or(&[]),
            DatasetKey::Mosi | DatasetKey::Mopr => &[],
        }
    }

    pub fn is_available(&self, key: DatasetKey) -> bool {
        self.records(key).is_some()
    }

    /// Correction notes page, when it loaded and is not blank.
    pub fn notes(&self) -> Option<&str> {
        self.correction_notes
            .ok()
            .map(|html| html.trim())
            .filter(|html| !html.is_empty())
    }

    pub fn notes_or_fallback(&self) -> &str {
        self.notes().unwrap_or(NOTES_UNAVAILABLE)
    }

    pub fn summary(&self) -> Vec<InputStatus> {
        let records = |outcome: &LoadOutcome<FeatureCollection>| {
            outcome.ok().map(FeatureCollection::len)
        };
        vec![
            InputStatus::of("mosi", &self.mosi, records(&self.mosi)),
            InputStatus::of("mopr", &self.mopr, records(&self.mopr)),
            InputStatus::of("rcg", &self.survey, records(&self.survey)),
            InputStatus::of("d_rcg", &self.survey_units, records(&self.survey_units)),
            InputStatus::of("correzioni", &self.correction_notes, None),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputStatus {
    pub name: &'static str,
    pub loaded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl InputStatus {
    fn of<T>(name: &'static str, outcome: &LoadOutcome<T>, records: Option<usize>) -> Self {
        Self {
            name,
            loaded: outcome.is_loaded(),
            records,
            reason: outcome.reason().map(str::to_string),
        }
    }
}

/// Load all five inputs concurrently and wait for every one to settle.
pub async fn load_catalog(sources: &Sources) -> Catalog {
    let (mosi, mopr, survey, survey_units, correction_notes) = tokio::join!(
        load_collection(sources.mosi.clone()),
        load_collection(sources.mopr.clone()),
        load_collection(sources.survey.clone()),
        load_collection(sources.survey_units.clone()),
        load_text(sources.correction_notes.clone()),
    );

    let catalog = Catalog {
        mosi: LoadOutcome::settle(&sources.mosi, "mosi", mosi),
        mopr: LoadOutcome::settle(&sources.mopr, "mopr", mopr),
        survey: LoadOutcome::settle(&sources.survey, "rcg", survey),
        survey_units: LoadOutcome::settle(&sources.survey_units, "d_rcg", survey_units),
        correction_notes: LoadOutcome::settle(
            &sources.correction_notes,
            "correzioni",
            correction_notes,
        ),
    };

    if let Some(survey) = catalog.survey.ok()
        && survey.len() > 1
    {
        tracing::info!(
            extra = survey.len() - 1,
            "survey collection holds more than one feature, using the first"
        );
    }
    tracing::info!(
        mosi = catalog.mosi.ok().map(FeatureCollection::len),
        mopr = catalog.mopr.ok().map(FeatureCollection::len),
        survey_units = catalog.survey_units.ok().map(FeatureCollection::len),
        "inputs settled"
    );

    catalog
}

/// Blocking wrapper around [`load_catalog`] for synchronous callers.
pub fn load_catalog_blocking(sources: &Sources) -> Result<Catalog> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(Error::Io)?;
    Ok(runtime.block_on(load_catalog(sources)))
}

async fn load_collection(path: PathBuf) -> Result<FeatureCollection> {
    let content = tokio::fs::read_to_string(&path).await?;
    Ok(FeatureCollection::from_json(&content)?)
}

async fn load_text(path: PathBuf) -> Result<String> {
    Ok(tokio::fs::read_to_string(&path).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    #[tokio::test]
    async fn test_failures_degrade_only_their_input() {
        let dir = TempDir::new().unwrap();
        let mosi = r#"{"features": [{"properties": {"OGN": "A"}}]}"#;
        let malformed = r#"{"type": "FeatureCollection"}"#;
        let survey = r#"{"features": [{"properties": {}}, {"properties": {}}]}"#;
        write(dir.path(), "mosi.geojson", mosi);
        write(dir.path(), "mopr.geojson", malformed);
        write(dir.path(), "rcg.geojson", survey);

        let sources = Sources::default().resolve(dir.path());
        let catalog = load_catalog(&sources).await;

        let count = |key: DatasetKey| catalog.records(key).map(<[Feature]>::len);
        assert_eq!(count(DatasetKey::Mosi), Some(1));
        assert!(catalog.records(DatasetKey::Mopr).is_none());
        assert_eq!(count(DatasetKey::Ricognizioni), Some(1));
        assert!(catalog.children(DatasetKey::Ricognizioni).is_empty());
        assert!(catalog.notes().is_none());
    }

    #[tokio::test]
    async fn test_blank_notes_count_as_missing() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "correzioni.html", "   \n");
        let catalog = load_catalog(&Sources::default().resolve(dir.path())).await;
        assert!(catalog.correction_notes.is_loaded());
        assert!(catalog.notes().is_none());
        assert_eq!(catalog.notes_or_fallback(), NOTES_UNAVAILABLE);
    }

    #[test]
    fn test_summary_lists_every_input() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "mosi.geojson", r#"{"features": []}"#);
        let catalog = load_catalog_blocking(&Sources::default().resolve(dir.path())).unwrap();
        let summary = catalog.summary();
        assert_eq!(summary.len(), 5);
        assert_eq!(summary[0].records, Some(0));
        assert!(!summary[1].loaded);
        assert!(summary[1].reason.is_some());
    }
}
