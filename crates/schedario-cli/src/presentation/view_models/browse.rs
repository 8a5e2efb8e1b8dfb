use super::record::{EmptyStateViewModel, RecordCardViewModel, RecordListViewModel};
use schedario_types::{DatasetKey, GeometrySummary, RecordId};
use serde::Serialize;

/// One line-oriented update of the `browse` session.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BrowseUpdate {
    List(RecordListViewModel),
    Card(RecordCardViewModel),
    Selected { dataset: DatasetKey, index: usize },
    FieldToggled {
        record: RecordId,
        key: String,
        expanded: bool,
        text: String,
        affordance: &'static str,
    },
    MapFocus {
        record: RecordId,
        #[serde(skip_serializing_if = "Option::is_none")]
        geometry: Option<GeometrySummary>,
    },
    MiniMap {
        record: RecordId,
        #[serde(skip_serializing_if = "Option::is_none")]
        geometry: Option<GeometrySummary>,
    },
    PrintWritten { path: String, cards: usize },
    Exported { path: String, title: String },
    EmptyState(EmptyStateViewModel),
    Alert { message: String },
    Help { commands: Vec<&'static str> },
    Invalid { input: String, reason: String },
}
