use schedario_types::{DatasetKey, RecordId};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct RecordListViewModel {
    pub dataset: DatasetKey,
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Records in the dataset before filtering.
    pub total: usize,
    pub entries: Vec<RecordListEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecordListEntry {
    pub index: usize,
    pub title: String,
    pub meta: String,
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecordCardViewModel {
    pub record_id: RecordId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub badges: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_state: Option<&'static str>,
    pub sections: Vec<SectionViewModel>,
    /// Property keys the registry does not know.
    pub dropped_keys: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RecordCardViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionViewModel {
    pub name: String,
    pub full_width: bool,
    pub fields: Vec<FieldViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldViewModel {
    pub key: String,
    pub label: String,
    pub text: String,
    pub is_empty: bool,
    pub truncated: bool,
    pub expanded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affordance: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmptyStateViewModel {
    pub dataset: DatasetKey,
    pub message: &'static str,
}
