use schedario_runtime::ExportFormat;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PrintResultViewModel {
    pub cards: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// The page itself, when it was not written to a file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ExportResultViewModel {
    pub path: String,
    pub format: ExportFormat,
    pub title: String,
    pub blocks: usize,
}
