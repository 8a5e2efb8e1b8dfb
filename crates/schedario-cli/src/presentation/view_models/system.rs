use schedario_types::DatasetKey;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DatasetsViewModel {
    pub data_dir: String,
    pub default_dataset: DatasetKey,
    pub datasets: Vec<DatasetStatusViewModel>,
    pub inputs: Vec<InputViewModel>,
}

#[derive(Debug, Serialize)]
pub struct DatasetStatusViewModel {
    pub key: DatasetKey,
    pub label: &'static str,
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records: Option<usize>,
    pub sections: usize,
    pub searchable: bool,
}

#[derive(Debug, Serialize)]
pub struct InputViewModel {
    pub name: &'static str,
    pub loaded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct NotesViewModel {
    pub available: bool,
    pub html: String,
}
