use crate::presentation::view_models::{
    CommandResultViewModel, ExportResultViewModel, PrintResultViewModel, StatusBadge,
};
use schedario_engine::ExportDocument;
use schedario_runtime::ExportFormat;
use std::path::Path;

pub fn present_print(
    cards: usize,
    path: Option<&Path>,
    html: Option<String>,
) -> CommandResultViewModel<PrintResultViewModel> {
    let label = match path {
        Some(path) => format!("{} card(s) written to {}", cards, path.display()),
        None => format!("{} card(s) rendered", cards),
    };
    CommandResultViewModel::new(PrintResultViewModel {
        cards,
        path: path.map(|p| p.display().to_string()),
        html,
    })
    .with_badge(StatusBadge::success(label))
}

pub fn present_export(
    document: &ExportDocument,
    path: &Path,
    format: ExportFormat,
) -> CommandResultViewModel<ExportResultViewModel> {
    CommandResultViewModel::new(ExportResultViewModel {
        path: path.display().to_string(),
        format,
        title: document.title.clone(),
        blocks: document.blocks.len(),
    })
    .with_badge(StatusBadge::success(format!("Exported \"{}\"", document.title)))
}
