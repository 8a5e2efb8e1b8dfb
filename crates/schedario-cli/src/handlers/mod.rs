pub mod browse;
mod context;
pub mod datasets;
pub mod export;
pub mod list;
pub mod notes;
pub mod print;
pub mod show;

pub use context::HandlerContext;

use anyhow::{Result, bail};
use schedario_runtime::{Notification, Session, SessionEvent};
use schedario_types::DatasetKey;

/// Open `dataset` and select record `index`.
///
/// Returns the empty-state message when the dataset has nothing to show.
fn open_record(
    session: &mut Session<'_>,
    dataset: DatasetKey,
    index: usize,
) -> Result<Option<&'static str>> {
    let opened = session.apply(SessionEvent::SelectDataset(dataset));
    if let Some(Notification::EmptyState { message, .. }) = opened.first() {
        return Ok(Some(*message));
    }

    let selected = session.apply(SessionEvent::SelectRecord(index));
    if selected.is_empty() {
        let total = opened
            .iter()
            .find_map(|n| match n {
                Notification::ShowList { entries, .. } => Some(entries.len()),
                _ => None,
            })
            .unwrap_or_default();
        bail!("Record {index} not found in {dataset} ({total} records)");
    }
    Ok(None)
}
