mod browse;
mod output;
mod record;
mod system;

pub use record::{RecordCardView, RecordListView};
