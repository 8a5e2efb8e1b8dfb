pub mod browse;
pub mod common;
pub mod output;
pub mod record;
pub mod result;
pub mod system;

pub use browse::BrowseUpdate;
pub use common::{Guidance, StatusBadge, StatusLevel, ViewMode};
pub use output::{ExportResultViewModel, PrintResultViewModel};
pub use record::{
    EmptyStateViewModel, FieldViewModel, RecordCardViewModel, RecordListEntry, RecordListViewModel,
    SectionViewModel,
};
pub use result::CommandResultViewModel;
pub use system::{DatasetStatusViewModel, DatasetsViewModel, InputViewModel, NotesViewModel};

use std::fmt;

/// Bridge from a view model to the console view that lays it out.
pub trait CreateView {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a>;
}
