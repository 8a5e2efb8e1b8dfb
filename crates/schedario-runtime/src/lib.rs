//! Runtime layer for schedario.
//!
//! Loads the datasets concurrently, resolves configuration, coordinates the
//! operator session and writes print pages and export documents.

pub mod collaborators;
pub mod config;
pub mod error;
pub mod loader;
pub mod print;
pub mod session;
pub mod writers;

pub use collaborators::{MapCollaborator, RecordingMap};
pub use config::{Config, ExportConfig, Sources, expand_tilde, resolve_data_dir};
pub use error::{Error, Result};
pub use loader::{
    Catalog, InputStatus, LoadOutcome, NOTES_UNAVAILABLE, load_catalog, load_catalog_blocking,
};
pub use print::PrintPage;
pub use session::{
    ListEntry, NO_RECORDS, NO_SURVEY, NOTHING_TO_EXPORT, Notification, SelectionState, Session,
    SessionEvent, empty_state_message, print_all, visible_entries,
};
pub use writers::{DocumentWriter, ExportFormat, JsonWriter, MarkdownWriter, writer_for};
