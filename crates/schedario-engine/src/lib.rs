// Engine module - record presentation pipeline
// Sits between the loaded features (types) and the runtime/CLI output targets:
// registry -> assembler -> renderer -> composer.

pub mod assembler;
pub mod composer;
pub mod config;
pub mod datasets;
pub mod expansion;
pub mod export;
pub mod ordering;
pub mod registry;
pub mod renderer;
pub mod search;
pub mod target;
pub mod text;

pub use assembler::{Assembly, assemble};
pub use composer::{ComposedRecord, NO_DATA, RenderedSection, compose, compose_with_children};
pub use config::{DatasetConfig, Header, HeaderContext, ListItem, RecordSummary};
pub use expansion::ExpansionState;
pub use export::{ExportBlock, ExportDocument, ExportEntry, sanitize_file_stem};
pub use ordering::natural_cmp;
pub use registry::{FieldDefinition, FieldRegistry, TruncationPolicy};
pub use renderer::{EMPTY_TEXT, Expansion, RenderedField, render_field};
pub use target::Target;

use schedario_types::{DatasetKey, PropertyMap};

/// Look up the definition of `key` in the dataset's registry.
pub fn lookup(dataset: DatasetKey, key: &str) -> Option<&'static FieldDefinition> {
    datasets::config(dataset).registry.lookup(key)
}

/// List summary of a record as shown in record lists.
pub fn list_item(dataset: DatasetKey, props: &PropertyMap) -> ListItem {
    datasets::config(dataset).list_item(props, HeaderContext::new(Target::Interactive))
}
