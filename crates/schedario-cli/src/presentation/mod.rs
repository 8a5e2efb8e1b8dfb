//! # Presentation Layer
//!
//! MVVM for console output. The data flow is strictly unidirectional:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json
//!                                                                  ==(Text)==> [ View ]
//! ```
//!
//! * `view_models/`: serializable data contracts. `--format json` dumps them whole.
//! * `presenters/`: pure conversion from runtime results (composed records,
//!   notifications, catalog status) into view models, plus badges and tips.
//! * `views/`: `fmt::Display` layouts; `ViewMode` only changes density here.
//! * `renderers/`: switch between JSON and text.
//! * `formatters/`: small string helpers used by views.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{
    CommandResultViewModel, CreateView, Guidance, StatusBadge, StatusLevel, ViewMode,
};
