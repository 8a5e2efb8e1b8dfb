// schedario CLI
//
// Handlers load the catalog lazily through the execution context, drive the
// runtime session and hand the result to the presentation layer. Library
// logging goes to stderr so `--format json` output stays parseable.

mod args;
mod commands;
pub mod context;
mod handlers;
mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
