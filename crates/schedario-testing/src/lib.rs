//! Testing infrastructure for schedario integration tests.
//!
//! - `TestWorld`: isolated data directory plus CLI execution
//! - `fixtures`: sample feature collections for the three datasets
//! - `assertions`: checks over the JSON output of the CLI

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
