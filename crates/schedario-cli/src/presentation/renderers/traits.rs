use anyhow::Result;
use serde::Serialize;

use crate::presentation::view_models::{CommandResultViewModel, CreateView};

pub trait Renderer {
    /// Render a complete command result.
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView;

    /// Render one update of a streaming session (one JSON object per line in JSON mode).
    fn render_update<T>(&self, update: &T) -> Result<()>
    where
        T: Serialize + CreateView;
}
