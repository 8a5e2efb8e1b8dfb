use crate::args::ViewModeArgs;
use crate::presentation::{CommandResultViewModel, ConsoleRenderer, CreateView, Renderer, ViewMode};
use crate::types::OutputFormat;
use anyhow::Result;
use serde::Serialize;

/// Output settings shared by every handler.
pub struct HandlerContext {
    pub format: OutputFormat,
    pub view_mode: ViewMode,
}

impl HandlerContext {
    pub fn new(format: OutputFormat, view_mode: &ViewModeArgs) -> Self {
        Self {
            format,
            view_mode: view_mode.resolve(),
        }
    }

    /// Context for commands without density flags.
    pub fn plain(format: OutputFormat) -> Self {
        Self {
            format,
            view_mode: ViewMode::default(),
        }
    }

    pub fn json_mode(&self) -> bool {
        self.format == OutputFormat::Json
    }

    fn renderer(&self) -> ConsoleRenderer {
        ConsoleRenderer::new(self.json_mode(), self.view_mode)
    }

    pub fn render<T>(&self, view_model: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        self.renderer().render(view_model)
    }

    pub fn render_update<T>(&self, update: &T) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        self.renderer().render_update(update)
    }
}
