use anyhow::Result;
use serde::Serialize;
use std::io::Write;

use super::traits::Renderer;
use crate::presentation::formatters::style;
use crate::presentation::view_models::{CommandResultViewModel, CreateView, ViewMode};

pub struct ConsoleRenderer {
    json_mode: bool,
    view_mode: ViewMode,
}

impl ConsoleRenderer {
    pub fn new(json_mode: bool, view_mode: ViewMode) -> Self {
        Self {
            json_mode,
            view_mode,
        }
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let mut out = std::io::stdout().lock();

        if self.json_mode {
            writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
            return Ok(());
        }

        // Minimal output is for pipes: content only.
        let decorate = self.view_mode != ViewMode::Minimal;

        if decorate && let Some(badge) = &result.badge {
            writeln!(out, "{} {}", badge.icon(), style::heading(&badge.label))?;
            writeln!(out)?;
        }

        write!(out, "{}", result.content.create_view(self.view_mode))?;

        if decorate && !result.suggestions.is_empty() {
            writeln!(out)?;
            writeln!(out, "{}", style::section("Tips:"))?;
            for tip in &result.suggestions {
                write!(out, "  • {}", tip.description)?;
                if let Some(cmd) = &tip.command {
                    write!(out, ": {}", style::accent(cmd))?;
                }
                writeln!(out)?;
            }
        }
        out.flush()?;
        Ok(())
    }

    fn render_update<T>(&self, update: &T) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let mut out = std::io::stdout().lock();
        if self.json_mode {
            writeln!(out, "{}", serde_json::to_string(update)?)?;
        } else {
            write!(out, "{}", update.create_view(self.view_mode))?;
        }
        out.flush()?;
        Ok(())
    }
}
