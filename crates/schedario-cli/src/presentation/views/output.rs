use std::fmt;

use crate::presentation::view_models::{
    CreateView, ExportResultViewModel, PrintResultViewModel, ViewMode,
};

impl CreateView for PrintResultViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(PrintResultView { data: self })
    }
}

impl CreateView for ExportResultViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ExportResultView { data: self, mode })
    }
}

struct PrintResultView<'a> {
    data: &'a PrintResultViewModel,
}

impl fmt::Display for PrintResultView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.data.path, &self.data.html) {
            (Some(path), _) => writeln!(f, "{}", path),
            (None, Some(html)) => write!(f, "{}", html),
            (None, None) => Ok(()),
        }
    }
}

struct ExportResultView<'a> {
    data: &'a ExportResultViewModel,
    mode: ViewMode,
}

impl fmt::Display for ExportResultView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.data.path)?;
        if self.mode == ViewMode::Verbose {
            writeln!(f, "  format: {}", self.data.format)?;
            writeln!(f, "  blocks: {}", self.data.blocks)?;
        }
        Ok(())
    }
}
