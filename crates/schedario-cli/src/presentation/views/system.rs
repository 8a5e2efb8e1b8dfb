use std::fmt;

use crate::presentation::formatters::{style, text};
use crate::presentation::view_models::{CreateView, DatasetsViewModel, NotesViewModel, ViewMode};

impl CreateView for DatasetsViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(DatasetsView { data: self })
    }
}

impl CreateView for NotesViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(NotesView { data: self })
    }
}

struct DatasetsView<'a> {
    data: &'a DatasetsViewModel,
}

impl fmt::Display for DatasetsView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Data directory: {}", self.data.data_dir)?;
        writeln!(f, "Default dataset: {}", self.data.default_dataset)?;
        writeln!(f)?;
        writeln!(
            f,
            "{:<14} {:<10} {:>8} {:>9}",
            "DATASET", "STATUS", "RECORDS", "SECTIONS"
        )?;
        writeln!(f, "{}", "-".repeat(44))?;
        for dataset in &self.data.datasets {
            let status = if dataset.available {
                "loaded"
            } else {
                "missing"
            };
            let records = dataset.records.map_or("-".to_string(), |n| n.to_string());
            writeln!(
                f,
                "{:<14} {:<10} {:>8} {:>9}",
                dataset.label, status, records, dataset.sections
            )?;
        }

        let failures: Vec<_> = self.data.inputs.iter().filter(|i| !i.loaded).collect();
        if !failures.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", style::section("Inputs not loaded"))?;
            for input in failures {
                writeln!(
                    f,
                    "  {:<12} {}",
                    input.name,
                    style::dim(input.reason.as_deref().unwrap_or("unknown reason"))
                )?;
            }
        }
        Ok(())
    }
}

struct NotesView<'a> {
    data: &'a NotesViewModel,
}

impl fmt::Display for NotesView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", text::strip_tags(&self.data.html))
    }
}
