use std::fmt;

use crate::presentation::formatters::{style, text};
use crate::presentation::view_models::{
    CreateView, EmptyStateViewModel, FieldViewModel, RecordCardViewModel, RecordListViewModel,
    ViewMode,
};

const LABEL_WIDTH: usize = 28;

impl CreateView for RecordListViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(RecordListView::new(self, mode))
    }
}

impl CreateView for RecordCardViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(RecordCardView::new(self, mode))
    }
}

impl CreateView for EmptyStateViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(EmptyStateView { data: self })
    }
}

// --------------------------------------------------------
// Record list
// --------------------------------------------------------

pub struct RecordListView<'a> {
    data: &'a RecordListViewModel,
    mode: ViewMode,
}

impl<'a> RecordListView<'a> {
    pub fn new(data: &'a RecordListViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl fmt::Display for RecordListView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.mode == ViewMode::Minimal {
            for entry in &self.data.entries {
                writeln!(f, "{}\t{}", entry.index, entry.title)?;
            }
            return Ok(());
        }

        match &self.data.query {
            Some(query) => writeln!(f, "{} · \"{}\"", style::heading(self.data.label), query)?,
            None => writeln!(f, "{}", style::heading(self.data.label))?,
        }

        if self.data.entries.is_empty() {
            return writeln!(f, "  (nessun risultato)");
        }

        for entry in &self.data.entries {
            let marker = if entry.selected { '>' } else { ' ' };
            writeln!(f, "{} {:>4}  {}", marker, entry.index, entry.title)?;
            if self.mode != ViewMode::Compact {
                writeln!(f, "        {}", style::dim(&entry.meta))?;
            }
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Record card
// --------------------------------------------------------

pub struct RecordCardView<'a> {
    data: &'a RecordCardViewModel,
    mode: ViewMode,
    depth: usize,
}

impl<'a> RecordCardView<'a> {
    pub fn new(data: &'a RecordCardViewModel, mode: ViewMode) -> Self {
        Self {
            data,
            mode,
            depth: 0,
        }
    }

    fn child(&self, data: &'a RecordCardViewModel) -> Self {
        Self {
            data,
            mode: self.mode,
            depth: self.depth + 1,
        }
    }

    fn render_header(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pad = "  ".repeat(self.depth);
        let title = if self.depth == 0 {
            style::heading(&self.data.title)
        } else {
            let position = style::accent(&format!("[{}]", self.position()));
            format!("{} {}", position, style::heading(&self.data.title))
        };
        writeln!(f, "{}{}", pad, title)?;

        if self.mode == ViewMode::Minimal {
            return Ok(());
        }
        if let Some(subtitle) = &self.data.subtitle {
            writeln!(f, "{}{}", pad, style::dim(subtitle))?;
        }
        if !self.data.badges.is_empty() {
            let badges: Vec<String> = self.data.badges.iter().map(|b| format!("[{b}]")).collect();
            writeln!(f, "{}{}", pad, style::accent(&badges.join(" ")))?;
        }
        if self.mode == ViewMode::Verbose {
            let id = format!("id: {}", self.data.record_id);
            writeln!(f, "{}{}", pad, style::dim(&id))?;
        }
        Ok(())
    }

    fn position(&self) -> usize {
        let id = self.data.record_id;
        id.unit.unwrap_or(id.index)
    }

    fn render_field(&self, f: &mut fmt::Formatter<'_>, field: &FieldViewModel) -> fmt::Result {
        let pad = "  ".repeat(self.depth + 1);
        let label = if self.mode == ViewMode::Verbose {
            format!("{} ({})", field.label, field.key)
        } else {
            field.label.clone()
        };

        let mut lines = field.text.lines();
        let first = lines.next().unwrap_or_default();
        let label = format!("{}:", label);
        let width = LABEL_WIDTH;
        write!(f, "{}{:<width$} {}", pad, label, first)?;
        if let Some(affordance) = field.affordance {
            write!(f, " {}", style::accent(&format!("[{}]", affordance)))?;
        }
        writeln!(f)?;

        let rest: Vec<&str> = lines.collect();
        if !rest.is_empty() {
            let indent = pad.len() + LABEL_WIDTH + 1;
            writeln!(f, "{}", text::indent(&rest.join("\n"), indent))?;
        }
        Ok(())
    }
}

impl fmt::Display for RecordCardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render_header(f)?;
        if self.mode == ViewMode::Minimal {
            for child in &self.data.children {
                write!(f, "{}", self.child(child))?;
            }
            return Ok(());
        }

        if let Some(message) = self.data.empty_state {
            writeln!(f, "{}{}", "  ".repeat(self.depth + 1), message)?;
        }

        let pad = "  ".repeat(self.depth);
        for section in &self.data.sections {
            let fields: Vec<&FieldViewModel> = section
                .fields
                .iter()
                .filter(|field| self.mode != ViewMode::Compact || !field.is_empty)
                .collect();
            if fields.is_empty() {
                continue;
            }

            writeln!(f)?;
            writeln!(f, "{}{}", pad, style::section(&section.name))?;
            for field in fields {
                self.render_field(f, field)?;
            }
        }

        if self.mode == ViewMode::Verbose && !self.data.dropped_keys.is_empty() {
            writeln!(f)?;
            let dropped = format!("Non mostrati: {}", self.data.dropped_keys.join(", "));
            writeln!(f, "{}{}", pad, style::dim(&dropped))?;
        }

        if !self.data.children.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", style::section("Unità di ricognizione"))?;
            for child in &self.data.children {
                writeln!(f)?;
                write!(f, "{}", self.child(child))?;
            }
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Empty state
// --------------------------------------------------------

struct EmptyStateView<'a> {
    data: &'a EmptyStateViewModel,
}

impl fmt::Display for EmptyStateView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.data.message)
    }
}
