use std::fmt;

use super::{RecordCardView, RecordListView};
use crate::presentation::formatters::style;
use crate::presentation::view_models::{BrowseUpdate, CreateView, ViewMode};
use schedario_types::GeometrySummary;

impl CreateView for BrowseUpdate {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(BrowseUpdateView { data: self, mode })
    }
}

struct BrowseUpdateView<'a> {
    data: &'a BrowseUpdate,
    mode: ViewMode,
}

fn geometry_line(geometry: Option<&GeometrySummary>) -> String {
    let Some(geometry) = geometry else {
        return "nessuna geometria".to_string();
    };
    match geometry.center {
        Some([lng, lat]) => format!("{} · centro {:.6}, {:.6}", geometry.kind, lat, lng),
        None => geometry.kind.clone(),
    }
}

impl fmt::Display for BrowseUpdateView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.data {
            BrowseUpdate::List(list) => write!(f, "{}", RecordListView::new(list, self.mode)),
            BrowseUpdate::Card(card) => {
                writeln!(f)?;
                write!(f, "{}", RecordCardView::new(card, self.mode))?;
                writeln!(f)
            }
            BrowseUpdate::Selected { dataset, index } => {
                writeln!(f, "{}", style::dim(&format!("> {}#{}", dataset, index)))
            }
            BrowseUpdate::FieldToggled {
                record,
                key,
                text,
                affordance,
                ..
            } => {
                let label = style::accent(&format!("[{}]", record));
                writeln!(f, "{} {}", label, style::heading(key))?;
                writeln!(f, "{}", text)?;
                writeln!(f, "{}", style::dim(&format!("[{}]", affordance)))
            }
            BrowseUpdate::MapFocus { record, geometry } => {
                let place = geometry_line(geometry.as_ref());
                let line = format!("mappa: {} · {}", record, place);
                writeln!(f, "{}", style::dim(&line))
            }
            BrowseUpdate::MiniMap { record, geometry } => {
                let place = geometry_line(geometry.as_ref());
                let line = format!("mini-mappa: {} · {}", record, place);
                writeln!(f, "{}", style::dim(&line))
            }
            BrowseUpdate::PrintWritten { path, cards } => {
                writeln!(f, "Stampa: {} scheda/e in {}", cards, path)
            }
            BrowseUpdate::Exported { path, title } => {
                writeln!(f, "Esportata \"{}\" in {}", title, path)
            }
            BrowseUpdate::EmptyState(empty) => writeln!(f, "{}", empty.message),
            BrowseUpdate::Alert { message } => writeln!(f, "! {}", message),
            BrowseUpdate::Help { commands } => {
                for command in commands {
                    writeln!(f, "  {}", command)?;
                }
                Ok(())
            }
            BrowseUpdate::Invalid { input, reason } => writeln!(f, "? {}: {}", input, reason),
        }
    }
}
