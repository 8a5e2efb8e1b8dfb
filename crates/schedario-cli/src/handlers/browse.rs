use super::HandlerContext;
use crate::context::ExecutionContext;
use crate::handlers::show::parse_expand;
use crate::presentation::presenters;
use crate::presentation::view_models::{BrowseUpdate, EmptyStateViewModel};
use crate::types::DatasetArg;
use anyhow::Result;
use chrono::Local;
use schedario_engine::{Expansion, ExportDocument, sanitize_file_stem};
use schedario_runtime::{
    Catalog, ExportFormat, MapCollaborator, Notification, PrintPage, Session, SessionEvent,
    writer_for,
};
use schedario_types::{DatasetKey, Feature, RecordId};
use std::io::BufRead;
use std::path::{Path, PathBuf};

const HELP: &[&str] = &[
    "dataset <mosi|mopr|ricognizioni>   switch dataset",
    "search [testo]                     filter the list (empty clears)",
    "list                               show the list again",
    "select <n> | <n>                   open record n",
    "toggle [unit:]KEY                  expand or collapse a truncated field",
    "print                              write the current card as HTML",
    "print all                          write every card as HTML",
    "export                             export the current record",
    "help                               this help",
    "quit                               leave",
];

/// Operator input, one per line.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Event(SessionEvent),
    List,
    Help,
    Quit,
    Blank,
}

fn parse_command(line: &str) -> std::result::Result<Command, String> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb {
        "" => Command::Blank,
        "quit" | "exit" | "q" => Command::Quit,
        "help" | "?" => Command::Help,
        "list" | "ls" => Command::List,
        "dataset" | "d" => {
            let key: DatasetKey = rest.parse()?;
            Command::Event(SessionEvent::SelectDataset(key))
        }
        "search" | "/" => Command::Event(SessionEvent::Search(rest.to_string())),
        "select" | "s" => Command::Event(SessionEvent::SelectRecord(parse_index(rest)?)),
        "toggle" | "t" if !rest.is_empty() => {
            let (child, key) = parse_expand(rest);
            Command::Event(SessionEvent::ToggleField {
                key: key.to_string(),
                child,
            })
        }
        "print" | "p" if rest == "all" => Command::Event(SessionEvent::PrintAll),
        "print" | "p" if rest.is_empty() => Command::Event(SessionEvent::PrintCurrent),
        "export" | "e" => Command::Event(SessionEvent::ExportCurrent),
        index if index.chars().all(|c| c.is_ascii_digit()) => {
            Command::Event(SessionEvent::SelectRecord(parse_index(index)?))
        }
        _ => return Err("unknown command, type 'help'".to_string()),
    };
    Ok(command)
}

fn parse_index(text: &str) -> std::result::Result<usize, String> {
    text.parse()
        .map_err(|_| format!("'{}' is not a record index", text))
}

/// Map collaborator that reports map moves as browse updates.
#[derive(Default)]
struct ConsoleMap {
    updates: Vec<BrowseUpdate>,
}

impl MapCollaborator for ConsoleMap {
    fn focus(&mut self, record: RecordId, feature: &Feature) {
        self.updates.push(BrowseUpdate::MapFocus {
            record,
            geometry: feature.geometry.as_ref().map(|g| g.summary()),
        });
    }

    fn mini_map(&mut self, record: RecordId, _root: &Feature, child: &Feature) {
        self.updates.push(BrowseUpdate::MiniMap {
            record,
            geometry: child.geometry.as_ref().map(|g| g.summary()),
        });
    }
}

struct Browser<'a> {
    catalog: &'a Catalog,
    session: Session<'a>,
    map: ConsoleMap,
    output_dir: PathBuf,
    export_format: ExportFormat,
}

impl<'a> Browser<'a> {
    fn new(
        catalog: &'a Catalog,
        dataset: DatasetKey,
        output_dir: PathBuf,
        export_format: ExportFormat,
    ) -> Self {
        Self {
            catalog,
            session: Session::new(catalog, dataset),
            map: ConsoleMap::default(),
            output_dir,
            export_format,
        }
    }

    fn apply(&mut self, event: SessionEvent) -> Vec<BrowseUpdate> {
        let notifications = self.session.apply(event);
        self.session.dispatch_map(&notifications, &mut self.map);

        let mut updates: Vec<BrowseUpdate> = notifications
            .into_iter()
            .filter_map(|notification| self.present(notification))
            .collect();
        updates.append(&mut self.map.updates);
        updates
    }

    fn present(&self, notification: Notification) -> Option<BrowseUpdate> {
        let update = match notification {
            Notification::ShowList {
                dataset,
                query,
                entries,
            } => {
                let total = self.total(dataset);
                BrowseUpdate::List(presenters::build_record_list(dataset, &query, entries, total))
            }
            Notification::ListSelection { dataset, index } => {
                BrowseUpdate::Selected { dataset, index }
            }
            Notification::ShowCard { card } => {
                BrowseUpdate::Card(presenters::build_card(&card, self.session.expansion()))
            }
            Notification::FieldToggled {
                record,
                key,
                expansion,
                text,
                affordance,
            } => BrowseUpdate::FieldToggled {
                record,
                key,
                expanded: expansion == Expansion::Expanded,
                text,
                affordance,
            },
            Notification::PrintReady { cards } => {
                let title = match cards.as_slice() {
                    [card] => card.header.title.clone(),
                    _ => "Schede".to_string(),
                };
                let file_name = format!("{}.html", sanitize_file_stem(&title));
                let path = self.output_dir.join(file_name);
                let html = PrintPage::new(title, &cards)
                    .generated_at(Local::now())
                    .render();
                match write_file(&path, &html) {
                    Ok(()) => BrowseUpdate::PrintWritten {
                        path: path.display().to_string(),
                        cards: cards.len(),
                    },
                    Err(err) => BrowseUpdate::Alert {
                        message: err.to_string(),
                    },
                }
            }
            Notification::ExportReady { document } => self.export(&document),
            Notification::EmptyState { dataset, message } => {
                BrowseUpdate::EmptyState(EmptyStateViewModel { dataset, message })
            }
            Notification::Alert { message } => BrowseUpdate::Alert { message },
            // The console has no print pane; map moves come from the collaborator.
            Notification::PrintPreview { .. }
            | Notification::FocusMap { .. }
            | Notification::MiniMap { .. } => {
                return None;
            }
        };
        Some(update)
    }

    fn export(&self, document: &ExportDocument) -> BrowseUpdate {
        match writer_for(self.export_format).write(document, &self.output_dir) {
            Ok(path) => BrowseUpdate::Exported {
                path: path.display().to_string(),
                title: document.title.clone(),
            },
            Err(err) => BrowseUpdate::Alert {
                message: err.to_string(),
            },
        }
    }

    fn total(&self, dataset: DatasetKey) -> usize {
        self.catalog.records(dataset).map_or(0, <[_]>::len)
    }
}

fn write_file(path: &Path, content: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)
}

pub fn handle(
    ctx: &ExecutionContext,
    dataset: Option<DatasetArg>,
    hctx: &HandlerContext,
) -> Result<()> {
    let catalog = ctx.catalog()?;
    let dataset = ctx.dataset(dataset)?;
    let output_dir = ctx.export_dir(None)?;
    let format = ctx.config()?.export.format;
    let mut browser = Browser::new(catalog, dataset, output_dir, format);

    for update in browser.apply(SessionEvent::SelectDataset(dataset)) {
        hctx.render_update(&update)?;
    }

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let updates = match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Blank) => continue,
            Ok(Command::Help) => vec![BrowseUpdate::Help {
                commands: HELP.to_vec(),
            }],
            Ok(Command::List) => {
                let query = browser.session.selection().search_query.clone();
                let active = browser.session.selection().active_dataset;
                let mut updates = browser.apply(SessionEvent::Search(query));
                if updates.is_empty() {
                    // Unsearchable datasets ignore queries; reopen instead.
                    updates = browser.apply(SessionEvent::SelectDataset(active));
                }
                updates
            }
            Ok(Command::Event(event)) => browser.apply(event),
            Err(reason) => vec![BrowseUpdate::Invalid {
                input: line.trim().to_string(),
                reason,
            }],
        };
        for update in &updates {
            hctx.render_update(update)?;
        }
    }
    Ok(())
}
