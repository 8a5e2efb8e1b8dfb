//! Operator session: which dataset and record feed the pipeline, and the
//! notifications the collaborators need after every operator action.

use crate::collaborators::MapCollaborator;
use crate::loader::Catalog;
use schedario_engine::composer::sort_children;
use schedario_engine::{
    ComposedRecord, Expansion, ExpansionState, ExportDocument, HeaderContext, ListItem, Target,
    compose_with_children, datasets, search,
};
use schedario_types::{DatasetKey, RecordId};
use serde::Serialize;
use std::collections::BTreeMap;

pub const NO_RECORDS: &str = "Nessuna scheda disponibile per questa sezione.";
pub const NO_SURVEY: &str = "Nessuna ricognizione disponibile.";
pub const NOTHING_TO_EXPORT: &str = "Nessuna scheda selezionata da esportare";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    pub active_dataset: DatasetKey,
    /// Remembered index per dataset, into the unfiltered record array.
    pub current_index: BTreeMap<DatasetKey, usize>,
    pub search_query: String,
}

impl SelectionState {
    pub fn new(active_dataset: DatasetKey) -> Self {
        Self {
            active_dataset,
            current_index: BTreeMap::new(),
            search_query: String::new(),
        }
    }

    pub fn current(&self) -> Option<usize> {
        self.current_index.get(&self.active_dataset).copied()
    }
}

/// Operator actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    SelectDataset(DatasetKey),
    Search(String),
    SelectRecord(usize),
    /// Toggle a truncated field of the current record, or of one of its
    /// children when `child` is set.
    ToggleField { key: String, child: Option<usize> },
    PrintCurrent,
    PrintAll,
    ExportCurrent,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListEntry {
    pub index: usize,
    #[serde(flatten)]
    pub item: ListItem,
    pub selected: bool,
}

/// What collaborators must do after an event.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notification {
    ShowList {
        dataset: DatasetKey,
        query: String,
        entries: Vec<ListEntry>,
    },
    /// The list marker moved; the entries themselves are unchanged.
    ListSelection { dataset: DatasetKey, index: usize },
    ShowCard { card: ComposedRecord },
    PrintPreview { card: ComposedRecord },
    FocusMap { record: RecordId },
    MiniMap { record: RecordId },
    FieldToggled {
        record: RecordId,
        key: String,
        expansion: Expansion,
        text: String,
        affordance: &'static str,
    },
    PrintReady { cards: Vec<ComposedRecord> },
    ExportReady { document: ExportDocument },
    EmptyState {
        dataset: DatasetKey,
        message: &'static str,
    },
    Alert { message: String },
}

/// Single-actor session state: selection, expansion and the card on screen.
pub struct Session<'a> {
    catalog: &'a Catalog,
    selection: SelectionState,
    expansion: ExpansionState,
    card: Option<ComposedRecord>,
}

impl<'a> Session<'a> {
    pub fn new(catalog: &'a Catalog, active_dataset: DatasetKey) -> Self {
        Self {
            catalog,
            selection: SelectionState::new(active_dataset),
            expansion: ExpansionState::new(),
            card: None,
        }
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    /// Interactive card currently on screen.
    pub fn card(&self) -> Option<&ComposedRecord> {
        self.card.as_ref()
    }

    pub fn apply(&mut self, event: SessionEvent) -> Vec<Notification> {
        tracing::debug!(?event, "session event");
        match event {
            SessionEvent::SelectDataset(key) => self.select_dataset(key),
            SessionEvent::Search(query) => self.search(&query),
            SessionEvent::SelectRecord(index) => self.select_record(index),
            SessionEvent::ToggleField { key, child } => self.toggle_field(&key, child),
            SessionEvent::PrintCurrent => self.print_current(),
            SessionEvent::PrintAll => self.print_all(),
            SessionEvent::ExportCurrent => self.export_current(),
        }
    }

    fn select_dataset(&mut self, key: DatasetKey) -> Vec<Notification> {
        self.selection.active_dataset = key;
        self.selection.search_query.clear();

        let available = self.catalog.records(key).map_or(0, <[_]>::len);
        if available == 0 {
            self.card = None;
            self.expansion.clear();
            return vec![Notification::EmptyState {
                dataset: key,
                message: empty_state_message(key),
            }];
        }

        let index = self
            .selection
            .current()
            .filter(|idx| *idx < available)
            .unwrap_or(0);

        let shown = self.show_record(index);
        let mut notifications = Vec::with_capacity(shown.len() + 1);
        notifications.push(self.list_notification());
        notifications.extend(shown);
        notifications
    }

    fn search(&mut self, query: &str) -> Vec<Notification> {
        let config = datasets::config(self.selection.active_dataset);
        if !config.is_searchable() {
            tracing::debug!(dataset = %config.key, "search ignored");
            return Vec::new();
        }
        self.selection.search_query = query.trim().to_string();
        vec![self.list_notification()]
    }

    fn select_record(&mut self, index: usize) -> Vec<Notification> {
        let shown = self.show_record(index);
        if shown.is_empty() {
            return shown;
        }
        let mut notifications = Vec::with_capacity(shown.len() + 1);
        notifications.push(Notification::ListSelection {
            dataset: self.selection.active_dataset,
            index,
        });
        notifications.extend(shown);
        notifications
    }

    fn show_record(&mut self, index: usize) -> Vec<Notification> {
        let key = self.selection.active_dataset;
        let Some(feature) = self.catalog.records(key).and_then(|r| r.get(index)) else {
            return Vec::new();
        };

        let config = datasets::config(key);
        let children = self.catalog.children(key);
        let record_id = RecordId::new(key, index);

        self.selection.current_index.insert(key, index);
        self.expansion.clear();

        let card = compose_with_children(feature, children, config, record_id, Target::Interactive);
        card.register_truncations(&mut self.expansion);
        let print = compose_with_children(feature, children, config, record_id, Target::Print);

        let mut notifications = vec![
            Notification::ShowCard { card: card.clone() },
            Notification::PrintPreview { card: print },
            Notification::FocusMap { record: record_id },
        ];
        for child in &card.children {
            notifications.push(Notification::MiniMap {
                record: child.record_id,
            });
        }
        self.card = Some(card);
        notifications
    }

    fn toggle_field(&mut self, key: &str, child: Option<usize>) -> Vec<Notification> {
        let Some(card) = &self.card else {
            return Vec::new();
        };
        let target = match child {
            Some(position) => card.children.get(position),
            None => Some(card),
        };
        let Some(target) = target else {
            return Vec::new();
        };
        let Some(field) = target.find_field(key) else {
            return Vec::new();
        };
        let Some(expansion) = self.expansion.toggle(target.record_id, key) else {
            return Vec::new();
        };

        vec![Notification::FieldToggled {
            record: target.record_id,
            key: key.to_string(),
            expansion,
            text: field.visible_text(expansion).to_string(),
            affordance: expansion.affordance_label(),
        }]
    }

    fn print_current(&self) -> Vec<Notification> {
        let key = self.selection.active_dataset;
        let Some(index) = self.selection.current() else {
            return vec![Notification::Alert {
                message: NO_RECORDS.to_string(),
            }];
        };
        match self.compose_print(key, index) {
            Some(card) => vec![Notification::PrintReady { cards: vec![card] }],
            None => Vec::new(),
        }
    }

    fn print_all(&self) -> Vec<Notification> {
        let cards = print_all(self.catalog);
        vec![Notification::PrintReady { cards }]
    }

    fn export_current(&self) -> Vec<Notification> {
        let key = self.selection.active_dataset;
        let feature = self
            .selection
            .current()
            .and_then(|idx| self.catalog.records(key)?.get(idx).map(|f| (idx, f)));

        match feature {
            Some((index, feature)) => vec![Notification::ExportReady {
                document: ExportDocument::build(
                    feature,
                    self.catalog.children(key),
                    datasets::config(key),
                    RecordId::new(key, index),
                ),
            }],
            None => vec![Notification::Alert {
                message: NOTHING_TO_EXPORT.to_string(),
            }],
        }
    }

    fn compose_print(&self, key: DatasetKey, index: usize) -> Option<ComposedRecord> {
        let feature = self.catalog.records(key)?.get(index)?;
        Some(compose_with_children(
            feature,
            self.catalog.children(key),
            datasets::config(key),
            RecordId::new(key, index),
            Target::Print,
        ))
    }

    fn list_notification(&self) -> Notification {
        let key = self.selection.active_dataset;
        Notification::ShowList {
            dataset: key,
            query: self.selection.search_query.clone(),
            entries: visible_entries(
                self.catalog,
                key,
                &self.selection.search_query,
                self.selection.current(),
            ),
        }
    }

    /// Dispatch map notifications to a map collaborator.
    pub fn dispatch_map(&self, notifications: &[Notification], map: &mut dyn MapCollaborator) {
        let key = self.selection.active_dataset;
        let Some(records) = self.catalog.records(key) else {
            return;
        };
        let children = sort_children(
            self.catalog.children(key),
            datasets::config(key).identifier_key,
        );

        for notification in notifications {
            match notification {
                Notification::FocusMap { record } => {
                    if let Some(feature) = records.get(record.index) {
                        map.focus(*record, feature);
                    }
                }
                Notification::MiniMap { record } => {
                    let root = records.get(record.index);
                    let child = record.unit.and_then(|pos| children.get(pos).copied());
                    if let (Some(root), Some(child)) = (root, child) {
                        map.mini_map(*record, root, child);
                    }
                }
                _ => {}
            }
        }
    }
}

/// Message shown when a dataset has no record to present.
pub fn empty_state_message(key: DatasetKey) -> &'static str {
    if key.is_hierarchical() {
        NO_SURVEY
    } else {
        NO_RECORDS
    }
}

/// List entries of `key` matching `query`, keyed by unfiltered index.
pub fn visible_entries(
    catalog: &Catalog,
    key: DatasetKey,
    query: &str,
    selected: Option<usize>,
) -> Vec<ListEntry> {
    let Some(records) = catalog.records(key) else {
        return Vec::new();
    };
    let config = datasets::config(key);
    search::filter_indices(records, config, query)
        .into_iter()
        .map(|index| ListEntry {
            index,
            item: config.list_item(
                &records[index].properties,
                HeaderContext::new(Target::Interactive),
            ),
            selected: selected == Some(index),
        })
        .collect()
}

/// Print cards of every available record of every dataset.
pub fn print_all(catalog: &Catalog) -> Vec<ComposedRecord> {
    let mut cards = Vec::new();
    for key in DatasetKey::ALL {
        let Some(records) = catalog.records(key) else {
            continue;
        };
        let config = datasets::config(key);
        let children = catalog.children(key);
        for (index, feature) in records.iter().enumerate() {
            cards.push(compose_with_children(
                feature,
                children,
                config,
                RecordId::new(key, index),
                Target::Print,
            ));
        }
    }
    cards
}
