use crate::renderer::Expansion;
use schedario_types::RecordId;
use std::collections::HashMap;

/// Expand/collapse state of every truncated field instance currently on screen.
///
/// Entries are keyed by record and field key, so the same field shown for two
/// survey units toggles independently. The whole map is discarded when the
/// selected record changes.
#[derive(Debug, Clone, Default)]
pub struct ExpansionState {
    entries: HashMap<(RecordId, String), Expansion>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a truncated field on first render. Existing state is kept.
    pub fn register(&mut self, record: RecordId, key: &str) {
        self.entries
            .entry((record, key.to_string()))
            .or_insert(Expansion::Collapsed);
    }

    pub fn get(&self, record: RecordId, key: &str) -> Expansion {
        self.entries
            .get(&(record, key.to_string()))
            .copied()
            .unwrap_or_default()
    }

    /// Flip one instance. Returns the new state, or `None` for a field that was
    /// never rendered truncated.
    pub fn toggle(&mut self, record: RecordId, key: &str) -> Option<Expansion> {
        let state = self.entries.get_mut(&(record, key.to_string()))?;
        *state = state.toggled();
        Some(*state)
    }

    /// Every registered instance of `key`, across the record and its children.
    pub fn instances(&self, key: &str) -> Vec<RecordId> {
        let mut ids: Vec<RecordId> = self
            .entries
            .keys()
            .filter(|(_, field)| field == key)
            .map(|(id, _)| *id)
            .collect();
        ids.sort();
        ids
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schedario_types::DatasetKey;

    #[test]
    fn test_instances_toggle_independently() {
        let root = RecordId::new(DatasetKey::Ricognizioni, 0);
        let first = root.unit(0);
        let second = root.unit(1);

        let mut state = ExpansionState::new();
        state.register(first, "Note (CTN)");
        state.register(second, "Note (CTN)");

        assert_eq!(state.toggle(first, "Note (CTN)"), Some(Expansion::Expanded));
        assert_eq!(state.get(first, "Note (CTN)"), Expansion::Expanded);
        assert_eq!(state.get(second, "Note (CTN)"), Expansion::Collapsed);
        assert_eq!(state.instances("Note (CTN)"), vec![first, second]);
    }

    #[test]
    fn test_unregistered_field_cannot_toggle() {
        let mut state = ExpansionState::new();
        let id = RecordId::new(DatasetKey::Mopr, 3);
        assert_eq!(state.toggle(id, "GEP"), None);
        assert_eq!(state.get(id, "GEP"), Expansion::Collapsed);
    }

    #[test]
    fn test_register_keeps_existing_state() {
        let mut state = ExpansionState::new();
        let id = RecordId::new(DatasetKey::Mopr, 0);
        state.register(id, "CAE");
        state.toggle(id, "CAE");
        state.register(id, "CAE");
        assert_eq!(state.get(id, "CAE"), Expansion::Expanded);

        state.clear();
        assert_eq!(state.toggle(id, "CAE"), None);
        assert!(state.instances("CAE").is_empty());
    }
}
