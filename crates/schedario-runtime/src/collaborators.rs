use schedario_types::{Feature, RecordId};

/// Map widget driven by the session. Implementations decide how to draw.
pub trait MapCollaborator {
    /// Focus the main map on a record's geometry.
    fn focus(&mut self, record: RecordId, feature: &Feature);

    /// Draw a child record against its root, e.g. a survey unit inside the survey area.
    fn mini_map(&mut self, record: RecordId, root: &Feature, child: &Feature);
}

/// Map that remembers what it was asked to draw.
#[derive(Debug, Default)]
pub struct RecordingMap {
    pub focused: Vec<RecordId>,
    pub mini_maps: Vec<RecordId>,
}

impl MapCollaborator for RecordingMap {
    fn focus(&mut self, record: RecordId, _feature: &Feature) {
        self.focused.push(record);
    }

    fn mini_map(&mut self, record: RecordId, _root: &Feature, _child: &Feature) {
        self.mini_maps.push(record);
    }
}
