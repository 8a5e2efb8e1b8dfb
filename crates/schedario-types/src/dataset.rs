use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three record collections the operator can browse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetKey {
    Mosi,
    Mopr,
    Ricognizioni,
}

impl DatasetKey {
    pub const ALL: [DatasetKey; 3] = [DatasetKey::Mosi, DatasetKey::Mopr, DatasetKey::Ricognizioni];

    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetKey::Mosi => "mosi",
            DatasetKey::Mopr => "mopr",
            DatasetKey::Ricognizioni => "ricognizioni",
        }
    }

    /// True for the root + survey-unit dataset.
    pub fn is_hierarchical(&self) -> bool {
        matches!(self, DatasetKey::Ricognizioni)
    }
}

impl fmt::Display for DatasetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatasetKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mosi" => Ok(DatasetKey::Mosi),
            "mopr" => Ok(DatasetKey::Mopr),
            "ricognizioni" | "rcg" => Ok(DatasetKey::Ricognizioni),
            other => Err(format!("unknown dataset: {}", other)),
        }
    }
}

/// Stable identity of one displayed record.
///
/// `index` always refers to the unfiltered dataset array. Survey units of the
/// reconnaissance dataset carry their position in the sorted unit list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RecordId {
    pub dataset: DatasetKey,
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<usize>,
}

impl RecordId {
    pub fn new(dataset: DatasetKey, index: usize) -> Self {
        Self {
            dataset,
            index,
            unit: None,
        }
    }

    pub fn unit(self, position: usize) -> Self {
        Self {
            unit: Some(position),
            ..self
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.dataset, self.index)?;
        if let Some(unit) = self.unit {
            write!(f, "/ur{}", unit)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_key_parse() {
        assert_eq!("MOSI".parse::<DatasetKey>(), Ok(DatasetKey::Mosi));
        assert_eq!("rcg".parse::<DatasetKey>(), Ok(DatasetKey::Ricognizioni));
        assert!("correzioni".parse::<DatasetKey>().is_err());
    }

    #[test]
    fn test_record_id_display() {
        let id = RecordId::new(DatasetKey::Ricognizioni, 0).unit(2);
        assert_eq!(id.to_string(), "ricognizioni#0/ur2");
        assert_eq!(id.unit, Some(2));
    }
}
