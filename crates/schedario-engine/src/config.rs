use crate::registry::FieldRegistry;
use crate::target::Target;
use schedario_types::{DatasetKey, PropertyMap};
use serde::Serialize;

/// Card header: title, one subtitle line, and short badge labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub badges: Vec<String>,
}

impl Header {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            badges: Vec::new(),
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        let subtitle = subtitle.into();
        if !subtitle.is_empty() {
            self.subtitle = Some(subtitle);
        }
        self
    }

    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badges.push(badge.into());
        self
    }
}

/// Two-line summary used by record lists and as export title/subtitle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    pub title: String,
    pub meta: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderContext {
    pub target: Target,
    /// Position among siblings, for child records that have no identifier.
    pub position: Option<usize>,
}

impl HeaderContext {
    pub fn new(target: Target) -> Self {
        Self {
            target,
            position: None,
        }
    }

    pub fn at(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }
}

/// Dataset-specific header and list summary builders.
pub trait RecordSummary: Send + Sync {
    fn header(&self, props: &PropertyMap, ctx: HeaderContext) -> Header;

    fn list_item(&self, props: &PropertyMap, ctx: HeaderContext) -> ListItem;
}

/// Everything the pipeline needs to know about one dataset.
#[derive(Clone, Copy)]
pub struct DatasetConfig {
    pub key: DatasetKey,
    pub label: &'static str,
    pub registry: FieldRegistry,
    pub section_order: &'static [&'static str],
    pub full_width_sections: &'static [&'static str],
    /// Property keys joined for substring search. Empty disables search.
    pub search_fields: &'static [&'static str],
    pub summary: Option<&'static dyn RecordSummary>,
    /// Configuration of child records, for hierarchical datasets.
    pub children: Option<&'static DatasetConfig>,
    /// Property holding a child's identifier; children sort on it.
    pub identifier_key: Option<&'static str>,
}

impl DatasetConfig {
    pub fn is_full_width(&self, section: &str) -> bool {
        self.full_width_sections.contains(&section)
    }

    pub fn is_searchable(&self) -> bool {
        !self.search_fields.is_empty()
    }

    pub fn header(&self, props: &PropertyMap, ctx: HeaderContext) -> Header {
        match self.summary {
            Some(summary) => summary.header(props, ctx),
            None => default_header(props, self.label),
        }
    }

    pub fn list_item(&self, props: &PropertyMap, ctx: HeaderContext) -> ListItem {
        match self.summary {
            Some(summary) => summary.list_item(props, ctx),
            None => {
                let header = default_header(props, self.label);
                ListItem {
                    title: header.title,
                    meta: header.subtitle.unwrap_or_default(),
                }
            }
        }
    }
}

impl std::fmt::Debug for DatasetConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatasetConfig")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("fields", &self.registry.len())
            .field("section_order", &self.section_order)
            .field("search_fields", &self.search_fields)
            .field("has_children", &self.children.is_some())
            .finish()
    }
}

/// Header used when a dataset declares no summary of its own.
pub fn default_header(props: &PropertyMap, label: &str) -> Header {
    let title = if label.is_empty() {
        "Scheda".to_string()
    } else {
        format!("Scheda {}", label)
    };
    let fid = props.text("fid");
    let header = Header::new(title);
    if fid.is_empty() {
        header
    } else {
        header.with_subtitle(format!("ID interno: {}", fid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_header_with_fid() {
        let props: PropertyMap = [("fid", 12i64)].into_iter().collect();
        let header = default_header(&props, "MOPR");
        assert_eq!(header.title, "Scheda MOPR");
        assert_eq!(header.subtitle.as_deref(), Some("ID interno: 12"));
    }

    #[test]
    fn test_default_header_without_fid() {
        let header = default_header(&PropertyMap::new(), "MOSI");
        assert_eq!(header.title, "Scheda MOSI");
        assert!(header.subtitle.is_none());
    }
}
