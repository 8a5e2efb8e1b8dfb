use serde::Serialize;

/// Cap on interactive display length. Print and export never truncate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TruncationPolicy {
    pub max_length: usize,
}

/// Static description of one known property: how it is labelled and where it goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldDefinition {
    pub key: &'static str,
    pub label: &'static str,
    pub section: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truncation: Option<TruncationPolicy>,
}

impl FieldDefinition {
    pub const fn new(key: &'static str, label: &'static str, section: &'static str) -> Self {
        Self {
            key,
            label,
            section,
            truncation: None,
        }
    }

    pub const fn truncated(mut self, max_length: usize) -> Self {
        self.truncation = Some(TruncationPolicy { max_length });
        self
    }
}

/// Ordered set of field definitions for one dataset.
///
/// Declaration order is significant: fields inside a section are presented in
/// the order they are declared here, whatever order the source document used.
#[derive(Debug, Clone, Copy)]
pub struct FieldRegistry {
    fields: &'static [FieldDefinition],
}

impl FieldRegistry {
    pub const fn new(fields: &'static [FieldDefinition]) -> Self {
        Self { fields }
    }

    pub fn lookup(&self, key: &str) -> Option<&'static FieldDefinition> {
        self.fields.iter().find(|def| def.key == key)
    }

    pub fn iter(&self) -> std::slice::Iter<'static, FieldDefinition> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Section names in the order they are first declared.
    pub fn sections(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = Vec::new();
        for def in self.fields {
            if !names.contains(&def.section) {
                names.push(def.section);
            }
        }
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELDS: &[FieldDefinition] = &[
        FieldDefinition::new("A1", "Primo", "A"),
        FieldDefinition::new("B1", "Secondo", "B").truncated(10),
        FieldDefinition::new("A2", "Terzo", "A"),
    ];

    #[test]
    fn test_lookup() {
        let registry = FieldRegistry::new(FIELDS);
        assert_eq!(registry.lookup("B1").map(|d| d.label), Some("Secondo"));
        assert_eq!(
            registry.lookup("B1").and_then(|d| d.truncation),
            Some(TruncationPolicy { max_length: 10 })
        );
        assert!(registry.lookup("Z9").is_none());
    }

    #[test]
    fn test_sections_in_declaration_order() {
        let registry = FieldRegistry::new(FIELDS);
        assert_eq!(registry.sections(), vec!["A", "B"]);
    }
}
