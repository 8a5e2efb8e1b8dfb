//! Groups the populated, registered properties of a record into ordered sections.

use crate::config::DatasetConfig;
use crate::registry::FieldDefinition;
use schedario_types::{PropertyMap, PropertyValue};
use serde::Serialize;
use std::collections::HashMap;

/// One populated field resolved against the registry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssembledField {
    pub definition: &'static FieldDefinition,
    pub value: PropertyValue,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssembledSection {
    pub name: String,
    pub full_width: bool,
    pub fields: Vec<AssembledField>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Assembly {
    pub sections: Vec<AssembledSection>,
    /// Populated property keys the registry does not know about, sorted.
    pub dropped_keys: Vec<String>,
}

impl Assembly {
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn section_names(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.name.as_str()).collect()
    }

    pub fn field_count(&self) -> usize {
        self.sections.iter().map(|s| s.fields.len()).sum()
    }
}

/// Resolve, filter, group and order the properties of one record.
///
/// Fields inside a section keep registry declaration order. Sections follow the
/// dataset's declared order; sections the order does not mention are appended
/// sorted by name. Sections without populated fields never appear.
pub fn assemble(props: &PropertyMap, config: &DatasetConfig) -> Assembly {
    let mut grouped: HashMap<&'static str, Vec<AssembledField>> = HashMap::new();

    for definition in config.registry.iter() {
        let Some(value) = props.get(definition.key) else {
            continue;
        };
        if value.is_empty() {
            continue;
        }
        grouped
            .entry(definition.section)
            .or_default()
            .push(AssembledField {
                definition,
                value: value.clone(),
            });
    }

    let mut names: Vec<&'static str> = config
        .section_order
        .iter()
        .copied()
        .filter(|name| grouped.contains_key(name))
        .collect();
    let mut undeclared: Vec<&'static str> = grouped
        .keys()
        .copied()
        .filter(|name| !config.section_order.contains(name))
        .collect();
    undeclared.sort_unstable();
    names.extend(undeclared);

    let sections = names
        .into_iter()
        .filter_map(|name| {
            let fields = grouped.remove(&name)?;
            Some(AssembledSection {
                name: name.to_string(),
                full_width: config.is_full_width(name),
                fields,
            })
        })
        .collect();

    let dropped_keys = dropped_keys(props, config);
    if !dropped_keys.is_empty() {
        tracing::debug!(
            dataset = %config.key,
            count = dropped_keys.len(),
            keys = ?dropped_keys,
            "properties without field definition"
        );
    }

    Assembly {
        sections,
        dropped_keys,
    }
}

fn dropped_keys(props: &PropertyMap, config: &DatasetConfig) -> Vec<String> {
    // PropertyMap iterates in key order, so the result is already sorted.
    props
        .iter()
        .filter(|(key, value)| !value.is_empty() && config.registry.lookup(key).is_none())
        .map(|(key, _)| key.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets;
    use crate::registry::{FieldDefinition as F, FieldRegistry};
    use schedario_types::DatasetKey;

    const FIELDS: &[F] = &[
        F::new("a", "Campo A", "A"),
        F::new("b", "Campo B", "B"),
        F::new("c2", "Campo C2", "C"),
        F::new("c1", "Campo C1", "C"),
    ];

    static ORDERED: DatasetConfig = DatasetConfig {
        key: DatasetKey::Mosi,
        label: "Prova",
        registry: FieldRegistry::new(FIELDS),
        section_order: &["A", "C"],
        full_width_sections: &["C"],
        search_fields: &[],
        summary: None,
        children: None,
        identifier_key: None,
    };

    #[test]
    fn test_undeclared_sections_follow_declared_ones() {
        let props: PropertyMap = [("a", "1"), ("b", "2"), ("c1", "3")].into_iter().collect();
        let assembly = assemble(&props, &ORDERED);
        assert_eq!(assembly.section_names(), vec!["A", "C", "B"]);
        assert!(assembly.sections[1].full_width);
        assert!(!assembly.sections[2].full_width);
    }

    #[test]
    fn test_fields_keep_declaration_order() {
        let props: PropertyMap = [("c1", "uno"), ("c2", "due")].into_iter().collect();
        let assembly = assemble(&props, &ORDERED);
        let keys: Vec<&str> = assembly.sections[0]
            .fields
            .iter()
            .map(|f| f.definition.key)
            .collect();
        assert_eq!(keys, vec!["c2", "c1"]);
    }

    #[test]
    fn test_empty_sections_are_omitted() {
        let props: PropertyMap = [("LCC", "Roma"), ("OGN", "  "), ("DES", "null")]
            .into_iter()
            .collect();
        let assembly = assemble(&props, datasets::config(DatasetKey::Mosi));
        assert_eq!(assembly.section_names(), vec!["Localizzazione"]);
        assert_eq!(assembly.field_count(), 1);
    }

    #[test]
    fn test_unknown_keys_are_reported_not_rendered() {
        let props: PropertyMap = [("zeta", "x"), ("a", "1"), ("alfa", "y"), ("vuota", "")]
            .into_iter()
            .collect();
        let assembly = assemble(&props, &ORDERED);
        assert_eq!(assembly.field_count(), 1);
        assert_eq!(assembly.dropped_keys, vec!["alfa", "zeta"]);
    }

    #[test]
    fn test_every_populated_registered_field_appears_once() {
        let config = datasets::config(DatasetKey::Mopr);
        let props: PropertyMap = config
            .registry
            .iter()
            .map(|def| (def.key, format!("valore {}", def.key)))
            .collect();
        let assembly = assemble(&props, config);
        assert_eq!(assembly.field_count(), config.registry.len());
        assert!(assembly.dropped_keys.is_empty());
    }
}
