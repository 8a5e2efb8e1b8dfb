//! Turns a feature into the card, print card or export structure for a target.

use crate::assembler::{Assembly, assemble};
use crate::config::{DatasetConfig, Header, HeaderContext};
use crate::expansion::ExpansionState;
use crate::ordering::natural_cmp;
use crate::renderer::{RenderedField, render_field};
use crate::target::Target;
use schedario_types::{Feature, GeometrySummary, RecordId};
use serde::Serialize;

/// Message shown in place of sections for a record with no populated field.
pub const NO_DATA: &str = "Nessun dato da mostrare.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedSection {
    pub name: String,
    pub full_width: bool,
    pub fields: Vec<RenderedField>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComposedRecord {
    pub record_id: RecordId,
    pub target: Target,
    pub header: Header,
    pub sections: Vec<RenderedSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_state: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometry: Option<GeometrySummary>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dropped_keys: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ComposedRecord>,
}

impl ComposedRecord {
    pub fn truncated_fields(&self) -> impl Iterator<Item = &RenderedField> {
        self.sections
            .iter()
            .flat_map(|s| s.fields.iter())
            .filter(|f| f.truncated)
    }

    /// Register every truncated field of this record and its children.
    pub fn register_truncations(&self, state: &mut ExpansionState) {
        for field in self.truncated_fields() {
            state.register(self.record_id, &field.key);
        }
        for child in &self.children {
            child.register_truncations(state);
        }
    }

    pub fn find_field(&self, key: &str) -> Option<&RenderedField> {
        self.sections
            .iter()
            .flat_map(|s| s.fields.iter())
            .find(|f| f.key == key)
    }
}

/// Compose one flat record.
pub fn compose(
    feature: &Feature,
    config: &DatasetConfig,
    record_id: RecordId,
    target: Target,
) -> ComposedRecord {
    compose_at(feature, config, record_id, HeaderContext::new(target))
}

/// Compose a root record together with its children.
///
/// Children are ordered by their identifier using natural ordering and each one
/// is composed independently with its own record id. A dataset without child
/// configuration ignores `children`.
pub fn compose_with_children(
    root: &Feature,
    children: &[Feature],
    config: &DatasetConfig,
    record_id: RecordId,
    target: Target,
) -> ComposedRecord {
    let mut composed = compose(root, config, record_id, target);
    let Some(child_config) = config.children else {
        return composed;
    };

    composed.children = sort_children(children, config.identifier_key)
        .into_iter()
        .enumerate()
        .map(|(position, child)| {
            compose_at(
                child,
                child_config,
                record_id.unit(position),
                HeaderContext::new(target).at(position),
            )
        })
        .collect();
    composed
}

/// Children in presentation order.
pub fn sort_children<'a>(
    children: &'a [Feature],
    identifier_key: Option<&str>,
) -> Vec<&'a Feature> {
    let mut sorted: Vec<&Feature> = children.iter().collect();
    if let Some(key) = identifier_key {
        // Stable, so children sharing an identifier keep source order.
        sorted.sort_by(|a, b| natural_cmp(&a.properties.text(key), &b.properties.text(key)));
    }
    sorted
}

fn compose_at(
    feature: &Feature,
    config: &DatasetConfig,
    record_id: RecordId,
    ctx: HeaderContext,
) -> ComposedRecord {
    let props = &feature.properties;
    let Assembly {
        sections,
        dropped_keys,
    } = assemble(props, config);

    let sections: Vec<RenderedSection> = sections
        .into_iter()
        .map(|section| RenderedSection {
            fields: section
                .fields
                .iter()
                .map(|field| {
                    render_field(
                        field.definition.key,
                        field.definition.label,
                        Some(&field.value),
                        field.definition.truncation,
                        ctx.target,
                    )
                })
                .collect(),
            name: section.name,
            full_width: section.full_width,
        })
        .collect();

    let geometry = match ctx.target {
        Target::Print => feature.geometry.as_ref().map(|g| g.summary()),
        Target::Interactive | Target::Export => None,
    };

    ComposedRecord {
        record_id,
        target: ctx.target,
        header: config.header(props, ctx),
        empty_state: sections.is_empty().then_some(NO_DATA),
        sections,
        geometry,
        dropped_keys,
        children: Vec::new(),
    }
}
