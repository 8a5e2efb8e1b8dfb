//! Renders one field for one target and owns the truncate/expand contract.

use crate::registry::TruncationPolicy;
use crate::target::Target;
use crate::text::{escape_with_breaks, take_chars, unify_line_breaks};
use schedario_types::{PropertyValue, normalize};
use serde::Serialize;

/// Text shown for a field with no value.
pub const EMPTY_TEXT: &str = "vuoto";
/// Suffix appended to the short form of a truncated value.
pub const ELLIPSIS: char = '…';

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedField {
    pub key: String,
    pub label: String,
    pub is_empty: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_text: Option<String>,
    pub truncated: bool,
}

impl RenderedField {
    /// Text to display given the current expansion of this field instance.
    pub fn visible_text(&self, expansion: Expansion) -> &str {
        let text = match (self.truncated, expansion) {
            (true, Expansion::Expanded) => self.full_text.as_deref(),
            (true, Expansion::Collapsed) => self.short_text.as_deref(),
            (false, _) => self.full_text.as_deref().or(self.short_text.as_deref()),
        };
        text.unwrap_or(EMPTY_TEXT)
    }

    /// Complete text regardless of truncation. Empty fields yield the placeholder.
    pub fn complete_text(&self) -> &str {
        self.full_text
            .as_deref()
            .or(self.short_text.as_deref())
            .unwrap_or(EMPTY_TEXT)
    }

    /// Label of the expand/collapse affordance, if this field has one.
    pub fn affordance(&self, expansion: Expansion) -> Option<&'static str> {
        self.truncated.then(|| expansion.affordance_label())
    }
}

/// Render one field.
///
/// Truncation applies only on the interactive target and only when the
/// normalized value is longer than the policy allows; it is measured in
/// characters and done before line breaks are converted for the target.
pub fn render_field(
    key: &str,
    label: &str,
    raw: Option<&PropertyValue>,
    policy: Option<TruncationPolicy>,
    target: Target,
) -> RenderedField {
    let value = raw.map(normalize).unwrap_or_default();

    if value.is_empty() {
        return RenderedField {
            key: key.to_string(),
            label: label.to_string(),
            is_empty: true,
            short_text: Some(EMPTY_TEXT.to_string()),
            full_text: None,
            truncated: false,
        };
    }

    let limit = policy
        .filter(|_| target.truncates())
        .map(|p| p.max_length)
        .filter(|max| value.chars().count() > *max);

    let (short_text, full_text, truncated) = match limit {
        Some(max) => {
            let mut short = take_chars(&value, max).trim().to_string();
            short.push(ELLIPSIS);
            let short = for_target(&short, target);
            (Some(short), for_target(&value, target), true)
        }
        None => (None, for_target(&value, target), false),
    };

    RenderedField {
        key: key.to_string(),
        label: label.to_string(),
        is_empty: false,
        short_text,
        full_text: Some(full_text),
        truncated,
    }
}

fn for_target(text: &str, target: Target) -> String {
    match target {
        Target::Print => escape_with_breaks(text),
        Target::Interactive | Target::Export => unify_line_breaks(text),
    }
}

/// Display state of one truncated field instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Expansion {
    #[default]
    Collapsed,
    Expanded,
}

impl Expansion {
    pub fn toggled(self) -> Self {
        match self {
            Expansion::Collapsed => Expansion::Expanded,
            Expansion::Expanded => Expansion::Collapsed,
        }
    }

    pub fn affordance_label(self) -> &'static str {
        match self {
            Expansion::Collapsed => "...leggi tutto",
            Expansion::Expanded => "chiudi",
        }
    }
}
