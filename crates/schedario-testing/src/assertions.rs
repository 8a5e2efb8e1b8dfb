//! Assertions over `--format json` output.

use anyhow::{Context, Result};
use serde_json::Value;

/// Assert that a list result holds `expected` entries.
pub fn assert_entry_count(json: &Value, expected: usize) -> Result<()> {
    let entries = json["content"]["entries"]
        .as_array()
        .context("Expected 'content.entries' array in JSON")?;

    if entries.len() != expected {
        anyhow::bail!("Expected {} entries, got {}", expected, entries.len());
    }
    Ok(())
}

/// Indices of the listed entries, in display order.
pub fn entry_indices(json: &Value) -> Result<Vec<u64>> {
    json["content"]["entries"]
        .as_array()
        .context("Expected 'content.entries' array in JSON")?
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            entry["index"]
                .as_u64()
                .with_context(|| format!("Entry {} missing index", i))
        })
        .collect()
}

/// Find a rendered field of a card by key, searching every section.
pub fn find_field<'a>(card: &'a Value, key: &str) -> Option<&'a Value> {
    card["sections"]
        .as_array()?
        .iter()
        .filter_map(|section| section["fields"].as_array())
        .flatten()
        .find(|field| field["key"] == key)
}

pub fn assert_badge_level(json: &Value, expected: &str) -> Result<()> {
    let level = json["badge"]["level"]
        .as_str()
        .context("Expected 'badge.level' in JSON")?;
    if level != expected {
        anyhow::bail!("Expected badge level {}, got {}", expected, level);
    }
    Ok(())
}
