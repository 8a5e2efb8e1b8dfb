//! Document writers: turn an [`ExportDocument`] into a file.

use crate::Result;
use schedario_engine::ExportDocument;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Markdown,
    Json,
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Markdown => write!(f, "markdown"),
            ExportFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            "json" => Ok(ExportFormat::Json),
            _ => Err(format!("Unknown export format: {}", s)),
        }
    }
}

/// Consumes an ordered list of labelled text blocks and produces a document.
pub trait DocumentWriter {
    fn extension(&self) -> &'static str;

    fn render(&self, document: &ExportDocument) -> Result<String>;

    /// Write the document into `dir`, named after its sanitized title.
    fn write(&self, document: &ExportDocument, dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(format!("{}.{}", document.file_stem(), self.extension()));
        std::fs::write(&path, self.render(document)?)?;
        tracing::info!(path = %path.display(), "document exported");
        Ok(path)
    }
}

pub fn writer_for(format: ExportFormat) -> Box<dyn DocumentWriter> {
    match format {
        ExportFormat::Markdown => Box::new(MarkdownWriter),
        ExportFormat::Json => Box::new(JsonWriter),
    }
}

pub struct MarkdownWriter;

impl DocumentWriter for MarkdownWriter {
    fn extension(&self) -> &'static str {
        "md"
    }

    fn render(&self, document: &ExportDocument) -> Result<String> {
        let mut out = format!("# {}\n\n", document.title);
        if let Some(subtitle) = &document.subtitle {
            out.push_str(&format!("{}\n\n", subtitle));
        }
        out.push_str(&format!("{}\n\n", document.section_line));

        for block in &document.blocks {
            out.push_str(&format!("## {}\n\n", block.heading));
            for entry in &block.entries {
                let value = entry.value.replace('\n', "  \n");
                out.push_str(&format!("**{}:** {}  \n", entry.label, value));
            }
            out.push('\n');
        }
        Ok(out)
    }
}

pub struct JsonWriter;

impl DocumentWriter for JsonWriter {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn render(&self, document: &ExportDocument) -> Result<String> {
        Ok(serde_json::to_string_pretty(document)?)
    }
}
