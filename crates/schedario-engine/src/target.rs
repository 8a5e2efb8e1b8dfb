use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a composed record is going to be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// On-screen card. The only target that truncates.
    Interactive,
    /// Paper card: complete text, HTML-escaped, geometry digest attached.
    Print,
    /// Document handed to a writer: complete plain text.
    Export,
}

impl Target {
    pub fn truncates(&self) -> bool {
        matches!(self, Target::Interactive)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Target::Interactive => "interactive",
            Target::Print => "print",
            Target::Export => "export",
        };
        f.write_str(name)
    }
}
