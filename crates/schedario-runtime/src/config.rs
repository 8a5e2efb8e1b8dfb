use crate::writers::ExportFormat;
use crate::{Error, Result};
use schedario_types::DatasetKey;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Resolve the data directory based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. SCHEDARIO_PATH environment variable (with tilde expansion)
/// 3. XDG data directory
/// 4. ~/.schedario (fallback for systems without XDG)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("SCHEDARIO_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("schedario"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".schedario"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// File names of the five inputs, relative to the data directory unless absolute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sources {
    pub mosi: PathBuf,
    pub mopr: PathBuf,
    pub survey: PathBuf,
    pub survey_units: PathBuf,
    pub correction_notes: PathBuf,
}

impl Default for Sources {
    fn default() -> Self {
        Self {
            mosi: PathBuf::from("mosi.geojson"),
            mopr: PathBuf::from("mopr.geojson"),
            survey: PathBuf::from("rcg.geojson"),
            survey_units: PathBuf::from("d_rcg.geojson"),
            correction_notes: PathBuf::from("correzioni.html"),
        }
    }
}

impl Sources {
    pub fn resolve(&self, data_dir: &Path) -> Self {
        let join = |p: &PathBuf| {
            if p.is_absolute() {
                p.clone()
            } else {
                data_dir.join(p)
            }
        };
        Self {
            mosi: join(&self.mosi),
            mopr: join(&self.mopr),
            survey: join(&self.survey),
            survey_units: join(&self.survey_units),
            correction_notes: join(&self.correction_notes),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub format: ExportFormat,
    pub output_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub default_dataset: DatasetKey,
    pub sources: Sources,
    pub export: ExportConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_dataset: DatasetKey::Mopr,
            sources: Sources::default(),
            export: ExportConfig::default(),
        }
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn default_path(data_dir: &Path) -> PathBuf {
        data_dir.join("config.toml")
    }
}
