use crate::types::DatasetArg;
use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use schedario_runtime::{Catalog, Config, expand_tilde, load_catalog_blocking, resolve_data_dir};
use schedario_types::DatasetKey;
use std::path::{Path, PathBuf};

/// Lazily resolved configuration and catalog shared by the handlers.
pub struct ExecutionContext {
    data_dir: PathBuf,
    config_path: PathBuf,
    config: OnceCell<Config>,
    catalog: OnceCell<Catalog>,
}

impl ExecutionContext {
    pub fn new(data_dir: Option<&str>, config_path: Option<&str>) -> Result<Self> {
        let data_dir = resolve_data_dir(data_dir).context("Failed to resolve the data directory")?;
        let config_path = config_path
            .map(expand_tilde)
            .unwrap_or_else(|| Config::default_path(&data_dir));

        Ok(Self {
            data_dir,
            config_path,
            config: OnceCell::new(),
            catalog: OnceCell::new(),
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config(&self) -> Result<&Config> {
        self.config.get_or_try_init(|| {
            let path = self.config_path.display();
            Config::load_from(&self.config_path)
                .with_context(|| format!("Failed to load config from {}", path))
        })
    }

    /// Load every input once; unavailable inputs are recorded, not raised.
    pub fn catalog(&self) -> Result<&Catalog> {
        self.catalog.get_or_try_init(|| {
            let sources = self.config()?.sources.resolve(&self.data_dir);
            tracing::debug!(data_dir = %self.data_dir.display(), "loading datasets");
            load_catalog_blocking(&sources).context("Failed to start the dataset loader")
        })
    }

    pub fn dataset(&self, arg: Option<DatasetArg>) -> Result<DatasetKey> {
        match arg {
            Some(arg) => Ok(arg.into()),
            None => Ok(self.config()?.default_dataset),
        }
    }

    /// Explicit directory, else the configured one, else the working directory.
    pub fn export_dir(&self, explicit: Option<PathBuf>) -> Result<PathBuf> {
        if let Some(dir) = explicit {
            return Ok(dir);
        }
        Ok(self
            .config()?
            .export
            .output_dir
            .as_deref()
            .map(|dir| expand_tilde(&dir.to_string_lossy()))
            .unwrap_or_else(|| PathBuf::from(".")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_config_uses_defaults() -> Result<()> {
        let dir = TempDir::new()?;
        let ctx = ExecutionContext::new(dir.path().to_str(), None)?;

        assert_eq!(ctx.config()?.default_dataset, DatasetKey::Mopr);
        assert_eq!(ctx.dataset(Some(DatasetArg::Mosi))?, DatasetKey::Mosi);
        assert_eq!(ctx.export_dir(None)?, PathBuf::from("."));
        Ok(())
    }

    #[test]
    fn test_config_file_overrides_dataset_and_export_dir() -> Result<()> {
        let dir = TempDir::new()?;
        std::fs::write(
            dir.path().join("config.toml"),
            "default_dataset = \"ricognizioni\"\n\n[export]\noutput_dir = \"/tmp/schede\"\n",
        )?;
        let ctx = ExecutionContext::new(dir.path().to_str(), None)?;

        assert_eq!(ctx.dataset(None)?, DatasetKey::Ricognizioni);
        assert_eq!(ctx.export_dir(None)?, PathBuf::from("/tmp/schede"));
        Ok(())
    }
}
