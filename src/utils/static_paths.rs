use anyhow::{Result, anyhow};
use std::path::{Path, PathBuf};

const APP_DIR_NAME: &str = "heroku-apps";

/// Paths to configuration files
pub struct ConfigPaths {
    pub config_dir: PathBuf,
    pub config_file: PathBuf,
}

impl ConfigPaths {
    pub fn new() -> Result<Self> {
        let base = dirs::config_dir()
            .ok_or_else(|| anyhow!("Unable to determine the user configuration directory"))?;
        Ok(Self::under(&base))
    }

    pub fn under(base: &Path) -> Self {
        let config_dir = base.join(APP_DIR_NAME);
        Self {
            config_file: config_dir.join("config.toml"),
            config_dir,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/utils/static_paths.rs"]
mod tests;
