use anyhow::{Context, Result, anyhow, bail};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::config::AppConfig;

pub struct ConfigStorage {
    config: AppConfig,
    config_file: PathBuf,
}

impl ConfigStorage {
    pub fn new(config_file: &Path) -> Result<Self> {
        let mut storage = Self {
            config: AppConfig::default(),
            config_file: config_file.to_path_buf(),
        };

        storage.load_config()?;
        Ok(storage)
    }

    /// Loads config.toml, writing the defaults first if it doesn't exist.
    pub fn load_config(&mut self) -> Result<()> {
        if !self.config_file.exists() {
            return self.save_config();
        }

        let toml_str = fs::read_to_string(&self.config_file)
            .context(format!("Failed to read config from {}", self.config_file.display()))?;

        self.config = toml::from_str(&toml_str)
            .context(format!("Invalid config file {}", self.config_file.display()))?;
        tracing::debug!(path = %self.config_file.display(), "loaded config");
        Ok(())
    }

    pub fn save_config(&self) -> Result<()> {
        if let Some(parent) = self.config_file.parent() {
            fs::create_dir_all(parent)
                .context(format!("Failed to create {}", parent.display()))?;
        }

        let toml = toml::to_string_pretty(&self.config).context("Failed to serialize config")?;
        fs::write(&self.config_file, toml)
            .context(format!("Failed to save config to {}", self.config_file.display()))?;

        Ok(())
    }

    pub fn get_config(&self) -> &AppConfig {
        &self.config
    }

    /// Sets `key.path` to `value` and saves. Values that parse as TOML
    /// literals keep their type; anything else is stored as a string.
    pub fn set_value(&mut self, key_path: &str, value: &str) -> Result<()> {
        let keys: Vec<&str> = key_path.split('.').map(str::trim).collect();
        if keys.iter().any(|k| k.is_empty()) {
            bail!("Invalid key path '{}'", key_path);
        }

        // "12345" is a valid TOML integer but may be meant as a string setting.
        self.config = self
            .with_value(&keys, parse_value(value))
            .or_else(|_| self.with_value(&keys, toml::Value::String(value.to_string())))
            .context(format!("Invalid value for '{}'", key_path))?;
        self.save_config()
    }

    fn with_value(&self, keys: &[&str], value: toml::Value) -> Result<AppConfig> {
        let mut root = toml::Value::try_from(&self.config).context("Failed to serialize config")?;

        let (final_key, parents) = keys
            .split_last()
            .ok_or_else(|| anyhow!("Empty key path"))?;
        let mut table = root
            .as_table_mut()
            .ok_or_else(|| anyhow!("Config root is not a table"))?;
        for key in parents {
            table = table
                .get_mut(*key)
                .and_then(toml::Value::as_table_mut)
                .ok_or_else(|| anyhow!("Unknown config section '{}'", key))?;
        }

        table.insert(final_key.to_string(), value);
        Ok(root.try_into()?)
    }

    /// Current value at `key.path` rendered as text.
    pub fn get_value(&self, key_path: &str) -> Result<String> {
        self.get_flattened_config()
            .remove(key_path)
            .ok_or_else(|| anyhow!("Key path not found: {}", key_path))
    }

    /// All scalar settings as dotted paths, sorted.
    pub fn get_flattened_config(&self) -> BTreeMap<String, String> {
        let mut result = BTreeMap::new();
        if let Ok(root) = toml::Value::try_from(&self.config) {
            flatten_value(&root, "", &mut result);
        }
        result
    }

    pub fn reset_to_defaults(&mut self) -> Result<()> {
        self.config = AppConfig::default();
        self.save_config()
    }
}

fn parse_value(value: &str) -> toml::Value {
    value
        .parse::<toml::Value>()
        .ok()
        .filter(|parsed| !parsed.is_table())
        .unwrap_or_else(|| toml::Value::String(value.to_string()))
}

fn flatten_value(value: &toml::Value, prefix: &str, out: &mut BTreeMap<String, String>) {
    match value {
        toml::Value::Table(table) => {
            for (key, child) in table {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten_value(child, &path, out);
            }
        }
        toml::Value::String(s) => {
            out.insert(prefix.to_string(), s.clone());
        }
        other => {
            out.insert(prefix.to_string(), other.to_string());
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/services/storage/config_storage.rs"]
mod tests;
