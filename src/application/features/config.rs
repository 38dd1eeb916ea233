use anyhow::{Result, anyhow};
use std::io::{self, Write};

use crate::{
    services::storage::config_storage::ConfigStorage,
    utils::{console_colors::ConsoleColors, static_paths::ConfigPaths},
};

const SECRET_KEYS: [&str; 1] = ["api.api_key"];

fn open_storage() -> Result<ConfigStorage> {
    let paths = ConfigPaths::new()?;
    ConfigStorage::new(&paths.config_file)
}

/// Hides all but the last four characters of secret settings.
pub fn display_value(key: &str, value: &str) -> String {
    if !SECRET_KEYS.contains(&key) {
        return value.to_string();
    }
    let visible: String = value
        .chars()
        .rev()
        .take(4)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    format!("********{visible}")
}

pub fn parse_assignment(raw: &str) -> Result<(&str, &str)> {
    raw.split_once('=')
        .map(|(key, value)| (key.trim(), value.trim()))
        .filter(|(key, _)| !key.is_empty())
        .ok_or_else(|| anyhow!("Invalid assignment '{}' (expected key.path=value)", raw))
}

pub fn run_set(set_keys: Vec<String>) -> Result<()> {
    let mut config_storage = open_storage()?;

    for raw in &set_keys {
        let (key, value) = parse_assignment(raw)?;
        config_storage.set_value(key, value)?;
        println!("{} = {}", key, display_value(key, value));
    }

    ConsoleColors::write_success("Configuration saved!");
    Ok(())
}

pub fn run_get(get_keys: Vec<String>) -> Result<()> {
    let config_storage = open_storage()?;

    for key in &get_keys {
        let value = config_storage.get_value(key)?;
        if get_keys.len() > 1 {
            println!("{} = {}", key, display_value(key, &value));
        } else {
            println!("{}", display_value(key, &value));
        }
    }

    Ok(())
}

pub fn run_list() -> Result<()> {
    let config_storage = open_storage()?;
    let flattened = config_storage.get_flattened_config();

    if flattened.is_empty() {
        println!("No configuration found");
        return Ok(());
    }

    for (key, value) in &flattened {
        println!("{} = {}", key, display_value(key, value));
    }

    Ok(())
}

pub fn run_reset(skip_prompt: bool) -> Result<()> {
    let mut config_storage = open_storage()?;

    if !skip_prompt {
        print!("Are you sure you want to reset all configuration to defaults? (y/N): ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        if input.trim().to_lowercase() != "y" {
            ConsoleColors::write_warning("Reset cancelled");
            return Ok(());
        }
    }

    config_storage.reset_to_defaults()?;
    ConsoleColors::write_success("Configuration reset to defaults!");
    Ok(())
}

#[cfg(test)]
#[path = "../../../tests/application/features/config.rs"]
mod tests;
