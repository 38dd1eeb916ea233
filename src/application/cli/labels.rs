use std::fmt;

use crate::application::cli::arguments::{Commands, ConfigAction};

impl fmt::Display for Commands {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Commands::AppsUpgrade { .. } => write!(f, "apps:upgrade"),
            Commands::AppsDowngrade { .. } => write!(f, "apps:downgrade"),
            Commands::AppsInfo { .. } => write!(f, "apps:info"),
            Commands::Config { action } => write!(f, "{action}"),
        }
    }
}

impl fmt::Display for ConfigAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigAction::Set { .. } => write!(f, "config set"),
            ConfigAction::Get { .. } => write!(f, "config get"),
            ConfigAction::List => write!(f, "config list"),
            ConfigAction::Reset { .. } => write!(f, "config reset"),
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/application/cli/labels.rs"]
mod tests;
