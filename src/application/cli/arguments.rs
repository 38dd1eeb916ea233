use clap::{ArgAction, Parser, Subcommand};

use crate::application::operations::app_resolver::AppTarget;

const TIER_HELP: &str = "\
App Tiers:
  Dev:         Always free. Idles after 1 hour.
  Basic:       Custom domains. Never idles. 1 dyno per process. $0.025 per dyno hour
  Production:  Scale processes past 1 dyno. Unlimited support. $0.05 per dyno hour

Example:
  $ heroku apps:upgrade basic
  App upgraded to Basic ($0.025 per dyno hour)
  Total dyno cost: $0.075 per hour (3*0.025)";

#[derive(Parser)]
#[command(name = "heroku")]
#[command(version, about = "Inspect apps and manage their service tier")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// App to run the command against
    #[arg(short, long, global = true, env = "HEROKU_APP")]
    pub app: Option<String>,

    /// Git remote used to find the app when --app is not given
    #[arg(short, long, global = true, default_value = "heroku")]
    pub remote: String,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn target(&self) -> AppTarget {
        AppTarget {
            app: self.app.clone(),
            remote: self.remote.clone(),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Upgrade app to Basic or Production tier
    #[command(name = "apps:upgrade", after_help = TIER_HELP)]
    AppsUpgrade {
        /// Tier to move the app to (dev, basic, production)
        tier: Option<String>,
    },
    /// Downgrade app to Dev or Basic tier
    #[command(name = "apps:downgrade", after_help = TIER_HELP)]
    AppsDowngrade {
        /// Tier to move the app to (dev, basic, production)
        tier: Option<String>,
    },
    /// Show detailed app information
    #[command(name = "apps:info")]
    AppsInfo {
        /// Output more shell friendly key/value pairs
        #[arg(short, long, default_value_t = false)]
        shell: bool,
    },
    /// Manage local configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Set one or more configuration values (format: key.path=value)
    Set {
        /// Configuration keys to set (e.g., "api.api_key=abc123")
        #[arg(required = true)]
        keys: Vec<String>,
    },
    /// Get one or more configuration values (format: key.path)
    Get {
        /// Configuration keys to retrieve (e.g., "api.url")
        #[arg(required = true)]
        keys: Vec<String>,
    },
    /// List all configuration keys and values
    List,
    /// Reset configuration to defaults
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long, default_value_t = false)]
        yes: bool,
    },
}

#[cfg(test)]
#[path = "../../../tests/application/cli/arguments.rs"]
mod tests;
