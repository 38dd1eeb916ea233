use anyhow::Result;

use crate::application::cli::arguments::{Cli, Commands, ConfigAction};
use crate::application::features;
use crate::models::heroku::TierChange;

impl Cli {
    pub async fn run(self) -> Result<()> {
        tracing::debug!(command = %self.command, "dispatching");
        let target = self.target();

        match self.command {
            Commands::AppsUpgrade { tier } => {
                features::tier::run(&target, tier, TierChange::Upgrade).await
            }

            Commands::AppsDowngrade { tier } => {
                features::tier::run(&target, tier, TierChange::Downgrade).await
            }

            Commands::AppsInfo { shell } => features::info::run(&target, shell).await,

            Commands::Config { action } => match action {
                ConfigAction::Set { keys } => features::config::run_set(keys),
                ConfigAction::Get { keys } => features::config::run_get(keys),
                ConfigAction::List => features::config::run_list(),
                ConfigAction::Reset { yes } => features::config::run_reset(yes),
            },
        }
    }
}
