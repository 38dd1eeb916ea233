use anyhow::Result;

use crate::application::errors::CommandError;
use crate::application::operations::app_resolver::{AppTarget, resolve_app_from_workdir};
use crate::providers::heroku::HerokuClient;
use crate::services::storage::config_storage::ConfigStorage;
use crate::utils::static_paths::ConfigPaths;

/// Authenticated client plus the app a command operates on.
pub struct Session {
    pub app: String,
    pub client: HerokuClient,
}

impl Session {
    pub fn open(target: &AppTarget) -> Result<Self> {
        let paths = ConfigPaths::new()?;
        let storage = ConfigStorage::new(&paths.config_file)?;
        let config = storage.get_config().clone().with_env_overrides();

        let api_key = config.api.api_key.as_deref().ok_or(CommandError::NotLoggedIn)?;
        let app = resolve_app_from_workdir(target, config.default_app.as_deref())?;
        let client = HerokuClient::new(&config.api.url, api_key)?;

        Ok(Self { app, client })
    }
}
