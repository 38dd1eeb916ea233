use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "https://api.heroku.com";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub url: String,
    pub api_key: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_API_URL.to_string(),
            api_key: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// App used when neither `--app` nor a git remote names one.
    pub default_app: Option<String>,
    pub api: ApiConfig,
}

impl AppConfig {
    /// Applies `HEROKU_API_URL` / `HEROKU_API_KEY` on top of the file values.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(
            std::env::var("HEROKU_API_URL").ok(),
            std::env::var("HEROKU_API_KEY").ok(),
        )
    }

    pub fn with_overrides(mut self, url: Option<String>, api_key: Option<String>) -> Self {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            self.api.url = url;
        }
        if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
            self.api.api_key = Some(key);
        }
        self
    }
}

#[cfg(test)]
#[path = "../../../tests/models/config/app_config.rs"]
mod tests;
