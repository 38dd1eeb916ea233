use anyhow::{Context, Result};
use reqwest::{Client, RequestBuilder, header};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::models::heroku::AppRecord;
use crate::providers::apps_api::AppsApi;
use crate::providers::heroku::heroku_dtos::{
    AddonDto, CollaboratorDto, ProcessDto, TierUpdateRequest,
};

#[derive(Debug, Clone)]
pub struct HerokuClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl HerokuClient {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self> {
        let mut headers = header::HeaderMap::new();

        let user_agent = format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_str(&user_agent)
                .context("Failed to create user agent header")?,
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request.basic_auth("", Some(&self.api_key))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        tracing::debug!(method = "GET", %path, "api request");

        let response = self
            .authorized(self.client.get(&url))
            .send()
            .await
            .context(format!("Failed to send request to {}", url))?;

        response
            .error_for_status_ref()
            .context(format!("Heroku API returned error for {}", url))?;

        let data = response
            .json::<T>()
            .await
            .context("Failed to parse JSON response")?;

        Ok(data)
    }

    async fn put_json<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        let url = self.url(path);
        tracing::debug!(method = "PUT", %path, "api request");

        let response = self
            .authorized(self.client.put(&url))
            .json(body)
            .send()
            .await
            .context(format!("Failed to send request to {}", url))?;

        response
            .error_for_status_ref()
            .context(format!("Heroku API returned error for {}", url))?;

        Ok(())
    }
}

impl AppsApi for HerokuClient {
    async fn get_app(&self, app: &str) -> Result<AppRecord> {
        self.get_json(&format!("/apps/{}", app))
            .await
            .context(format!("Failed to get app {}", app))
    }

    async fn get_addons(&self, app: &str) -> Result<Vec<AddonDto>> {
        self.get_json(&format!("/apps/{}/addons", app))
            .await
            .context(format!("Failed to get addons for {}", app))
    }

    async fn get_collaborators(&self, app: &str) -> Result<Vec<CollaboratorDto>> {
        self.get_json(&format!("/apps/{}/collaborators", app))
            .await
            .context(format!("Failed to get collaborators for {}", app))
    }

    async fn get_ps(&self, app: &str) -> Result<Vec<ProcessDto>> {
        self.get_json(&format!("/apps/{}/ps", app))
            .await
            .context(format!("Failed to get processes for {}", app))
    }

    async fn put_app_tier(&self, app: &str, tier: &str) -> Result<()> {
        self.put_json(&format!("/apps/{}", app), &TierUpdateRequest::new(tier))
            .await
            .context(format!("Failed to update tier for {}", app))
    }
}

#[cfg(test)]
#[path = "../../../tests/providers/heroku/heroku_client.rs"]
mod tests;
