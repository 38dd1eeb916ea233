use anyhow::{Result, anyhow};
use serde_json::Value;
use std::cell::RefCell;

use crate::models::heroku::AppRecord;
use crate::providers::apps_api::AppsApi;
use crate::providers::heroku::heroku_dtos::{AddonDto, CollaboratorDto, ProcessDto};

/// In-memory `AppsApi` that records each call as `"<method> <path>"`.
#[derive(Default)]
pub struct RecordingApi {
    pub app: AppRecord,
    pub addons: Vec<String>,
    pub collaborators: Vec<String>,
    pub process_count: usize,
    pub missing_app: bool,
    pub calls: RefCell<Vec<String>>,
}

impl RecordingApi {
    pub fn with_app(app: Value) -> Self {
        Self {
            app: serde_json::from_value(app).expect("app record fixture"),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

impl AppsApi for RecordingApi {
    async fn get_app(&self, app: &str) -> Result<AppRecord> {
        self.record(format!("GET /apps/{app}"));
        if self.missing_app {
            return Err(anyhow!("App not found."));
        }
        Ok(self.app.clone())
    }

    async fn get_addons(&self, app: &str) -> Result<Vec<AddonDto>> {
        self.record(format!("GET /apps/{app}/addons"));
        Ok(self
            .addons
            .iter()
            .map(|name| AddonDto { name: name.clone() })
            .collect())
    }

    async fn get_collaborators(&self, app: &str) -> Result<Vec<CollaboratorDto>> {
        self.record(format!("GET /apps/{app}/collaborators"));
        Ok(self
            .collaborators
            .iter()
            .map(|email| CollaboratorDto {
                email: email.clone(),
            })
            .collect())
    }

    async fn get_ps(&self, app: &str) -> Result<Vec<ProcessDto>> {
        self.record(format!("GET /apps/{app}/ps"));
        Ok((1..=self.process_count)
            .map(|n| ProcessDto {
                process: format!("web.{n}"),
                state: "up".to_string(),
            })
            .collect())
    }

    async fn put_app_tier(&self, app: &str, tier: &str) -> Result<()> {
        self.record(format!("PUT /apps/{app} tier={tier}"));
        Ok(())
    }
}
