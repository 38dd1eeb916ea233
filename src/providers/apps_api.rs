use anyhow::Result;

use crate::models::heroku::AppRecord;
use crate::providers::heroku::heroku_dtos::{AddonDto, CollaboratorDto, ProcessDto};

/// The slice of the platform API the `apps:*` commands need.
#[allow(async_fn_in_trait)]
pub trait AppsApi {
    async fn get_app(&self, app: &str) -> Result<AppRecord>;

    async fn get_addons(&self, app: &str) -> Result<Vec<AddonDto>>;

    async fn get_collaborators(&self, app: &str) -> Result<Vec<CollaboratorDto>>;

    async fn get_ps(&self, app: &str) -> Result<Vec<ProcessDto>>;

    async fn put_app_tier(&self, app: &str, tier: &str) -> Result<()>;
}
