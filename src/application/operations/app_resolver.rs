use anyhow::Result;

use crate::application::errors::CommandError;
use crate::utils::git_remote;

/// Where the user pointed us: an explicit app and/or a git remote to inspect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppTarget {
    pub app: Option<String>,
    pub remote: String,
}

/// Picks the app from `--app`/`HEROKU_APP`, then the git remote, then the
/// configured default.
pub fn resolve_app<G>(
    target: &AppTarget,
    default_app: Option<&str>,
    remote_url: G,
) -> Result<String, CommandError>
where
    G: FnOnce(&str) -> Option<String>,
{
    if let Some(app) = target.app.as_deref().map(str::trim).filter(|a| !a.is_empty()) {
        return Ok(app.to_string());
    }

    if let Some(app) =
        remote_url(&target.remote).and_then(|url| git_remote::app_from_git_url(&url))
    {
        return Ok(app);
    }

    default_app
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .map(str::to_string)
        .ok_or(CommandError::NoApp)
}

pub fn resolve_app_from_workdir(target: &AppTarget, default_app: Option<&str>) -> Result<String> {
    let app = resolve_app(target, default_app, git_remote::remote_url)?;
    tracing::debug!(%app, remote = %target.remote, "resolved app");
    Ok(app)
}

#[cfg(test)]
#[path = "../../../tests/application/operations/app_resolver.rs"]
mod tests;
