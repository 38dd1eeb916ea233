use thiserror::Error;

/// Failures raised by the commands themselves, before or instead of an API call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("{0}")]
    Usage(String),

    #[error(
        "No app specified.\nRun this command from an app folder or specify which app to use with --app APP."
    )]
    NoApp,

    #[error("Not logged in. Set HEROKU_API_KEY or run `heroku config set api.api_key=<key>`.")]
    NotLoggedIn,
}
