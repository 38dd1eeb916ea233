pub mod apps_api;
pub mod heroku;

#[cfg(test)]
pub(crate) mod recording_api;
