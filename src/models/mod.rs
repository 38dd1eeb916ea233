pub mod config;
pub mod heroku;
