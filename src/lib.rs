pub mod application;
pub mod models;
pub mod providers;
pub mod services;
pub mod utils;
