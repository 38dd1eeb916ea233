pub mod heroku_client;
pub mod heroku_dtos;

pub use heroku_client::HerokuClient;
