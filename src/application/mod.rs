pub mod cli;
pub mod errors;
pub mod features;
pub mod operations;
