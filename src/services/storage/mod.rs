pub mod config_storage;
