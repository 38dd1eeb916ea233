pub mod app_resolver;
pub mod info_operation;
pub mod session;
pub mod tier_operation;
