pub mod app_record;
pub mod display_model;
pub mod tier;

pub use app_record::AppRecord;
pub use display_model::{DisplayModel, FieldValue};
pub use tier::{Tier, TierChange};
