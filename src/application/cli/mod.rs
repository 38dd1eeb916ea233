pub mod arguments;
pub mod dispatch;
pub mod labels;
