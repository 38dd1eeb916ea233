pub mod console_colors;
pub mod formatting;
pub mod git_remote;
pub mod logging;
pub mod static_paths;
