pub mod config;
pub mod constants;
pub mod format;
pub mod predict;
