pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::LocalFileSource;
pub use crate::config::toml_config::TomlConfig;
pub use crate::core::{engine::CheckEngine, scanner::PlaceholderScanner};
pub use crate::domain::model::{ScanOutcome, ScanReport};
pub use crate::utils::error::{Result, ToolError};
