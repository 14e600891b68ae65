pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;
#[cfg(feature = "cli")]
use crate::utils::{error::Result, validation::{validate_path, Validate}};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "validate-placeholders")]
#[command(about = "Fail when a file still contains unresolved <REPLACE_ME placeholders")]
#[command(version)]
pub struct CliConfig {
    /// File to scan
    pub file: PathBuf,

    /// Optional TOML file overriding the marker and notice text
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output (debug logs on stderr)
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("file", &self.file.to_string_lossy())?;
        if let Some(config) = &self.config {
            validate_path("config", &config.to_string_lossy())?;
        }
        Ok(())
    }
}
