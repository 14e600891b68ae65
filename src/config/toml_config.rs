use crate::domain::model::{DEFAULT_MARKER, DEFAULT_NOTICE};
use crate::domain::ports::ScanSettings;
use crate::utils::error::{Result, ToolError};
use crate::utils::logger::LogFormat;
use crate::utils::validation::{validate_non_empty_string, validate_one_of, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

const LOG_FORMATS: [&str; 2] = ["compact", "json"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub scanner: ScannerConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    pub marker: String,
    pub notice: String,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            notice: DEFAULT_NOTICE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `toolkit_tools=debug`
    pub level: Option<String>,
    pub format: Option<String>,
}

impl TomlConfig {
    /// Loads a config file. A missing or unreadable file is an error.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ToolError::io(path, e))?;
        Self::parse(&content, path)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::parse(content, Path::new("<inline>"))
    }

    fn parse(content: &str, origin: &Path) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content, origin)?;

        toml::from_str(&processed_content).map_err(|e| ToolError::ConfigParse {
            path: origin.to_path_buf(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Expands `${VAR}` from the environment. Unknown variables are kept verbatim.
    fn substitute_env_vars(content: &str, origin: &Path) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ToolError::ConfigParse {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn log_format(&self) -> LogFormat {
        match self.logging.as_ref().and_then(|l| l.format.as_deref()) {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Compact,
        }
    }
}

impl ScanSettings for TomlConfig {
    fn marker(&self) -> &str {
        &self.scanner.marker
    }

    fn notice(&self) -> &str {
        &self.scanner.notice
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("scanner.marker", &self.scanner.marker)?;
        validate_non_empty_string("scanner.notice", &self.scanner.notice)?;

        if let Some(format) = self.logging.as_ref().and_then(|l| l.format.as_deref()) {
            validate_one_of("logging.format", format, &LOG_FORMATS)?;
        }

        Ok(())
    }
}
