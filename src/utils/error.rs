use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("failed to read `{}`", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file `{}`: {message}", .path.display())]
    ConfigParse { path: PathBuf, message: String },

    #[error("invalid value for `{field}` ({value:?}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl ToolError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Process exit status for this failure. Matches the status clap uses for usage errors.
    pub fn exit_code(&self) -> u8 {
        2
    }
}

pub type Result<T> = std::result::Result<T, ToolError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_io_error_names_the_path() {
        let err = ToolError::io("missing.yaml", io::Error::from(io::ErrorKind::NotFound));
        let message = err.to_string();
        assert_eq!(message, "failed to read `missing.yaml`");
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_invalid_value_message() {
        let err = ToolError::InvalidConfigValue {
            field: "scanner.marker".to_string(),
            value: " ".to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid value for `scanner.marker` (\" \"): Value cannot be empty or whitespace-only"
        );
    }
}
