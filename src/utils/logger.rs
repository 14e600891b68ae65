use std::io::IsTerminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Output format for log lines on stderr.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// Log targets of the library and of each binary.
const TARGETS: [&str; 4] = [
    "toolkit_tools",
    "validate_placeholders",
    "model_sync",
    "name_refactor",
];

/// Picks the filter directive: explicit directive first, then the verbosity default.
/// `RUST_LOG` still wins over both when set.
pub fn default_directive(verbose: bool, directive: Option<&str>) -> String {
    match directive {
        Some(d) if !d.trim().is_empty() => d.trim().to_string(),
        _ => {
            let level = if verbose { "debug" } else { "warn" };
            TARGETS
                .iter()
                .map(|target| format!("{}={}", target, level))
                .collect::<Vec<_>>()
                .join(",")
        }
    }
}

pub fn init_cli_logger(verbose: bool, directive: Option<&str>, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, directive)));

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Compact => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(std::io::stderr().is_terminal())
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .compact(),
            )
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .json(),
            )
            .init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(
            default_directive(false, None),
            "toolkit_tools=warn,validate_placeholders=warn,model_sync=warn,name_refactor=warn"
        );
        assert_eq!(
            default_directive(true, None),
            "toolkit_tools=debug,validate_placeholders=debug,model_sync=debug,name_refactor=debug"
        );
        assert_eq!(default_directive(false, Some(" info ")), "info");
        assert_eq!(default_directive(true, Some("")), default_directive(true, None));
    }
}
