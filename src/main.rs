use anyhow::Context;
use clap::Parser;
use std::process::ExitCode;
use toolkit_tools::domain::ports::ScanSettings;
use toolkit_tools::utils::{logger, validation::Validate};
use toolkit_tools::{
    CheckEngine, CliConfig, LocalFileSource, PlaceholderScanner, ScanOutcome, ToolError,
    TomlConfig,
};

fn load_config(cli: &CliConfig) -> Result<TomlConfig, ToolError> {
    cli.validate()?;
    let config = match &cli.config {
        Some(path) => TomlConfig::from_file(path)?,
        None => TomlConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

fn run(cli: &CliConfig, config: &TomlConfig) -> anyhow::Result<ScanOutcome> {
    let scanner = PlaceholderScanner::new(LocalFileSource::new(), config)?;
    let engine = CheckEngine::new(scanner);

    let outcome = engine
        .run(&cli.file)
        .with_context(|| format!("could not scan {}", cli.file.display()))?;
    Ok(outcome)
}

fn main() -> ExitCode {
    let cli = CliConfig::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(e.exit_code());
        }
    };

    logger::init_cli_logger(cli.verbose, config.log_level(), config.log_format());
    tracing::debug!("CLI config: {:?}", cli);

    match run(&cli, &config) {
        Ok(outcome) => {
            if let ScanOutcome::PlaceholdersFound { .. } = outcome {
                println!("{}", config.notice());
            }
            ExitCode::from(outcome.exit_code())
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            let code = e
                .downcast_ref::<ToolError>()
                .map(ToolError::exit_code)
                .unwrap_or(2);
            ExitCode::from(code)
        }
    }
}
