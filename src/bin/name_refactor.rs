use clap::Parser;
use toolkit_tools::app::stubs::{run_stub, StubTool};
use toolkit_tools::utils::logger;

#[derive(Parser)]
#[command(name = "name-refactor")]
#[command(about = "Bulk-rename entity identifiers across config files (not implemented yet)")]
#[command(version)]
struct Args {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose, None, logger::LogFormat::Compact);

    run_stub(StubTool::NameRefactor);
    Ok(())
}
