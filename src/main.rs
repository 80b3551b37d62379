use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;

use determine_version::cli::{self, RunArgs};
use determine_version::{logging, ui, DetermineVersionError};

#[derive(clap::Parser)]
#[command(
    name = "determine-version",
    about = "Determine a release version from a branch name and emit it as a GitHub Actions output"
)]
struct Args {
    #[arg(short, long, help = "Resolver configuration file (TOML)")]
    config: Option<PathBuf>,

    #[arg(
        value_name = "BRANCH",
        allow_hyphen_values = true,
        help = "Branch name, e.g. v1.2.3 or release/2.0"
    )]
    branches: Vec<String>,
}

fn main() -> Result<()> {
    logging::init_logging(logging::env_filter(logging::DEFAULT_LEVEL));

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.print()?;
            return Ok(());
        }
        Err(e) => {
            tracing::debug!(error = %e, "command line rejected");
            fail(&DetermineVersionError::InvalidArgument);
        }
    };

    let run_args = RunArgs {
        config_path: args.config,
        branches: args.branches,
    };

    let output = match cli::run(&run_args) {
        Ok(output) => output,
        Err(e) => fail(&e),
    };

    ui::emit_output(&output.line).context("Failed to write version output")?;
    Ok(())
}

fn fail(err: &DetermineVersionError) -> ! {
    // stderr is the last resort; nothing left to report a failure to
    let _ = ui::display_error(&err.to_string());
    std::process::exit(1);
}
