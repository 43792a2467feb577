mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "promptproof",
    version,
    about = "Regression-testing harness for LLM outputs"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run tests under a path
    Run {
        /// Path to the tests
        path: PathBuf,
        /// Rewrite snapshot baselines instead of verifying them
        #[arg(long)]
        update: bool,
        /// Verbose output
        #[arg(long, short)]
        verbose: bool,
        /// Only run the named suite
        #[arg(long)]
        suite: Option<String>,
    },
    /// Render a persisted metrics report
    Metrics {
        /// Metrics JSON file
        file: PathBuf,
    },
    /// Initialize a test directory
    Init {
        /// Directory to initialize
        #[arg(long, default_value = ".")]
        path: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Run {
            path,
            update,
            verbose,
            suite,
        } => commands::run(&path, update, verbose, suite.as_deref()),
        Command::Metrics { file } => commands::metrics(&file),
        Command::Init { path } => commands::init(&path),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
