use clap::{Parser, Subcommand};
use sheetforge::cli;
use sheetforge::error::SheetResult;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sheetforge")]
#[command(about = "Clone a template sheet and fill it with values from another workbook.")]
#[command(long_about = "SheetForge - template-sheet duplication and range transfer

Duplicates a template sheet inside the output workbook, pastes a block of
values from the source workbook at a paste anchor, deletes the rows below
the pasted block, resizes rows to fit embedded line breaks, and hides
gridlines.

COMMANDS:
  run    - Execute the transfer described by a YAML config file
  check  - Validate a config file and its documents without writing

EXAMPLES:
  sheetforge run transfer.yaml
  sheetforge run transfer.yaml --verbose
  sheetforge check transfer.yaml

Logging: set RUST_LOG (e.g. RUST_LOG=sheetforge=debug) for step-level logs.")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Execute the transfer described by a YAML config file.

The config names the source and output workbooks, the template/value/output
sheets, the copy range (e.g. C12:E19), the paste anchor (e.g. B15) and the
row-height settings. The output workbook is rewritten in place; any failure
before the final save leaves it untouched.")]
    /// Execute the transfer described by a config file
    Run {
        /// Path to YAML config file
        config: PathBuf,

        /// Show configuration details before running
        #[arg(short, long)]
        verbose: bool,
    },

    #[command(long_about = "Validate a config file without writing anything.

Parses the config, the copy range and the paste anchor, opens both
workbooks, and verifies the value sheet and the template sheet exist.")]
    /// Validate a config file and its documents without writing
    Check {
        /// Path to YAML config file
        config: PathBuf,
    },
}

fn main() -> SheetResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("sheetforge=warn")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { config, verbose } => cli::run(config, verbose),
        Commands::Check { config } => cli::check(config),
    }
}
