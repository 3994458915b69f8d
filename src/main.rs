use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use gamestage::{StageContext, pipeline};
use std::io;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "gstage",
    version = gamestage::VERSION,
    about = "Stage game directories and run their builds",
    long_about = "Scans a source directory for game subdirectories, copies each into a \
                  target directory under a cleaned-up name, compiles the first source \
                  file found in each copy, and writes a metadata.json manifest"
)]
struct Cli {
    /// Directory scanned for game subdirectories
    source_dir: PathBuf,

    /// Directory staged copies and the manifest are written to
    target_dir: PathBuf,

    /// Path to the configuration file
    #[arg(long, env = "GAMESTAGE_CONFIG_PATH", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = StageContext::new(&cli.source_dir, &cli.target_dir, cli.config.as_deref())?;
    pipeline::execute(&ctx)
}

/// Diagnostics go to stderr so they never mix with build output relayed on
/// stdout. `RUST_LOG` overrides the verbosity chosen by `--verbose`.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "gamestage=debug"
    } else {
        "gamestage=warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();
}
