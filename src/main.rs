use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod descriptor;
mod error;
mod generator;
mod manifest;
mod version;

use generator::AutogenCommand;

#[derive(Parser, Debug)]
#[command(
    name = "kdautogen",
    version,
    about = "Scaffolding generation driver for the KDTools distribution",
    after_help = "The generation request is embedded in the driver; no flag changes it.\n\
                  Set AUTOGEN to override the generator command (default: autogen on PATH).\n\
                  Exits 0 on successful handoff, non-zero on validation or generator failure."
)]
struct Cli {
    /// Emit a verbose transcript of the handoff
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let descriptor = manifest::descriptor()?;
    let autogen = AutogenCommand::from_env()?;
    generator::run(&descriptor, &autogen)?;
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
