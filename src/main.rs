//! Repolab CLI - generate a JupyterLab container build for a repository

use clap::Parser;
use repolab::cli::Args;
use repolab::{format_output, generate};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        println!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> repolab::Result<()> {
    let report = generate(&args.generate_options())?;
    println!("{}", format_output(&report, &args.output_format()).trim_end());
    Ok(())
}
