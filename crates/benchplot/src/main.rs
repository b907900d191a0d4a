// File: crates/benchplot/src/main.rs
// Summary: Entry point; sets up logging, parses the command line and runs the pipeline.

use std::process;

use benchplot::{Cli, RunConfig};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose > 0 { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let cfg = RunConfig::from(cli);
    if let Err(err) = benchplot::run(&cfg) {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}
