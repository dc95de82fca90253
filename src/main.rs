use anyhow::Result;
use clap::Parser;
use log::LevelFilter;
use std::process::ExitCode;

use testdoc::cli::Cli;
use testdoc::config::{RunConfig, load_config};
use testdoc::pipeline;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => RunConfig::default(),
    };
    let settings = config.resolve(cli.overrides());

    println!("Input file is {}", settings.idir.display());
    println!("Output file is {}", settings.odir.display());

    pipeline::run(&settings)?;

    Ok(ExitCode::SUCCESS)
}
