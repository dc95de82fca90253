use clap::Parser;
use std::path::PathBuf;

use crate::config::RunConfig;
use crate::types::Variant;

#[derive(Parser)]
#[command(name = "testdoc", version)]
#[command(about = "Render test report descriptions as a LaTeX itemize block")]
pub struct Cli {
    /// Directory containing the XML test reports
    #[arg(short = 'i', long = "idir")]
    pub idir: Option<PathBuf>,
    /// Directory to write tests.tex into (must exist)
    #[arg(short = 'o', long = "odir")]
    pub odir: Option<PathBuf>,
    /// Report shape: description only, or description plus timestamp (sorted)
    #[arg(long, value_enum)]
    pub variant: Option<Variant>,
    /// TOML file providing defaults for idir, odir and variant
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,
    /// Log each report as it is processed
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// The settings given on the command line, as a config layer
    pub fn overrides(&self) -> RunConfig {
        RunConfig {
            idir: self.idir.clone(),
            odir: self.odir.clone(),
            variant: self.variant,
        }
    }
}
