//! Optional TOML run configuration.
//!
//! ```toml
//! idir = "build/test-reports"
//! odir = "doc/generated"
//! variant = "timestamped"
//! ```
//!
//! Every key is optional. Command-line flags win over the file.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::types::Variant;

/// Settings as read from a config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    /// Directory holding the XML reports
    pub idir: Option<PathBuf>,
    /// Directory that receives tests.tex
    pub odir: Option<PathBuf>,
    pub variant: Option<Variant>,
}

/// Fully resolved settings for one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSettings {
    pub idir: PathBuf,
    pub odir: PathBuf,
    pub variant: Variant,
}

/// Load a config from a TOML file
pub fn load_config(path: &Path) -> Result<RunConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    parse_config(&content).with_context(|| format!("in config file: {}", path.display()))
}

/// Parse a config from TOML string
pub fn parse_config(toml_str: &str) -> Result<RunConfig> {
    toml::from_str(toml_str).context("failed to parse config TOML")
}

impl RunConfig {
    /// Layer `overrides` (usually from the command line) on top of this
    /// config and fill anything still unset with defaults.
    pub fn resolve(self, overrides: RunConfig) -> RunSettings {
        RunSettings {
            idir: overrides.idir.or(self.idir).unwrap_or_default(),
            odir: overrides.odir.or(self.odir).unwrap_or_default(),
            variant: overrides.variant.or(self.variant).unwrap_or_default(),
        }
    }
}
