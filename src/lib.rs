pub mod cli;
pub mod collate;
pub mod config;
pub mod error;
pub mod extract;
pub mod latex;
pub mod output;
pub mod pipeline;
pub mod scan;
pub mod types;

/// Extension (without the dot) a file needs to be read as a report
pub const REPORT_EXTENSION: &str = "xml";

/// Name of the file written into the output directory
pub const OUTPUT_FILE_NAME: &str = "tests.tex";
