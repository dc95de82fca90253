use log::info;
use std::path::{Path, PathBuf};

use crate::OUTPUT_FILE_NAME;
use crate::error::{ReportError, Result};

/// Path of the output file inside `odir`
pub fn output_path(odir: &Path) -> PathBuf {
    odir.join(OUTPUT_FILE_NAME)
}

/// Write `document` plus a trailing newline to `odir/tests.tex`,
/// replacing any existing file. Returns the path written.
///
/// The output directory is not created.
pub fn write_document(odir: &Path, document: &str) -> Result<PathBuf> {
    let path = output_path(odir);
    let mut content = String::with_capacity(document.len() + 1);
    content.push_str(document);
    content.push('\n');

    std::fs::write(&path, content).map_err(|source| ReportError::OutputWriteError {
        path: path.clone(),
        source,
    })?;
    info!("wrote {}", path.display());
    Ok(path)
}
