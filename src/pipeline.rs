use log::debug;
use std::path::{Path, PathBuf};

use crate::collate::collate;
use crate::config::RunSettings;
use crate::error::Result;
use crate::extract::extract_report;
use crate::latex::{escape, itemize};
use crate::output::write_document;
use crate::scan::find_reports;
use crate::types::{Report, Variant};

/// Scan `idir`, extract every report and render the itemize block.
///
/// Stops at the first bad file; nothing is written here.
pub fn render_document(idir: &Path, variant: Variant) -> Result<String> {
    let mut reports: Vec<Report> = Vec::new();
    for path in find_reports(idir)? {
        reports.push(extract_report(&path?, variant)?);
    }
    debug!("extracted {} report(s) from {}", reports.len(), idir.display());

    let items: Vec<String> = collate(reports, variant)
        .into_iter()
        .map(|d| escape(&d))
        .collect();
    Ok(itemize(&items))
}

/// Run the whole pipeline and return the path of the written file.
///
/// The document is rendered in full before the output file is opened, so a
/// failure leaves any existing tests.tex untouched.
pub fn run(settings: &RunSettings) -> Result<PathBuf> {
    debug!("rendering {} reports", settings.variant);
    let document = render_document(&settings.idir, settings.variant)?;
    write_document(&settings.odir, &document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReportError;

    fn report_xml(description: &str, timestamp: &str) -> String {
        format!(
            r#"<testsuites><testsuite><testcase timestamp="{timestamp}"><properties><property name="description" value="{description}"/></properties></testcase></testsuite></testsuites>"#
        )
    }

    #[test]
    fn render_sorted_and_escaped() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("a.xml"),
            report_xml("Checks login flow", "2024-03-01T10:00:00"),
        )
        .unwrap();
        std::fs::write(
            dir.path().join("b.xml"),
            report_xml("Checks_logout", "2024-02-01T09:00:00"),
        )
        .unwrap();

        let doc = render_document(dir.path(), Variant::Timestamped).unwrap();
        assert_eq!(
            doc,
            "\\begin{itemize}\n\t\\item Checks\\_logout\n\t\\item Checks login flow\n\\end{itemize}\n"
        );
    }

    #[test]
    fn render_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        let doc = render_document(dir.path(), Variant::Basic).unwrap();
        assert_eq!(doc, "\\begin{itemize}\n\\end{itemize}\n");
    }

    #[test]
    fn run_fails_without_writing() {
        let idir = tempfile::tempdir().unwrap();
        let odir = tempfile::tempdir().unwrap();
        std::fs::write(
            idir.path().join("good.xml"),
            report_xml("ok", "2024-01-01T00:00:00"),
        )
        .unwrap();
        std::fs::write(idir.path().join("bad.xml"), "<r/>").unwrap();

        let settings = RunSettings {
            idir: idir.path().to_path_buf(),
            odir: odir.path().to_path_buf(),
            variant: Variant::Basic,
        };
        let err = run(&settings).unwrap_err();
        assert!(matches!(err, ReportError::MalformedReport { .. }));
        assert!(!odir.path().join("tests.tex").exists());
    }
}
