use log::debug;
use std::path::{Path, PathBuf};

use crate::REPORT_EXTENSION;
use crate::error::{ReportError, Result};

/// List the report files directly inside `dir`.
///
/// Yields every entry that is a regular file (symlinks followed) with a
/// `.xml` extension, in whatever order the directory listing produces.
/// Subdirectories are not descended into.
pub fn find_reports(dir: &Path) -> Result<impl Iterator<Item = Result<PathBuf>>> {
    let entries = std::fs::read_dir(dir).map_err(|source| ReportError::DirectoryNotFound {
        path: dir.to_path_buf(),
        source,
    })?;
    let dir = dir.to_path_buf();

    Ok(entries.filter_map(move |entry| {
        let entry = match entry {
            Ok(entry) => entry,
            Err(source) => {
                return Some(Err(ReportError::Io {
                    path: dir.clone(),
                    source,
                }));
            }
        };
        let path = entry.path();
        if is_report_file(&path) {
            debug!("found report {}", path.display());
            Some(Ok(path))
        } else {
            None
        }
    }))
}

/// True for an existing regular file whose extension is exactly `xml`
pub fn is_report_file(path: &Path) -> bool {
    path.is_file() && path.extension().is_some_and(|ext| ext == REPORT_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn names(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = find_reports(dir)
            .unwrap()
            .map(|p| p.unwrap().file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn only_xml_files_are_reported() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.xml"), "<r/>").unwrap();
        fs::write(dir.path().join("b.xml"), "<r/>").unwrap();
        fs::write(dir.path().join("notes.txt"), "x").unwrap();
        fs::write(dir.path().join("noext"), "x").unwrap();

        assert_eq!(names(dir.path()), vec!["a.xml", "b.xml"]);
    }

    #[test]
    fn extension_match_is_case_sensitive() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("upper.XML"), "<r/>").unwrap();
        fs::write(dir.path().join("lower.xml"), "<r/>").unwrap();

        assert_eq!(names(dir.path()), vec!["lower.xml"]);
    }

    #[test]
    fn directories_named_xml_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("nested.xml")).unwrap();
        fs::write(dir.path().join("nested.xml").join("inner.xml"), "<r/>").unwrap();

        assert!(names(dir.path()).is_empty());
    }

    #[test]
    fn dotfile_named_xml_has_no_extension() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".xml"), "<r/>").unwrap();

        assert!(names(dir.path()).is_empty());
    }

    #[test]
    fn missing_directory_is_directory_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");

        match find_reports(&missing) {
            Err(ReportError::DirectoryNotFound { path, .. }) => assert_eq!(path, missing),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("expected DirectoryNotFound"),
        }
    }

    #[test]
    fn empty_path_is_directory_not_found() {
        assert!(matches!(
            find_reports(Path::new("")),
            Err(ReportError::DirectoryNotFound { .. })
        ));
    }
}
