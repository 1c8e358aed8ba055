use std::fs;
use std::path::Path;

use tracing::{info, instrument, warn};

use crate::calculate::sales::error::{Result, SalesError};
use crate::calculate::sales::model::RecordFile;

/// Lists the entries in `dir` named `<8 numerals>.rcd`, sorted by name.
///
/// Only the name is checked. An entry that matches but cannot be read as a
/// file fails later, when its contents are aggregated.
#[instrument(level = "info", skip_all, fields(dir = %dir.display()))]
pub fn select_record_files(dir: &Path) -> Result<Vec<RecordFile>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        if let Some(file) = RecordFile::from_path(&entry?.path()) {
            files.push(file);
        }
    }

    files.sort_by(|lhs, rhs| lhs.file_name().cmp(rhs.file_name()));
    info!(file_count = files.len(), "selected record files");
    Ok(files)
}

/// Checks that consecutive files are numbered exactly one apart.
pub fn ensure_sequential(files: &[RecordFile]) -> Result<()> {
    for pair in files.windows(2) {
        let (previous, next) = (&pair[0], &pair[1]);
        if previous.sequence().checked_add(1) != Some(next.sequence()) {
            warn!(
                previous = previous.file_name(),
                next = next.file_name(),
                "record files are not sequential"
            );
            return Err(SalesError::NonSequentialFiles {
                previous: previous.file_name().to_string(),
                next: next.file_name().to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculate::sales::ErrorKind;

    fn records(names: &[&str]) -> Vec<RecordFile> {
        names
            .iter()
            .map(|name| RecordFile::from_path(Path::new(name)).expect("record file"))
            .collect()
    }

    #[test]
    fn contiguous_sequence_passes() {
        let files = records(&["00000001.rcd", "00000002.rcd", "00000003.rcd"]);
        assert!(ensure_sequential(&files).is_ok());
    }

    #[test]
    fn empty_and_single_sequences_pass() {
        assert!(ensure_sequential(&[]).is_ok());
        assert!(ensure_sequential(&records(&["00000007.rcd"])).is_ok());
    }

    #[test]
    fn gap_fails() {
        let files = records(&["00000001.rcd", "00000003.rcd"]);
        let error = ensure_sequential(&files).expect_err("gap");
        assert_eq!(error.kind(), ErrorKind::NonSequentialFiles);
    }

    #[test]
    fn duplicate_and_descending_fail() {
        let duplicate = records(&["00000001.rcd", "00000001.rcd"]);
        assert!(ensure_sequential(&duplicate).is_err());

        let descending = records(&["00000002.rcd", "00000001.rcd"]);
        assert!(ensure_sequential(&descending).is_err());
    }

    #[test]
    fn selects_only_matching_files_in_order() {
        let dir = tempfile::tempdir().expect("temporary directory");
        for name in ["00000002.rcd", "00000001.rcd", "notes.txt", "0000003.rcd", "branch.lst"] {
            fs::write(dir.path().join(name), "").expect("written");
        }
        fs::create_dir(dir.path().join("archive")).expect("directory created");

        let files = select_record_files(dir.path()).expect("selected");
        let names: Vec<&str> = files.iter().map(RecordFile::file_name).collect();
        assert_eq!(names, ["00000001.rcd", "00000002.rcd"]);
    }

    #[test]
    fn missing_directory_is_an_unknown_error() {
        let dir = tempfile::tempdir().expect("temporary directory");
        let error = select_record_files(&dir.path().join("absent")).expect_err("missing");
        assert_eq!(error.kind(), ErrorKind::UnknownError);
    }
}
