use std::fs;
use std::path::Path;

use tracing::{info, instrument, warn};

use crate::calculate::sales::error::{Result, SalesError};
use crate::calculate::sales::model::{BranchCode, BranchRegistry};
use crate::calculate::sales::{BRANCH_LIST_FILE, FIELD_DELIMITER};

/// Loads `branch.lst` from `dir` into a registry with every total at zero.
#[instrument(level = "info", skip_all, fields(dir = %dir.display()))]
pub fn load_registry(dir: &Path) -> Result<BranchRegistry> {
    let path = dir.join(BRANCH_LIST_FILE);
    if !path.exists() {
        warn!(path = %path.display(), "branch definition file not found");
        return Err(SalesError::MissingFile(path));
    }

    let source = fs::read_to_string(&path)?;
    let registry = parse_branch_list(&source)?;
    info!(branch_count = registry.len(), "loaded branch definitions");
    Ok(registry)
}

/// Parses `code,name` lines. Blank lines are skipped and a repeated code
/// keeps the last name seen. Empty trailing fields are ignored, so
/// `001,Tokyo,` is accepted and `001,` is not.
pub fn parse_branch_list(source: &str) -> Result<BranchRegistry> {
    let mut registry = BranchRegistry::new();

    for (index, line) in source.lines().enumerate() {
        if line.is_empty() {
            continue;
        }

        let mut fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
        while fields.last() == Some(&"") {
            fields.pop();
        }
        let code = match fields.as_slice() {
            [code, _] => BranchCode::parse(code),
            _ => None,
        };
        let Some(code) = code else {
            warn!(line = index + 1, content = line, "malformed branch definition");
            return Err(SalesError::InvalidFormat {
                line: index + 1,
                content: line.to_string(),
            });
        };

        registry.insert(code, fields[1]);
    }

    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculate::sales::ErrorKind;

    #[test]
    fn parses_codes_and_names() {
        let registry = parse_branch_list("001,Tokyo\r\n002,Osaka\n\n003,Nagoya\n").expect("parsed");

        assert_eq!(registry.len(), 3);
        assert_eq!(registry.name("002"), Some("Osaka"));
        assert_eq!(registry.name("003"), Some("Nagoya"));
        assert!(registry.iter().all(|(_, _, total)| total == 0));
    }

    #[test]
    fn rejects_malformed_lines() {
        for source in [
            "001",
            "001,",
            "001,,",
            ",Tokyo",
            "001,Tokyo,Japan",
            "001,,Tokyo",
            "01,Tokyo",
            "0012,Tokyo",
            "abc,Tokyo",
        ] {
            let error = parse_branch_list(source).expect_err(source);
            assert_eq!(error.kind(), ErrorKind::InvalidFormat, "{source}");
        }
    }

    #[test]
    fn trailing_empty_fields_are_ignored() {
        let registry = parse_branch_list("001,Tokyo,\n002,Osaka,,\n").expect("parsed");
        assert_eq!(registry.name("001"), Some("Tokyo"));
        assert_eq!(registry.name("002"), Some("Osaka"));
    }

    #[test]
    fn reports_the_offending_line() {
        let error = parse_branch_list("001,Tokyo\nbroken\n").expect_err("malformed");
        assert!(matches!(error, SalesError::InvalidFormat { line: 2, .. }));
    }

    #[test]
    fn later_duplicate_wins() {
        let registry = parse_branch_list("001,Tokyo\n001,Shinjuku\n").expect("parsed");
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.name("001"), Some("Shinjuku"));
    }

    #[test]
    fn loading_twice_gives_the_same_registry() {
        let dir = tempfile::tempdir().expect("temporary directory");
        fs::write(dir.path().join(BRANCH_LIST_FILE), "002,Osaka\n001,Tokyo\n").expect("written");

        let first = load_registry(dir.path()).expect("first load");
        let second = load_registry(dir.path()).expect("second load");
        assert_eq!(first, second);
    }

    #[test]
    fn missing_definition_file() {
        let dir = tempfile::tempdir().expect("temporary directory");
        let error = load_registry(dir.path()).expect_err("missing file");
        assert_eq!(error.kind(), ErrorKind::MissingFile);
    }
}
