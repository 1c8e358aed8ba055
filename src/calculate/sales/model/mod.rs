use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::calculate::sales::{RECORD_EXTENSION, TOTAL_LIMIT};

/// Number of numerals in a branch code.
pub const BRANCH_CODE_LEN: usize = 3;
/// Number of numerals in a record file stem.
pub const SEQUENCE_LEN: usize = 8;

/// Three-numeral identifier of a sales branch.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BranchCode(String);

impl BranchCode {
    /// Accepts exactly three ASCII numerals and nothing else.
    pub fn parse(value: &str) -> Option<Self> {
        is_numerals(value, BRANCH_CODE_LEN).then(|| Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for BranchCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BranchCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct BranchEntry {
    name: String,
    total: u64,
}

/// Branch names and running totals, keyed by branch code.
///
/// Names and totals are stored side by side so a code can never carry one
/// without the other. Totals only move through [`BranchRegistry::credit`],
/// which is reserved for the aggregation stage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchRegistry {
    entries: BTreeMap<BranchCode, BranchEntry>,
}

impl BranchRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a branch with a zero total. A repeated code replaces the
    /// earlier name and resets its total.
    pub fn insert(&mut self, code: BranchCode, name: impl Into<String>) {
        self.entries.insert(
            code,
            BranchEntry {
                name: name.into(),
                total: 0,
            },
        );
    }

    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    pub fn name(&self, code: &str) -> Option<&str> {
        self.get(code).map(|entry| entry.name.as_str())
    }

    pub fn total(&self, code: &str) -> Option<u64> {
        self.get(code).map(|entry| entry.total)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(code, name, total)` in ascending code order.
    pub fn iter(&self) -> impl Iterator<Item = (&BranchCode, &str, u64)> {
        self.entries
            .iter()
            .map(|(code, entry)| (code, entry.name.as_str(), entry.total))
    }

    /// Adds `amount` to the branch total and returns the new total.
    ///
    /// The registry is left untouched when the code is unknown or the new
    /// total would reach [`TOTAL_LIMIT`].
    pub(crate) fn credit(&mut self, code: &str, amount: u64) -> Result<u64, CreditError> {
        let entry = self.entries.get_mut(code).ok_or(CreditError::UnknownCode)?;
        let total = entry
            .total
            .checked_add(amount)
            .filter(|total| *total < TOTAL_LIMIT)
            .ok_or(CreditError::Overflow)?;
        entry.total = total;
        Ok(total)
    }

    fn get(&self, code: &str) -> Option<&BranchEntry> {
        self.entries.get(code)
    }
}

/// Reason a credit was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CreditError {
    UnknownCode,
    Overflow,
}

/// A daily record file named `<8 numerals>.rcd`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFile {
    path: PathBuf,
    file_name: String,
    sequence: u32,
}

impl RecordFile {
    /// Returns `None` unless the base name of `path` matches the record
    /// naming pattern.
    pub fn from_path(path: &Path) -> Option<Self> {
        let file_name = path.file_name()?.to_str()?;
        let (stem, extension) = file_name.split_once('.')?;
        if extension != RECORD_EXTENSION || !is_numerals(stem, SEQUENCE_LEN) {
            return None;
        }
        Some(Self {
            path: path.to_path_buf(),
            file_name: file_name.to_string(),
            sequence: stem.parse().ok()?,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// The eight numerals of the name read as an integer.
    pub fn sequence(&self) -> u32 {
        self.sequence
    }
}

/// Branch code and amount read from one record file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesRecord {
    pub code: BranchCode,
    pub amount: u64,
}

fn is_numerals(value: &str, len: usize) -> bool {
    value.len() == len && value.bytes().all(|byte| byte.is_ascii_digit())
}
