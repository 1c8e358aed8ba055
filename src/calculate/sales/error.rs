use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, SalesError>;

/// Error type covering every way a sales run can be aborted.
///
/// The `Display` output of each variant is the message shown to the user.
/// Extra fields exist for logging only and never leak into that message.
#[derive(Debug, Error)]
pub enum SalesError {
    /// Wrapper for IO failures such as listing the directory or writing the summary.
    #[error("予期せぬエラーが発生しました")]
    Io(#[from] std::io::Error),

    /// Raised when the command line does not name exactly one directory.
    #[error("予期せぬエラーが発生しました")]
    BadInvocation(String),

    /// Raised when the tracing subscriber fails to initialise.
    #[error("予期せぬエラーが発生しました")]
    Logging(String),

    /// Raised when the amount line of a record file is not made of numerals.
    #[error("予期せぬエラーが発生しました")]
    NonNumericAmount { file: String, value: String },

    /// Raised when the branch definition file does not exist.
    #[error("支店定義ファイルが存在しません")]
    MissingFile(PathBuf),

    /// Raised when a line of the branch definition file is malformed.
    #[error("支店定義ファイルのフォーマットが不正です")]
    InvalidFormat { line: usize, content: String },

    /// Raised when the record file numbering has a gap or a duplicate.
    #[error("売上ファイル名が連番になっていません")]
    NonSequentialFiles { previous: String, next: String },

    /// Raised when a record file does not hold exactly two lines.
    #[error("{file}のフォーマットが不正です")]
    InvalidRecordFormat { file: String, lines: usize },

    /// Raised when a record file names a branch missing from the registry.
    #[error("{file}の支店コードが不正です")]
    UnknownBranchCode { file: String, code: String },

    /// Raised when a branch total would need more than ten digits.
    #[error("合計金額が10桁を超えました")]
    AmountOverflow { file: String, code: String },
}

/// Failure categories reported by a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    BadInvocation,
    MissingFile,
    InvalidFormat,
    UnknownError,
    NonSequentialFiles,
    InvalidRecordFormat,
    UnknownBranchCode,
    AmountOverflow,
}

impl SalesError {
    /// Returns the category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SalesError::Io(_)
            | SalesError::Logging(_)
            | SalesError::NonNumericAmount { .. } => ErrorKind::UnknownError,
            SalesError::BadInvocation(_) => ErrorKind::BadInvocation,
            SalesError::MissingFile(_) => ErrorKind::MissingFile,
            SalesError::InvalidFormat { .. } => ErrorKind::InvalidFormat,
            SalesError::NonSequentialFiles { .. } => ErrorKind::NonSequentialFiles,
            SalesError::InvalidRecordFormat { .. } => ErrorKind::InvalidRecordFormat,
            SalesError::UnknownBranchCode { .. } => ErrorKind::UnknownBranchCode,
            SalesError::AmountOverflow { .. } => ErrorKind::AmountOverflow,
        }
    }
}
