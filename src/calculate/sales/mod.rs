pub mod aggregate;
pub mod error;
pub mod io;
pub mod model;
pub mod pipeline;

pub use error::{ErrorKind, Result, SalesError};

/// Name of the branch definition file inside the working directory.
pub const BRANCH_LIST_FILE: &str = "branch.lst";
/// Name of the summary file written into the working directory.
pub const BRANCH_OUT_FILE: &str = "branch.out";
/// Extension carried by every daily record file.
pub const RECORD_EXTENSION: &str = "rcd";
/// Separator used by the definition file and the summary file.
pub const FIELD_DELIMITER: char = ',';
/// Smallest branch total that no longer fits in ten decimal digits.
pub const TOTAL_LIMIT: u64 = 10_000_000_000;
