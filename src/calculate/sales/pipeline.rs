use std::path::Path;

use tracing::{info, instrument};

use crate::calculate::sales::aggregate::aggregate;
use crate::calculate::sales::error::Result;
use crate::calculate::sales::io::branch_list::load_registry;
use crate::calculate::sales::io::record_files::{ensure_sequential, select_record_files};
use crate::calculate::sales::io::summary_write::{SummaryRow, write_summary};
use crate::calculate::sales::model::BranchRegistry;

/// Loads the branch definitions and folds every record file into them,
/// without writing anything.
#[instrument(level = "info", skip_all, fields(dir = %dir.display()))]
pub fn calculate(dir: &Path) -> Result<BranchRegistry> {
    let mut registry = load_registry(dir)?;
    let files = select_record_files(dir)?;
    ensure_sequential(&files)?;
    aggregate(&files, &mut registry)?;
    Ok(registry)
}

/// Runs the whole batch and writes `branch.out` into `dir`.
///
/// Nothing is written unless every earlier stage succeeded.
#[instrument(level = "info", skip_all, fields(dir = %dir.display()))]
pub fn run(dir: &Path) -> Result<Vec<SummaryRow>> {
    let registry = calculate(dir)?;
    let rows = write_summary(dir, &registry)?;
    info!(branch_count = rows.len(), "sales summary complete");
    Ok(rows)
}
