use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::{info, instrument};

use crate::calculate::sales::error::Result;
use crate::calculate::sales::model::{BranchCode, BranchRegistry};
use crate::calculate::sales::{BRANCH_OUT_FILE, FIELD_DELIMITER};

/// One line of the summary file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub code: BranchCode,
    pub name: String,
    pub total: u64,
}

impl SummaryRow {
    /// Renders the row as `code,name,total` without a line terminator.
    pub fn to_line(&self) -> String {
        format!(
            "{code}{FIELD_DELIMITER}{name}{FIELD_DELIMITER}{total}",
            code = self.code,
            name = self.name,
            total = self.total
        )
    }
}

/// Collects one row per registered branch in ascending code order.
pub fn summary_rows(registry: &BranchRegistry) -> Vec<SummaryRow> {
    registry
        .iter()
        .map(|(code, name, total)| SummaryRow {
            code: code.clone(),
            name: name.to_string(),
            total,
        })
        .collect()
}

/// Writes `branch.out` into `dir`, replacing any previous summary.
#[instrument(level = "info", skip_all, fields(dir = %dir.display()))]
pub fn write_summary(dir: &Path, registry: &BranchRegistry) -> Result<Vec<SummaryRow>> {
    let rows = summary_rows(registry);
    let path = dir.join(BRANCH_OUT_FILE);

    let mut writer = BufWriter::new(File::create(&path)?);
    for row in &rows {
        writeln!(writer, "{}", row.to_line())?;
    }
    writer.flush()?;

    info!(path = %path.display(), line_count = rows.len(), "summary written");
    Ok(rows)
}
