use std::fs;

use tracing::{debug, info, instrument, warn};

use crate::calculate::sales::error::{Result, SalesError};
use crate::calculate::sales::model::{
    BranchCode, BranchRegistry, CreditError, RecordFile, SalesRecord,
};

/// Adds every record file to the registry totals, in the given order.
///
/// The first failing file aborts the run; files after it are never opened.
#[instrument(level = "info", skip_all, fields(file_count = files.len()))]
pub fn aggregate(files: &[RecordFile], registry: &mut BranchRegistry) -> Result<()> {
    for file in files {
        let contents = fs::read_to_string(file.path())?;
        let record = parse_record(file, &contents, registry)?;

        let total = registry
            .credit(record.code.as_str(), record.amount)
            .map_err(|error| match error {
                CreditError::UnknownCode => SalesError::UnknownBranchCode {
                    file: file.file_name().to_string(),
                    code: record.code.to_string(),
                },
                CreditError::Overflow => {
                    warn!(
                        file = file.file_name(),
                        code = %record.code,
                        "branch total exceeds ten digits"
                    );
                    SalesError::AmountOverflow {
                        file: file.file_name().to_string(),
                        code: record.code.to_string(),
                    }
                }
            })?;
        debug!(
            file = file.file_name(),
            code = %record.code,
            amount = record.amount,
            total,
            "record applied"
        );
    }

    info!(record_count = files.len(), "aggregated record files");
    Ok(())
}

/// Validates the contents of one record file against the registry.
///
/// A record is exactly two lines: a registered branch code, then an amount
/// made only of numerals.
pub fn parse_record(
    file: &RecordFile,
    contents: &str,
    registry: &BranchRegistry,
) -> Result<SalesRecord> {
    let name = file.file_name();
    let lines: Vec<&str> = contents.lines().collect();
    let [code, amount] = lines.as_slice() else {
        warn!(
            file = name,
            lines = lines.len(),
            "record file has the wrong line count"
        );
        return Err(SalesError::InvalidRecordFormat {
            file: name.to_string(),
            lines: lines.len(),
        });
    };

    let known = BranchCode::parse(code).filter(|parsed| registry.contains(parsed.as_str()));
    let Some(code) = known else {
        warn!(file = name, code, "record file names an unknown branch");
        return Err(SalesError::UnknownBranchCode {
            file: name.to_string(),
            code: code.to_string(),
        });
    };

    if amount.is_empty() || !amount.bytes().all(|byte| byte.is_ascii_digit()) {
        warn!(file = name, amount, "record amount is not numeric");
        return Err(SalesError::NonNumericAmount {
            file: name.to_string(),
            value: amount.to_string(),
        });
    }

    // All numerals, so the only possible parse failure is exceeding u64.
    let amount = amount.parse::<u64>().map_err(|_| SalesError::AmountOverflow {
        file: name.to_string(),
        code: code.to_string(),
    })?;

    Ok(SalesRecord { code, amount })
}
