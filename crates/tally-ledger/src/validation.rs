//! Input checks applied before any ledger state is touched.

use crate::error::{LedgerError, LedgerResult};

/// Require a submitted value to be present and non-zero.
///
/// Zero (either sign) is treated the same as an absent value. Negative and
/// non-finite values pass.
pub fn require_value(value: Option<f64>) -> LedgerResult<f64> {
    let value = value.ok_or(LedgerError::MissingValue)?;
    check_value(value)?;
    Ok(value)
}

/// Reject a zero value.
pub fn check_value(value: f64) -> LedgerResult<()> {
    if value == 0.0 {
        return Err(LedgerError::ZeroValue(value));
    }
    Ok(())
}
