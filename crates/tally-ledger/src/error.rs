/// Errors produced by ledger operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LedgerError {
    #[error("a numeric value is required")]
    MissingValue,

    #[error("value must be non-zero, got {0}")]
    ZeroValue(f64),

    #[error("invalid entry id: {0:?}")]
    InvalidId(String),

    /// Carries the raw id as requested, which may be one no entry can hold.
    #[error("entry {0} not found")]
    NotFound(i128),

    #[error("ledger lock poisoned")]
    LockPoisoned,
}

impl LedgerError {
    /// Returns `true` for errors caused by malformed caller input.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingValue | Self::ZeroValue(_) | Self::InvalidId(_)
        )
    }

    /// Returns `true` when the referenced entry does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

pub type LedgerResult<T> = Result<T, LedgerError>;
