use crate::entry::{Entry, EntryId};
use crate::error::LedgerError;

/// Write boundary for ledger mutations.
pub trait LedgerWriter: Send + Sync {
    /// Record a non-zero value and fold it into the running sum.
    fn add(&self, value: f64) -> Result<Entry, LedgerError>;

    /// Remove an entry and subtract its value from the running sum.
    fn delete(&self, id: EntryId) -> Result<Entry, LedgerError>;
}

/// Read boundary for ledger queries.
pub trait LedgerReader: Send + Sync {
    fn sum(&self) -> Result<f64, LedgerError>;

    /// Every stored entry, ordered by id.
    fn history(&self) -> Result<Vec<Entry>, LedgerError>;

    fn len(&self) -> Result<usize, LedgerError>;

    fn is_empty(&self) -> Result<bool, LedgerError> {
        Ok(self.len()? == 0)
    }
}

/// A ledger that can be both read and written.
pub trait Ledger: LedgerReader + LedgerWriter {}

impl<T: LedgerReader + LedgerWriter> Ledger for T {}
