use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use chrono::Utc;

use crate::entry::{Entry, EntryId};
use crate::error::LedgerError;
use crate::traits::{LedgerReader, LedgerWriter};
use crate::validation::check_value;

/// In-memory ledger holding entries and their running sum.
///
/// A single mutex guards the whole state, so every operation observes and
/// leaves `entries`, `running_sum` and `next_id` mutually consistent.
pub struct InMemoryLedger {
    inner: Mutex<LedgerState>,
}

#[derive(Default)]
struct LedgerState {
    entries: BTreeMap<EntryId, Entry>,
    running_sum: f64,
    next_id: u64,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(LedgerState::default()),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, LedgerState>, LedgerError> {
        self.inner.lock().map_err(|_| LedgerError::LockPoisoned)
    }
}

impl Default for InMemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerWriter for InMemoryLedger {
    fn add(&self, value: f64) -> Result<Entry, LedgerError> {
        check_value(value)?;

        let mut state = self.lock()?;
        state.next_id += 1;
        let entry = Entry {
            id: EntryId(state.next_id),
            value,
            timestamp: Utc::now(),
        };
        state.entries.insert(entry.id, entry.clone());
        state.running_sum += value;

        tracing::debug!(id = %entry.id, value, sum = state.running_sum, "entry added");
        Ok(entry)
    }

    fn delete(&self, id: EntryId) -> Result<Entry, LedgerError> {
        let mut state = self.lock()?;
        let entry = state
            .entries
            .remove(&id)
            .ok_or(LedgerError::NotFound(i128::from(id.get())))?;
        state.running_sum -= entry.value;

        tracing::debug!(%id, value = entry.value, sum = state.running_sum, "entry deleted");
        Ok(entry)
    }
}

impl LedgerReader for InMemoryLedger {
    fn sum(&self) -> Result<f64, LedgerError> {
        Ok(self.lock()?.running_sum)
    }

    fn history(&self) -> Result<Vec<Entry>, LedgerError> {
        Ok(self.lock()?.entries.values().cloned().collect())
    }

    fn len(&self) -> Result<usize, LedgerError> {
        Ok(self.lock()?.entries.len())
    }
}
