//! In-memory ledger for Tally.
//!
//! This crate provides:
//! - `Entry` / `EntryId` records with server-assigned timestamps
//! - `LedgerWriter` / `LedgerReader` trait boundaries
//! - `InMemoryLedger`, a mutex-guarded map plus running sum
//! - Input validation for submitted values and caller-supplied ids

pub mod entry;
pub mod error;
pub mod memory;
pub mod traits;
pub mod validation;

pub use entry::{Entry, EntryId, ParsedId};
pub use error::{LedgerError, LedgerResult};
pub use memory::InMemoryLedger;
pub use traits::{Ledger, LedgerReader, LedgerWriter};
pub use validation::{check_value, require_value};
