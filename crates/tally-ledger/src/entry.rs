use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

/// Identifier of a ledger entry.
///
/// Ids start at 1 and are handed out in increasing order. A deleted id is
/// never issued again for the lifetime of the ledger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub u64);

impl EntryId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of parsing a caller-supplied id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParsedId {
    /// An id that may refer to an entry.
    Known(EntryId),
    /// An integer that can never refer to an entry.
    Unknown(i128),
}

impl ParsedId {
    /// Resolve to an [`EntryId`], failing with a not-found error for ids no
    /// entry can carry.
    pub fn resolve(self) -> Result<EntryId, LedgerError> {
        match self {
            Self::Known(id) => Ok(id),
            Self::Unknown(raw) => Err(LedgerError::NotFound(raw)),
        }
    }
}

/// Parse an id taken from a request path.
///
/// Anything that is not an integer is a validation error. A well-formed
/// negative integer parses, but maps to [`ParsedId::Unknown`] because no entry
/// can carry it.
impl FromStr for ParsedId {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: i128 = s
            .trim()
            .parse()
            .map_err(|_| LedgerError::InvalidId(s.to_string()))?;
        Ok(match u64::try_from(raw) {
            Ok(id) => ParsedId::Known(EntryId(id)),
            Err(_) => ParsedId::Unknown(raw),
        })
    }
}

/// One recorded value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub value: f64,
    pub timestamp: DateTime<Utc>,
}
