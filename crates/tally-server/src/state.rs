use std::sync::Arc;

use tally_ledger::{InMemoryLedger, Ledger};

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub ledger: Arc<dyn Ledger>,
}

impl AppState {
    pub fn new(ledger: Arc<dyn Ledger>) -> Self {
        Self { ledger }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(InMemoryLedger::new()))
    }
}
