//! HTTP server for Tally.
//!
//! Exposes the in-memory ledger over four JSON endpoints: add a value, read
//! the running sum, list the history, and delete an entry.

pub mod config;
pub mod dto;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::TallyServer;
pub use state::AppState;
