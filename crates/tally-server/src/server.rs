use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use tally_ledger::{InMemoryLedger, Ledger};

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;
use crate::state::AppState;

/// Tally HTTP server.
///
/// Owns the single ledger instance for the lifetime of the process and hands
/// it to the router as shared state.
pub struct TallyServer {
    config: ServerConfig,
    state: AppState,
}

impl TallyServer {
    pub fn new(config: ServerConfig) -> Self {
        Self::with_ledger(config, Arc::new(InMemoryLedger::new()))
    }

    pub fn with_ledger(config: ServerConfig, ledger: Arc<dyn Ledger>) -> Self {
        Self {
            config,
            state: AppState::new(ledger),
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(self.state.clone())
    }

    /// Start serving requests until Ctrl-C.
    pub async fn serve(self) -> ServerResult<()> {
        self.serve_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "failed to listen for shutdown signal");
            }
        })
        .await
    }

    /// Start serving requests until `shutdown` resolves.
    pub async fn serve_with_shutdown<F>(self, shutdown: F) -> ServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        self.serve_on(listener, shutdown).await
    }

    /// Serve on an already-bound listener.
    pub async fn serve_on<F>(self, listener: TcpListener, shutdown: F) -> ServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr: SocketAddr = listener.local_addr()?;
        let app = self.router();
        tracing::info!("Tally server listening on {}", addr);
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))?;
        tracing::info!("Tally server stopped");
        Ok(())
    }
}
