use std::sync::Arc;

use tokio::net::TcpListener;
use topboard_persist::{JsonFileSnapshot, SnapshotStore};
use tracing::{error, info};

use crate::board::Leaderboard;
use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;
use crate::state::AppState;

/// Leaderboard HTTP server.
pub struct TopboardServer {
    config: ServerConfig,
    state: AppState,
}

impl TopboardServer {
    /// Restore the board from `config.data_file`.
    pub fn open(config: ServerConfig) -> Self {
        let snapshot = Arc::new(JsonFileSnapshot::new(&config.data_file));
        Self::with_snapshot(config, snapshot)
    }

    /// Restore the board from an arbitrary snapshot backend.
    pub fn with_snapshot(config: ServerConfig, snapshot: Arc<dyn SnapshotStore>) -> Self {
        let board = Leaderboard::restore(config.capacity, snapshot);
        Self {
            config,
            state: AppState::new(board),
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> ServerResult<axum::Router> {
        Ok(build_router(self.state.clone(), self.config.cors.layer()?))
    }

    /// Serve requests until Ctrl-C or SIGTERM.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router()?;
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        info!(
            addr = %self.config.bind_addr,
            data_file = %self.config.data_file.display(),
            "topboard server listening"
        );
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))?;
        info!("topboard server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = %err, "unable to install Ctrl+C signal handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                error!(error = %err, "unable to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}
