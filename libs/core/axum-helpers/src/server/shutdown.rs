//! Graceful shutdown coordination.

use std::sync::Arc;
use tokio::sync::watch;
use tracing::info;

/// Coordinates shutdown across the server and background cleanup tasks.
///
/// The coordinator broadcasts a single shutdown signal; any number of tasks
/// can wait on it via [`ShutdownCoordinator::wait_for_signal`].
#[derive(Clone)]
pub struct ShutdownCoordinator {
    tx: Arc<watch::Sender<bool>>,
}

impl ShutdownCoordinator {
    /// Create a new coordinator and an initial receiver.
    pub fn new() -> (Self, watch::Receiver<bool>) {
        let (tx, rx) = watch::channel(false);
        (
            Self {
                tx: Arc::new(tx),
            },
            rx,
        )
    }

    /// Broadcast the shutdown signal to all waiting tasks.
    pub fn signal(&self) {
        let _ = self.tx.send(true);
    }

    /// Wait until the shutdown signal has been broadcast.
    pub async fn wait_for_signal(&self) {
        let mut rx = self.tx.subscribe();
        while !*rx.borrow_and_update() {
            if rx.changed().await.is_err() {
                break;
            }
        }
    }
}

/// Completes when the process receives SIGINT (Ctrl+C) or SIGTERM.
///
/// Use with `axum::serve(...).with_graceful_shutdown(shutdown_signal())`.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, starting graceful shutdown"),
        _ = terminate => info!("Received SIGTERM, starting graceful shutdown"),
    }
}

/// Waits for an OS shutdown signal, then notifies the coordinator.
///
/// Used by `create_production_app` so cleanup tasks start as soon as the
/// server stops accepting connections.
pub async fn coordinated_shutdown(coordinator: ShutdownCoordinator) {
    shutdown_signal().await;
    coordinator.signal();
}
