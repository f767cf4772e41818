use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::signal;
use tokio::sync::broadcast;
use tracing::info;

/// Coordinates graceful shutdown between the server loop and cleanup tasks.
///
/// One side awaits [`ShutdownCoordinator::wait_for_signal`]; cleanup tasks
/// hold a receiver from [`ShutdownCoordinator::subscribe`] and run once the
/// notification lands.
#[derive(Clone)]
pub struct ShutdownCoordinator {
    tx: broadcast::Sender<()>,
    shutdown_initiated: Arc<AtomicBool>,
}

impl ShutdownCoordinator {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self {
            tx,
            shutdown_initiated: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Receiver that yields once when shutdown is initiated.
    ///
    /// Subscribe before shutdown can fire; a receiver created afterwards
    /// never sees the notification.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    pub fn is_shutting_down(&self) -> bool {
        self.shutdown_initiated.load(Ordering::Relaxed)
    }

    /// Flip the shutdown flag and notify subscribers; later calls are no-ops.
    pub fn shutdown(&self) {
        if self
            .shutdown_initiated
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
        {
            info!("Initiating graceful shutdown");
            let _ = self.tx.send(());
        }
    }

    /// Block until SIGTERM or SIGINT arrives, then initiate shutdown.
    pub async fn wait_for_signal(&self) {
        match signal_kind().await {
            SignalKind::Interrupt => {
                info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
            }
            SignalKind::Terminate => {
                info!("Received SIGTERM, initiating graceful shutdown");
            }
        }

        self.shutdown();
    }
}

impl Default for ShutdownCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

enum SignalKind {
    Interrupt,
    Terminate,
}

/// Resolves when the process receives SIGINT or, on unix, SIGTERM.
async fn signal_kind() -> SignalKind {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => SignalKind::Interrupt,
        _ = terminate => SignalKind::Terminate,
    }
}

/// Plain SIGTERM/SIGINT future for `axum::serve(..).with_graceful_shutdown()`
/// when no cleanup coordination is needed.
pub async fn shutdown_signal() {
    match signal_kind().await {
        SignalKind::Interrupt => info!("Received Ctrl+C signal, shutting down gracefully"),
        SignalKind::Terminate => info!("Received SIGTERM signal, shutting down gracefully"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn shutdown_notifies_subscribers() {
        let coordinator = ShutdownCoordinator::new();
        let mut rx = coordinator.subscribe();
        assert!(!coordinator.is_shutting_down());

        coordinator.shutdown();

        assert!(coordinator.is_shutting_down());
        rx.recv().await.unwrap();
    }

    #[tokio::test]
    async fn shutdown_is_idempotent() {
        let coordinator = ShutdownCoordinator::new();
        let mut subscriber = coordinator.subscribe();

        coordinator.shutdown();
        coordinator.shutdown();

        subscriber.recv().await.unwrap();
        // Only a single notification should have been sent.
        assert!(subscriber.try_recv().is_err());
    }
}
