use std::future::Future;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::utils::Result;

/// Holds running tasks and the shutdown channel for a service.
/// Call `shutdown()` to stop them gracefully.
pub struct ServiceHandle {
    shutdown_tx: watch::Sender<bool>,
    join_handles: Vec<(&'static str, JoinHandle<Result<()>>)>,
}

impl ServiceHandle {
    /// Create a new ServiceHandle together with a receiver tasks can clone.
    pub fn new() -> (Self, watch::Receiver<bool>) {
        let (tx, rx) = watch::channel(false);
        let handle = ServiceHandle { shutdown_tx: tx, join_handles: vec![] };
        (handle, rx)
    }

    /// Spawn a named background task and track it for shutdown.
    pub fn spawn<F>(&mut self, name: &'static str, fut: F)
    where
        F: Future<Output = Result<()>> + Send + 'static,
    {
        self.join_handles.push((name, tokio::spawn(fut)));
    }

    /// Signal shutdown to all tasks and await them in order.
    pub async fn shutdown(self) -> Result<()> {
        let _ = self.shutdown_tx.send(true);

        for (name, h) in self.join_handles {
            match h.await {
                Ok(Ok(())) => tracing::debug!(task = name, "service task stopped"),
                Ok(Err(e)) => tracing::error!(task = name, "service task returned error: {}", e),
                Err(e) => tracing::error!(task = name, "task join error: {}", e),
            }
        }
        Ok(())
    }
}
