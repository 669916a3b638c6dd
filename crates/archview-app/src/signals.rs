//! Turns SIGINT/SIGTERM into `Message::Quit` so the terminal is restored
//! through the normal shutdown path.

use tokio::sync::mpsc;

use crate::message::Message;
use archview_core::prelude::*;

/// Spawn the listener task on the current tokio runtime.
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        match next_shutdown_signal().await {
            Ok(name) => {
                info!(signal = name, "Shutdown signal received");
                if tx.send(Message::Quit).await.is_err() {
                    debug!("Event loop already gone, dropping quit request");
                }
            }
            Err(e) => error!("Signal handler error: {}", e),
        }
    });
}

/// Resolves with the name of the first termination signal delivered.
async fn next_shutdown_signal() -> Result<&'static str> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let listen = |kind: SignalKind, name: &str| {
            signal(kind).map_err(|e| Error::terminal(format!("Cannot listen for {name}: {e}")))
        };
        let mut sigint = listen(SignalKind::interrupt(), "SIGINT")?;
        let mut sigterm = listen(SignalKind::terminate(), "SIGTERM")?;

        let name = tokio::select! {
            _ = sigint.recv() => "SIGINT",
            _ = sigterm.recv() => "SIGTERM",
        };
        Ok(name)
    }

    #[cfg(windows)]
    {
        tokio::signal::ctrl_c()
            .await
            .map_err(|e| Error::terminal(format!("Cannot listen for Ctrl+C: {e}")))?;
        Ok("Ctrl+C")
    }
}
