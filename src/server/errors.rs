//! Background error reporting.
//!
//! Handlers never log system errors themselves. They push an [`ErrorReport`]
//! onto the channel and a single logger task writes it out, optionally
//! shutting the server down.

use colored::Colorize;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::sync::Notify;
use tokio::task::JoinHandle;

const CHANNEL_SIZE: usize = 64;

/// A system error seen while serving a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorReport {
    pub message: String,
    /// Client address, if the error is tied to a request.
    pub host: Option<String>,
    pub path: String,
}

impl ErrorReport {
    pub fn new(message: impl ToString, host: Option<String>, path: impl Into<String>) -> Self {
        ErrorReport {
            message: message.to_string(),
            host,
            path: path.into(),
        }
    }
}

/// Sending half of the error channel, cheap to clone into every handler.
#[derive(Clone, Debug)]
pub struct ErrorChannel {
    tx: mpsc::Sender<ErrorReport>,
}

impl ErrorChannel {
    pub async fn report(&self, report: ErrorReport) {
        if let Err(err) = self.tx.send(report).await {
            log::warn!("Error logger is gone, dropping report: {:?}", err.0);
        }
    }
}

/// Start the logger task and return the channel feeding it.
///
/// # Arguments
/// * `exit_on_error` - Notify `shutdown` after the first report and stop
/// * `shutdown` - Graceful shutdown signal of the HTTP server
pub fn spawn_logger(exit_on_error: bool, shutdown: Arc<Notify>) -> (ErrorChannel, JoinHandle<()>) {
    let (tx, mut rx) = mpsc::channel::<ErrorReport>(CHANNEL_SIZE);

    let logger = tokio::spawn(async move {
        while let Some(report) = rx.recv().await {
            let host = report.host.as_deref().unwrap_or("local");
            log::error!(
                "{host} => {path} (Error: `{message}`)",
                path = report.path.on_blue(),
                message = report.message.red()
            );

            if exit_on_error {
                log::error!("{}", "Error: Shutting down...".on_red());
                shutdown.notify_one();
                break;
            }
        }
        log::debug!("Error logger stopped");
    });

    (ErrorChannel { tx }, logger)
}
