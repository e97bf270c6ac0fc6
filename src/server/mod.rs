//! HTTP server for the subnet calculator.
//!
//! - [`routes`] - Endpoints, security headers and panic recovery
//! - [`errors`] - Background error-reporting channel
//! - [`client`] - Client address resolution
//! - [`usage`] - Example URLs for the help pages

mod client;
mod errors;
mod routes;
mod usage;

pub use client::ClientAddr;
pub use errors::{spawn_logger, ErrorChannel, ErrorReport};
pub use usage::{examples_text, Usage};

use crate::config::Config;
use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;
use tokio::task::JoinHandle;

/// A running server.
pub struct ServerHandle {
    addr: SocketAddr,
    shutdown: Arc<Notify>,
    server: JoinHandle<std::io::Result<()>>,
}

impl ServerHandle {
    /// The address actually bound, useful with port 0.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Signal that stops the server gracefully when notified.
    pub fn shutdown_signal(&self) -> Arc<Notify> {
        Arc::clone(&self.shutdown)
    }

    pub fn shutdown(&self) {
        self.shutdown.notify_one();
    }

    /// Wait until the server has stopped.
    pub async fn wait(self) -> Result<(), Box<dyn Error>> {
        self.server.await??;
        Ok(())
    }
}

/// Bind the listener and start serving in the background.
pub async fn run(config: &Config) -> Result<ServerHandle, Box<dyn Error>> {
    let listener = TcpListener::bind(config.socket_addr())
        .await
        .map_err(|e| format!("Error binding {}: {e}", config.socket_addr()))?;
    let addr = listener.local_addr()?;

    let shutdown = Arc::new(Notify::new());
    let (errors, _logger) = spawn_logger(config.exit_on_error, Arc::clone(&shutdown));
    let router = routes::new(errors, config.verbose);

    let server = tokio::spawn({
        let shutdown = Arc::clone(&shutdown);
        async move {
            axum::serve(
                listener,
                router.into_make_service_with_connect_info::<SocketAddr>(),
            )
            .with_graceful_shutdown(async move {
                shutdown.notified().await;
                log::info!("HTTP server shutting down");
            })
            .await
        }
    });

    Ok(ServerHandle {
        addr,
        shutdown,
        server,
    })
}
