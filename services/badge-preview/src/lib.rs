//! Badge Preview - HTTP service for status badges
//!
//! Serves rendered badge fragments, their JSON description, and a preview
//! page listing a configurable set of sample statuses.

pub mod config;
pub mod error;
pub mod routes;

pub use config::{load_config, Config, PreviewConfig, ServerConfig};
pub use error::{BadgePreviewError, Result};

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

/// Builder for the preview server.
pub struct PreviewBuilder {
    config: Config,
}

impl PreviewBuilder {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Bind the listener on the configured port.
    pub async fn build(self) -> Result<BoundPreview> {
        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.server.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            BadgePreviewError::Server(format!(
                "Failed to bind port {}: {}",
                self.config.server.port, e
            ))
        })?;
        let listen_addr = listener.local_addr()?;

        info!("Bound badge preview server bound_addr={}", listen_addr);

        Ok(BoundPreview {
            listener,
            listen_addr,
            router: routes::build_router(Arc::new(self.config)),
        })
    }
}

/// A bound, not yet serving, preview server.
pub struct BoundPreview {
    listener: TcpListener,
    listen_addr: SocketAddr,
    router: axum::Router,
}

impl BoundPreview {
    pub fn listen_addr(&self) -> SocketAddr {
        self.listen_addr
    }

    /// Serve requests until Ctrl-C.
    pub async fn start(self) -> Result<()> {
        info!("Badge preview listening on http://{}", self.listen_addr);

        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(async {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    tracing::error!("Failed to listen for ctrl-c: {}", e);
                    return;
                }
                info!("Shutdown signal received");
            })
            .await?;

        tracing::debug!("Badge preview stopped");
        Ok(())
    }
}
