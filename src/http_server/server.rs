//! # HTTP Server
//!
//! Binds the phonebook router to a TCP listener with CORS and access
//! logging applied.

use std::net::SocketAddr;

use axum::http::HeaderValue;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use super::config::HttpServerConfig;
use crate::observability::{access_log, Logger};
use crate::rest_api::RestServer;
use crate::store::PersonStore;

/// HTTP Server for the phonebook
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server serving `store`
    pub fn with_store<S: PersonStore + 'static>(config: HttpServerConfig, store: S) -> Self {
        let router = Self::build_router(&config, RestServer::new(store));
        Self { config, router }
    }

    /// Build the router with middleware layers
    fn build_router<S: PersonStore + 'static>(
        config: &HttpServerConfig,
        rest: RestServer<S>,
    ) -> Router {
        let router = rest.router();

        let router = if config.access_log {
            router.layer(axum::middleware::from_fn(access_log))
        } else {
            router
        };

        router.layer(cors_layer(&config.cors_origins))
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server and run until Ctrl-C
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self
            .config
            .parse_socket_addr()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

        let listener = TcpListener::bind(addr).await?;
        let bound = listener.local_addr()?.to_string();
        Logger::info("SERVER_STARTED", &[("addr", bound.as_str())]);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Logger::info("SERVER_STOPPED", &[("addr", bound.as_str())]);
        Ok(())
    }
}

/// CORS: any origin when none are configured, otherwise only those listed
fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                Logger::warn("CORS_ORIGIN_IGNORED", &[("origin", origin.as_str())]);
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(origins))
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        Logger::warn("SHUTDOWN_SIGNAL_UNAVAILABLE", &[]);
        std::future::pending::<()>().await;
    }
    Logger::info("SHUTDOWN_REQUESTED", &[]);
}
