#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the Ezrelo relocation assistant.
//!
//! Serves the address verification endpoint used by the moving-project
//! intake form. The normalizer itself is stateless, so the server carries
//! no shared application state.

mod handlers;
pub mod interactive;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};

/// Default bind address when `BIND_ADDR` is unset.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1";

/// Default port when `PORT` is unset or unparsable.
pub const DEFAULT_PORT: u16 = 8080;

/// Where the server listens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind.
    pub bind_addr: String,
    /// TCP port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Reads `BIND_ADDR` and `PORT` from the environment, falling back to
    /// the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("BIND_ADDR").ok(),
            std::env::var("PORT").ok(),
        )
    }

    fn from_vars(bind_addr: Option<String>, port: Option<String>) -> Self {
        Self {
            bind_addr: bind_addr.unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            port: port.and_then(|p| p.parse().ok()).unwrap_or(DEFAULT_PORT),
        }
    }
}

/// Registers the API routes.
///
/// Shared by [`run_server`] and the in-process handler tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(
                web::JsonConfig::default()
                    .content_type_required(false)
                    .error_handler(handlers::json_error),
            )
            .route("/health", web::get().to(handlers::health))
            .service(
                web::resource("/verify-address")
                    .route(web::post().to(handlers::verify_address))
                    .default_service(web::route().to(handlers::method_not_allowed)),
            ),
    );
}

/// Starts the Ezrelo API server.
///
/// This is a regular async function; the caller provides the async
/// runtime (e.g. via `#[actix_web::main]`) and initializes logging.
///
/// # Errors
///
/// Returns an `std::io::Result` error if the HTTP server fails to bind or
/// encounters a runtime error.
#[allow(clippy::future_not_send)]
pub async fn run_server(config: ServerConfig) -> std::io::Result<()> {
    let ServerConfig { bind_addr, port } = config;

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(|| {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .configure(configure)
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
