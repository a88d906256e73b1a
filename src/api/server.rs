// API server implementation using actix-web

use crate::api::{middleware, routes};
use actix_web::{web, App, HttpServer};
use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

pub struct ApiServer {
    pub host: String,
    pub port: u16,
    pub allowed_origins: String,
    pub upstream_timeout: Duration,
}

impl ApiServer {
    /// Create server from environment variables
    pub fn from_env() -> Result<Self> {
        crate::util::env::init_env();

        let host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("API_PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse()
            .context("Invalid API_PORT")?;

        let allowed_origins = env::var("ALLOWED_ORIGINS").unwrap_or_else(|_| "*".to_string());

        let upstream_timeout = Duration::from_secs(crate::util::env::env_parse(
            "UPSTREAM_TIMEOUT_SECS",
            15u64,
        ));

        Ok(Self {
            host,
            port,
            allowed_origins,
            upstream_timeout,
        })
    }

    /// Start the HTTP server
    pub async fn run(self) -> Result<()> {
        let bind_addr = format!("{}:{}", self.host, self.port);

        tracing::info!(
            host = %self.host,
            port = %self.port,
            "Starting juguetron-api server"
        );

        // One outbound client for the process lifetime; reused by every
        // search request as the upstream connection pool.
        let http_client = reqwest::Client::builder()
            .timeout(self.upstream_timeout)
            .build()
            .context("Failed to build outbound HTTP client")?;

        let client_data = web::Data::new(http_client);
        let allowed_origins = self.allowed_origins.clone();

        HttpServer::new(move || {
            let (logger, compress) = middleware::setup_middleware();
            let cors = middleware::setup_cors(&allowed_origins);

            App::new()
                .app_data(client_data.clone())
                .wrap(logger)
                .wrap(compress)
                .wrap(cors)
                .configure(routes::configure_routes)
        })
        .bind(&bind_addr)
        .with_context(|| format!("Failed to bind to {}", bind_addr))?
        .run()
        .await
        .context("HTTP server error")?;

        Ok(())
    }
}
