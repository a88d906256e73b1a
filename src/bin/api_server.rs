// HTTP API server binary for juguetron-api
// Product search proxy + mock backends, designed for AI agent callers

use anyhow::Result;
use juguetron_api::api::ApiServer;
use juguetron_api::logging;
use juguetron_api::util::env as env_util;

#[actix_web::main]
async fn main() -> Result<()> {
    logging::init_tracing("info")?;

    tracing::info!("Initializing juguetron-api server");

    // Load dotenv/env once (safe to call multiple times)
    env_util::init_env();

    let server = ApiServer::from_env()?;
    server.run().await
}
