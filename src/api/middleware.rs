// Additional middleware for logging, CORS, etc.

use actix_web::middleware::{Compress, Logger};

pub fn setup_middleware() -> (Logger, Compress) {
    let logger = Logger::default();
    let compress = Compress::default();
    (logger, compress)
}

// CORS configuration
use actix_cors::Cors;
use actix_web::http::header;

/// Build CORS from a comma-separated origin list. `*` (the default) opens the
/// API to any origin — the service is consumed by AI agents, not browsers.
pub fn setup_cors(allowed_origins: &str) -> Cors {
    if allowed_origins.trim() == "*" {
        return Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);
    }

    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600);

    for origin in allowed_origins.split(',') {
        cors = cors.allowed_origin(origin.trim());
    }

    cors
}
