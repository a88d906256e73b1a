// API route configuration

use crate::api::handlers;
use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Liveness (no state touched)
        .route("/", web::get().to(handlers::root))
        .route("/health", web::get().to(handlers::health))
        // Product search proxy
        .route("/search", web::get().to(handlers::search_get))
        .route("/search", web::post().to(handlers::search_post))
        // Mock backends for demo flows
        .route(
            "/request_stock_check",
            web::post().to(handlers::request_stock_check),
        )
        .route(
            "/request_order_tracking",
            web::post().to(handlers::request_order_tracking),
        )
        .route(
            "/request_create_zendesk_ticket",
            web::post().to(handlers::request_create_zendesk_ticket),
        )
        .route(
            "/request_invoice_generation",
            web::post().to(handlers::request_invoice_generation),
        )
        .route(
            "/generate_cfdi_invoice",
            web::post().to(handlers::generate_cfdi_invoice),
        );
}
