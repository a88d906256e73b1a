// HTTP request handlers for API endpoints

use actix_web::{web, HttpResponse, Result};
use serde_json::json;

use crate::api::models::*;
use crate::mock::{cfdi, inventory, invoicing, orders, rng, support};
use crate::vtex::search;

/// Root endpoint, also used for liveness checks.
pub async fn root() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(json!({
        "status": "ok",
        "service": "juguetron-api",
        "version": env!("CARGO_PKG_VERSION"),
    })))
}

/// Health check endpoint. Static payload regardless of upstream state.
pub async fn health() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "juguetron-api",
    })))
}

/// GET /search?q=<term>
pub async fn search_get(
    query: web::Query<SearchQueryParams>,
    client: web::Data<reqwest::Client>,
) -> Result<HttpResponse> {
    if query.q.is_empty() {
        return Ok(client_error("El parámetro 'q' no puede estar vacío"));
    }

    tracing::info!(q = %query.q, "search requested");
    let response = search::execute_search(&client, &query.q).await;
    Ok(HttpResponse::Ok().json(response))
}

/// POST /search — accepts `termino_busqueda` or `query`, extra fields
/// tolerated, no URL-encoding needed for spaces.
pub async fn search_post(
    payload: web::Json<SearchRequest>,
    client: web::Data<reqwest::Client>,
) -> Result<HttpResponse> {
    let term = match payload.term() {
        Some(t) => t.to_string(),
        None => {
            return Ok(client_error(
                "Debe proporcionar 'termino_busqueda' o 'query' en el request body",
            ));
        }
    };

    tracing::info!(q = %term, "search requested (POST)");
    let response = search::execute_search(&client, &term).await;
    Ok(HttpResponse::Ok().json(response))
}

/// POST /request_stock_check — mock inventory lookup.
pub async fn request_stock_check(payload: web::Json<StockCheckRequest>) -> Result<HttpResponse> {
    tracing::info!(sku = %payload.sku, zip_code = ?payload.zip_code, "stock check requested");
    let mut rng = rng::mock_rng();
    Ok(HttpResponse::Ok().json(inventory::check_stock(&mut rng, &payload)))
}

/// POST /request_order_tracking — mock logistics lookup.
pub async fn request_order_tracking(
    payload: web::Json<OrderTrackingRequest>,
) -> Result<HttpResponse> {
    tracing::info!(order_id = %payload.order_id, "order tracking requested");
    let mut rng = rng::mock_rng();
    Ok(HttpResponse::Ok().json(orders::track_order(&mut rng, &payload)))
}

/// POST /request_create_zendesk_ticket — mock support-desk ticket.
pub async fn request_create_zendesk_ticket(
    payload: web::Json<CreateTicketRequest>,
) -> Result<HttpResponse> {
    tracing::info!(email = %payload.email, category = ?payload.category, "support ticket requested");
    let mut rng = rng::mock_rng();
    Ok(HttpResponse::Ok().json(support::create_ticket(&mut rng, &payload)))
}

/// POST /request_invoice_generation — mock ERP invoice.
pub async fn request_invoice_generation(
    payload: web::Json<InvoiceGenerationRequest>,
) -> Result<HttpResponse> {
    if !invoicing::rfc_is_acceptable(&payload.rfc) {
        return Ok(client_error("RFC inválido"));
    }

    tracing::info!(order_id = %payload.order_id, "invoice generation requested");
    let mut rng = rng::mock_rng();
    Ok(HttpResponse::Ok().json(invoicing::generate_invoice(&mut rng, &payload)))
}

/// POST /generate_cfdi_invoice — mock SAT/CFDI portal.
pub async fn generate_cfdi_invoice(
    payload: web::Json<CfdiInvoiceRequest>,
) -> Result<HttpResponse> {
    tracing::info!(ticket_number = %payload.ticket_number, "CFDI invoice requested");
    let mut rng = rng::mock_rng();
    match cfdi::generate_cfdi_invoice(&mut rng, &payload) {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e) => {
            tracing::error!(error = %e, "CFDI generation failed");
            Ok(HttpResponse::InternalServerError().json(json!({ "detail": e.to_string() })))
        }
    }
}

fn client_error(detail: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(json!({ "detail": detail }))
}
