// API request/response models (DTOs)

use serde::{Deserialize, Serialize};

/// Simplified product record handed to AI agents.
///
/// `name` is the only mandatory field; records the normalizer cannot resolve
/// a name for are dropped rather than defaulted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: Option<String>,
    pub image_url: Option<String>,
    pub product_url: Option<String>,
    pub brand: Option<String>,
    pub category: Option<String>,
}

/// Unified search response: query echo, autocomplete suggestions and
/// normalized products from both upstream legs.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub suggestions: Vec<String>,
    pub products: Vec<Product>,
    pub total_products: usize,
}

/// GET /search query string.
#[derive(Debug, Deserialize)]
pub struct SearchQueryParams {
    pub q: String,
}

/// POST /search body. Accepts either field name; extra fields are tolerated.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub termino_busqueda: Option<String>,
    #[serde(default)]
    pub query: Option<String>,
}

impl SearchRequest {
    /// The effective search term: `termino_busqueda` wins over `query`,
    /// empty strings count as absent.
    pub fn term(&self) -> Option<&str> {
        self.termino_busqueda
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.query.as_deref().filter(|s| !s.is_empty()))
    }
}

// ---------------------------------------------------------------------------
// Mock backends
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct StockCheckRequest {
    pub sku: String,
    #[serde(default)]
    pub zip_code: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StockInfo {
    pub sku: String,
    pub quantity: u32,
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StockLocation {
    pub name: String,
    pub address: String,
    pub quantity: u32,
    pub distance: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StockCheckResponse {
    pub success: bool,
    pub message: String,
    pub stock: StockInfo,
    pub available_locations: Vec<StockLocation>,
    pub estimated_delivery: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct OrderTrackingRequest {
    pub order_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OrderItem {
    pub name: String,
    pub quantity: u32,
    pub price: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OrderTrackingResponse {
    pub order_id: String,
    pub status: String,
    pub estimated_delivery: String,
    pub current_location: String,
    pub last_update: String,
    pub items: Vec<OrderItem>,
    pub tracking_number: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum TicketCategory {
    #[serde(rename = "Producto Dañado")]
    ProductoDanado,
    #[serde(rename = "Reembolso")]
    Reembolso,
    #[serde(rename = "Cambio")]
    Cambio,
    #[serde(rename = "General")]
    General,
}

#[derive(Debug, Deserialize)]
pub struct CreateTicketRequest {
    pub email: String,
    pub category: TicketCategory,
    pub description: String,
    #[serde(default)]
    pub sentiment: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateTicketResponse {
    pub success: bool,
    pub ticket_id: String,
    pub message: String,
    pub priority: String,
    pub estimated_response_time: String,
}

#[derive(Debug, Deserialize)]
pub struct InvoiceGenerationRequest {
    pub order_id: String,
    pub rfc: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InvoiceGenerationResponse {
    pub success: bool,
    pub invoice_id: String,
    pub pdf_url: String,
    pub message: String,
    pub total: String,
    pub tax: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "Efectivo")]
    Efectivo,
    #[serde(rename = "Tarjeta de Débito")]
    TarjetaDebito,
    #[serde(rename = "Tarjeta de Crédito")]
    TarjetaCredito,
    #[serde(rename = "Transferencia electrónica de fondos")]
    Transferencia,
}

impl PaymentMethod {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Efectivo => "Efectivo",
            PaymentMethod::TarjetaDebito => "Tarjeta de Débito",
            PaymentMethod::TarjetaCredito => "Tarjeta de Crédito",
            PaymentMethod::Transferencia => "Transferencia electrónica de fondos",
        }
    }
}

/// CFDI totals arrive either as a JSON number or as a string. The validation
/// rules inspect the textual form, so both are kept as-written.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawTotal {
    Number(serde_json::Number),
    Text(String),
}

impl RawTotal {
    /// Textual form: the string itself, or the number's JSON literal.
    pub fn as_text(&self) -> String {
        match self {
            RawTotal::Number(n) => n.to_string(),
            RawTotal::Text(s) => s.trim().to_string(),
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            RawTotal::Number(n) => n.as_f64(),
            RawTotal::Text(s) => s.trim().parse().ok(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CfdiInvoiceRequest {
    pub rfc: String,
    pub ticket_number: String,
    pub total: RawTotal,
    pub payment_method: PaymentMethod,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CfdiInvoiceDetails {
    pub invoice_id: String,
    pub rfc: String,
    pub ticket_number: String,
    pub subtotal: String,
    pub iva_16: String,
    pub total: String,
    pub payment_method: String,
    pub ticket_type: String,
    pub issuance_date: String,
    pub sat_verification: String,
    pub series: String,
    pub folio: String,
    pub cfdi_version: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CfdiInvoiceResponse {
    pub success: bool,
    pub message: String,
    pub invoice_id: Option<String>,
    pub pdf_url: Option<String>,
    pub validation_errors: Vec<String>,
    pub invoice_details: Option<CfdiInvoiceDetails>,
}
