//! Mock ERP invoicing: basic RFC length gate, then a generated invoice with
//! a random total and 16% IVA.

use rand::rngs::StdRng;
use rand::Rng;

use crate::api::models::{InvoiceGenerationRequest, InvoiceGenerationResponse};

/// Minimum RFC length accepted by the ERP flow (moral person RFCs carry 12
/// characters, physical persons 13).
pub const MIN_RFC_LEN: usize = 12;

pub fn rfc_is_acceptable(rfc: &str) -> bool {
    rfc.chars().count() >= MIN_RFC_LEN
}

/// Generate an invoice. Callers must have validated the RFC first; see
/// [`rfc_is_acceptable`].
pub fn generate_invoice(
    rng: &mut StdRng,
    request: &InvoiceGenerationRequest,
) -> InvoiceGenerationResponse {
    let invoice_id = format!("FAC-{}", rng.gen_range(100_000u32..=999_999));
    let total_amount: f64 = rng.gen_range(500.0..3000.0);
    let tax_amount = total_amount * 0.16;

    InvoiceGenerationResponse {
        success: true,
        pdf_url: format!("https://api.juguetron.mx/invoices/{invoice_id}.pdf"),
        message: format!("Factura generada para orden {}", request.order_id),
        total: format!("${total_amount:.2} MXN"),
        tax: format!("${tax_amount:.2} MXN"),
        invoice_id,
    }
}
