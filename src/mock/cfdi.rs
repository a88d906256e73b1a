//! Mock SAT/CFDI invoicing portal.
//!
//! Replicates the portal's validation rules: RFC per the SAT format, ticket
//! numbers that distinguish physical stores (`V` + 8 digits) from online
//! orders (`O401`/`O404` + 5 digits), and a total that must be 0 for online
//! tickets and carry explicit centavos for physical ones. Valid requests get
//! a simulated CFDI 4.0 invoice.

use anyhow::Result;
use chrono::{Datelike, Local};
use rand::rngs::StdRng;
use rand::Rng;
use regex::Regex;

use crate::api::models::{CfdiInvoiceDetails, CfdiInvoiceRequest, CfdiInvoiceResponse};

const RFC_PATTERN: &str = r"^[A-Z&Ñ]{3,4}[0-9]{6}[A-Z0-9]{3}$";
const ONLINE_TICKET_O401: &str = r"^O401\d{5}$";
const ONLINE_TICKET_O404: &str = r"^O404\s*\d{5}$";
const PHYSICAL_TICKET: &str = r"^V\d{8}$";

const IVA_RATE: f64 = 0.16;

/// RFC as the SAT compares it: dashes and spaces removed, uppercased.
fn clean_rfc(rfc: &str) -> String {
    rfc.chars()
        .filter(|c| *c != '-' && *c != ' ')
        .collect::<String>()
        .to_uppercase()
}

fn validate(request: &CfdiInvoiceRequest) -> Result<(Vec<String>, String, bool, bool)> {
    let mut errors: Vec<String> = Vec::new();

    let rfc_clean = clean_rfc(&request.rfc);
    if rfc_clean.chars().count() < 12 {
        errors.push("RFC debe tener mínimo 12 caracteres sin incluir guiones".to_string());
    }
    if !Regex::new(RFC_PATTERN)?.is_match(&rfc_clean) {
        errors.push("RFC no tiene el formato válido del SAT".to_string());
    }

    let ticket_upper = request.ticket_number.to_uppercase();
    let is_online = ticket_upper.starts_with("O401") || ticket_upper.starts_with("O404");
    let is_physical = ticket_upper.starts_with('V');

    if is_online
        && !Regex::new(ONLINE_TICKET_O401)?.is_match(&ticket_upper)
        && !Regex::new(ONLINE_TICKET_O404)?.is_match(&ticket_upper)
    {
        errors.push(
            "Para tienda online, el ticket debe tener formato O401xxxxx ó O404xxxxx".to_string(),
        );
    }
    if is_physical && !Regex::new(PHYSICAL_TICKET)?.is_match(&ticket_upper) {
        errors.push("Para tienda física, el ticket debe tener formato Vxxxxxxxx".to_string());
    }
    if !is_online && !is_physical {
        errors.push(
            "Formato de ticket no válido. Debe ser Vxxxxxxxx (tienda física) o O401xxxxx/O404xxxxx (tienda online)"
                .to_string(),
        );
    }

    if is_online && request.total.as_f64() != Some(0.0) {
        errors.push("Para tienda online, el total debe ser 0 (cero)".to_string());
    }
    if is_physical {
        // The point-check runs on the total as written, so "150" fails even
        // though it parses as a number.
        let total_text = request.total.as_text();
        match total_text.split_once('.') {
            None => errors.push(
                "Para tienda física, el total debe contener un punto (.) para incluir centavos"
                    .to_string(),
            ),
            Some((_, cents)) if cents.len() > 2 => errors
                .push("El total solo puede tener hasta 2 decimales para centavos".to_string()),
            _ => {}
        }
    }

    Ok((errors, rfc_clean, is_online, is_physical))
}

pub fn generate_cfdi_invoice(
    rng: &mut StdRng,
    request: &CfdiInvoiceRequest,
) -> Result<CfdiInvoiceResponse> {
    let (validation_errors, rfc_clean, is_online, is_physical) = validate(request)?;

    if !validation_errors.is_empty() {
        return Ok(CfdiInvoiceResponse {
            success: false,
            message: "Error de validación".to_string(),
            invoice_id: None,
            pdf_url: None,
            validation_errors,
            invoice_details: None,
        });
    }

    let invoice_id = format!(
        "C{}01-{:02}-M{}",
        rng.gen_range(100u32..=999),
        Local::now().year() % 100,
        rng.gen_range(100_000u32..=999_999)
    );

    // Physical tickets invoice the submitted total; online orders look the
    // amount up by ticket, simulated here with a random charge.
    let total_amount = if is_physical {
        request.total.as_f64().unwrap_or_default()
    } else {
        (rng.gen_range(200.0..5000.0_f64) * 100.0).round() / 100.0
    };
    let tax_amount = total_amount * IVA_RATE;
    let subtotal = total_amount - tax_amount;

    let details = CfdiInvoiceDetails {
        invoice_id: invoice_id.clone(),
        rfc: rfc_clean.clone(),
        ticket_number: request.ticket_number.clone(),
        subtotal: format!("${subtotal:.2} MXN"),
        iva_16: format!("${tax_amount:.2} MXN"),
        total: format!("${total_amount:.2} MXN"),
        payment_method: request.payment_method.label().to_string(),
        ticket_type: if is_online {
            "Tienda Online".to_string()
        } else {
            "Tienda Física".to_string()
        },
        issuance_date: Local::now().format("%Y-%m-%d").to_string(),
        sat_verification: format!("https://sat.gob.mx/cfdi/{invoice_id}"),
        series: "M".to_string(),
        folio: rng.gen_range(10_000u32..=99_999).to_string(),
        cfdi_version: "4.0".to_string(),
    };

    Ok(CfdiInvoiceResponse {
        success: true,
        message: format!("Factura CFDI generada exitosamente para RFC {rfc_clean}"),
        pdf_url: Some(format!(
            "https://facturacionjuguetron.azurewebsites.net/api/invoices/{invoice_id}.pdf"
        )),
        invoice_id: Some(invoice_id),
        validation_errors: Vec::new(),
        invoice_details: Some(details),
    })
}
