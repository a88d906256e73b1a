//! Mock support-desk backend: ticket creation with priority derived from the
//! caller-reported sentiment.

use rand::rngs::StdRng;
use rand::Rng;

use crate::api::models::{CreateTicketRequest, CreateTicketResponse};

/// Priority and response-time window for a ticket, from sentiment:
/// negative ⇒ High/4h, positive ⇒ Low/24h, anything else ⇒ Medium/12h.
fn triage(sentiment: Option<&str>) -> (&'static str, &'static str) {
    match sentiment.map(str::to_lowercase).as_deref() {
        Some("negativo") | Some("negative") => ("High", "4 horas"),
        Some("positivo") | Some("positive") => ("Low", "24 horas"),
        _ => ("Medium", "12 horas"),
    }
}

pub fn create_ticket(rng: &mut StdRng, request: &CreateTicketRequest) -> CreateTicketResponse {
    let (priority, estimated_response_time) = triage(request.sentiment.as_deref());

    CreateTicketResponse {
        success: true,
        ticket_id: format!("ZDK-{}", rng.gen_range(100_000u32..=999_999)),
        message: format!("Ticket creado exitosamente para {}", request.email),
        priority: priority.to_string(),
        estimated_response_time: estimated_response_time.to_string(),
    }
}
