//! Mock logistics backend: order status, current location and a tracking
//! number in the carrier's `JUG########` format.

use chrono::{Duration, Local};
use rand::rngs::StdRng;
use rand::Rng;

use crate::api::models::{OrderItem, OrderTrackingRequest, OrderTrackingResponse};

const STATUSES: [&str; 5] = [
    "En Procesamiento",
    "Enviado",
    "En Tránsito",
    "Entregado",
    "Out for Delivery",
];

const LOCATIONS: [&str; 4] = [
    "Almacén CDMX",
    "Centro de Distribución Norte",
    "En ruta a destino",
    "Ubicación final",
];

pub fn track_order(rng: &mut StdRng, request: &OrderTrackingRequest) -> OrderTrackingResponse {
    let status = STATUSES[rng.gen_range(0..STATUSES.len())];
    let current_location = LOCATIONS[rng.gen_range(0..LOCATIONS.len())];

    let items = vec![
        OrderItem {
            name: "LEGO City Police Station".to_string(),
            quantity: 1,
            price: "$899.00 MXN".to_string(),
        },
        OrderItem {
            name: "LEGO Harry Potter Mandrágora".to_string(),
            quantity: 1,
            price: "$899.50 MXN".to_string(),
        },
    ];

    let delivery_days = rng.gen_range(1..=3);
    let now = Local::now();

    OrderTrackingResponse {
        order_id: request.order_id.clone(),
        status: status.to_string(),
        estimated_delivery: (now + Duration::days(delivery_days))
            .format("%Y-%m-%d")
            .to_string(),
        current_location: current_location.to_string(),
        last_update: now.format("%Y-%m-%d %H:%M:%S").to_string(),
        items,
        tracking_number: format!("JUG{}", rng.gen_range(10_000_000u32..=99_999_999)),
    }
}
