//! Mock inventory backend: plausible stock levels per SKU, two fixed store
//! locations and a delivery estimate.

use chrono::{Duration, Local};
use rand::rngs::StdRng;
use rand::Rng;

use crate::api::models::{StockCheckRequest, StockCheckResponse, StockInfo, StockLocation};

const STOCK_QUANTITIES: [u32; 6] = [0, 1, 2, 5, 10, 15];
const DELIVERY_DAYS: [i64; 4] = [1, 2, 3, 5];

pub fn check_stock(rng: &mut StdRng, request: &StockCheckRequest) -> StockCheckResponse {
    let quantity = STOCK_QUANTITIES[rng.gen_range(0..STOCK_QUANTITIES.len())];
    let status = if rng.gen::<f64>() > 0.2 {
        "in_stock"
    } else {
        "out_of_stock"
    };

    let available_locations = vec![
        StockLocation {
            name: "Tienda Reforma".to_string(),
            address: "Av. Paseo de la Reforma 222, CDMX".to_string(),
            quantity: rng.gen_range(0..=3),
            distance: format!("{:.1} km", rng.gen_range(1.0..5.0)),
        },
        StockLocation {
            name: "Tienda Santa Fe".to_string(),
            address: "Av. Vasco de Quiroga 3800, CDMX".to_string(),
            quantity: rng.gen_range(0..=3),
            distance: format!("{:.1} km", rng.gen_range(3.0..10.0)),
        },
    ];

    let delivery_days = DELIVERY_DAYS[rng.gen_range(0..DELIVERY_DAYS.len())];
    let estimated_delivery = (Local::now() + Duration::days(delivery_days))
        .format("%Y-%m-%d")
        .to_string();

    StockCheckResponse {
        success: true,
        message: format!("Stock verificado para SKU {}", request.sku),
        stock: StockInfo {
            sku: request.sku.clone(),
            quantity,
            status: status.to_string(),
        },
        available_locations,
        estimated_delivery: Some(estimated_delivery),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::rng::seeded;

    fn request() -> StockCheckRequest {
        StockCheckRequest {
            sku: "LEGO-60316".to_string(),
            zip_code: Some("06600".to_string()),
        }
    }

    #[test]
    fn seeded_rng_makes_output_deterministic() {
        let a = check_stock(&mut seeded(7), &request());
        let b = check_stock(&mut seeded(7), &request());
        assert_eq!(a.stock.quantity, b.stock.quantity);
        assert_eq!(a.stock.status, b.stock.status);
        assert_eq!(a.available_locations[0].distance, b.available_locations[0].distance);
    }

    #[test]
    fn response_echoes_sku_and_carries_two_locations() {
        let resp = check_stock(&mut seeded(1), &request());
        assert!(resp.success);
        assert_eq!(resp.stock.sku, "LEGO-60316");
        assert!(resp.message.contains("LEGO-60316"));
        assert_eq!(resp.available_locations.len(), 2);
        assert!(STOCK_QUANTITIES.contains(&resp.stock.quantity));
        assert!(resp.estimated_delivery.is_some());
    }
}
