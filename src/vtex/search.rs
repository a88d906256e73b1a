//! Per-request search orchestration: build both persisted-query URLs, fetch
//! them concurrently, normalize each body independently.

use reqwest::Client;
use serde_json::Value;
use tracing::warn;

use crate::api::models::SearchResponse;
use crate::vtex::{normalize, query};

/// Run one search against both upstream legs.
///
/// A failed leg (transport error, non-success status, undecodable body)
/// contributes an empty list; it never fails the search as a whole.
pub async fn execute_search(client: &Client, term: &str) -> SearchResponse {
    execute_search_at(client, query::VTEX_BASE_URL, term).await
}

async fn execute_search_at(client: &Client, base_url: &str, term: &str) -> SearchResponse {
    let autocomplete_url = query::build_url_for(
        base_url,
        query::AUTOCOMPLETE_OPERATION,
        query::AUTOCOMPLETE_HASH,
        &query::autocomplete_variables(term),
    );
    let products_url = query::build_url_for(
        base_url,
        query::PRODUCT_SUGGESTIONS_OPERATION,
        query::PRODUCT_SUGGESTIONS_HASH,
        &query::product_variables(term),
    );

    let (autocomplete_body, products_body) = tokio::join!(
        fetch_json(client, &autocomplete_url, "autocomplete"),
        fetch_json(client, &products_url, "productSuggestions"),
    );

    let suggestions = autocomplete_body
        .as_ref()
        .map(normalize::parse_suggestions)
        .unwrap_or_default();
    let products = products_body
        .as_ref()
        .map(|body| normalize::parse_products(body, term))
        .unwrap_or_default();

    SearchResponse {
        query: term.to_string(),
        total_products: products.len(),
        suggestions,
        products,
    }
}

/// Fetch one leg as JSON, degrading every failure mode to `None`.
async fn fetch_json(client: &Client, url: &str, leg: &str) -> Option<Value> {
    let response = match client.get(url).send().await {
        Ok(r) => r,
        Err(e) => {
            warn!(leg, error = %e, "upstream request failed");
            return None;
        }
    };

    if !response.status().is_success() {
        warn!(leg, status = %response.status(), "upstream returned non-success status");
        return None;
    }

    match response.json::<Value>().await {
        Ok(body) => Some(body),
        Err(e) => {
            warn!(leg, error = %e, "upstream body was not valid JSON");
            None
        }
    }
}
