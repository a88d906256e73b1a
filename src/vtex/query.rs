//! Persisted-query URL construction for the VTEX GraphQL endpoint.
//!
//! No network calls happen here: given an operation name, its fixed query
//! hash and a variables payload, `build_url` deterministically produces the
//! outbound URL. Variables travel base64-encoded inside the `extensions`
//! query parameter, the way the VTEX store front-end sends them.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde_json::{json, Value};

pub const VTEX_BASE_URL: &str = "https://www.juguetron.mx/_v/segment/graphql/v1";

/// Storefront base for canonical product URLs (`<base>/<linkText>/p`).
pub const STOREFRONT_BASE_URL: &str = "https://www.juguetron.mx";

pub const AUTOCOMPLETE_OPERATION: &str = "autocompleteSearchSuggestions";
pub const PRODUCT_SUGGESTIONS_OPERATION: &str = "productSuggestions";

// Persisted-query hashes are opaque server-known constants; never recompute.
pub const AUTOCOMPLETE_HASH: &str =
    "069177eb2c038ccb948b55ca406e13189adcb5addcb00c25a8400450d20e0108";
pub const PRODUCT_SUGGESTIONS_HASH: &str =
    "3eca26a431d4646a8bbce2644b78d3ca734bf8b4ba46afe4269621b64b0fb67d";

const PERSISTED_QUERY_SENDER: &str = "vtex.store-resources@0.x";
const PERSISTED_QUERY_PROVIDER: &str = "vtex.search-graphql@0.x";

/// Variables for the autocomplete leg.
pub fn autocomplete_variables(term: &str) -> Value {
    json!({ "fullText": term })
}

/// Variables for the product-suggestions leg. Everything except `fullText`
/// is fixed, mirroring what the storefront itself sends.
pub fn product_variables(term: &str) -> Value {
    json!({
        "fullText": term,
        "productOriginVtex": true,
        "simulationBehavior": "default",
        "hideUnavailableItems": false,
        "advertisementOptions": {
            "showSponsored": true,
            "sponsoredCount": 2,
            "repeatSponsoredProducts": false,
            "advertisementPlacement": "autocorrect"
        },
        "count": 12,
        "shippingOptions": [],
        "variant": null,
        "origin": "autocorrect"
    })
}

fn encode_variables(variables: &Value) -> String {
    STANDARD.encode(variables.to_string())
}

/// Build the full upstream URL for one leg.
pub fn build_url(operation_name: &str, hash: &str, variables: &Value) -> String {
    build_url_for(VTEX_BASE_URL, operation_name, hash, variables)
}

/// Same construction against an arbitrary endpoint; lets tests stand a local
/// server in for the upstream host.
pub(crate) fn build_url_for(
    base_url: &str,
    operation_name: &str,
    hash: &str,
    variables: &Value,
) -> String {
    let extensions = json!({
        "persistedQuery": {
            "version": 1,
            "sha256Hash": hash,
            "sender": PERSISTED_QUERY_SENDER,
            "provider": PERSISTED_QUERY_PROVIDER,
        },
        "variables": encode_variables(variables),
    });

    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("workspace", "master")
        .append_pair("maxAge", "medium")
        .append_pair("domain", "store")
        .append_pair("locale", "es-MX")
        .append_pair("operationName", operation_name)
        .append_pair("extensions", &extensions.to_string())
        .finish();

    format!("{base_url}?{query}")
}
