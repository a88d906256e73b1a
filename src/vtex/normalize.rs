//! Normalization of raw VTEX search responses.
//!
//! The upstream schema has shifted several times, so every attribute is
//! resolved through an explicit ordered list of candidate fields. Missing or
//! malformed substructures contribute nothing; both entry points are total
//! functions that degrade to partial or empty output instead of erroring.

use serde_json::{Map, Value};
use tracing::debug;

use crate::api::models::Product;
use crate::vtex::query::STOREFRONT_BASE_URL;

pub const MAX_SUGGESTIONS: usize = 10;

// Candidate upstream fields per attribute, tried in order.
const ID_FIELDS: [&str; 3] = ["productId", "cacheId", "id"];
const NAME_FIELDS: [&str; 2] = ["productName", "name"];
const SUGGESTION_NAME_FIELDS: [&str; 2] = ["name", "productName"];
const DESCRIPTION_FIELDS: [&str; 2] = ["description", "shortDescription"];

/// Extract unique autocomplete suggestions, at most [`MAX_SUGGESTIONS`].
///
/// Collects `term` fields from `searches[]` and resolvable product names from
/// `productSuggestions[]` under `data.autocompleteSearchSuggestions`.
/// First-seen order is kept so output is deterministic for a given input.
pub fn parse_suggestions(data: &Value) -> Vec<String> {
    let mut suggestions: Vec<String> = Vec::new();

    let autocomplete = match data
        .get("data")
        .and_then(|d| d.get("autocompleteSearchSuggestions"))
    {
        Some(node) => node,
        None => return suggestions,
    };

    if let Some(searches) = autocomplete.get("searches").and_then(Value::as_array) {
        for search in searches {
            if let Some(term) = search.get("term").and_then(Value::as_str) {
                push_unique(&mut suggestions, term);
            }
        }
    }

    if let Some(products) = autocomplete
        .get("productSuggestions")
        .and_then(Value::as_array)
    {
        for product in products {
            if let Some(obj) = product.as_object() {
                if let Some(name) = first_string(obj, &SUGGESTION_NAME_FIELDS) {
                    push_unique(&mut suggestions, name);
                }
            }
        }
    }

    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

/// The known container shapes for the raw product list. Resolved once before
/// any per-field extraction so the fallback order stays auditable.
enum ProductSource<'a> {
    /// `data.productSuggestions` — current schema, record- or list-valued.
    ProductSuggestions(&'a [Value]),
    /// `data.searchResult` — older schema, record- or list-valued.
    SearchResult(&'a [Value]),
}

impl<'a> ProductSource<'a> {
    fn records(&self) -> &'a [Value] {
        match self {
            ProductSource::ProductSuggestions(records) => records,
            ProductSource::SearchResult(records) => records,
        }
    }

    fn locate(result: &'a Value) -> Option<Self> {
        if let Some(node) = result.get("productSuggestions") {
            if let Some(list) = node.get("products").and_then(Value::as_array) {
                return Some(ProductSource::ProductSuggestions(list));
            }
            if let Some(list) = node.as_array() {
                return Some(ProductSource::ProductSuggestions(list));
            }
        }
        if let Some(node) = result.get("searchResult") {
            if let Some(list) = node.get("products").and_then(Value::as_array) {
                return Some(ProductSource::SearchResult(list));
            }
            if let Some(list) = node.as_array() {
                return Some(ProductSource::SearchResult(list));
            }
        }
        None
    }
}

/// Extract normalized products from a raw product-suggestions response.
///
/// Records without a resolvable name are dropped; everything else degrades
/// field-by-field to `None`.
pub fn parse_products(data: &Value, query: &str) -> Vec<Product> {
    let result = match data.get("data") {
        Some(r) => r,
        None => return Vec::new(),
    };

    let raw_products = match ProductSource::locate(result) {
        Some(source) => source.records(),
        None => {
            debug!(query, "no recognizable product container in upstream response");
            return Vec::new();
        }
    };

    let mut products: Vec<Product> = Vec::new();
    for raw_product in raw_products {
        let obj = match raw_product.as_object() {
            Some(o) => o,
            None => continue,
        };
        if let Some(product) = normalize_product(obj) {
            products.push(product);
        }
    }

    debug!(query, count = products.len(), "normalized upstream products");
    products
}

fn normalize_product(obj: &Map<String, Value>) -> Option<Product> {
    // Name is the only mandatory field; nameless records are excluded.
    let name = first_string(obj, &NAME_FIELDS)?.to_string();

    Some(Product {
        id: first_scalar(obj, &ID_FIELDS).unwrap_or_default(),
        name,
        description: first_string(obj, &DESCRIPTION_FIELDS).map(str::to_string),
        price: resolve_price(obj).map(format_price),
        image_url: resolve_image_url(obj),
        product_url: resolve_product_url(obj),
        brand: resolve_brand(obj),
        category: resolve_category(obj),
    })
}

fn push_unique(out: &mut Vec<String>, candidate: &str) {
    if !out.iter().any(|existing| existing == candidate) {
        out.push(candidate.to_string());
    }
}

/// First non-empty string among the candidate keys.
fn first_string<'a>(obj: &'a Map<String, Value>, candidates: &[&str]) -> Option<&'a str> {
    for key in candidates {
        if let Some(s) = obj.get(*key).and_then(Value::as_str) {
            if !s.is_empty() {
                return Some(s);
            }
        }
    }
    None
}

/// Like [`first_string`] but also accepts numeric ids, stringified.
fn first_scalar(obj: &Map<String, Value>, candidates: &[&str]) -> Option<String> {
    for key in candidates {
        match obj.get(*key) {
            Some(Value::String(s)) if !s.is_empty() => return Some(s.clone()),
            Some(Value::Number(n)) => return Some(n.to_string()),
            _ => {}
        }
    }
    None
}

/// Price candidates in order: `priceRange.sellingPrice.lowPrice`, then
/// `.highPrice`, then `sellingPrice` itself as a bare number, then
/// `offer.offerPrice`. No candidate means no price — never `$0.00`.
fn resolve_price(obj: &Map<String, Value>) -> Option<f64> {
    selling_price(obj).or_else(|| offer_price(obj))
}

fn selling_price(obj: &Map<String, Value>) -> Option<f64> {
    let selling = obj.get("priceRange")?.get("sellingPrice")?;
    match selling {
        Value::Object(range) => range
            .get("lowPrice")
            .and_then(Value::as_f64)
            .or_else(|| range.get("highPrice").and_then(Value::as_f64)),
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}

fn offer_price(obj: &Map<String, Value>) -> Option<f64> {
    obj.get("offer")?.get("offerPrice")?.as_f64()
}

pub(crate) fn format_price(value: f64) -> String {
    format!("${value:.2} MXN")
}

/// First image of the first item, falling back to the `image_link` property.
fn resolve_image_url(obj: &Map<String, Value>) -> Option<String> {
    let from_items = obj
        .get("items")
        .and_then(Value::as_array)
        .and_then(|items| items.first())
        .and_then(|item| item.get("images"))
        .and_then(Value::as_array)
        .and_then(|images| images.first())
        .and_then(|image| image.get("imageUrl"))
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty());

    match from_items {
        Some(url) => Some(url.to_string()),
        None => property_value(obj, "image_link"),
    }
}

/// `linkText` builds a clean storefront URL; `link` and the `link` property
/// are raw fallbacks.
fn resolve_product_url(obj: &Map<String, Value>) -> Option<String> {
    if let Some(link_text) = obj
        .get("linkText")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
    {
        return Some(format!("{STOREFRONT_BASE_URL}/{link_text}/p"));
    }
    // Unlike the other resolvers, presence alone settles `link`: an empty
    // string still wins, and only a missing key falls through to properties.
    if let Some(link) = obj.get("link").and_then(Value::as_str) {
        return Some(link.to_string());
    }
    property_value(obj, "link")
}

fn resolve_brand(obj: &Map<String, Value>) -> Option<String> {
    match obj
        .get("brand")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
    {
        Some(brand) => Some(brand.to_string()),
        None => property_value(obj, "brand"),
    }
}

/// Most specific category: last entry of `categories`, slashes stripped,
/// final path segment.
fn resolve_category(obj: &Map<String, Value>) -> Option<String> {
    let categories = obj.get("categories")?.as_array()?;
    let last = categories.last()?.as_str()?;
    let segment = last.trim_matches('/').rsplit('/').next()?;
    if segment.is_empty() {
        None
    } else {
        Some(segment.to_string())
    }
}

/// First value of the named entry in the `properties` list.
fn property_value(obj: &Map<String, Value>, name: &str) -> Option<String> {
    let properties = obj.get("properties")?.as_array()?;
    for prop in properties {
        if prop.get("name").and_then(Value::as_str) == Some(name) {
            if let Some(first) = prop
                .get("values")
                .and_then(Value::as_array)
                .and_then(|values| values.first())
                .and_then(Value::as_str)
            {
                return Some(first.to_string());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn suggestions_merge_terms_and_product_names() {
        let data = json!({
            "data": {
                "autocompleteSearchSuggestions": {
                    "searches": [
                        { "term": "lego" },
                        { "term": "lego city" }
                    ],
                    "productSuggestions": [
                        { "name": "LEGO City Police Station" },
                        { "productName": "LEGO Creator" },
                        { "name": "", "productName": "LEGO Friends" }
                    ]
                }
            }
        });

        let suggestions = parse_suggestions(&data);
        assert_eq!(
            suggestions,
            vec![
                "lego",
                "lego city",
                "LEGO City Police Station",
                "LEGO Creator",
                "LEGO Friends"
            ]
        );
    }

    #[test]
    fn suggestions_are_unique_and_capped_at_ten() {
        let searches: Vec<Value> = (0..30)
            .map(|i| json!({ "term": format!("term {}", i % 15) }))
            .collect();
        let data = json!({
            "data": { "autocompleteSearchSuggestions": { "searches": searches } }
        });

        let suggestions = parse_suggestions(&data);
        assert_eq!(suggestions.len(), MAX_SUGGESTIONS);
        let mut deduped = suggestions.clone();
        deduped.dedup();
        assert_eq!(deduped, suggestions);
    }

    #[test]
    fn malformed_suggestion_shapes_yield_empty() {
        for data in [
            json!({}),
            json!({ "data": {} }),
            json!({ "data": { "autocompleteSearchSuggestions": null } }),
            json!({ "data": { "autocompleteSearchSuggestions": { "searches": "oops" } } }),
            json!({ "data": { "autocompleteSearchSuggestions": { "productSuggestions": [1, 2] } } }),
            json!([1, 2, 3]),
        ] {
            assert!(parse_suggestions(&data).is_empty(), "input: {data}");
        }
    }

    #[test]
    fn products_resolve_from_the_current_schema() {
        let data = json!({
            "data": {
                "productSuggestions": {
                    "products": [{
                        "productId": "12345",
                        "productName": "LEGO City Police Station",
                        "description": "Estación de policía",
                        "brand": "LEGO",
                        "linkText": "lego-city-police-station",
                        "categories": ["/Juguetes/", "/Juguetes/Lego/"],
                        "priceRange": {
                            "sellingPrice": { "lowPrice": 149.5, "highPrice": 199.0 }
                        },
                        "items": [{
                            "images": [{ "imageUrl": "https://img.example/1.jpg" }]
                        }]
                    }]
                }
            }
        });

        let products = parse_products(&data, "lego");
        assert_eq!(products.len(), 1);
        let p = &products[0];
        assert_eq!(p.id, "12345");
        assert_eq!(p.name, "LEGO City Police Station");
        assert_eq!(p.description.as_deref(), Some("Estación de policía"));
        assert_eq!(p.price.as_deref(), Some("$149.50 MXN"));
        assert_eq!(p.image_url.as_deref(), Some("https://img.example/1.jpg"));
        assert_eq!(
            p.product_url.as_deref(),
            Some("https://www.juguetron.mx/lego-city-police-station/p")
        );
        assert_eq!(p.brand.as_deref(), Some("LEGO"));
        assert_eq!(p.category.as_deref(), Some("Lego"));
    }

    #[test]
    fn products_resolve_from_legacy_search_result_list() {
        let data = json!({
            "data": {
                "searchResult": [
                    { "id": 777, "name": "Hot Wheels Pista" },
                    "not-a-record",
                    { "cacheId": "c-1", "productName": "Barbie Casa" }
                ]
            }
        });

        let products = parse_products(&data, "x");
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, "777");
        assert_eq!(products[0].name, "Hot Wheels Pista");
        assert_eq!(products[1].id, "c-1");
    }

    #[test]
    fn nameless_records_are_dropped_not_defaulted() {
        let data = json!({
            "data": {
                "productSuggestions": {
                    "products": [
                        { "productId": "1" },
                        { "productId": "2", "productName": "" },
                        { "productId": "3", "name": "Con nombre" }
                    ]
                }
            }
        });

        let products = parse_products(&data, "x");
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Con nombre");
        assert!(products.iter().all(|p| !p.name.is_empty()));
    }

    #[test]
    fn missing_price_candidates_leave_price_absent() {
        let data = json!({
            "data": {
                "productSuggestions": {
                    "products": [{
                        "productName": "Sin precio",
                        "priceRange": { "sellingPrice": {} },
                        "offer": { "offerPrice": "not a number" }
                    }]
                }
            }
        });

        let products = parse_products(&data, "x");
        assert_eq!(products[0].price, None);
    }

    #[test]
    fn price_falls_back_to_high_price_then_scalar_then_offer() {
        let high_only = json!({
            "data": { "productSuggestions": { "products": [{
                "productName": "A",
                "priceRange": { "sellingPrice": { "highPrice": 80.0 } }
            }] } }
        });
        assert_eq!(
            parse_products(&high_only, "x")[0].price.as_deref(),
            Some("$80.00 MXN")
        );

        let scalar = json!({
            "data": { "productSuggestions": { "products": [{
                "productName": "B",
                "priceRange": { "sellingPrice": 42.0 }
            }] } }
        });
        assert_eq!(
            parse_products(&scalar, "x")[0].price.as_deref(),
            Some("$42.00 MXN")
        );

        let offer = json!({
            "data": { "productSuggestions": { "products": [{
                "productName": "C",
                "offer": { "offerPrice": 99.9 }
            }] } }
        });
        assert_eq!(
            parse_products(&offer, "x")[0].price.as_deref(),
            Some("$99.90 MXN")
        );
    }

    #[test]
    fn two_decimal_price_formatting() {
        assert_eq!(format_price(149.5), "$149.50 MXN");
        assert_eq!(format_price(899.0), "$899.00 MXN");
        assert_eq!(format_price(0.555), "$0.56 MXN");
    }

    #[test]
    fn image_link_and_brand_fall_back_to_properties() {
        let data = json!({
            "data": {
                "productSuggestions": {
                    "products": [{
                        "productName": "Con properties",
                        "properties": [
                            { "name": "color", "values": ["rojo"] },
                            { "name": "image_link", "values": ["https://img.example/p.jpg"] },
                            { "name": "brand", "values": ["Mattel"] },
                            { "name": "link", "values": ["https://tienda.example/p"] }
                        ]
                    }]
                }
            }
        });

        let p = &parse_products(&data, "x")[0];
        assert_eq!(p.image_url.as_deref(), Some("https://img.example/p.jpg"));
        assert_eq!(p.brand.as_deref(), Some("Mattel"));
        assert_eq!(p.product_url.as_deref(), Some("https://tienda.example/p"));
    }

    #[test]
    fn link_text_wins_over_raw_link() {
        let data = json!({
            "data": {
                "productSuggestions": {
                    "products": [{
                        "productName": "X",
                        "linkText": "x-product",
                        "link": "https://raw.example/x"
                    }]
                }
            }
        });
        assert_eq!(
            parse_products(&data, "x")[0].product_url.as_deref(),
            Some("https://www.juguetron.mx/x-product/p")
        );
    }

    #[test]
    fn present_link_wins_even_when_empty() {
        let data = json!({
            "data": {
                "productSuggestions": {
                    "products": [{
                        "productName": "X",
                        "link": "",
                        "properties": [
                            { "name": "link", "values": ["https://tienda.example/x"] }
                        ]
                    }]
                }
            }
        });
        assert_eq!(parse_products(&data, "x")[0].product_url.as_deref(), Some(""));
    }

    #[test]
    fn category_uses_most_specific_segment() {
        let data = json!({
            "data": {
                "productSuggestions": {
                    "products": [{
                        "productName": "X",
                        "categories": ["/Juguetes/Lego/"]
                    }]
                }
            }
        });
        assert_eq!(parse_products(&data, "x")[0].category.as_deref(), Some("Lego"));

        let bare_slash = json!({
            "data": {
                "productSuggestions": {
                    "products": [{ "productName": "Y", "categories": ["/"] }]
                }
            }
        });
        assert_eq!(parse_products(&bare_slash, "x")[0].category, None);
    }

    #[test]
    fn unknown_container_shapes_yield_empty() {
        for data in [
            json!({ "data": {} }),
            json!({ "data": { "productSuggestions": { "products": "oops" } } }),
            json!({ "data": { "somethingElse": [] } }),
            json!("not even an object"),
        ] {
            assert!(parse_products(&data, "x").is_empty(), "input: {data}");
        }
    }

    #[test]
    fn invalid_product_suggestions_falls_through_to_search_result() {
        let data = json!({
            "data": {
                "productSuggestions": { "unexpected": true },
                "searchResult": { "products": [{ "productName": "Fallback" }] }
            }
        });
        let products = parse_products(&data, "x");
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Fallback");
    }
}
