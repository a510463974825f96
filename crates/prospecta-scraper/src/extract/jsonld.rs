//! Strategy 6: `offers` prices in schema.org JSON-LD blocks.

use std::sync::LazyLock;

use scraper::{Html, Selector};
use serde_json::Value;

use super::{PriceObservation, PriceStrategy};
use crate::parse::parse_decimal;

static JSONLD_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"script[type="application/ld+json"]"#).expect("valid selector")
});

/// Parses every JSON-LD block and reports each `offers.price`.
///
/// Blocks that are not valid JSON are skipped on their own; the rest of the
/// page is still processed.
pub(super) fn extract_jsonld_prices(document: &Html, out: &mut Vec<PriceObservation>) {
    for script in document.select(&JSONLD_SELECTOR) {
        let raw: String = script.text().collect();
        let raw = raw.trim();
        if raw.is_empty() {
            continue;
        }

        let value: Value = match serde_json::from_str(raw) {
            Ok(v) => v,
            Err(error) => {
                tracing::debug!(%error, "skipping malformed JSON-LD block");
                continue;
            }
        };

        for item in jsonld_candidates(value) {
            out.extend(
                offer_prices(&item)
                    .into_iter()
                    .map(|v| PriceObservation::new(v, PriceStrategy::JsonLd)),
            );
        }
    }
}

/// The top-level node(s) of a block, plus anything inside a `@graph` container.
fn jsonld_candidates(value: Value) -> Vec<Value> {
    let mut candidates = match value {
        Value::Array(items) => items,
        other => vec![other],
    };

    let graph_items: Vec<Value> = candidates
        .iter()
        .filter_map(|item| item.get("@graph").and_then(Value::as_array))
        .flatten()
        .cloned()
        .collect();
    candidates.extend(graph_items);

    candidates
}

/// Prices from an item's `offers`, which may be a single object or a list.
fn offer_prices(item: &Value) -> Vec<f64> {
    match item.get("offers") {
        Some(offer @ Value::Object(_)) => price_of(offer).into_iter().collect(),
        Some(Value::Array(offers)) => offers.iter().filter_map(price_of).collect(),
        _ => Vec::new(),
    }
}

/// `price` may be a JSON number or a numeric string.
fn price_of(offer: &Value) -> Option<f64> {
    match offer.get("price")? {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => parse_decimal(s),
        _ => None,
    }
}
