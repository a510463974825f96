//! Strategies 3, 4 and 5: prices carried by markup rather than prose.

use std::sync::LazyLock;

use scraper::{Html, Selector};

use super::{PriceObservation, PriceStrategy};
use crate::document::element_text;
use crate::parse::{parse_decimal, parse_split_amount};

static CLASSED_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("[class]").expect("valid selector"));
static DATA_PRICE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("[data-price]").expect("valid selector"));
static META_PRICE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"meta[property="product:price:amount"]"#).expect("valid selector")
});

/// Pairs `*integer*` / `*fraction*` classed elements positionally
/// (e.g. VTEX `currencyInteger` + `currencyFraction`).
///
/// Only applied when both lists are non-empty and of equal length; otherwise
/// the positional pairing cannot be trusted.
pub(super) fn extract_split_prices(document: &Html, out: &mut Vec<PriceObservation>) {
    let mut integers = Vec::new();
    let mut fractions = Vec::new();

    for element in document.select(&CLASSED_SELECTOR) {
        let Some(class) = element.value().attr("class") else {
            continue;
        };
        let class = class.to_lowercase();
        if class.contains("integer") {
            integers.push(element_text(element));
        } else if class.contains("fraction") {
            fractions.push(element_text(element));
        }
    }

    if integers.is_empty() || integers.len() != fractions.len() {
        if !integers.is_empty() || !fractions.is_empty() {
            tracing::debug!(
                integers = integers.len(),
                fractions = fractions.len(),
                "split price markup is unbalanced; skipping"
            );
        }
        return;
    }

    for (integer, fraction) in integers.iter().zip(&fractions) {
        match parse_split_amount(integer, fraction) {
            Some(value) => out.push(PriceObservation::new(value, PriceStrategy::SplitMarkup)),
            None => tracing::debug!(%integer, %fraction, "unparseable split price"),
        }
    }
}

/// Reads every `data-price` attribute.
pub(super) fn extract_data_attribute_prices(document: &Html, out: &mut Vec<PriceObservation>) {
    for element in document.select(&DATA_PRICE_SELECTOR) {
        let Some(raw) = element.value().attr("data-price") else {
            continue;
        };
        match parse_decimal(raw) {
            Some(value) => out.push(PriceObservation::new(value, PriceStrategy::DataAttribute)),
            None => tracing::debug!(raw, "unparseable data-price attribute"),
        }
    }
}

/// Reads `<meta property="product:price:amount" content="...">` tags.
pub(super) fn extract_meta_prices(document: &Html, out: &mut Vec<PriceObservation>) {
    for element in document.select(&META_PRICE_SELECTOR) {
        let Some(raw) = element.value().attr("content") else {
            continue;
        };
        match parse_decimal(raw) {
            Some(value) => out.push(PriceObservation::new(value, PriceStrategy::MetaTag)),
            None => tracing::debug!(raw, "unparseable product:price:amount meta tag"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(html: &str, f: fn(&Html, &mut Vec<PriceObservation>)) -> Vec<f64> {
        let document = Html::parse_document(html);
        let mut out = Vec::new();
        f(&document, &mut out);
        out.into_iter().map(|o| o.value).collect()
    }

    #[test]
    fn split_markup_pairs_positionally() {
        let html = r#"<body>
            <span class="vtex-currencyInteger">89</span><span class="vtex-currencyFraction">90</span>
            <span class="vtex-currencyInteger">1.299</span><span class="vtex-currencyFraction">00</span>
            </body>"#;
        assert_eq!(run(html, extract_split_prices), vec![89.90, 1299.0]);
    }

    #[test]
    fn split_markup_unbalanced_is_ignored() {
        let html = r#"<body>
            <span class="currencyInteger">89</span><span class="currencyFraction">90</span>
            <span class="currencyInteger">59</span>
            </body>"#;
        assert!(run(html, extract_split_prices).is_empty());
    }

    #[test]
    fn split_markup_skips_unparseable_pair() {
        let html = r#"<body>
            <span class="price-integer">--</span><span class="price-fraction">90</span>
            <span class="price-integer">39</span><span class="price-fraction">90</span>
            </body>"#;
        assert_eq!(run(html, extract_split_prices), vec![39.90]);
    }

    #[test]
    fn data_price_attributes() {
        let html = r#"<body>
            <div data-price="149.90"></div>
            <li data-price="79,90"></li>
            <li data-price=""></li>
            <li data-price="sob consulta"></li>
            </body>"#;
        assert_eq!(run(html, extract_data_attribute_prices), vec![149.90, 79.90]);
    }

    #[test]
    fn meta_price_tags() {
        let html = r#"<html><head>
            <meta property="product:price:amount" content="49.90">
            <meta property="product:price:currency" content="BRL">
            <meta property="og:title" content="Vestido 12,90">
            </head><body></body></html>"#;
        assert_eq!(run(html, extract_meta_prices), vec![49.90]);
    }
}
