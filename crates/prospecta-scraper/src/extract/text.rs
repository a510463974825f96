//! Strategies 1 and 2: amounts written out in page text.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};

use super::{PriceObservation, PriceStrategy};
use crate::document::{element_text, text_nodes};
use crate::parse::parse_brl_amount;

static CURRENCY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"R\$\s*(\d[\d.]*,\d{2})").expect("valid currency regex"));
static BARE_DECIMAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d[\d.]*,\d{2}").expect("valid decimal regex"));
/// `10x`, `3 x`, ... installment multipliers. Input is pre-lowercased.
static INSTALLMENT_COUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{1,2}\s?x\b").expect("valid installment regex"));
static LABELLED_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("[class], [id]").expect("valid selector"));

const INSTALLMENT_MARKERS: [&str; 3] = ["juros", "parcela", "vezes"];
const PRICE_LABELS: [&str; 2] = ["price", "valor"];

/// Bare amounts outside this open interval are phone fragments, years, or
/// outliers rather than product prices.
const BARE_MIN_EXCLUSIVE: f64 = 5.0;
const BARE_MAX_EXCLUSIVE: f64 = 50_000.0;

/// Returns `true` when the text describes an installment plan ("10x sem juros",
/// "3 parcelas de"), whose amounts are per-installment, not full prices.
pub(super) fn is_installment_text(text: &str) -> bool {
    let lower = text.to_lowercase();
    INSTALLMENT_MARKERS.iter().any(|m| lower.contains(*m)) || INSTALLMENT_COUNT_RE.is_match(&lower)
}

fn is_digit_at(text: &str, idx: usize) -> bool {
    text.as_bytes().get(idx).is_some_and(u8::is_ascii_digit)
}

fn is_digit_before(text: &str, idx: usize) -> bool {
    idx > 0 && is_digit_at(text, idx - 1)
}

/// `R$ 1.234,50` amounts in a single chunk of text.
fn currency_amounts(text: &str) -> Vec<f64> {
    CURRENCY_RE
        .captures_iter(text)
        .filter_map(|cap| cap.get(1))
        .filter(|m| !is_digit_at(text, m.end()))
        .filter_map(|m| parse_brl_amount(m.as_str()))
        .collect()
}

/// `1.234,50` amounts without a currency symbol, range-filtered.
fn bare_amounts(text: &str) -> Vec<f64> {
    BARE_DECIMAL_RE
        .find_iter(text)
        .filter(|m| !is_digit_before(text, m.start()) && !is_digit_at(text, m.end()))
        .filter_map(|m| parse_brl_amount(m.as_str()))
        .filter(|v| *v > BARE_MIN_EXCLUSIVE && *v < BARE_MAX_EXCLUSIVE)
        .collect()
}

/// Runs the currency-prefixed and bare-decimal patterns over every visible
/// text node that is not installment text.
pub(super) fn extract_text_prices(document: &Html, out: &mut Vec<PriceObservation>) {
    for node in text_nodes(document) {
        if is_installment_text(node) {
            tracing::debug!(text = node.trim(), "skipping installment text");
            continue;
        }
        out.extend(
            currency_amounts(node)
                .into_iter()
                .map(|v| PriceObservation::new(v, PriceStrategy::CurrencyText)),
        );
        out.extend(
            bare_amounts(node)
                .into_iter()
                .map(|v| PriceObservation::new(v, PriceStrategy::BareDecimal)),
        );
    }
}

fn has_price_label(value: Option<&str>) -> bool {
    value.is_some_and(|v| {
        let lower = v.to_lowercase();
        PRICE_LABELS.iter().any(|label| lower.contains(*label))
    })
}

/// Runs the bare-decimal pattern over the text of elements whose `class` or
/// `id` mentions a price. Catches amounts split across child nodes, which the
/// per-node pass cannot see.
pub(super) fn extract_labelled_element_prices(document: &Html, out: &mut Vec<PriceObservation>) {
    for element in document.select(&LABELLED_SELECTOR) {
        let attrs = element.value();
        if !has_price_label(attrs.attr("class")) && !has_price_label(attrs.attr("id")) {
            continue;
        }
        let text = element_text(element);
        if text.is_empty() || is_installment_text(&text) {
            continue;
        }
        out.extend(
            bare_amounts(&text)
                .into_iter()
                .map(|v| PriceObservation::new(v, PriceStrategy::BareDecimal)),
        );
    }
}
