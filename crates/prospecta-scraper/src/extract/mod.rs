//! Price token extraction from an arbitrary storefront page.
//!
//! Six independent strategies run over the same parsed document and append to
//! one observation list:
//!
//! 1. `R$`-prefixed amounts in text nodes ([`text`]).
//! 2. Bare `1.234,50`-shaped amounts in text nodes and in price-labelled
//!    elements, kept only inside a plausible range ([`text`]).
//! 3. Prices split into integer and fraction elements ([`markup`]).
//! 4. `data-price` attributes ([`markup`]).
//! 5. `product:price:amount` meta tags ([`markup`]).
//! 6. `offers[].price` in JSON-LD blocks ([`jsonld`]).
//!
//! The same real price is routinely reported by several strategies; collapsing
//! those is the aggregator's job, not the extractor's.

mod jsonld;
mod markup;
mod text;

use scraper::Html;

/// Which extraction strategy produced an observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriceStrategy {
    CurrencyText,
    BareDecimal,
    SplitMarkup,
    DataAttribute,
    MetaTag,
    JsonLd,
}

/// A single candidate price found on the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceObservation {
    pub value: f64,
    pub strategy: PriceStrategy,
}

impl PriceObservation {
    pub(crate) fn new(value: f64, strategy: PriceStrategy) -> Self {
        Self { value, strategy }
    }
}

/// Runs every strategy over `document` and returns the raw, unfiltered
/// observations.
#[must_use]
pub fn extract_prices(document: &Html) -> Vec<PriceObservation> {
    let mut observations = Vec::new();

    text::extract_text_prices(document, &mut observations);
    text::extract_labelled_element_prices(document, &mut observations);
    markup::extract_split_prices(document, &mut observations);
    markup::extract_data_attribute_prices(document, &mut observations);
    markup::extract_meta_prices(document, &mut observations);
    jsonld::extract_jsonld_prices(document, &mut observations);

    tracing::debug!(
        observations = observations.len(),
        "price extraction finished"
    );
    observations
}
