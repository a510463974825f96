//! Folding raw price observations into a [`PriceSummary`].

use prospecta_core::PriceSummary;

use crate::extract::PriceObservation;
use crate::parse::round_cents;

/// Values at or below this are never prices (counts, phone digits, sizes).
pub const NOISE_THRESHOLD: f64 = 5.0;

/// Filters, deduplicates and summarizes the observations from one page.
///
/// Deduplication is by exact value: `49.9` reported by three strategies counts
/// once, while `49.9` and `49.90000001` stay distinct. The returned price list
/// is sorted ascending and unrounded; `min`, `max` and `mean` are rounded to
/// cents. No observations above the threshold gives [`PriceSummary::empty`].
#[must_use]
pub fn aggregate_prices(observations: &[PriceObservation]) -> PriceSummary {
    let mut prices: Vec<f64> = observations
        .iter()
        .map(|o| o.value)
        .filter(|v| *v > NOISE_THRESHOLD)
        .collect();
    prices.sort_by(f64::total_cmp);
    prices.dedup();

    let (Some(&min), Some(&max)) = (prices.first(), prices.last()) else {
        return PriceSummary::empty();
    };

    #[allow(clippy::cast_precision_loss)]
    let mean = prices.iter().sum::<f64>() / prices.len() as f64;

    PriceSummary {
        count: prices.len(),
        min: round_cents(min),
        max: round_cents(max),
        mean: round_cents(mean),
        prices,
    }
}
