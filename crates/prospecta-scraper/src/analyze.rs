//! Site analysis pipeline: fetch once, then extract prices and classify the
//! profile from the same parsed document.

use prospecta_core::{AnalysisStatus, PriceSummary, ProfileReport};
use scraper::Html;

use crate::aggregate::aggregate_prices;
use crate::client::PageFetcher;
use crate::document::visible_text;
use crate::extract::extract_prices;
use crate::profile::classify_profile;

/// Outcome of analyzing one company website.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteAnalysis {
    pub status: AnalysisStatus,
    pub profile: ProfileReport,
    pub prices: PriceSummary,
}

impl SiteAnalysis {
    /// Neutral result for a site that could not be fetched.
    #[must_use]
    pub fn fetch_failed() -> Self {
        Self {
            status: AnalysisStatus::FetchFailed,
            profile: ProfileReport::undefined(),
            prices: PriceSummary::empty(),
        }
    }
}

/// Analyzes an already-fetched HTML document.
///
/// HTML parsing is error-tolerant, so any input produces a result.
#[must_use]
pub fn analyze_html(html: &str) -> SiteAnalysis {
    let document = Html::parse_document(html);

    let observations = extract_prices(&document);
    let profile = classify_profile(&visible_text(&document));
    let prices = aggregate_prices(&observations);

    SiteAnalysis {
        status: AnalysisStatus::Completed,
        profile,
        prices,
    }
}

/// Fetches `url` and analyzes it.
///
/// Never fails: a fetch error is logged and reported as
/// [`AnalysisStatus::FetchFailed`] with an undefined profile and no prices.
pub async fn analyze_site(fetcher: &PageFetcher, url: &str) -> SiteAnalysis {
    let html = match fetcher.fetch_html(url).await {
        Ok(html) => html,
        Err(error) => {
            tracing::warn!(url, %error, "could not fetch site; returning neutral analysis");
            return SiteAnalysis::fetch_failed();
        }
    };

    let analysis = analyze_html(&html);
    if analysis.prices.is_empty() {
        tracing::debug!(url, "no prices found; page may render them client-side");
    }
    tracing::info!(
        url,
        profile = %analysis.profile.profile,
        terms = analysis.profile.detected_terms.len(),
        prices = analysis.prices.count,
        "site analyzed"
    );
    analysis
}
