pub mod aggregate;
pub mod analyze;
pub mod client;
pub mod document;
pub mod error;
pub mod extract;
pub mod parse;
pub mod profile;

pub use aggregate::aggregate_prices;
pub use analyze::{analyze_html, analyze_site, SiteAnalysis};
pub use client::{normalize_site_url, PageFetcher};
pub use error::FetchError;
pub use extract::{extract_prices, PriceObservation, PriceStrategy};
pub use profile::classify_profile;
