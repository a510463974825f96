//! Website analysis results: commercial profile plus price summary.

use chrono::NaiveDateTime;
use serde::Serialize;

/// Timestamp layout used wherever an analysis date is shown or persisted.
pub const ANALYZED_AT_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Coarse business model inferred from a company's website text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Profile {
    #[serde(rename = "Atacado")]
    Wholesale,
    #[serde(rename = "Varejo")]
    Retail,
    #[default]
    #[serde(rename = "Indefinido")]
    Undefined,
}

impl Profile {
    /// Label used by the sales team and by the persisted analysis file.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Profile::Wholesale => "Atacado",
            Profile::Retail => "Varejo",
            Profile::Undefined => "Indefinido",
        }
    }

    /// Parses a persisted label. Unknown labels map to [`Profile::Undefined`].
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "Atacado" => Profile::Wholesale,
            "Varejo" => Profile::Retail,
            _ => Profile::Undefined,
        }
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Output of the profile classifier.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfileReport {
    pub profile: Profile,
    /// Keywords found in the page text, in keyword-list order.
    pub detected_terms: Vec<String>,
}

impl ProfileReport {
    /// Report used when the page could not be fetched or parsed.
    #[must_use]
    pub fn undefined() -> Self {
        Self::default()
    }
}

/// Summary statistics over the deduplicated prices observed on a page.
///
/// `min`, `max` and `mean` are rounded to cents; `prices` keeps the raw values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PriceSummary {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub prices: Vec<f64>,
}

impl PriceSummary {
    /// The neutral summary: no prices, all statistics zero.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Whether the website could actually be analyzed.
///
/// A failed fetch produces the same neutral profile and price summary as a page
/// with nothing in it; this flag keeps the two apart for callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisStatus {
    Completed,
    FetchFailed,
}

impl AnalysisStatus {
    #[must_use]
    pub fn is_completed(self) -> bool {
        matches!(self, AnalysisStatus::Completed)
    }
}

/// Latest commercial analysis stored for one company.
/// Serializes to JSON for `--json` output; the flat file is mapped by hand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    /// CNPJ; the store key.
    pub company_id: String,
    pub legal_name: String,
    pub analyzed_at: NaiveDateTime,
    pub source_url: String,
    pub profile: Profile,
    pub detected_terms: Vec<String>,
    pub price_count: usize,
    pub price_min: f64,
    pub price_max: f64,
    pub price_mean: f64,
    pub prices: Vec<f64>,
}

impl AnalysisResult {
    /// Combines a classifier report and a price summary into a storable record.
    #[must_use]
    pub fn from_analysis(
        company_id: &str,
        legal_name: &str,
        source_url: &str,
        report: ProfileReport,
        summary: PriceSummary,
        analyzed_at: NaiveDateTime,
    ) -> Self {
        Self {
            company_id: company_id.to_owned(),
            legal_name: legal_name.to_owned(),
            analyzed_at,
            source_url: source_url.to_owned(),
            profile: report.profile,
            detected_terms: report.detected_terms,
            price_count: summary.count,
            price_min: summary.min,
            price_max: summary.max,
            price_mean: summary.mean,
            prices: summary.prices,
        }
    }

    /// `analyzed_at` rendered as `DD/MM/YYYY HH:MM:SS`.
    #[must_use]
    pub fn analyzed_at_display(&self) -> String {
        self.analyzed_at.format(ANALYZED_AT_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn sample_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 4, 22)
            .and_then(|d| d.and_hms_opt(16, 31, 5))
            .unwrap()
    }

    #[test]
    fn profile_labels_round_trip() {
        for profile in [Profile::Wholesale, Profile::Retail, Profile::Undefined] {
            assert_eq!(Profile::from_label(profile.label()), profile);
        }
    }

    #[test]
    fn profile_unknown_label_is_undefined() {
        assert_eq!(Profile::from_label("Atacarejo"), Profile::Undefined);
        assert_eq!(Profile::from_label(""), Profile::Undefined);
    }

    #[test]
    fn profile_serializes_with_portuguese_label() {
        let json = serde_json::to_string(&Profile::Wholesale).unwrap();
        assert_eq!(json, "\"Atacado\"");
    }

    #[test]
    fn empty_summary_is_neutral() {
        let summary = PriceSummary::empty();
        assert!(summary.is_empty());
        assert_eq!(summary.min, 0.0);
        assert_eq!(summary.max, 0.0);
        assert_eq!(summary.mean, 0.0);
        assert!(summary.prices.is_empty());
    }

    #[test]
    fn from_analysis_copies_summary_fields() {
        let report = ProfileReport {
            profile: Profile::Retail,
            detected_terms: vec!["varejo".to_owned(), "comprar".to_owned()],
        };
        let summary = PriceSummary {
            count: 2,
            min: 19.9,
            max: 89.9,
            mean: 54.9,
            prices: vec![19.9, 89.9],
        };
        let record = AnalysisResult::from_analysis(
            "12345678000195",
            "Confecções Aurora LTDA",
            "https://aurora.com.br",
            report,
            summary,
            sample_time(),
        );
        assert_eq!(record.company_id, "12345678000195");
        assert_eq!(record.profile, Profile::Retail);
        assert_eq!(record.price_count, record.prices.len());
        assert_eq!(record.price_min, 19.9);
        assert_eq!(record.price_max, 89.9);
        assert_eq!(record.detected_terms, vec!["varejo", "comprar"]);
    }

    #[test]
    fn analyzed_at_display_uses_brazilian_layout() {
        let record = AnalysisResult::from_analysis(
            "1",
            "X",
            "https://x.com.br",
            ProfileReport::undefined(),
            PriceSummary::empty(),
            sample_time(),
        );
        assert_eq!(record.analyzed_at_display(), "22/04/2025 16:31:05");
    }

    #[test]
    fn analysis_result_serializes_profile_label_and_prices() {
        let summary = PriceSummary {
            count: 1,
            min: 59.9,
            max: 59.9,
            mean: 59.9,
            prices: vec![59.9],
        };
        let record = AnalysisResult::from_analysis(
            "12345678000195",
            "Aurora",
            "https://aurora.com.br/",
            ProfileReport {
                profile: Profile::Wholesale,
                detected_terms: vec!["atacado".to_owned()],
            },
            summary,
            sample_time(),
        );
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["company_id"], "12345678000195");
        assert_eq!(json["profile"], "Atacado");
        assert_eq!(json["price_count"], 1);
        assert_eq!(json["prices"], serde_json::json!([59.9]));
        assert_eq!(json["analyzed_at"], "2025-04-22T16:31:05");
    }

    #[test]
    fn analysis_status_completed_flag() {
        assert!(AnalysisStatus::Completed.is_completed());
        assert!(!AnalysisStatus::FetchFailed.is_completed());
    }
}
