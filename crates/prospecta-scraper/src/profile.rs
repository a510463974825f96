//! Keyword-based commercial profile classification.

use prospecta_core::{Profile, ProfileReport};

/// Terms searched for in the page text, in reporting order.
pub const PROFILE_KEYWORDS: [&str; 8] = [
    "atacado",
    "varejo",
    "revenda",
    "distribuidor",
    "lojista",
    "representante",
    "comprar",
    "venda",
];

const WHOLESALE_TERMS: [&str; 3] = ["atacado", "distribuidor", "revenda"];
const RETAIL_TERMS: [&str; 2] = ["varejo", "comprar"];

/// Classifies a page from its visible text.
///
/// Each keyword is matched as a substring of the lowercased text. Wholesale
/// terms win over retail terms whenever both appear.
#[must_use]
pub fn classify_profile(visible_text: &str) -> ProfileReport {
    let text = visible_text.to_lowercase();

    let detected_terms: Vec<String> = PROFILE_KEYWORDS
        .iter()
        .filter(|term| text.contains(**term))
        .map(|term| (*term).to_owned())
        .collect();

    let has_any = |terms: &[&str]| detected_terms.iter().any(|t| terms.contains(&t.as_str()));

    let profile = if has_any(&WHOLESALE_TERMS) {
        Profile::Wholesale
    } else if has_any(&RETAIL_TERMS) {
        Profile::Retail
    } else {
        Profile::Undefined
    };

    ProfileReport {
        profile,
        detected_terms,
    }
}
