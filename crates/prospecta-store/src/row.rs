//! Mapping between [`AnalysisResult`] and rows of the analysis file.

use chrono::NaiveDateTime;
use csv::StringRecord;
use prospecta_core::analysis::ANALYZED_AT_FORMAT;
use prospecta_core::{AnalysisResult, Profile};

/// Column order of the analysis file.
pub const COLUMNS: [&str; 11] = [
    "cnpj",
    "razao_social",
    "data_analise",
    "url_site",
    "perfil",
    "termos_detectados",
    "quantidade_precos",
    "preco_minimo",
    "preco_maximo",
    "preco_medio",
    "precos",
];

/// Serializes a record in [`COLUMNS`] order. List fields become JSON arrays.
pub(crate) fn to_row(record: &AnalysisResult) -> Result<[String; 11], serde_json::Error> {
    Ok([
        record.company_id.clone(),
        record.legal_name.clone(),
        record.analyzed_at_display(),
        record.source_url.clone(),
        record.profile.label().to_owned(),
        serde_json::to_string(&record.detected_terms)?,
        record.price_count.to_string(),
        record.price_min.to_string(),
        record.price_max.to_string(),
        record.price_mean.to_string(),
        serde_json::to_string(&record.prices)?,
    ])
}

/// Header positions of a file being read. Columns may appear in any order and
/// only `cnpj` is mandatory; missing columns read as their defaults.
pub(crate) struct ColumnIndex {
    positions: [Option<usize>; 11],
}

impl ColumnIndex {
    /// Returns `None` when the header has no `cnpj` column.
    pub(crate) fn from_headers(headers: &StringRecord) -> Option<Self> {
        let mut positions = [None; 11];
        for (slot, name) in positions.iter_mut().zip(COLUMNS) {
            *slot = headers.iter().position(|h| h.trim() == name);
        }
        positions[0]?;
        Some(Self { positions })
    }

    fn get<'r>(&self, raw: &'r StringRecord, column: usize) -> &'r str {
        self.positions[column]
            .and_then(|idx| raw.get(idx))
            .map_or("", str::trim)
    }

    /// Builds a record from a data row. Rows with an empty `cnpj` are dropped;
    /// malformed values fall back to zero, empty lists, or an undefined profile.
    pub(crate) fn parse(&self, raw: &StringRecord) -> Option<AnalysisResult> {
        let company_id = self.get(raw, 0);
        if company_id.is_empty() {
            return None;
        }

        let analyzed_at =
            NaiveDateTime::parse_from_str(self.get(raw, 2), ANALYZED_AT_FORMAT).unwrap_or_else(
                |error| {
                    tracing::debug!(company_id, %error, "unparseable data_analise");
                    NaiveDateTime::default()
                },
            );

        let detected_terms: Vec<String> = parse_json_list(self.get(raw, 5));
        let prices: Vec<f64> = parse_json_list(self.get(raw, 10));

        Some(AnalysisResult {
            company_id: company_id.to_owned(),
            legal_name: self.get(raw, 1).to_owned(),
            analyzed_at,
            source_url: self.get(raw, 3).to_owned(),
            profile: Profile::from_label(self.get(raw, 4)),
            detected_terms,
            // Derived from the list so the count can never disagree with it.
            price_count: prices.len(),
            price_min: parse_number(self.get(raw, 7)),
            price_max: parse_number(self.get(raw, 8)),
            price_mean: parse_number(self.get(raw, 9)),
            prices,
        })
    }
}

fn parse_number(raw: &str) -> f64 {
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

fn parse_json_list<T: serde::de::DeserializeOwned>(raw: &str) -> Vec<T> {
    if raw.is_empty() {
        return Vec::new();
    }
    serde_json::from_str(raw).unwrap_or_default()
}
