//! `analyze`, `show` and `list` command handlers.

use prospecta_core::{format_cnpj, AnalysisResult, AppConfig};
use prospecta_scraper::{analyze_site, normalize_site_url, PageFetcher};
use prospecta_store::AnalysisStore;

/// Analyzes one company website and stores the result.
///
/// A site that cannot be fetched is reported but not stored, so an earlier
/// successful analysis of the same company survives.
///
/// # Errors
///
/// Returns an error if the URL is unusable, the HTTP client cannot be built,
/// or the store cannot be written.
pub(crate) async fn run_analyze(
    config: &AppConfig,
    store: &AnalysisStore,
    cnpj: &str,
    name: &str,
    raw_url: &str,
) -> anyhow::Result<()> {
    let url = normalize_site_url(raw_url)?;
    let fetcher = PageFetcher::new(config.fetch_timeout_secs, &config.fetch_user_agent)?;

    let analysis = analyze_site(&fetcher, &url).await;
    if !analysis.status.is_completed() {
        println!(
            "could not fetch {url}; previous analysis for {} left unchanged",
            format_cnpj(cnpj)
        );
        return Ok(());
    }

    let record = AnalysisResult::from_analysis(
        cnpj,
        name,
        &url,
        analysis.profile,
        analysis.prices,
        chrono::Local::now().naive_local(),
    );
    store.upsert(&record)?;
    print_record(&record);
    Ok(())
}

/// Prints the stored analysis for `cnpj`, as text or as JSON.
///
/// # Errors
///
/// Returns an error if no analysis is stored for the company.
pub(crate) fn run_show(store: &AnalysisStore, cnpj: &str, json: bool) -> anyhow::Result<()> {
    let record = store.load(cnpj).ok_or_else(|| {
        anyhow::anyhow!(
            "no analysis stored for {}; run `analyze` first",
            format_cnpj(cnpj)
        )
    })?;
    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        print_record(&record);
    }
    Ok(())
}

/// Prints one line per stored analysis, or all of them as a JSON array.
///
/// # Errors
///
/// Returns an error if JSON output is requested and a record cannot be encoded.
pub(crate) fn run_list(store: &AnalysisStore, json: bool) -> anyhow::Result<()> {
    let records = store.load_all();
    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }
    if records.is_empty() {
        println!(
            "no analyses stored in {}; run `analyze` first",
            store.path().display()
        );
        return Ok(());
    }

    println!(
        "{:<20}{:<21}{:<12}{:>8}{:>12}  RAZÃO SOCIAL",
        "CNPJ", "DATA", "PERFIL", "PREÇOS", "MÉDIA"
    );
    for record in &records {
        println!(
            "{:<20}{:<21}{:<12}{:>8}{:>12}  {}",
            format_cnpj(&record.company_id),
            record.analyzed_at_display(),
            record.profile.label(),
            record.price_count,
            format_brl(record.price_mean),
            truncate(&record.legal_name, 40)
        );
    }
    Ok(())
}

fn print_record(record: &AnalysisResult) {
    println!("{} ({})", record.legal_name, format_cnpj(&record.company_id));
    println!("Site:      {}", record.source_url);
    println!("Analisado: {}", record.analyzed_at_display());
    println!("Perfil:    {}", record.profile);
    if record.detected_terms.is_empty() {
        println!("Termos:    \u{2014}");
    } else {
        println!("Termos:    {}", record.detected_terms.join(", "));
    }
    if record.price_count == 0 {
        println!("Preços:    nenhum encontrado");
    } else {
        println!(
            "Preços:    {} (mín {}, máx {}, média {})",
            record.price_count,
            format_brl(record.price_min),
            format_brl(record.price_max),
            format_brl(record.price_mean)
        );
    }
}

/// Formats an amount the way Brazilian storefronts print it: `R$ 1.234,50`.
pub(crate) fn format_brl(value: f64) -> String {
    let fixed = format!("{value:.2}");
    let (int_part, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    format!("R$ {sign}{grouped},{cents}")
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        format!("{}...", text.chars().take(max_chars).collect::<String>())
    } else {
        text.to_owned()
    }
}
