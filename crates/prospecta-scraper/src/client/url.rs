//! Site URL cleanup for registry website fields.

use reqwest::Url;

use crate::error::FetchError;

/// Turns a registry website field into a fetchable absolute URL.
///
/// Registry entries are typed by hand and often omit the scheme
/// (`www.loja.com.br`); those get `https://`. Only `http` and `https` URLs with
/// a host are accepted.
///
/// # Errors
///
/// Returns [`FetchError::InvalidUrl`] for blank input, unparseable input, a
/// non-HTTP scheme, or a URL without a host.
pub fn normalize_site_url(raw: &str) -> Result<String, FetchError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(invalid(raw, "URL is empty"));
    }

    let candidate = if trimmed.contains("://") {
        trimmed.to_owned()
    } else {
        format!("https://{trimmed}")
    };

    let url = Url::parse(&candidate).map_err(|e| invalid(raw, &e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(
            raw,
            &format!("unsupported scheme \"{}\"", url.scheme()),
        ));
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(invalid(raw, "URL has no host"));
    }

    Ok(url.to_string())
}

fn invalid(url: &str, reason: &str) -> FetchError {
    FetchError::InvalidUrl {
        url: url.to_owned(),
        reason: reason.to_owned(),
    }
}
