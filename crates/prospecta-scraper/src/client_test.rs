use super::*;

#[test]
fn normalize_adds_https_scheme() {
    assert_eq!(
        normalize_site_url("www.aurora.com.br").unwrap(),
        "https://www.aurora.com.br/"
    );
}

#[test]
fn normalize_keeps_existing_scheme_and_path() {
    assert_eq!(
        normalize_site_url("http://aurora.com.br/loja").unwrap(),
        "http://aurora.com.br/loja"
    );
}

#[test]
fn normalize_trims_whitespace() {
    assert_eq!(
        normalize_site_url("  https://aurora.com.br  ").unwrap(),
        "https://aurora.com.br/"
    );
}

#[test]
fn normalize_rejects_blank() {
    let err = normalize_site_url("   ").unwrap_err();
    assert!(
        matches!(err, FetchError::InvalidUrl { ref reason, .. } if reason.contains("empty")),
        "expected InvalidUrl, got: {err:?}"
    );
}

#[test]
fn normalize_rejects_non_http_scheme() {
    let err = normalize_site_url("ftp://aurora.com.br").unwrap_err();
    assert!(
        matches!(err, FetchError::InvalidUrl { ref reason, .. } if reason.contains("ftp")),
        "expected InvalidUrl, got: {err:?}"
    );
}

#[test]
fn normalize_rejects_garbage() {
    assert!(normalize_site_url("http://").is_err());
}

#[test]
fn fetcher_builds_with_browser_user_agent() {
    let fetcher = PageFetcher::new(15, "Mozilla/5.0 (X11; Linux x86_64)");
    assert!(fetcher.is_ok());
}
