// Tests for the framing classification rules

use framecheck_core::classify::{apply_domain_overlays, classify};
use framecheck_core::model::{ProbeResult, RiskLevel};
use framecheck_scanner::result::{HeaderSnapshot, ProbeOutcome};

fn fetched() -> HeaderSnapshot {
    HeaderSnapshot::new(200)
}

fn classify_with(url: &str, snapshot: HeaderSnapshot) -> ProbeResult {
    classify(url, &ProbeOutcome::Fetched(snapshot))
}

// ============================================================================
// Header Rule Tests
// ============================================================================

#[test]
fn test_no_framing_headers_is_compatible() {
    let result = classify_with("https://example.com/", fetched());

    assert_eq!(result.iframe_compatible, Some(true));
    assert_eq!(result.risk_level, RiskLevel::Low);
    assert_eq!(result.status_code, Some(200));
    assert_eq!(result.x_frame_options, None);
    assert_eq!(result.csp_frame_ancestors, None);
    assert_eq!(result.notes, vec!["No iframe restriction detected in headers"]);
}

#[test]
fn test_x_frame_options_deny() {
    let snapshot = fetched().with_x_frame_options("DENY");
    let result = classify_with("https://example.com/", snapshot);

    assert_eq!(result.iframe_compatible, Some(false));
    assert_eq!(result.risk_level, RiskLevel::High);
    assert_eq!(result.x_frame_options.as_deref(), Some("DENY"));
    assert!(result.notes[0].contains("X-Frame-Options: DENY"));
}

#[test]
fn test_x_frame_options_is_case_insensitive() {
    let snapshot = fetched().with_x_frame_options("sameOrigin");
    let result = classify_with("https://example.com/", snapshot);

    assert_eq!(result.x_frame_options.as_deref(), Some("SAMEORIGIN"));
    assert_eq!(result.iframe_compatible, Some(false));
    assert_eq!(result.risk_level, RiskLevel::High);
}

#[test]
fn test_x_frame_options_deny_wins_over_permissive_csp() {
    let snapshot = fetched()
        .with_x_frame_options("DENY")
        .with_content_security_policy("frame-ancestors *");
    let result = classify_with("https://example.com/", snapshot);

    assert_eq!(result.iframe_compatible, Some(false));
    assert_eq!(result.risk_level, RiskLevel::High);
    assert_eq!(result.csp_frame_ancestors.as_deref(), Some("*"));
    assert_eq!(result.notes.len(), 1);
    assert!(result.notes[0].contains("X-Frame-Options"));
}

#[test]
fn test_x_frame_options_allow_from_is_not_blocking() {
    let snapshot =
        fetched().with_x_frame_options("ALLOW-FROM https://a.test");
    let result = classify_with("https://example.com/", snapshot);

    assert_eq!(result.iframe_compatible, Some(true));
    assert_eq!(result.risk_level, RiskLevel::Low);
}

#[test]
fn test_csp_frame_ancestors_none() {
    let snapshot = fetched()
        .with_content_security_policy("default-src 'self'; frame-ancestors 'none'");
    let result = classify_with("https://example.com/", snapshot);

    assert_eq!(result.csp_frame_ancestors.as_deref(), Some("'none'"));
    assert_eq!(result.iframe_compatible, Some(false));
    assert_eq!(result.risk_level, RiskLevel::High);
    assert!(result.notes[0].contains("'none'"));
}

#[test]
fn test_csp_frame_ancestors_self() {
    let snapshot = fetched()
        .with_content_security_policy("frame-ancestors 'self' https://partner.test");
    let result = classify_with("https://example.com/", snapshot);

    assert_eq!(
        result.csp_frame_ancestors.as_deref(),
        Some("'self' https://partner.test")
    );
    assert_eq!(result.iframe_compatible, Some(false));
    assert_eq!(result.risk_level, RiskLevel::High);
    assert!(result.notes[0].contains("'self'"));
}

#[test]
fn test_csp_frame_ancestors_wildcard_is_compatible() {
    let snapshot = fetched()
        .with_content_security_policy("frame-ancestors https://*.example.org");
    let result = classify_with("https://example.com/", snapshot);

    assert_eq!(result.iframe_compatible, Some(true));
    assert_eq!(result.risk_level, RiskLevel::Low);
}

#[test]
fn test_error_status_is_still_classified() {
    let snapshot = HeaderSnapshot::new(404);
    let result = classify_with("https://example.com/missing", snapshot);

    assert_eq!(result.status_code, Some(404));
    assert_eq!(result.iframe_compatible, Some(true));
    assert_eq!(result.risk_level, RiskLevel::Low);
}

// ============================================================================
// Domain Overlay Tests
// ============================================================================

#[test]
fn test_streaming_domain_overrides_headers() {
    let result = classify_with("https://www.netflix.com/", fetched());

    assert_eq!(result.iframe_compatible, Some(false));
    assert_eq!(result.risk_level, RiskLevel::High);
    assert_eq!(result.notes.len(), 2);
    assert!(result.notes[1].contains("streaming"));
}

#[test]
fn test_streaming_keyword_matches_uppercase_host_in_record() {
    let mut result = classify_with("https://example.com/", fetched());
    result.domain = "WWW.YOUTUBE.COM".to_string();
    apply_domain_overlays(&mut result);

    assert_eq!(result.iframe_compatible, Some(false));
    assert_eq!(result.risk_level, RiskLevel::High);
}

#[test]
fn test_download_domain_forces_very_high() {
    let result = classify_with(
        "https://www.downloadha.com/",
        fetched(),
    );

    // Compatibility verdict from the headers is left untouched
    assert_eq!(result.iframe_compatible, Some(true));
    assert_eq!(result.risk_level, RiskLevel::VeryHigh);
    assert!(result.notes.last().unwrap().contains("piracy"));
}

#[test]
fn test_repack_domain_with_blocking_header() {
    let snapshot = fetched().with_x_frame_options("SAMEORIGIN");
    let result = classify_with("https://fitgirl-repacks.site/", snapshot);

    assert_eq!(result.iframe_compatible, Some(false));
    assert_eq!(result.risk_level, RiskLevel::VeryHigh);
    assert_eq!(result.notes.len(), 2);
}

#[test]
fn test_safe_domain_forces_very_low() {
    let snapshot = fetched().with_x_frame_options("SAMEORIGIN");
    let result = classify_with("https://gallica.bnf.fr", snapshot);

    assert_eq!(result.iframe_compatible, Some(false));
    assert_eq!(result.risk_level, RiskLevel::VeryLow);
    assert!(result.notes.last().unwrap().contains("Educational"));
}

#[test]
fn test_overlays_apply_in_order_last_write_wins() {
    // Hits streaming ("apple"), risky ("download") and safe ("edu") in one host
    let url = "https://apple-download.edu/";
    let result = classify_with(url, fetched());

    assert_eq!(result.iframe_compatible, Some(false));
    assert_eq!(result.risk_level, RiskLevel::VeryLow);
    assert_eq!(result.notes.len(), 4);
    assert!(result.notes[0].contains("No iframe restriction"));
    assert!(result.notes[1].contains("streaming"));
    assert!(result.notes[2].contains("piracy"));
    assert!(result.notes[3].contains("Educational"));
}

#[test]
fn test_overlay_only_looks_at_domain_not_path() {
    let url = "https://example.com/download/netflix";
    let result = classify_with(url, fetched());

    assert_eq!(result.iframe_compatible, Some(true));
    assert_eq!(result.risk_level, RiskLevel::Low);
    assert_eq!(result.notes.len(), 1);
}

// ============================================================================
// Failure Outcome Tests
// ============================================================================

#[test]
fn test_timeout_outcome() {
    let result = classify("https://slow.test/", &ProbeOutcome::Timeout);

    assert_eq!(result.risk_level, RiskLevel::Medium);
    assert_eq!(result.iframe_compatible, None);
    assert_eq!(result.status_code, None);
    assert_eq!(result.notes, vec!["Timeout - site too slow"]);
}

#[test]
fn test_connection_failed_outcome() {
    let outcome = ProbeOutcome::ConnectionFailed("connection refused".to_string());
    let result = classify("https://gone.test/", &outcome);

    assert_eq!(result.risk_level, RiskLevel::High);
    assert_eq!(result.iframe_compatible, None);
    assert_eq!(result.notes, vec!["Connection error - site unreachable"]);
}

#[test]
fn test_other_failure_outcome_keeps_message() {
    let outcome = ProbeOutcome::Failed("too many redirects".to_string());
    let result = classify("https://loop.test/", &outcome);

    assert_eq!(result.risk_level, RiskLevel::Medium);
    assert_eq!(result.iframe_compatible, None);
    assert_eq!(result.notes, vec!["Error: too many redirects"]);
}

#[test]
fn test_failure_skips_domain_overlays() {
    let result = classify("https://www.netflix.com/", &ProbeOutcome::Timeout);

    assert_eq!(result.risk_level, RiskLevel::Medium);
    assert_eq!(result.iframe_compatible, None);
    assert_eq!(result.notes.len(), 1);
}

#[test]
fn test_url_is_kept_unmodified() {
    let url = "https://www.oldmapsonline.org/en#position=5/46.87/-1.02";
    let result = classify(url, &ProbeOutcome::Timeout);

    assert_eq!(result.url, url);
    assert_eq!(result.domain, "www.oldmapsonline.org");
}

#[test]
fn test_notes_never_empty() {
    let outcomes = vec![
        ProbeOutcome::Fetched(fetched()),
        ProbeOutcome::Timeout,
        ProbeOutcome::ConnectionFailed("x".to_string()),
        ProbeOutcome::Failed("y".to_string()),
    ];

    for outcome in &outcomes {
        let result = classify("https://a.test/", outcome);
        assert!(!result.notes.is_empty(), "no notes for {:?}", outcome);
    }
}
