// Framing classification for probed pages

use crate::model::{ProbeResult, RiskLevel};
use framecheck_scanner::result::{HeaderSnapshot, ProbeOutcome};
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Major streaming platforms, which refuse to be framed whatever their headers say.
pub const STREAMING_KEYWORDS: &[&str] = &[
    "netflix", "youtube", "twitch", "hulu", "disney", "amazon", "apple",
];

/// Download and piracy sites.
pub const RISKY_KEYWORDS: &[&str] = &["download", "pirate", "crack", "repack", "torrent", "warez"];

/// Educational, government and public library sites.
pub const SAFE_KEYWORDS: &[&str] = &["edu", "gov", "gallica", "bnf", "openlibrary", "librivox"];

static FRAME_ANCESTORS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)frame-ancestors\s+([^;]+)").expect("frame-ancestors pattern is valid")
});

/// Authority of a URL exactly as written: host, plus any port or userinfo
/// the URL spells out, with the original case. Empty when the URL does not
/// parse or has no host.
pub fn extract_domain(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) if parsed.has_host() => url
            .split_once("://")
            .and_then(|(_, rest)| rest.split(['/', '?', '#']).next())
            .unwrap_or_default()
            .to_string(),
        _ => String::new(),
    }
}

/// Source list of the first `frame-ancestors` directive in a CSP header.
pub fn extract_frame_ancestors(csp: &str) -> Option<String> {
    FRAME_ANCESTORS
        .captures(csp)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

/// Build the complete result record for one probed URL.
pub fn classify(url: &str, outcome: &ProbeOutcome) -> ProbeResult {
    let mut result = ProbeResult {
        url: url.to_string(),
        domain: extract_domain(url),
        status_code: None,
        x_frame_options: None,
        csp_frame_ancestors: None,
        iframe_compatible: None,
        risk_level: RiskLevel::Medium,
        notes: Vec::new(),
    };

    match outcome {
        ProbeOutcome::Fetched(snapshot) => {
            check_framing_headers(&mut result, snapshot);
            apply_domain_overlays(&mut result);
        }
        ProbeOutcome::Timeout => {
            result.note("Timeout - site too slow");
            result.risk_level = RiskLevel::Medium;
        }
        ProbeOutcome::ConnectionFailed(_) => {
            result.note("Connection error - site unreachable");
            result.risk_level = RiskLevel::High;
        }
        ProbeOutcome::Failed(msg) => {
            result.note(format!("Error: {}", msg));
            result.risk_level = RiskLevel::Medium;
        }
    }

    result
}

/// Header rules, first match wins.
pub fn check_framing_headers(result: &mut ProbeResult, snapshot: &HeaderSnapshot) {
    result.status_code = Some(snapshot.status_code);
    result.x_frame_options = snapshot.x_frame_options.as_ref().map(|v| v.to_uppercase());
    result.csp_frame_ancestors = snapshot
        .content_security_policy
        .as_deref()
        .and_then(extract_frame_ancestors);

    let xfo = result.x_frame_options.clone();
    let ancestors = result.csp_frame_ancestors.clone().unwrap_or_default();

    match xfo.as_deref() {
        Some(value @ ("DENY" | "SAMEORIGIN")) => {
            let note = format!("X-Frame-Options: {} blocks iframe embedding", value);
            block(result, note);
        }
        _ if ancestors.contains("'none'") => {
            block(result, "CSP frame-ancestors 'none' blocks iframe embedding");
        }
        _ if ancestors.contains("'self'") => {
            block(result, "CSP frame-ancestors 'self' blocks external iframe embedding");
        }
        _ => {
            result.iframe_compatible = Some(true);
            result.risk_level = RiskLevel::Low;
            result.note("No iframe restriction detected in headers");
        }
    }
}

/// Domain keyword overlays. All three run; the last matching one sets the risk.
pub fn apply_domain_overlays(result: &mut ProbeResult) {
    let domain = result.domain.to_lowercase();

    if contains_any(&domain, STREAMING_KEYWORDS) {
        block(
            result,
            "Major streaming platform - usually blocks iframe embedding",
        );
    }

    if contains_any(&domain, RISKY_KEYWORDS) {
        result.risk_level = RiskLevel::VeryHigh;
        result.note("Download/piracy site - legal and security risk");
    }

    // May leave a blocked verdict next to VERY_LOW risk
    if contains_any(&domain, SAFE_KEYWORDS) {
        result.risk_level = RiskLevel::VeryLow;
        result.note("Educational/government site - generally safe");
    }
}

fn block(result: &mut ProbeResult, note: impl Into<String>) {
    result.iframe_compatible = Some(false);
    result.risk_level = RiskLevel::High;
    result.note(note);
}

fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| haystack.contains(k))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_domain() {
        assert_eq!(extract_domain("https://www.auto1.com/fr/home"), "www.auto1.com");
        assert_eq!(extract_domain("http://127.0.0.1:8080/x"), "127.0.0.1:8080");
        assert_eq!(extract_domain("https://example.com:443/"), "example.com:443");
        assert_eq!(extract_domain("https://WWW.Example.com/a?b"), "WWW.Example.com");
        assert_eq!(extract_domain("https://example.com?q=1"), "example.com");
        assert_eq!(extract_domain("not a url"), "");
    }

    #[test]
    fn test_extract_frame_ancestors() {
        assert_eq!(
            extract_frame_ancestors("default-src 'self'; frame-ancestors 'none'; img-src *")
                .as_deref(),
            Some("'none'")
        );
        assert_eq!(
            extract_frame_ancestors("FRAME-ANCESTORS https://a.test https://b.test ").as_deref(),
            Some("https://a.test https://b.test")
        );
        assert_eq!(extract_frame_ancestors("default-src 'self'"), None);
        assert_eq!(extract_frame_ancestors("frame-ancestors;"), None);
    }

    #[test]
    fn test_contains_any() {
        assert!(contains_any("www.netflix-codes.com", STREAMING_KEYWORDS));
        assert!(!contains_any("example.com", STREAMING_KEYWORDS));
    }
}
