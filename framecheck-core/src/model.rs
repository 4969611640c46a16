use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordinal risk classification of a probed page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 5] = [
        RiskLevel::VeryLow,
        RiskLevel::Low,
        RiskLevel::Medium,
        RiskLevel::High,
        RiskLevel::VeryHigh,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::VeryLow => "VERY_LOW",
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
            RiskLevel::VeryHigh => "VERY_HIGH",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().replace('-', "_").as_str() {
            "VERY_LOW" => Ok(RiskLevel::VeryLow),
            "LOW" => Ok(RiskLevel::Low),
            "MEDIUM" => Ok(RiskLevel::Medium),
            "HIGH" => Ok(RiskLevel::High),
            "VERY_HIGH" => Ok(RiskLevel::VeryHigh),
            other => Err(format!("Unknown risk level: {}", other)),
        }
    }
}

/// One record per audited URL. Field order is the report column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeResult {
    /// The input URL, unmodified
    pub url: String,
    pub domain: String,
    pub status_code: Option<u16>,
    /// Uppercased X-Frame-Options value
    pub x_frame_options: Option<String>,
    /// Source list of the CSP `frame-ancestors` directive
    pub csp_frame_ancestors: Option<String>,
    /// Unset when the page could not be fetched
    pub iframe_compatible: Option<bool>,
    pub risk_level: RiskLevel,
    pub notes: Vec<String>,
}

impl ProbeResult {
    pub fn is_compatible(&self) -> bool {
        self.iframe_compatible == Some(true)
    }

    pub(crate) fn note(&mut self, note: impl Into<String>) {
        self.notes.push(note.into());
    }
}
