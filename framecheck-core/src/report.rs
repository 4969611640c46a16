// Report generation from audit results

use crate::model::{ProbeResult, RiskLevel};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Column order of the tabular report. Matches the `ProbeResult` field order.
pub const CSV_COLUMNS: [&str; 8] = [
    "url",
    "domain",
    "status_code",
    "x_frame_options",
    "csp_frame_ancestors",
    "iframe_compatible",
    "risk_level",
    "notes",
];

pub const NOTES_SEPARATOR: &str = "; ";

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportFormat {
    Json,
    Csv,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ReportFormat::Json),
            "csv" => Ok(ReportFormat::Csv),
            other => Err(format!("Unknown report format: {}", other)),
        }
    }
}

impl ReportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Json => "json",
            ReportFormat::Csv => "csv",
        }
    }

    pub fn default_file_name(&self) -> String {
        format!("iframe_compatibility_results.{}", self.extension())
    }

    pub fn render(&self, results: &[ProbeResult]) -> Result<String, ReportError> {
        match self {
            ReportFormat::Json => Ok(generate_json_report(results)?),
            ReportFormat::Csv => Ok(generate_csv_report(results)),
        }
    }
}

/// Aggregate counts printed after a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditSummary {
    pub total: usize,
    pub compatible: usize,
    /// Everything not compatible, unreachable pages included
    pub blocked: usize,
    pub risk_counts: BTreeMap<RiskLevel, usize>,
}

impl AuditSummary {
    pub fn from_results(results: &[ProbeResult]) -> Self {
        let total = results.len();
        let compatible = results.iter().filter(|r| r.is_compatible()).count();

        let mut risk_counts = BTreeMap::new();
        for result in results {
            *risk_counts.entry(result.risk_level).or_insert(0) += 1;
        }

        Self {
            total,
            compatible,
            blocked: total - compatible,
            risk_counts,
        }
    }

    pub fn compatible_pct(&self) -> f64 {
        percentage(self.compatible, self.total)
    }

    pub fn blocked_pct(&self) -> f64 {
        percentage(self.blocked, self.total)
    }
}

fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

/// Pretty-printed JSON array, one object per URL.
pub fn generate_json_report(results: &[ProbeResult]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(results)
}

/// Flat CSV with a header row, one row per URL and notes joined into one cell.
pub fn generate_csv_report(results: &[ProbeResult]) -> String {
    let mut report = String::new();
    push_csv_row(&mut report, CSV_COLUMNS.iter().map(|c| c.to_string()));

    for result in results {
        push_csv_row(&mut report, csv_fields(result));
    }

    report
}

/// A result flattened to strings, in `CSV_COLUMNS` order.
pub fn csv_fields(result: &ProbeResult) -> [String; 8] {
    [
        result.url.clone(),
        result.domain.clone(),
        result.status_code.map(|c| c.to_string()).unwrap_or_default(),
        result.x_frame_options.clone().unwrap_or_default(),
        result.csp_frame_ancestors.clone().unwrap_or_default(),
        result
            .iframe_compatible
            .map(|c| c.to_string())
            .unwrap_or_default(),
        result.risk_level.as_str().to_string(),
        result.notes.join(NOTES_SEPARATOR),
    ]
}

fn push_csv_row(report: &mut String, fields: impl IntoIterator<Item = String>) {
    let row: Vec<String> = fields.into_iter().map(|f| escape_csv_field(&f)).collect();
    report.push_str(&row.join(","));
    report.push_str("\r\n");
}

/// RFC 4180 quoting: wrap in quotes when needed, double embedded quotes.
pub fn escape_csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

pub fn generate_summary_report(summary: &AuditSummary) -> String {
    let mut report = String::new();

    report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
    report.push_str("FINAL RESULTS\n");
    report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");

    report.push_str(&format!("  URLs audited:       {}\n", summary.total));
    report.push_str(&format!(
        "  Iframe compatible:  {} ({:.1}%)\n",
        summary.compatible,
        summary.compatible_pct()
    ));
    report.push_str(&format!(
        "  Iframe blocked:     {} ({:.1}%)\n",
        summary.blocked,
        summary.blocked_pct()
    ));
    report.push('\n');

    report.push_str("RISK BREAKDOWN\n");
    if summary.risk_counts.is_empty() {
        report.push_str("  (no results)\n");
    }
    for (risk, count) in &summary.risk_counts {
        report.push_str(&format!("  {:<10} {} sites\n", risk.as_str(), count));
    }

    report
}

pub fn save_report(content: &str, path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}
