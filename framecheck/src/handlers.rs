use anyhow::{Context, anyhow};
use clap::ArgMatches;
use colored::{ColoredString, Colorize};
use framecheck_core::audit::{AuditOptions, AuditProgress, AuditProgressCallback, execute_audit};
use framecheck_core::model::{ProbeResult, RiskLevel};
use framecheck_core::report::{AuditSummary, ReportFormat, generate_summary_report, save_report};
use framecheck_core::targets::DEFAULT_TARGETS;
use framecheck_scanner::ProbeConfig;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{Level, warn};
use url::Url;

/// Everything a run needs, resolved from the command line
#[derive(Debug, Clone)]
pub struct AuditSettings {
    pub urls: Vec<String>,
    pub output_dir: PathBuf,
    pub delay: Duration,
    pub timeout: Duration,
    pub concurrency: usize,
    pub quiet: bool,
    pub verbose: bool,
}

impl AuditSettings {
    pub fn from_matches(args: &ArgMatches) -> anyhow::Result<Self> {
        let urls: Vec<String> = args
            .get_many::<String>("url")
            .map(|values| values.cloned().collect())
            .unwrap_or_default();
        let hosts_file = args.get_one::<PathBuf>("hosts-file");

        let urls = load_urls_from_source(&urls, hosts_file).map_err(|e| anyhow!(e))?;

        let output_dir = args
            .get_one::<String>("output-dir")
            .map(|dir| expand_path(dir))
            .unwrap_or_else(|| expand_path("~"));

        Ok(Self {
            urls,
            output_dir,
            delay: Duration::from_millis(*args.get_one::<u64>("delay-ms").unwrap_or(&500)),
            timeout: Duration::from_secs(*args.get_one::<u64>("timeout").unwrap_or(&10)),
            concurrency: usize::from(*args.get_one::<u16>("concurrency").unwrap_or(&1)),
            quiet: args.get_flag("quiet"),
            verbose: args.get_flag("verbose"),
        })
    }
}

/// Outcome of a finished run
pub struct AuditRun {
    pub results: Vec<ProbeResult>,
    pub summary: AuditSummary,
    pub report_paths: Vec<PathBuf>,
}

/// Pick the URLs to audit: the hosts file, the `--url` values, or the built-in list
pub fn load_urls_from_source(
    urls: &[String],
    hosts_file: Option<&PathBuf>,
) -> Result<Vec<String>, String> {
    if let Some(hosts_file_path) = hosts_file {
        load_urls_from_file(hosts_file_path)
    } else if !urls.is_empty() {
        Ok(urls.to_vec())
    } else {
        Ok(DEFAULT_TARGETS.iter().map(|url| url.to_string()).collect())
    }
}

/// Load and parse URLs from a file
pub fn load_urls_from_file(path: &PathBuf) -> Result<Vec<String>, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read hosts file {}: {}", path.display(), e))?;

    let urls: Vec<String> = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| parse_url_line(line.trim()))
        .collect();

    if urls.is_empty() {
        return Err(format!("No valid URLs found in {}", path.display()));
    }

    Ok(urls)
}

/// Parse a single line as a URL, trying to add http:// if needed
pub fn parse_url_line(line: &str) -> Option<String> {
    if Url::parse(line).is_ok() {
        return Some(line.to_string());
    }

    let with_scheme = format!("http://{}", line);
    if Url::parse(&with_scheme).is_ok() {
        return Some(with_scheme);
    }

    warn!("Skipping invalid URL '{}'", line);
    None
}

/// Expand a leading `~` to the home directory
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

pub fn report_path(output_dir: &Path, format: ReportFormat) -> PathBuf {
    output_dir.join(format.default_file_name())
}

/// Write the JSON and CSV reports into `output_dir`, returning their paths
pub fn write_reports(results: &[ProbeResult], output_dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for format in [ReportFormat::Json, ReportFormat::Csv] {
        let path = report_path(output_dir, format);
        let content = format
            .render(results)
            .with_context(|| format!("Failed to render {} report", format.extension()))?;
        save_report(&content, &path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        paths.push(path);
    }

    Ok(paths)
}

pub fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    // A second init (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .try_init();
}

pub fn risk_label(risk: RiskLevel) -> ColoredString {
    match risk {
        RiskLevel::VeryLow | RiskLevel::Low => risk.as_str().green(),
        RiskLevel::Medium => risk.as_str().yellow(),
        RiskLevel::High => risk.as_str().red(),
        RiskLevel::VeryHigh => risk.as_str().red().bold(),
    }
}

fn verdict_line(result: &ProbeResult) -> String {
    let verdict = if result.is_compatible() {
        "✅ COMPATIBLE".green().bold()
    } else {
        "❌ BLOCKED".red().bold()
    };
    format!("→ {} (Risk: {})", verdict, risk_label(result.risk_level))
}

/// Sequential runs print the Testing line before the request, so a hanging
/// URL is visible. Concurrent runs print one combined line per finished URL.
fn print_progress(progress: AuditProgress<'_>, sequential: bool) {
    match progress {
        AuditProgress::Started { index, total, url } if sequential => {
            let width = total.to_string().len().max(3);
            println!("[{:>width$}/{}] Testing {}", index, total, url, width = width);
        }
        AuditProgress::Started { .. } => {}
        AuditProgress::Finished { total, result, .. } if sequential => {
            let width = total.to_string().len().max(3);
            println!(
                "{:>width$} {}",
                "",
                verdict_line(result),
                width = width * 2 + 2
            );
        }
        AuditProgress::Finished {
            index,
            total,
            result,
        } => {
            let width = total.to_string().len().max(3);
            println!(
                "[{:>width$}/{}] {} {}",
                index,
                total,
                result.url,
                verdict_line(result),
                width = width
            );
        }
    }
}

fn print_summary(summary: &AuditSummary) {
    println!();
    for line in generate_summary_report(summary).lines() {
        let colored_line = RiskLevel::ALL
            .iter()
            .find(|risk| line.trim_start().starts_with(&format!("{} ", risk.as_str())))
            .map(|risk| line.replacen(risk.as_str(), &risk_label(*risk).to_string(), 1));
        println!("{}", colored_line.unwrap_or_else(|| line.to_string()));
    }
}

/// Probe every URL, print progress and the summary, then write both reports
pub async fn run_audit(settings: &AuditSettings) -> anyhow::Result<AuditRun> {
    println!(
        "{} Starting iframe compatibility audit",
        "🔍".bright_cyan()
    );
    println!("{} URLs to analyse\n", settings.urls.len().to_string().cyan());

    let options = AuditOptions {
        urls: settings.urls.clone(),
        probe: ProbeConfig::default().with_timeout(settings.timeout),
        delay: settings.delay,
        concurrency: settings.concurrency,
        show_progress_bars: settings.quiet,
    };

    let progress_callback: Option<AuditProgressCallback> = if settings.quiet {
        None
    } else {
        let sequential = settings.concurrency <= 1;
        Some(Arc::new(move |progress: AuditProgress<'_>| {
            print_progress(progress, sequential)
        }))
    };

    let results = execute_audit(options, progress_callback)
        .await
        .context("Failed to start the audit")?;

    let summary = AuditSummary::from_results(&results);
    print_summary(&summary);

    let report_paths = write_reports(&results, &settings.output_dir)?;

    println!("\n{} Results saved to:", "💾".bright_blue());
    for path in &report_paths {
        println!("  {} {}", "•".blue(), path.display().to_string().bright_white());
    }

    Ok(AuditRun {
        results,
        summary,
        report_paths,
    })
}

pub async fn handle_audit(args: &ArgMatches) -> anyhow::Result<()> {
    init_logging(args.get_flag("verbose"));
    let settings = AuditSettings::from_matches(args)?;

    run_audit(&settings).await?;
    Ok(())
}
