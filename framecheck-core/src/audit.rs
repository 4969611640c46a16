use crate::classify::classify;
use crate::model::ProbeResult;
use framecheck_scanner::error::Result;
use framecheck_scanner::{ProbeConfig, Prober};
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Courtesy pause after every probe.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);

/// Options for configuring an audit run
pub struct AuditOptions {
    pub urls: Vec<String>,
    pub probe: ProbeConfig,
    pub delay: Duration,
    /// Probes in flight at once. 1 probes strictly one URL at a time.
    pub concurrency: usize,
    pub show_progress_bars: bool,
}

impl AuditOptions {
    pub fn new(urls: Vec<String>) -> Self {
        Self {
            urls,
            probe: ProbeConfig::default(),
            delay: DEFAULT_DELAY,
            concurrency: 1,
            show_progress_bars: false,
        }
    }
}

/// Progress events, one `Started` and one `Finished` per URL
pub enum AuditProgress<'a> {
    /// Sent just before the request goes out
    Started {
        /// 1-based position in the input list
        index: usize,
        total: usize,
        url: &'a str,
    },
    Finished {
        index: usize,
        total: usize,
        result: &'a ProbeResult,
    },
}

/// Callback for reporting each URL as it is started and classified
pub type AuditProgressCallback = Arc<dyn Fn(AuditProgress<'_>) + Send + Sync>;

fn notify(
    callback: &AuditProgressCallback,
    progress_bar: Option<&ProgressBar>,
    progress: AuditProgress<'_>,
) {
    match progress_bar {
        Some(pb) => pb.suspend(|| callback(progress)),
        None => callback(progress),
    }
}

/// Probe and classify every URL, returning one result per URL in input order.
///
/// Individual probe failures end up in the results; the only error is
/// failing to build the HTTP client.
pub async fn execute_audit(
    options: AuditOptions,
    progress_callback: Option<AuditProgressCallback>,
) -> Result<Vec<ProbeResult>> {
    let AuditOptions {
        urls,
        probe,
        delay,
        concurrency,
        show_progress_bars,
    } = options;

    let prober = Prober::new(&probe)?;
    let concurrency = concurrency.max(1);
    let total = urls.len();

    info!(
        "Auditing {} URLs (concurrency {}, delay {:?})",
        total, concurrency, delay
    );

    let progress_bar = if show_progress_bars {
        let pb = ProgressBar::new(total as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=>-"),
        );
        Some(pb)
    } else {
        None
    };

    // Sequential runs pause between URLs in the loop below. Concurrent runs
    // pause inside each task instead, so one slot's delay doesn't stall the others.
    let task_delay = if concurrency > 1 { delay } else { Duration::ZERO };

    let mut probes = stream::iter(urls.into_iter().enumerate())
        .map(|(i, url)| {
            let prober = prober.clone();
            let callback = progress_callback.clone();
            let pb = progress_bar.clone();
            async move {
                if let Some(callback) = &callback {
                    let started = AuditProgress::Started {
                        index: i + 1,
                        total,
                        url: &url,
                    };
                    notify(callback, pb.as_ref(), started);
                }
                let outcome = prober.probe(&url).await;
                let result = classify(&url, &outcome);
                if !task_delay.is_zero() {
                    tokio::time::sleep(task_delay).await;
                }
                result
            }
        })
        .buffered(concurrency);

    let mut results = Vec::with_capacity(total);

    while let Some(result) = probes.next().await {
        debug!(
            "{} classified as {} (compatible: {:?})",
            result.url, result.risk_level, result.iframe_compatible
        );

        if let Some(ref pb) = progress_bar {
            pb.set_message(result.domain.clone());
            pb.inc(1);
        }

        results.push(result);

        if let (Some(callback), Some(last)) = (&progress_callback, results.last()) {
            let finished = AuditProgress::Finished {
                index: results.len(),
                total,
                result: last,
            };
            notify(callback, progress_bar.as_ref(), finished);
        }

        if concurrency == 1 && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    if let Some(ref pb) = progress_bar {
        pb.finish_and_clear();
    }

    info!("Audit complete: {} results", results.len());

    Ok(results)
}
