use crate::error::{Result, ScanError};
use crate::result::{HeaderSnapshot, ProbeOutcome};
use reqwest::Client;
use reqwest::header::{CONTENT_SECURITY_POLICY, HeaderMap, HeaderName, X_FRAME_OPTIONS};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Desktop Chrome UA. Some sites answer bare clients with a different set of headers.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub const DEFAULT_MAX_REDIRECTS: usize = 30;

#[derive(Debug, Clone)]
pub struct ProbeConfig {
    pub timeout: Duration,
    pub user_agent: String,
    pub max_redirects: usize,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_redirects: DEFAULT_MAX_REDIRECTS,
        }
    }
}

impl ProbeConfig {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Issues one HEAD request per URL and captures the framing headers.
#[derive(Clone)]
pub struct Prober {
    client: Client,
}

impl Prober {
    pub fn new(config: &ProbeConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .build()?;

        Ok(Self { client })
    }

    /// Probe a URL. Never fails: every error is folded into the outcome.
    pub async fn probe(&self, url: &str) -> ProbeOutcome {
        if let Err(e) = Url::parse(url) {
            let err = ScanError::InvalidUrl(format!("'{}': {}", url, e));
            warn!("Refusing to probe: {}", err);
            return ProbeOutcome::Failed(err.to_string());
        }

        debug!("HEAD {}", url);

        match self.client.head(url).send().await {
            Ok(response) => {
                let status = response.status().as_u16();
                debug!("{} -> {} ({})", url, status, response.url());

                let headers = response.headers();
                ProbeOutcome::Fetched(HeaderSnapshot {
                    status_code: status,
                    x_frame_options: joined_header(headers, &X_FRAME_OPTIONS),
                    content_security_policy: joined_header(headers, &CONTENT_SECURITY_POLICY),
                })
            }
            Err(e) => {
                let outcome = ProbeOutcome::from_error(&e);
                warn!("Probe of {} failed: {:?}", url, outcome);
                outcome
            }
        }
    }
}

/// Combine every occurrence of a header into one value, separated by ", ".
fn joined_header(headers: &HeaderMap, name: &HeaderName) -> Option<String> {
    let values: Vec<String> = headers
        .get_all(name)
        .iter()
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
        .collect();

    if values.is_empty() {
        None
    } else {
        Some(values.join(", "))
    }
}
