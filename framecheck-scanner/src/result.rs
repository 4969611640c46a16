use crate::error::error_chain;
use std::error::Error;
use std::io;

/// Framing-relevant headers of a completed HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderSnapshot {
    pub status_code: u16,
    pub x_frame_options: Option<String>,
    pub content_security_policy: Option<String>,
}

impl HeaderSnapshot {
    pub fn new(status_code: u16) -> Self {
        Self {
            status_code,
            x_frame_options: None,
            content_security_policy: None,
        }
    }

    pub fn with_x_frame_options(mut self, value: impl Into<String>) -> Self {
        self.x_frame_options = Some(value.into());
        self
    }

    pub fn with_content_security_policy(mut self, value: impl Into<String>) -> Self {
        self.content_security_policy = Some(value.into());
        self
    }
}

/// What a single probe produced. Every request ends in exactly one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// A response arrived, whatever its status code.
    Fetched(HeaderSnapshot),
    Timeout,
    /// DNS, TCP or TLS level failure, or the peer dropping the connection.
    ConnectionFailed(String),
    Failed(String),
}

impl ProbeOutcome {
    /// Sort a client error into one of the failure kinds.
    ///
    /// Timeout is checked first: a connect timeout reports both
    /// `is_timeout` and `is_connect`, and counts as a timeout.
    pub fn from_error(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            ProbeOutcome::Timeout
        } else if err.is_connect() || is_connection_dropped(err) {
            ProbeOutcome::ConnectionFailed(error_chain(err))
        } else {
            ProbeOutcome::Failed(error_chain(err))
        }
    }

    pub fn is_fetched(&self) -> bool {
        matches!(self, ProbeOutcome::Fetched(_))
    }

    pub fn headers(&self) -> Option<&HeaderSnapshot> {
        match self {
            ProbeOutcome::Fetched(snapshot) => Some(snapshot),
            _ => None,
        }
    }
}

/// True when the peer accepted the connection and then reset or closed it
/// before a complete response arrived.
fn is_connection_dropped(err: &(dyn Error + 'static)) -> bool {
    let mut source = err.source();
    while let Some(cause) = source {
        if let Some(io_err) = cause.downcast_ref::<io::Error>()
            && is_dropped_kind(io_err.kind())
        {
            return true;
        }
        if let Some(hyper_err) = cause.downcast_ref::<hyper::Error>()
            && hyper_err.is_incomplete_message()
        {
            return true;
        }
        source = cause.source();
    }
    false
}

fn is_dropped_kind(kind: io::ErrorKind) -> bool {
    matches!(
        kind,
        io::ErrorKind::ConnectionReset
            | io::ErrorKind::ConnectionAborted
            | io::ErrorKind::BrokenPipe
            | io::ErrorKind::UnexpectedEof
    )
}
