use std::fmt;

use serde_json::Value;

/// Caller-chosen id echoed back on completion.
pub type RequestId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Jobs,
    Analytics,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Jobs => "/jobs",
            Endpoint::Analytics => "/analytics",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub id: RequestId,
    pub endpoint: Endpoint,
    pub params: Vec<(String, String)>,
}

impl ApiRequest {
    pub fn new(id: RequestId, endpoint: Endpoint) -> Self {
        Self {
            id,
            endpoint,
            params: Vec::new(),
        }
    }

    pub fn with_params(mut self, params: Vec<(String, String)>) -> Self {
        self.params = params;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    Completed {
        id: RequestId,
        endpoint: Endpoint,
        result: Result<Value, FetchError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    /// Body was not valid JSON.
    Decode,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Decode => write!(f, "invalid json"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
