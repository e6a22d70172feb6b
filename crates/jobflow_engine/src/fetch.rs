use std::time::Duration;

use flow_logging::{flow_info, flow_trace, flow_warn};
use futures_util::StreamExt;
use serde_json::Value;
use url::form_urlencoded;

use crate::{ApiRequest, Endpoint, FailureKind, FetchError};

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    /// Prefix for every endpoint path. Concatenated as-is.
    pub api_base: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

impl FetchSettings {
    pub fn with_api_base(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            ..Self::default()
        }
    }

    /// Full request URL. No trailing-slash normalization is applied to
    /// `api_base`.
    pub fn endpoint_url(&self, endpoint: Endpoint, params: &[(String, String)]) -> String {
        let mut url = format!("{}{}", self.api_base, endpoint.path());
        if !params.is_empty() {
            let query = form_urlencoded::Serializer::new(String::new())
                .extend_pairs(params.iter())
                .finish();
            url.push('?');
            url.push_str(&query);
        }
        url
    }
}

#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, request: &ApiRequest) -> Result<Value, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    settings: FetchSettings,
    client: reqwest::Client,
}

impl ReqwestFetcher {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }
}

#[async_trait::async_trait]
impl Fetcher for ReqwestFetcher {
    async fn fetch(&self, request: &ApiRequest) -> Result<Value, FetchError> {
        let url = self.settings.endpoint_url(request.endpoint, &request.params);
        let parsed = reqwest::Url::parse(&url)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        flow_info!("GET {} (request {})", parsed, request.id);

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            flow_warn!("Request {} answered {}", request.id, status);
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            bytes.extend_from_slice(&chunk);
        }
        flow_trace!("Request {} read {} bytes", request.id, bytes.len());

        serde_json::from_slice(&bytes)
            .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn jobs_url_carries_encoded_query() {
        let settings = FetchSettings::default();
        assert_eq!(
            settings.endpoint_url(
                Endpoint::Jobs,
                &pairs(&[("search", "c++ dev"), ("remote", "true")])
            ),
            "http://127.0.0.1:8000/jobs?search=c%2B%2B+dev&remote=true"
        );
    }

    #[test]
    fn empty_params_leave_no_question_mark() {
        let settings = FetchSettings::with_api_base("https://api.example.com");
        assert_eq!(
            settings.endpoint_url(Endpoint::Analytics, &[]),
            "https://api.example.com/analytics"
        );
    }

    #[test]
    fn trailing_slash_is_not_normalized() {
        let settings = FetchSettings::with_api_base("https://api.example.com/");
        assert_eq!(
            settings.endpoint_url(Endpoint::Jobs, &[]),
            "https://api.example.com//jobs"
        );
    }
}
