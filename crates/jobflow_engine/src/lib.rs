//! Jobflow engine: HTTP client for the listing service and effect execution.
mod engine;
mod fetch;
mod types;

pub use engine::{EngineError, EngineHandle};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher, DEFAULT_API_BASE};
pub use types::{ApiRequest, Endpoint, EngineEvent, FailureKind, FetchError, RequestId};
