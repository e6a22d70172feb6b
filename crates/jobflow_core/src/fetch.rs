use std::fmt;

use flow_logging::flow_debug;

use crate::QueryParams;

/// Logical data view that owns exactly one fetch controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKey {
    Listings,
    Analytics,
}

/// Pairs one `trigger` with its eventual resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestTicket {
    pub view: ViewKey,
    pub generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// The request never produced a response (connect error, timeout, ...).
    NetworkFailure,
    /// The service answered with a non-2xx status.
    BadResponse(u16),
    /// The body was not JSON.
    MalformedPayload,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchFailure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            FailureKind::NetworkFailure => write!(f, "network failure: {}", self.message),
            FailureKind::BadResponse(status) => {
                write!(f, "bad response ({status}): {}", self.message)
            }
            FailureKind::MalformedPayload => write!(f, "malformed payload: {}", self.message),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestState<T> {
    Idle,
    Loading,
    Success(T),
    Failure(String),
}

impl<T> RequestState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            RequestState::Success(payload) => Some(payload),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            RequestState::Failure(message) => Some(message),
            _ => None,
        }
    }
}

/// Lifecycle of the single outstanding request for one view.
///
/// Every `trigger` bumps a generation counter. `resolve` only applies a
/// result whose ticket matches the in-flight generation, so for one view
/// the latest trigger always decides the final state no matter in which
/// order responses arrive.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchController<T> {
    view: ViewKey,
    generation: u64,
    in_flight: Option<RequestTicket>,
    last_params: Option<QueryParams>,
    state: RequestState<T>,
}

impl<T> FetchController<T> {
    pub fn new(view: ViewKey) -> Self {
        Self {
            view,
            generation: 0,
            in_flight: None,
            last_params: None,
            state: RequestState::Idle,
        }
    }

    pub fn view_key(&self) -> ViewKey {
        self.view
    }

    pub fn state(&self) -> &RequestState<T> {
        &self.state
    }

    pub fn in_flight(&self) -> Option<RequestTicket> {
        self.in_flight
    }

    pub fn last_params(&self) -> Option<&QueryParams> {
        self.last_params.as_ref()
    }

    /// Starts a new request, superseding any request still in flight.
    pub fn trigger(&mut self, params: QueryParams) -> RequestTicket {
        if let Some(previous) = self.in_flight {
            flow_debug!(
                "{:?}: generation {} superseded",
                self.view,
                previous.generation
            );
        }
        self.generation += 1;
        let ticket = RequestTicket {
            view: self.view,
            generation: self.generation,
        };
        self.in_flight = Some(ticket);
        self.last_params = Some(params);
        self.state = RequestState::Loading;
        ticket
    }

    /// Applies a transport result. Returns `false` when the ticket is stale
    /// or belongs to another view; state is left untouched in that case.
    pub fn resolve(&mut self, ticket: RequestTicket, result: Result<T, FetchFailure>) -> bool {
        if self.in_flight != Some(ticket) {
            flow_debug!(
                "{:?}: dropping stale result for generation {} (current {:?})",
                self.view,
                ticket.generation,
                self.in_flight.map(|t| t.generation)
            );
            return false;
        }
        self.in_flight = None;
        self.state = match result {
            Ok(payload) => RequestState::Success(payload),
            Err(failure) => RequestState::Failure(failure.message),
        };
        true
    }

    /// Re-issues the last-known parameters. `None` if never triggered.
    pub fn retry(&mut self) -> Option<(RequestTicket, QueryParams)> {
        let params = self.last_params.clone()?;
        let ticket = self.trigger(params.clone());
        Some((ticket, params))
    }
}
