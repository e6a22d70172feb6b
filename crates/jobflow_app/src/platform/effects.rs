use std::io;

use flow_logging::{flow_info, flow_warn};
use jobflow_core::{Effect, FailureKind, FetchFailure, Msg, RequestTicket, ViewKey};
use jobflow_engine::{
    ApiRequest, Endpoint, EngineError, EngineEvent, EngineHandle, FetchError, FetchSettings,
};

/// Hands an apply link to the desktop's default handler.
pub type LinkOpener = fn(&str) -> io::Result<()>;

/// Executes effects from `update` and turns engine completions back into
/// messages. The request id sent to the engine is the ticket generation.
pub struct EffectRunner {
    engine: EngineHandle,
    open_link: LinkOpener,
}

impl EffectRunner {
    pub fn new(settings: FetchSettings) -> Result<Self, EngineError> {
        Self::with_opener(settings, |url| open::that_detached(url))
    }

    pub fn with_opener(
        settings: FetchSettings,
        open_link: LinkOpener,
    ) -> Result<Self, EngineError> {
        flow_info!("Starting engine against {}", settings.api_base);
        Ok(Self {
            engine: EngineHandle::new(settings)?,
            open_link,
        })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::OpenLink { url } => {
                    flow_info!("OpenLink url={}", url);
                    if let Err(err) = (self.open_link)(&url) {
                        flow_warn!("Could not open {}: {}", url, err);
                    }
                }
                other => {
                    if let Some(request) = to_request(other) {
                        self.engine.submit(request);
                    }
                }
            }
        }
    }

    /// Completions received since the last call, oldest first.
    pub fn drain(&self) -> Vec<Msg> {
        let mut inbox = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            inbox.push(completion_to_msg(event));
        }
        inbox
    }
}

fn to_request(effect: Effect) -> Option<ApiRequest> {
    match effect {
        Effect::FetchListings { ticket, params } => Some(
            ApiRequest::new(ticket.generation, Endpoint::Jobs)
                .with_params(params.pairs().to_vec()),
        ),
        Effect::FetchAnalytics { ticket } => {
            Some(ApiRequest::new(ticket.generation, Endpoint::Analytics))
        }
        Effect::OpenLink { .. } => None,
    }
}

fn completion_to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::Completed {
            id,
            endpoint,
            result,
        } => Msg::FetchResolved {
            ticket: RequestTicket {
                view: view_for(endpoint),
                generation: id,
            },
            result: result.map_err(map_failure),
        },
    }
}

fn view_for(endpoint: Endpoint) -> ViewKey {
    match endpoint {
        Endpoint::Jobs => ViewKey::Listings,
        Endpoint::Analytics => ViewKey::Analytics,
    }
}

fn map_failure(err: FetchError) -> FetchFailure {
    use jobflow_engine::FailureKind as Engine;

    let kind = match err.kind {
        Engine::HttpStatus(status) => FailureKind::BadResponse(status),
        Engine::Decode => FailureKind::MalformedPayload,
        Engine::Network | Engine::Timeout | Engine::InvalidUrl | Engine::TooLarge { .. } => {
            FailureKind::NetworkFailure
        }
    };
    FetchFailure::new(kind, err.to_string())
}
