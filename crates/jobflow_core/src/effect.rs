use crate::{QueryParams, RequestTicket};

/// Side effects requested by `update`, executed by the platform layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// GET `/jobs` with the given params; resolve with `Msg::FetchResolved`.
    FetchListings {
        ticket: RequestTicket,
        params: QueryParams,
    },
    /// GET `/analytics`; resolve with `Msg::FetchResolved`.
    FetchAnalytics { ticket: RequestTicket },
    /// Open an apply link in a new browsing context. Not validated.
    OpenLink { url: String },
}
