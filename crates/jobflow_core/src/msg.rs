use serde_json::Value;

use crate::{AuthField, EmploymentType, FetchFailure, RemotePreference, RequestTicket, Route};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the search box.
    SearchChanged(String),
    /// User edited the location box.
    LocationChanged(String),
    EmploymentTypeChanged(EmploymentType),
    RemotePreferenceChanged(RemotePreference),
    /// User navigated (also sent once at startup with the initial route).
    Navigate(Route),
    /// User clicked "Try Again" on the error banner.
    RetryClicked,
    /// Transport finished a request started by an effect.
    FetchResolved {
        ticket: RequestTicket,
        result: Result<Value, FetchFailure>,
    },
    /// User clicked "Apply Now" on a job card.
    ApplyClicked { job_id: String },
    AuthFieldChanged { field: AuthField, value: String },
    AuthSubmitted,
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
