//! Jobflow core: pure query/view state machine and view-model helpers.
mod analytics;
mod auth;
mod effect;
mod fetch;
mod filter;
mod listing;
mod msg;
mod navigation;
mod query;
mod state;
mod update;
mod view_model;

pub use analytics::{
    palette_color, project_analytics, AnalyticsSnapshot, NamedCount, PieSlice, TypeCount, PALETTE,
};
pub use auth::{AuthField, AuthForm, MIN_PASSWORD_LEN};
pub use effect::Effect;
pub use fetch::{FailureKind, FetchController, FetchFailure, RequestState, RequestTicket, ViewKey};
pub use filter::{CriteriaError, EmploymentType, FilterCriteria, RemotePreference};
pub use listing::{project_listings, JobListing, ListingPage};
pub use msg::Msg;
pub use navigation::{
    header, on_enter, shows_error_banner, AuthMode, EntryFetch, HeaderView, Route,
};
pub use query::{build_query, QueryParams};
pub use state::AppState;
pub use update::{update, ANALYTICS_FAILURE_MESSAGE, LISTING_FAILURE_MESSAGE};
pub use view_model::{
    analytics_view, AnalyticsPanel, AnalyticsView, AppViewModel, AuthFieldView, AuthFormView,
    BoardView, BodyView, ErrorBanner, JobCardView, ListingPanel, NavTab, SeriesPoint, StatCard,
};
