use crate::navigation::{header, shows_error_banner, HeaderView};
use crate::{
    AnalyticsSnapshot, AppState, AuthField, AuthForm, AuthMode, FilterCriteria, JobListing,
    ListingPage, PieSlice, RequestState, Route,
};

#[derive(Debug, Clone, PartialEq)]
pub struct AppViewModel {
    pub route: Route,
    pub header: HeaderView,
    pub nav: Vec<NavTab>,
    /// Shared error chrome for the active view. Never set on auth routes.
    pub error: Option<ErrorBanner>,
    pub body: BodyView,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavTab {
    pub route: Route,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorBanner {
    pub message: String,
    pub retry_label: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BodyView {
    Board(BoardView),
    Analytics(AnalyticsPanel),
    Auth(AuthFormView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    pub filters: FilterCriteria,
    pub listings: ListingPanel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingPanel {
    Loading,
    /// Successful fetch with zero jobs.
    NoResults,
    Jobs(Vec<JobCardView>),
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobCardView {
    pub id: String,
    pub employer: String,
    pub title: String,
    pub location: String,
    pub country: String,
    pub is_remote: bool,
    pub remote_label: &'static str,
    pub description: String,
    pub apply_link: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AnalyticsPanel {
    Loading,
    /// Nothing fetched yet and nothing in flight.
    NoData,
    Ready(AnalyticsView),
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsView {
    pub stats: Vec<StatCard>,
    pub hubs: Vec<SeriesPoint>,
    pub employment: Vec<PieSlice>,
    pub daily: Vec<SeriesPoint>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: String,
    pub caption: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesPoint {
    pub label: String,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthFormView {
    pub mode: AuthMode,
    pub tagline: &'static str,
    pub fields: Vec<AuthFieldView>,
    pub submit_label: &'static str,
    pub error: Option<String>,
    pub notice: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthFieldView {
    pub field: AuthField,
    pub label: &'static str,
    pub value: String,
    pub masked: bool,
}

pub(crate) fn build_view(state: &AppState) -> AppViewModel {
    let route = state.active_route();
    let (body, failure) = match route {
        Route::Board => {
            let listings = state.listings().state();
            (
                BodyView::Board(BoardView {
                    filters: state.criteria().clone(),
                    listings: listing_panel(listings),
                }),
                listings.failure(),
            )
        }
        Route::Analytics => {
            let analytics = state.analytics().state();
            (
                BodyView::Analytics(analytics_panel(analytics)),
                analytics.failure(),
            )
        }
        Route::Auth(mode) => (BodyView::Auth(auth_view(state, mode)), None),
    };

    let error = failure
        .filter(|_| shows_error_banner(route))
        .map(|message| ErrorBanner {
            message: message.to_string(),
            retry_label: "Try Again",
        });

    AppViewModel {
        route,
        header: header(route),
        nav: [Route::Board, Route::Analytics]
            .into_iter()
            .map(|tab| NavTab {
                route: tab,
                label: tab.nav_label(),
                active: tab == route,
            })
            .collect(),
        error,
        body,
        dirty: state.is_dirty(),
    }
}

fn listing_panel(state: &RequestState<ListingPage>) -> ListingPanel {
    match state {
        RequestState::Idle | RequestState::Loading => ListingPanel::Loading,
        RequestState::Failure(_) => ListingPanel::Failed,
        RequestState::Success(page) if page.is_empty() => ListingPanel::NoResults,
        RequestState::Success(page) => {
            ListingPanel::Jobs(page.jobs.iter().map(job_card).collect())
        }
    }
}

fn job_card(job: &JobListing) -> JobCardView {
    JobCardView {
        id: job.id.clone(),
        employer: job.employer.clone(),
        title: job.title.clone(),
        location: format!("{}, {}", job.city, job.state),
        country: job.country.clone(),
        is_remote: job.is_remote,
        remote_label: if job.is_remote { "Remote" } else { "On-site" },
        description: job.description.clone(),
        apply_link: job.apply_link.clone(),
    }
}

fn analytics_panel(state: &RequestState<AnalyticsSnapshot>) -> AnalyticsPanel {
    match state {
        RequestState::Idle => AnalyticsPanel::NoData,
        RequestState::Loading => AnalyticsPanel::Loading,
        RequestState::Failure(_) => AnalyticsPanel::Failed,
        RequestState::Success(snapshot) => AnalyticsPanel::Ready(analytics_view(snapshot)),
    }
}

/// Render-ready dashboard for one snapshot.
pub fn analytics_view(snapshot: &AnalyticsSnapshot) -> AnalyticsView {
    let stats = vec![
        StatCard {
            label: "Total Listings",
            value: snapshot.total_jobs.to_string(),
            caption: "Analyzed on the server",
        },
        StatCard {
            label: "Computer Jobs",
            value: snapshot.computer_jobs_count.to_string(),
            caption: "Analyzed Computer Jobs",
        },
        StatCard {
            label: "Remote Adoption",
            value: format!("{}%", snapshot.remote_percent),
            caption: "Market distribution",
        },
        StatCard {
            label: "Cities Found",
            value: snapshot.cities_found().to_string(),
            caption: "Global footprint",
        },
        StatCard {
            label: "Job posted in last 24 hours",
            value: snapshot.jobs_posted_last_24h.to_string(),
            caption: "Today's Jobs",
        },
    ];

    AnalyticsView {
        stats,
        hubs: to_points(snapshot.hubs_series()),
        employment: snapshot.employment_slices(),
        daily: to_points(snapshot.daily_series()),
    }
}

fn to_points(series: Vec<(String, u64)>) -> Vec<SeriesPoint> {
    series
        .into_iter()
        .map(|(label, value)| SeriesPoint { label, value })
        .collect()
}

fn auth_view(state: &AppState, mode: AuthMode) -> AuthFormView {
    let blank = AuthForm::new(mode);
    let form = state
        .auth_form()
        .filter(|form| form.mode == mode)
        .unwrap_or(&blank);
    AuthFormView {
        mode,
        tagline: match mode {
            AuthMode::Login => "Sign in to pick up where you left off",
            AuthMode::Register => "Start your professional transformation",
        },
        fields: form
            .fields()
            .iter()
            .map(|&field| AuthFieldView {
                field,
                label: match field {
                    AuthField::Name => "Full Name",
                    AuthField::Email => "Email Address",
                    AuthField::Password => "Password",
                },
                value: form.value(field).to_string(),
                masked: field == AuthField::Password,
            })
            .collect(),
        submit_label: match mode {
            AuthMode::Login => "Sign In",
            AuthMode::Register => "Create Account",
        },
        error: form.error.clone(),
        notice: form.notice.clone(),
    }
}
