use flow_logging::{flow_debug, flow_error};

use crate::navigation::{on_enter, EntryFetch};
use crate::{
    project_analytics, project_listings, AppState, Effect, FailureKind, FetchFailure,
    FilterCriteria, Msg, Route, ViewKey,
};

pub const LISTING_FAILURE_MESSAGE: &str = "Failed to fetch jobs";
pub const ANALYTICS_FAILURE_MESSAGE: &str = "Failed to load analytics data";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::SearchChanged(text) => edit_criteria(&mut state, |c| c.search_text = text),
        Msg::LocationChanged(text) => edit_criteria(&mut state, |c| c.location_text = text),
        Msg::EmploymentTypeChanged(kind) => {
            edit_criteria(&mut state, |c| c.employment_type = kind)
        }
        Msg::RemotePreferenceChanged(pref) => {
            edit_criteria(&mut state, |c| c.remote_preference = pref)
        }
        Msg::Navigate(to) => navigate(&mut state, to),
        Msg::RetryClicked => retry(&mut state),
        Msg::FetchResolved { ticket, result } => {
            let applied = match ticket.view {
                ViewKey::Listings => {
                    let result = result
                        .map(|raw| project_listings(&raw))
                        .map_err(listing_failure);
                    state.listings_mut().resolve(ticket, result)
                }
                ViewKey::Analytics => {
                    let result = result
                        .map(|raw| project_analytics(&raw))
                        .map_err(analytics_failure);
                    state.analytics_mut().resolve(ticket, result)
                }
            };
            if applied {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::ApplyClicked { job_id } => {
            let link = state
                .listings()
                .state()
                .success()
                .and_then(|page| page.find(&job_id))
                .map(|job| job.apply_link.clone());
            match link {
                Some(url) => vec![Effect::OpenLink { url }],
                None => {
                    flow_debug!("Apply clicked for unknown job {}", job_id);
                    Vec::new()
                }
            }
        }
        Msg::AuthFieldChanged { field, value } => {
            if let Some(form) = state.auth_mut() {
                form.set(field, value);
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::AuthSubmitted => {
            if let Some(form) = state.auth_mut() {
                form.submit();
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn edit_criteria(state: &mut AppState, edit: impl FnOnce(&mut FilterCriteria)) -> Vec<Effect> {
    let before = state.criteria().clone();
    edit(state.criteria_mut());
    if *state.criteria() == before {
        return Vec::new();
    }
    state.mark_dirty();
    // Off the board the edit is kept and compared again on the next entry.
    if state.route() == Some(Route::Board) {
        state.refresh_listings_if_stale().into_iter().collect()
    } else {
        Vec::new()
    }
}

fn navigate(state: &mut AppState, to: Route) -> Vec<Effect> {
    let from = state.route();
    if from == Some(to) {
        return Vec::new();
    }
    let entry = on_enter(from, to);
    state.set_route(to);
    if let Route::Auth(mode) = to {
        state.reset_auth(mode);
    }
    match entry {
        EntryFetch::None => Vec::new(),
        EntryFetch::ListingsIfStale => state.refresh_listings_if_stale().into_iter().collect(),
        EntryFetch::Analytics => vec![state.start_analytics()],
    }
}

fn retry(state: &mut AppState) -> Vec<Effect> {
    match state.active_route() {
        Route::Board => match state.listings_mut().retry() {
            Some((ticket, params)) => {
                state.mark_dirty();
                vec![Effect::FetchListings { ticket, params }]
            }
            None => state.refresh_listings_if_stale().into_iter().collect(),
        },
        Route::Analytics => match state.analytics_mut().retry() {
            Some((ticket, _)) => {
                state.mark_dirty();
                vec![Effect::FetchAnalytics { ticket }]
            }
            None => vec![state.start_analytics()],
        },
        Route::Auth(_) => Vec::new(),
    }
}

fn listing_failure(failure: FetchFailure) -> FetchFailure {
    match failure.kind {
        FailureKind::BadResponse(_) => FetchFailure::new(failure.kind, LISTING_FAILURE_MESSAGE),
        _ => failure,
    }
}

fn analytics_failure(failure: FetchFailure) -> FetchFailure {
    flow_error!("Analytics Error: {}", failure);
    FetchFailure::new(failure.kind, ANALYTICS_FAILURE_MESSAGE)
}
