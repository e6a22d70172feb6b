use flow_logging::flow_info;

use crate::view_model::{build_view, AppViewModel};
use crate::{
    build_query, AnalyticsSnapshot, AuthForm, AuthMode, Effect, FetchController, FilterCriteria,
    ListingPage, QueryParams, Route, ViewKey,
};

/// Whole client state. Owned by the event loop and only changed by `update`.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    route: Option<Route>,
    criteria: FilterCriteria,
    /// Criteria behind the most recent listing request.
    listing_criteria: Option<FilterCriteria>,
    listings: FetchController<ListingPage>,
    analytics: FetchController<AnalyticsSnapshot>,
    auth: Option<AuthForm>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            route: None,
            criteria: FilterCriteria::default(),
            listing_criteria: None,
            listings: FetchController::new(ViewKey::Listings),
            analytics: FetchController::new(ViewKey::Analytics),
            auth: None,
            dirty: false,
        }
    }

    pub fn view(&self) -> AppViewModel {
        build_view(self)
    }

    /// `None` until the first `Msg::Navigate`.
    pub fn route(&self) -> Option<Route> {
        self.route
    }

    pub fn active_route(&self) -> Route {
        self.route.unwrap_or_default()
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn listings(&self) -> &FetchController<ListingPage> {
        &self.listings
    }

    pub fn analytics(&self) -> &FetchController<AnalyticsSnapshot> {
        &self.analytics
    }

    pub fn auth_form(&self) -> Option<&AuthForm> {
        self.auth.as_ref()
    }

    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_route(&mut self, route: Route) {
        self.route = Some(route);
        self.mark_dirty();
    }

    pub(crate) fn criteria_mut(&mut self) -> &mut FilterCriteria {
        &mut self.criteria
    }

    pub(crate) fn listings_mut(&mut self) -> &mut FetchController<ListingPage> {
        &mut self.listings
    }

    pub(crate) fn analytics_mut(&mut self) -> &mut FetchController<AnalyticsSnapshot> {
        &mut self.analytics
    }

    pub(crate) fn auth_mut(&mut self) -> Option<&mut AuthForm> {
        self.auth.as_mut()
    }

    pub(crate) fn reset_auth(&mut self, mode: AuthMode) {
        self.auth = Some(AuthForm::new(mode));
    }

    /// Triggers a listing fetch unless the current criteria were already
    /// requested.
    pub(crate) fn refresh_listings_if_stale(&mut self) -> Option<Effect> {
        if self.listing_criteria.as_ref() == Some(&self.criteria) {
            return None;
        }
        let params = build_query(&self.criteria);
        flow_info!("Listing query changed: {:?}", params.pairs());
        self.listing_criteria = Some(self.criteria.clone());
        let ticket = self.listings.trigger(params.clone());
        self.mark_dirty();
        Some(Effect::FetchListings { ticket, params })
    }

    pub(crate) fn start_analytics(&mut self) -> Effect {
        let ticket = self.analytics.trigger(QueryParams::new());
        self.mark_dirty();
        Effect::FetchAnalytics { ticket }
    }
}
