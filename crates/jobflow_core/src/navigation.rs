/// Top-level navigable screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Route {
    #[default]
    Board,
    Analytics,
    Auth(AuthMode),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthMode {
    Login,
    Register,
}

impl Route {
    pub const ALL: [Route; 4] = [
        Route::Board,
        Route::Analytics,
        Route::Auth(AuthMode::Login),
        Route::Auth(AuthMode::Register),
    ];

    pub fn from_path(path: &str) -> Option<Route> {
        match path {
            "/" => Some(Route::Board),
            "/analytics" => Some(Route::Analytics),
            "/login" => Some(Route::Auth(AuthMode::Login)),
            "/register" => Some(Route::Auth(AuthMode::Register)),
            _ => None,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Board => "/",
            Route::Analytics => "/analytics",
            Route::Auth(AuthMode::Login) => "/login",
            Route::Auth(AuthMode::Register) => "/register",
        }
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            Route::Board => "Job Board",
            Route::Analytics => "Analytics",
            Route::Auth(AuthMode::Login) => "Sign In",
            Route::Auth(AuthMode::Register) => "Register",
        }
    }

    pub fn is_auth(self) -> bool {
        matches!(self, Route::Auth(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
}

/// Page header for a route. Auth screens carry no subtitle.
pub fn header(route: Route) -> HeaderView {
    match route {
        Route::Board => HeaderView {
            title: "Find Your Flow",
            subtitle: Some("Curated opportunities for top tech talent"),
        },
        Route::Analytics => HeaderView {
            title: "Market Insights",
            subtitle: Some("Real-time data from the current job market"),
        },
        Route::Auth(AuthMode::Login) => HeaderView {
            title: "Welcome Back",
            subtitle: None,
        },
        Route::Auth(AuthMode::Register) => HeaderView {
            title: "Join the Flow",
            subtitle: None,
        },
    }
}

/// Whether the shared error banner may be shown on this route.
pub fn shows_error_banner(route: Route) -> bool {
    !route.is_auth()
}

/// Fetch decision taken when the active route changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryFetch {
    None,
    /// Fetch listings only if criteria moved since the last listing request.
    ListingsIfStale,
    /// Fetch analytics unconditionally, once for this entry.
    Analytics,
}

/// Decides what entering `to` from `from` should fetch. Re-selecting the
/// active route is not an entry.
pub fn on_enter(from: Option<Route>, to: Route) -> EntryFetch {
    if from == Some(to) {
        return EntryFetch::None;
    }
    match to {
        Route::Board => EntryFetch::ListingsIfStale,
        Route::Analytics => EntryFetch::Analytics,
        Route::Auth(_) => EntryFetch::None,
    }
}
