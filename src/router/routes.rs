/// Navigable destinations of the frontend.
///
/// The set is static and defined here once; each route is identified by its
/// path and carries its authentication requirement as metadata. Comparisons
/// elsewhere are by route identity, never by display strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Home,
    Logout,
    NotificationMgmt,
    RegisterAccount,
}

impl Route {
    /// All routes, in route-table order.
    pub const ALL: [Route; 5] = [
        Route::Login,
        Route::Home,
        Route::Logout,
        Route::NotificationMgmt,
        Route::RegisterAccount,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Home => "/",
            Route::Logout => "/logout",
            Route::NotificationMgmt => "/notificationMgmt",
            Route::RegisterAccount => "/registerAccount",
        }
    }

    /// Parse a path into a route. Unknown paths are not navigable.
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.path() == path)
    }

    /// Whether reaching this route requires an authenticated session.
    pub fn requires_auth(self) -> bool {
        matches!(self, Route::Home | Route::Logout | Route::NotificationMgmt)
    }
}
