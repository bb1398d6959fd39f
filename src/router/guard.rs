//! Navigation guard evaluated before every route change.

use tracing::debug;

use crate::auth::SessionHandle;

use super::Route;

/// Outcome of a guard check for a single navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDecision {
    /// Proceed to the requested destination unchanged.
    Allow,
    /// Navigate to the given destination instead.
    Redirect(Route),
}

/// Guards navigation against the current session state.
/// Holds a session handle; no state is carried across navigations.
pub struct Router {
    session: SessionHandle,
}

impl Router {
    pub fn new(session: SessionHandle) -> Self {
        Self { session }
    }

    /// Decide a navigation to `to`.
    ///
    /// Purely a function of the destination's metadata and the session state
    /// at the time of the check: unauthenticated users are redirected away
    /// from guarded routes, and already-authenticated users are redirected
    /// away from the login page.
    pub fn decide(&self, to: Route) -> NavDecision {
        let authenticated = self.session.is_authenticated();

        if to.requires_auth() && !authenticated {
            debug!(to = to.path(), "Unauthenticated navigation to guarded route");
            return NavDecision::Redirect(Route::Login);
        }
        if to == Route::Login && authenticated {
            return NavDecision::Redirect(Route::NotificationMgmt);
        }
        NavDecision::Allow
    }

    /// Resolve a navigation to the destination actually reached.
    /// A redirect target is re-checked once; both redirect targets are
    /// allowed under the session state that produced them, so one pass
    /// settles the destination.
    pub fn resolve(&self, to: Route) -> Route {
        match self.decide(to) {
            NavDecision::Allow => to,
            NavDecision::Redirect(target) => match self.decide(target) {
                NavDecision::Allow => target,
                NavDecision::Redirect(fallback) => fallback,
            },
        }
    }
}
