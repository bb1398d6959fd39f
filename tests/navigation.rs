//! Worked navigation scenarios: session state drives the guard decision
//! for paths as the view layer would submit them.

use stocknotify_client::{NavDecision, Route, Router, SessionHandle};
use tempfile::TempDir;

#[test]
fn empty_session_redirects_notification_mgmt_to_login() {
    let dir = TempDir::new().unwrap();
    let session = SessionHandle::open(dir.path()).unwrap();
    let router = Router::new(session);

    let to = Route::from_path("/notificationMgmt").unwrap();
    assert_eq!(router.decide(to), NavDecision::Redirect(Route::Login));
    assert_eq!(router.resolve(to).path(), "/login");
}

#[test]
fn authenticated_session_allows_notification_mgmt() {
    let dir = TempDir::new().unwrap();
    let session = SessionHandle::open(dir.path()).unwrap();
    session.set_token("abc").unwrap();
    let router = Router::new(session);

    let to = Route::from_path("/notificationMgmt").unwrap();
    assert_eq!(router.decide(to), NavDecision::Allow);
}

#[test]
fn session_restored_from_storage_passes_the_guard() {
    let dir = TempDir::new().unwrap();

    // First run stores a token and exits
    let session = SessionHandle::open(dir.path()).unwrap();
    session.set_token("abc").unwrap();
    drop(session);

    // Second run is authenticated before any explicit call
    let session = SessionHandle::open(dir.path()).unwrap();
    let router = Router::new(session);
    assert_eq!(router.decide(Route::Home), NavDecision::Allow);
    assert_eq!(
        router.decide(Route::Login),
        NavDecision::Redirect(Route::NotificationMgmt)
    );
}
