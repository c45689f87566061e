use super::*;

#[test]
fn root_redirects_to_login() {
    assert_eq!(Route::resolve("/"), Some(Route::Login));
    assert_eq!(Route::resolve(""), Some(Route::Login));
}

#[test]
fn known_paths_round_trip() {
    for route in [Route::Login, Route::Dashboard, Route::CreateInvestor] {
        assert_eq!(Route::resolve(route.path()), Some(route));
    }
    assert_eq!(Route::resolve("/dashboard/"), Some(Route::Dashboard));
}

#[test]
fn unknown_paths_have_no_route() {
    assert_eq!(Route::resolve("/settings"), None);
    assert_eq!(Route::resolve("dashboard"), None);
}
