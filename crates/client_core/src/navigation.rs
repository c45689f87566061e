use shared::routes::Route;
use tracing::debug;

use crate::session::Authenticator;

pub trait Navigator: Send {
    fn navigate(&mut self, route: Route);
}

#[derive(Debug, Clone)]
pub struct NavigationHistory {
    current: Route,
    visited: Vec<Route>,
}

impl NavigationHistory {
    pub fn new() -> Self {
        Self {
            current: Route::Login,
            visited: vec![Route::Login],
        }
    }

    pub fn current(&self) -> Route {
        self.current
    }

    pub fn visited(&self) -> &[Route] {
        &self.visited
    }

    /// Navigates by path; unknown paths leave the current screen in place.
    pub fn navigate_path(&mut self, path: &str) -> Option<Route> {
        let route = Route::resolve(path)?;
        self.navigate(route);
        Some(route)
    }
}

impl Default for NavigationHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for NavigationHistory {
    fn navigate(&mut self, route: Route) {
        debug!(from = %self.current, to = %route, "navigation");
        self.current = route;
        self.visited.push(route);
    }
}

/// Screen actually shown for `route`: everything except the login screen
/// needs an authenticated session.
pub fn gate(route: Route, session: &dyn Authenticator) -> Route {
    if route == Route::Login || session.is_authenticated() {
        route
    } else {
        Route::Login
    }
}

pub fn sign_out(session: &mut dyn Authenticator, navigator: &mut dyn Navigator) {
    session.logout();
    navigator.navigate(Route::Login);
}

#[cfg(test)]
#[path = "tests/navigation_tests.rs"]
mod tests;
