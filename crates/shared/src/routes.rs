use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Dashboard,
    CreateInvestor,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Dashboard => "/dashboard",
            Route::CreateInvestor => "/create-investor",
        }
    }

    // `/` redirects to the login screen.
    pub fn resolve(path: &str) -> Option<Route> {
        match path.trim_end_matches('/') {
            "" => Some(Route::Login),
            "/login" => Some(Route::Login),
            "/dashboard" => Some(Route::Dashboard),
            "/create-investor" => Some(Route::CreateInvestor),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
#[path = "tests/routes_tests.rs"]
mod tests;
