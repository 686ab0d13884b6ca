//! Client-side routes.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Signup,
    /// The order book.
    Dashboard,
}

impl Route {
    /// Where `/` lands.
    pub const DEFAULT: Route = Route::Signup;

    /// Map a path to its route.
    ///
    /// Matching ignores case, a trailing `/`, and any query or fragment.
    /// Unknown paths resolve to `None`.
    pub fn resolve(path: &str) -> Option<Route> {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim();
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            return path.starts_with('/').then_some(Self::DEFAULT);
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "/login" => Some(Route::Login),
            "/signup" => Some(Route::Signup),
            "/dashboard" => Some(Route::Dashboard),
            _ => None,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Signup => "/signup",
            Route::Dashboard => "/dashboard",
        }
    }

    /// Routes that run the auth gate on entry.
    pub fn is_protected(&self) -> bool {
        matches!(self, Route::Dashboard)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::resolve(s).ok_or_else(|| format!("no route for {s}"))
    }
}
