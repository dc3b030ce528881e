/// Page routing with the dashboard behind a stored token

use crate::storage::LocalStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Signup,
    Dashboard,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Signup => "/signup",
            Route::Dashboard => "/",
        }
    }

    /// Unknown paths land on the dashboard, which then applies its guard
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/login" => Route::Login,
            "/signup" => Route::Signup,
            _ => Route::Dashboard,
        }
    }
}

/// Where a navigation to `requested` actually ends up
pub fn resolve_route(requested: Route, store: &LocalStore) -> Route {
    match requested {
        Route::Dashboard if store.token().is_none() => Route::Login,
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::TOKEN_KEY;

    #[test]
    fn test_dashboard_requires_token() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::open(dir.path().join("s.json"));

        assert_eq!(resolve_route(Route::Dashboard, &store), Route::Login);
        assert_eq!(resolve_route(Route::Signup, &store), Route::Signup);

        store.set(TOKEN_KEY, "t").unwrap();
        assert_eq!(resolve_route(Route::Dashboard, &store), Route::Dashboard);
    }

    #[test]
    fn test_paths() {
        assert_eq!(Route::from_path("/login"), Route::Login);
        assert_eq!(Route::from_path("/signup/"), Route::Signup);
        assert_eq!(Route::from_path("/"), Route::Dashboard);
        assert_eq!(Route::from_path(Route::Login.path()), Route::Login);
    }
}
