//! Path to view association

use std::fmt;

/// Main views the shell can show
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Route {
    #[default]
    Dashboard,
    Orders,
}

impl Route {
    pub const ALL: [Route; 2] = [Route::Dashboard, Route::Orders];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Dashboard => "/",
            Route::Orders => "/orders",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Orders => "Orders",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Resolves paths against a fixed route table
#[derive(Debug, Clone)]
pub struct Router {
    routes: Vec<(&'static str, Route)>,
}

impl Default for Router {
    fn default() -> Self {
        let routes = Route::ALL.iter().map(|route| (route.path(), *route));
        Self::new(routes.collect())
    }
}

impl Router {
    pub fn new(routes: Vec<(&'static str, Route)>) -> Self {
        Self { routes }
    }

    /// Exact match after dropping a trailing slash (`/orders/` == `/orders`).
    pub fn resolve(&self, path: &str) -> Option<Route> {
        let path = path.trim();
        let normalized = if path.len() > 1 {
            path.trim_end_matches('/')
        } else {
            path
        };
        let normalized = if normalized.is_empty() {
            "/"
        } else {
            normalized
        };
        self.routes
            .iter()
            .find(|(candidate, _)| *candidate == normalized)
            .map(|(_, route)| *route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_paths() {
        let router = Router::default();
        assert_eq!(router.resolve("/"), Some(Route::Dashboard));
        assert_eq!(router.resolve("/orders"), Some(Route::Orders));
        assert_eq!(router.resolve("/orders/"), Some(Route::Orders));
        assert_eq!(router.resolve(" / "), Some(Route::Dashboard));
    }

    #[test]
    fn test_resolve_unknown_path() {
        let router = Router::default();
        assert_eq!(router.resolve("/reports"), None);
        assert_eq!(router.resolve("orders"), None);
    }
}
