//! Route table shared by the router and the gateway's 401 handling.

pub const LOGIN_ROUTE: &str = "/login";
pub const REGISTER_ROUTE: &str = "/register";
pub const ABOUT_ROUTE: &str = "/about";
pub const DASHBOARD_ROUTE: &str = "/dashboard";
pub const HISTORY_ROUTE: &str = "/history";

/// Routes reachable without a session.
pub const PUBLIC_ROUTES: &[&str] = &[LOGIN_ROUTE, REGISTER_ROUTE, ABOUT_ROUTE];

/// True when `path` is a public route or nested under one.
pub fn is_public_route(path: &str) -> bool {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let path = if path.len() > 1 { path.trim_end_matches('/') } else { path };
    PUBLIC_ROUTES.iter().any(|route| {
        path == *route
            || path
                .strip_prefix(route)
                .is_some_and(|rest| rest.starts_with('/'))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_routes() {
        assert!(is_public_route("/login"));
        assert!(is_public_route("/login/"));
        assert!(is_public_route("/register?next=/history"));
        assert!(is_public_route("/about"));
    }

    #[test]
    fn test_protected_routes() {
        assert!(!is_public_route("/"));
        assert!(!is_public_route("/dashboard"));
        assert!(!is_public_route("/history"));
        // Substring matches are not enough
        assert!(!is_public_route("/history/login"));
        assert!(!is_public_route("/loginx"));
    }
}
