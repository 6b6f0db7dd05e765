//! Initial route for the dashboard UI.

const DASHBOARD_PREFIX: &str = "/dashboard";

/// Route the UI starts on for a browser `pathname`.
///
/// When the dashboard is served under `/dashboard/`, that prefix is
/// removed so routes are relative to the dashboard root. Other paths are
/// kept as they are.
pub fn initial_route(pathname: &str) -> String {
    match pathname.strip_prefix(DASHBOARD_PREFIX) {
        Some(rest) if rest.starts_with('/') => rest.to_string(),
        _ if pathname.is_empty() => "/".to_string(),
        _ => pathname.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/dashboard/", "/")]
    #[case("/dashboard/posts", "/posts")]
    #[case("/dashboard/post/4/edit", "/post/4/edit")]
    #[case("/dashboard", "/dashboard")]
    #[case("/dashboards/x", "/dashboards/x")]
    #[case("/posts", "/posts")]
    #[case("", "/")]
    fn maps_pathname(#[case] pathname: &str, #[case] expected: &str) {
        assert_eq!(initial_route(pathname), expected);
    }
}
