//! Route table and auth gate
//!
//! Pure navigation rules with no dependency on the DOM: which paths exist,
//! which need a session, and where a visitor ends up given their
//! authentication state. The browser router applies these decisions.

use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppRoute {
    Login,
    Register,
    /// Home page (requires auth)
    Dashboard,
}

impl AppRoute {
    /// Maps a URL path to a route. Unknown paths yield `None`.
    pub fn from_path(path: &str) -> Option<Self> {
        match normalize(path) {
            "/login" => Some(Self::Login),
            "/register" => Some(Self::Register),
            "/" => Some(Self::Dashboard),
            _ => None,
        }
    }

    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Dashboard => "/",
        }
    }

    /// **Core guard rule: whether the route needs a session**
    pub fn requires_auth(&self) -> bool {
        matches!(self, Self::Dashboard)
    }

    /// Whether an authenticated visitor is sent away from this route.
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login)
    }

    /// Target of the catch-all redirect.
    pub fn home() -> Self {
        Self::Dashboard
    }

    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    pub fn auth_success_redirect() -> Self {
        Self::Dashboard
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

/// `/login/` and `/login` are the same page.
fn normalize(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

/// Outcome of the auth gate for a requested path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Render(AppRoute),
    Redirect {
        to: AppRoute,
        /// Where the visitor was heading when sent to login.
        return_to: Option<String>,
    },
}

impl Navigation {
    /// The route that ends up on screen.
    pub fn route(&self) -> AppRoute {
        match self {
            Navigation::Render(route) => *route,
            Navigation::Redirect { to, .. } => *to,
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, Navigation::Redirect { .. })
    }
}

/// Decides what to show for `path`.
///
/// Unknown paths fall through to home first, so an unauthenticated visitor
/// on an unknown path is sent to login with home as the return target.
pub fn guard(path: &str, is_authenticated: bool) -> Navigation {
    let (route, matched) = match AppRoute::from_path(path) {
        Some(route) => (route, true),
        None => (AppRoute::home(), false),
    };

    if route.requires_auth() && !is_authenticated {
        return Navigation::Redirect {
            to: AppRoute::auth_failure_redirect(),
            return_to: Some(route.to_path().to_string()),
        };
    }

    if route.should_redirect_when_authenticated() && is_authenticated {
        return Navigation::Redirect {
            to: AppRoute::auth_success_redirect(),
            return_to: None,
        };
    }

    if matched {
        Navigation::Render(route)
    } else {
        Navigation::Redirect {
            to: route,
            return_to: None,
        }
    }
}

/// Where to go after signing in: the recorded destination when it names a
/// protected page, otherwise home.
pub fn return_destination(return_to: Option<&str>) -> AppRoute {
    return_to
        .and_then(AppRoute::from_path)
        .filter(AppRoute::requires_auth)
        .unwrap_or_else(AppRoute::auth_success_redirect)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_table() {
        assert_eq!(AppRoute::from_path("/login"), Some(AppRoute::Login));
        assert_eq!(AppRoute::from_path("/register/"), Some(AppRoute::Register));
        assert_eq!(AppRoute::from_path("/"), Some(AppRoute::Dashboard));
        assert_eq!(AppRoute::from_path(""), Some(AppRoute::Dashboard));
        assert_eq!(AppRoute::from_path("/settings"), None);
    }

    #[test]
    fn protected_route_redirects_to_login_with_origin() {
        assert_eq!(
            guard("/", false),
            Navigation::Redirect {
                to: AppRoute::Login,
                return_to: Some("/".to_string())
            }
        );
    }

    #[test]
    fn protected_route_renders_when_authenticated() {
        assert_eq!(guard("/", true), Navigation::Render(AppRoute::Dashboard));
    }

    #[test]
    fn login_redirects_home_when_authenticated() {
        assert_eq!(
            guard("/login", true),
            Navigation::Redirect {
                to: AppRoute::Dashboard,
                return_to: None
            }
        );
        assert_eq!(guard("/login", false), Navigation::Render(AppRoute::Login));
    }

    #[test]
    fn register_is_public() {
        assert_eq!(guard("/register", false), Navigation::Render(AppRoute::Register));
        assert_eq!(guard("/register", true), Navigation::Render(AppRoute::Register));
    }

    #[test]
    fn unknown_path_goes_home_then_through_gate() {
        assert_eq!(
            guard("/nope", true),
            Navigation::Redirect {
                to: AppRoute::Dashboard,
                return_to: None
            }
        );
        assert_eq!(guard("/nope", false).route(), AppRoute::Login);
    }

    #[test]
    fn return_destination_only_honours_protected_pages() {
        assert_eq!(return_destination(Some("/")), AppRoute::Dashboard);
        assert_eq!(return_destination(Some("/login")), AppRoute::Dashboard);
        assert_eq!(return_destination(Some("/elsewhere")), AppRoute::Dashboard);
        assert_eq!(return_destination(None), AppRoute::Dashboard);
    }
}
