//! Route table.

/// Known application routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Root path, showing the login page.
    Login,
}

impl Route {
    /// Resolves a location to a route.
    ///
    /// Query string and fragment are ignored. Only the root path matches.
    #[must_use]
    pub fn resolve(location: &str) -> Option<Self> {
        let path = location
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim();

        match path.trim_matches('/') {
            "" if !path.contains("//") => Some(Self::Login),
            _ => None,
        }
    }

    /// Returns the canonical path.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Login => "/",
        }
    }
}
