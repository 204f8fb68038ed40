//! Client route table.
//!
//! SYSTEM CONTEXT
//! ==============
//! Navigation entries, route guards, and the router all name destinations via
//! `AppRoute` so link targets cannot drift from the registered routes.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Every navigable destination in the app.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    /// Public landing page.
    Landing,
    /// Authenticated home.
    Home,
    Login,
    Registration,
    Profile,
}

impl AppRoute {
    pub const ALL: [Self; 5] = [Self::Landing, Self::Home, Self::Login, Self::Registration, Self::Profile];

    /// Absolute path the router resolves for this route.
    pub fn path(self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::Home => "/app",
            Self::Login => "/login",
            Self::Registration => "/registration",
            Self::Profile => "/profile",
        }
    }

    /// Path without the leading slash, as the router's static segments expect.
    pub fn segment(self) -> &'static str {
        self.path().trim_start_matches('/')
    }

    /// Inverse of [`AppRoute::path`]; a single trailing slash is ignored.
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = match path.strip_suffix('/') {
            Some("") | None => path,
            Some(rest) => rest,
        };
        Self::ALL.into_iter().find(|route| route.path() == trimmed)
    }

    /// Routes that redirect to `/login` when no user is signed in.
    pub fn requires_auth(self) -> bool {
        matches!(self, Self::Home | Self::Profile)
    }
}
