//! Declared route identities.
//!
//! The route table is fixed at compile time: every route has a unique
//! symbolic name and a path. Navigation policy refers to routes only by name.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("unknown route name: {0}")]
    UnknownName(String),
    #[error("no route declared for path: {0}")]
    UnknownPath(String),
}

/// Symbolic name of a declared route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteName {
    /// Authentication surface.
    Login,
    /// Authenticated landing route (the inventory view).
    Home,
}

impl RouteName {
    pub const ALL: [RouteName; 2] = [RouteName::Login, RouteName::Home];

    pub fn name(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Home => "home",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Home => "/",
        }
    }

    pub fn is_login(self) -> bool {
        matches!(self, Self::Login)
    }

    /// Resolve a location pathname to its declared route.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::UnknownPath`] for paths outside the route table.
    pub fn from_path(path: &str) -> Result<Self, RouteError> {
        let normalized = match path.trim_end_matches('/') {
            "" => "/",
            other => other,
        };
        Self::ALL
            .into_iter()
            .find(|route| route.path() == normalized)
            .ok_or_else(|| RouteError::UnknownPath(path.to_owned()))
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RouteName {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|route| route.name() == s)
            .ok_or_else(|| RouteError::UnknownName(s.to_owned()))
    }
}
