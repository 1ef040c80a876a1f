//! Page routes

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Home,
    Aberdeen,
}

impl Route {
    pub const ALL: [Route; 2] = [Route::Home, Route::Aberdeen];

    /// Match a request path; query, fragment and a trailing slash are ignored
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let path = path.trim_end_matches('/');
        match path {
            "" | "/index.html" => Some(Route::Home),
            "/aberdeen" | "/aberdeen/index.html" => Some(Route::Aberdeen),
            _ => None,
        }
    }

    pub fn as_path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Aberdeen => "/aberdeen",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Aberdeen => "aberdeen",
        }
    }

    /// Whether the page mounts the Invisalign tab switcher
    pub fn has_switcher(&self) -> bool {
        matches!(self, Route::Aberdeen)
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_path())
    }
}

impl std::str::FromStr for Route {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::from_path(s).ok_or_else(|| CoreError::NotFound(s.to_string()))
    }
}
