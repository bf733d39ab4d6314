use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::storage::TokenStore;

/// Top-level areas of the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    Home,
    Auth,
    ProfileDashboard,
    EnrolledCourses,
    Cart,
    NotFound,
}

impl Route {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Auth => "Auth",
            Self::ProfileDashboard => "ProfileDashboard",
            Self::EnrolledCourses => "EnrolledCourses",
            Self::Cart => "Cart",
            Self::NotFound => "NotFound",
        }
    }

    /// Look a route up by name; anything unknown lands on `NotFound`
    pub fn resolve(name: &str) -> Self {
        match name {
            "Home" => Self::Home,
            "Auth" => Self::Auth,
            "ProfileDashboard" | "Profile" => Self::ProfileDashboard,
            "EnrolledCourses" => Self::EnrolledCourses,
            "Cart" => Self::Cart,
            _ => Self::NotFound,
        }
    }

    /// Whether reaching this route needs a stored token
    pub fn requires_session(&self) -> bool {
        matches!(self, Self::ProfileDashboard | Self::EnrolledCourses | Self::Cart)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Launch-time session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Checking,
    Authenticated,
    Unauthenticated,
}

/// Decides the initial route from token presence, once per process
///
/// `Checking` moves to `Authenticated` or `Unauthenticated` on the first
/// evaluation and stays there; a later 401 does not move it back.
#[derive(Debug)]
pub struct SessionGate {
    state: GateState,
}

impl Default for SessionGate {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionGate {
    pub fn new() -> Self {
        Self {
            state: GateState::Checking,
        }
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    /// Read the token store (first call only) and return the settled state
    pub fn evaluate(&mut self, tokens: &TokenStore) -> GateState {
        if self.state == GateState::Checking {
            self.state = if tokens.has_token() {
                GateState::Authenticated
            } else {
                GateState::Unauthenticated
            };
            debug!("Session gate settled: {:?}", self.state);
        }
        self.state
    }

    /// Where the client starts; `None` while still checking
    pub fn initial_route(&self) -> Option<Route> {
        match self.state {
            GateState::Checking => None,
            GateState::Authenticated => Some(Route::ProfileDashboard),
            GateState::Unauthenticated => Some(Route::Home),
        }
    }
}
