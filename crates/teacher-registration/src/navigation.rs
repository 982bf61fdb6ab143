//! Navigation contract.

use crate::context::RegistrationDetails;
use std::fmt;
use tracing::info;

/// Destinations the registration flow can navigate to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Previous entry in the navigation history.
    Back,
    /// Application root.
    Root,
    /// Dashboard, optionally flagged as the first login.
    Dashboard { is_first_time_login: bool },
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Back => "..",
            Route::Root => "/",
            Route::Dashboard { .. } => "/dashboard",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Dashboard {
                is_first_time_login,
            } => write!(f, "{} (isFirstTimeLogin={})", self.path(), is_first_time_login),
            _ => f.write_str(self.path()),
        }
    }
}

/// State carried by the navigation that opened the registration form.
#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    pub registration_details: Option<RegistrationDetails>,

    /// Whether a previous navigation exists to return to
    pub has_previous: bool,
}

impl NavigationState {
    pub fn new(registration_details: Option<RegistrationDetails>, has_previous: bool) -> Self {
        Self {
            registration_details,
            has_previous,
        }
    }
}

/// Performs route transitions.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Navigator that only records transitions in the log.
#[derive(Debug, Clone, Default)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&self, route: Route) {
        info!(route = %route, "Navigating");
    }
}
