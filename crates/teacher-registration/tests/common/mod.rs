//! Common test utilities for integration tests.

use chrono::NaiveDate;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use teacher_registration::{
    config::RegistrationConfig, Collaborators, MessageKey, NavigationState, Navigator, Notifier,
    RegistrationDetails, RegistrationFlow, RegistrationResult, Route, ToastKind,
};
use ulp_client::UlpClient;
use wiremock::MockServer;

#[derive(Default)]
pub struct RecordingNavigator(Mutex<Vec<Route>>);

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<Route> {
        self.0.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.0.lock().unwrap().push(route);
    }
}

#[derive(Default)]
pub struct RecordingNotifier(Mutex<Vec<(ToastKind, MessageKey)>>);

impl RecordingNotifier {
    pub fn toasts(&self) -> Vec<(ToastKind, MessageKey)> {
        self.0.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, kind: ToastKind, message: MessageKey) {
        self.0.lock().unwrap().push((kind, message));
    }
}

pub struct TestFlow {
    pub flow: RegistrationResult<RegistrationFlow>,
    pub navigator: Arc<RecordingNavigator>,
    pub notifier: Arc<RecordingNotifier>,
}

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

pub fn details() -> RegistrationDetails {
    RegistrationDetails::new("MP-42")
        .with_name("Asha Devi")
        .with_mobile("9876543210")
}

/// Create a ULP client configured for a mock server.
pub fn test_ulp_client(mock_server: &MockServer) -> UlpClient {
    UlpClient::new(mock_server.uri(), Duration::from_secs(5)).unwrap()
}

/// Create a flow backed by the mock server.
pub fn test_flow(mock_server: &MockServer, state: NavigationState) -> TestFlow {
    let navigator = Arc::new(RecordingNavigator::default());
    let notifier = Arc::new(RecordingNotifier::default());

    let collaborators = Collaborators {
        backend: Arc::new(test_ulp_client(mock_server)),
        navigator: navigator.clone(),
        notifier: notifier.clone(),
    };

    let flow = RegistrationFlow::new(state, RegistrationConfig::default(), collaborators, today());

    TestFlow {
        flow,
        navigator,
        notifier,
    }
}
