//! UDISE school verification state.

use tracing::{debug, warn};
use ulp_client::{SchoolDetails, SchoolLookupResponse, UlpError};

/// Outcome of the most recent UDISE verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerificationState {
    /// No verification attempted yet.
    #[default]
    Unverified,
    /// The code resolved to a school.
    Yes,
    /// The service answered without a match.
    No,
    /// The lookup request itself failed.
    Failed,
}

/// Holds the verification state and the last verified school.
#[derive(Debug, Clone, Default)]
pub struct SchoolLookup {
    state: VerificationState,
    school: Option<SchoolDetails>,
}

impl SchoolLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> VerificationState {
        self.state
    }

    pub fn school(&self) -> Option<&SchoolDetails> {
        self.school.as_ref()
    }

    /// Record the result of a lookup request.
    ///
    /// Previously verified school data survives both a miss and a failed
    /// request.
    pub fn record(&mut self, udise: &str, result: Result<SchoolLookupResponse, UlpError>) {
        match result {
            Ok(response) => match response.into_found() {
                Some(school) => {
                    debug!(udise = %udise, "UDISE verified");
                    self.state = VerificationState::Yes;
                    self.school = Some(school);
                }
                None => {
                    debug!(udise = %udise, "UDISE not found");
                    self.state = VerificationState::No;
                }
            },
            Err(e) => {
                warn!(udise = %udise, error = %e, "UDISE lookup request failed");
                self.state = VerificationState::Failed;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(json: serde_json::Value) -> SchoolLookupResponse {
        serde_json::from_value(json).unwrap()
    }

    fn found() -> SchoolLookupResponse {
        response(serde_json::json!({
            "success": true,
            "status": "found",
            "data": {"udiseCode": "X", "schoolName": "Y"}
        }))
    }

    #[test]
    fn test_found_stores_school() {
        let mut lookup = SchoolLookup::new();
        assert_eq!(lookup.state(), VerificationState::Unverified);

        lookup.record("X", Ok(found()));
        assert_eq!(lookup.state(), VerificationState::Yes);
        assert_eq!(lookup.school().unwrap().school_name().as_deref(), Some("Y"));
    }

    #[test]
    fn test_miss_keeps_previous_school() {
        let mut lookup = SchoolLookup::new();
        lookup.record("X", Ok(found()));

        lookup.record(
            "Z",
            Ok(response(serde_json::json!({"success": true, "status": "not_found"}))),
        );
        assert_eq!(lookup.state(), VerificationState::No);
        assert_eq!(lookup.school().unwrap().udise_code().as_deref(), Some("X"));
    }

    #[test]
    fn test_unsuccessful_found_is_a_miss() {
        let mut lookup = SchoolLookup::new();
        lookup.record(
            "X",
            Ok(response(serde_json::json!({
                "success": false,
                "status": "found",
                "data": {"udiseCode": "X"}
            }))),
        );
        assert_eq!(lookup.state(), VerificationState::No);
        assert!(lookup.school().is_none());
    }

    #[test]
    fn test_transport_failure() {
        let mut lookup = SchoolLookup::new();
        lookup.record("X", Ok(found()));
        lookup.record("X", Err(UlpError::Unauthorized));

        assert_eq!(lookup.state(), VerificationState::Failed);
        assert!(lookup.school().is_some());
    }
}
