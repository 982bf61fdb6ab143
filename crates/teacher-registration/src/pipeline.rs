//! Submission pipeline: verify identity, sign up, fetch school, issue credential.
//!
//! Stages run strictly in order. The first failing stage aborts the run;
//! remote side effects of earlier stages are not rolled back.

use crate::backend::RegistrationBackend;
use crate::config::RegistrationConfig;
use crate::context::RegistrationDetails;
use crate::error::{RegistrationError, RegistrationResult};
use crate::form::{FormValues, DATE_FORMAT};
use chrono::NaiveDate;
use secrecy::SecretString;
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, instrument};
use ulp_client::{SchoolDetails, SignupPayload, TeacherRecord, UserData};

/// Pipeline stages in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    VerifyIdentity,
    SignUp,
    FetchSchoolDetails,
    IssueCredential,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::VerifyIdentity => f.write_str("Identity verification"),
            Stage::SignUp => f.write_str("Sign-up"),
            Stage::FetchSchoolDetails => f.write_str("School details fetch"),
            Stage::IssueCredential => f.write_str("Credential issuance"),
        }
    }
}

/// Build the sign-up payload from a validated form.
///
/// The teacher's `aadharId` still holds the plaintext ID here; the pipeline
/// swaps it for the verification token before sending.
pub fn build_payload(
    config: &RegistrationConfig,
    details: &RegistrationDetails,
    values: &FormValues,
    school: Option<&SchoolDetails>,
    consent_date: NaiveDate,
) -> SignupPayload {
    let teacher = TeacherRecord {
        name: values.name.clone(),
        joiningdate: values.joining_date.format(DATE_FORMAT).to_string(),
        aadhar_id: values.aadhar_id.clone(),
        school_udise: values.udise_id.clone(),
        meripehchan_login_id: details.meripehchanid.clone(),
        username: details.meripehchanid.clone(),
        consent: "yes".into(),
        consent_date: consent_date.format(DATE_FORMAT).to_string(),
        did: String::new(),
    };

    let mut school: Map<String, Value> = school.map(|s| s.record.clone()).unwrap_or_default();
    school.insert("stateCode".into(), Value::from(config.state_code));
    school.insert("did".into(), Value::from(""));

    SignupPayload {
        digiacc: config.digiacc.clone(),
        userdata: UserData { teacher, school },
        digimpid: details.meripehchanid.clone(),
    }
}

/// Runs the four dependent remote calls of a registration.
#[derive(Clone)]
pub struct SubmissionPipeline {
    backend: Arc<dyn RegistrationBackend>,
}

impl SubmissionPipeline {
    pub fn new(backend: Arc<dyn RegistrationBackend>) -> Self {
        Self { backend }
    }

    /// Execute every stage in order, returning the credential response.
    #[instrument(skip_all, fields(digimpid = %payload.digimpid))]
    pub async fn run(&self, mut payload: SignupPayload) -> RegistrationResult<Value> {
        let aadhaar_id = SecretString::new(std::mem::take(&mut payload.userdata.teacher.aadhar_id));

        let verification = self
            .backend
            .verify_aadhaar(&aadhaar_id)
            .await
            .map_err(RegistrationError::backend(Stage::VerifyIdentity))?;
        let token = verification
            .token()
            .ok_or(RegistrationError::AadhaarVerificationFailed)?;
        payload.userdata.teacher.aadhar_id = token.to_string();
        debug!(stage = %Stage::VerifyIdentity, "Stage complete");

        self.backend
            .sso_signup(&payload)
            .await
            .map_err(RegistrationError::backend(Stage::SignUp))?;
        debug!(stage = %Stage::SignUp, "Stage complete");

        self.backend
            .get_school_details()
            .await
            .map_err(RegistrationError::backend(Stage::FetchSchoolDetails))?;
        debug!(stage = %Stage::FetchSchoolDetails, "Stage complete");

        let credential = self
            .backend
            .issue_credential()
            .await
            .map_err(RegistrationError::backend(Stage::IssueCredential))?;
        info!("Registration pipeline complete");

        Ok(credential)
    }
}
