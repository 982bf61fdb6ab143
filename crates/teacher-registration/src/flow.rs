//! Registration flow orchestration.
//!
//! Lifecycle: construct from navigation state, [`RegistrationFlow::on_view_ready`]
//! opens the link dialog, the user verifies and links a school, fills the
//! form, submits, confirms the declaration, and the submission pipeline
//! runs.

use crate::backend::RegistrationBackend;
use crate::config::RegistrationConfig;
use crate::context::RegistrationDetails;
use crate::error::{RegistrationError, RegistrationResult};
use crate::form::{FormField, RegistrationForm};
use crate::lookup::{SchoolLookup, VerificationState};
use crate::modal::{Dialog, ModalSequencer};
use crate::navigation::{NavigationState, Navigator, Route};
use crate::notify::{MessageKey, Notifier};
use crate::pipeline::{build_payload, SubmissionPipeline};
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};
use ulp_client::SchoolDetails;

/// Result of a submit attempt.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// A dialog is open and blocks the form.
    Blocked(Dialog),
    /// At least one field failed validation.
    Invalid(Vec<FormField>),
    /// The consent dialog was opened; nothing was sent.
    ConsentRequested,
    /// The consent dialog was closed without confirmation.
    Declined,
    /// Every stage succeeded and the dashboard was opened.
    Registered,
    /// A stage failed; the generic error was shown.
    Failed(RegistrationError),
}

/// External collaborators of the flow.
#[derive(Clone)]
pub struct Collaborators {
    pub backend: Arc<dyn RegistrationBackend>,
    pub navigator: Arc<dyn Navigator>,
    pub notifier: Arc<dyn Notifier>,
}

/// Registration form controller.
pub struct RegistrationFlow {
    details: RegistrationDetails,
    config: RegistrationConfig,
    form: RegistrationForm,
    modals: ModalSequencer,
    lookup: SchoolLookup,
    udise_input: String,
    consent_given: bool,
    is_loading: bool,
    today: NaiveDate,
    pipeline: SubmissionPipeline,
    collaborators: Collaborators,
}

impl RegistrationFlow {
    /// Create the flow from the navigation that opened it.
    ///
    /// Without registration details the flow navigates back (or to the root
    /// when there is no history) and returns [`RegistrationError::MissingContext`].
    pub fn new(
        state: NavigationState,
        config: RegistrationConfig,
        collaborators: Collaborators,
        today: NaiveDate,
    ) -> RegistrationResult<Self> {
        let Some(details) = state.registration_details else {
            let route = if state.has_previous {
                Route::Back
            } else {
                Route::Root
            };
            warn!(route = %route, "No registration details, leaving form");
            collaborators.navigator.navigate(route);
            return Err(RegistrationError::MissingContext);
        };

        Ok(Self {
            details,
            config,
            form: RegistrationForm::new(today),
            modals: ModalSequencer::new(),
            lookup: SchoolLookup::new(),
            udise_input: String::new(),
            consent_given: false,
            is_loading: false,
            today,
            pipeline: SubmissionPipeline::new(collaborators.backend.clone()),
            collaborators,
        })
    }

    pub fn details(&self) -> &RegistrationDetails {
        &self.details
    }

    pub fn form(&self) -> &RegistrationForm {
        &self.form
    }

    pub fn modals(&self) -> &ModalSequencer {
        &self.modals
    }

    pub fn verification_state(&self) -> VerificationState {
        self.lookup.state()
    }

    pub fn school_details(&self) -> Option<&SchoolDetails> {
        self.lookup.school()
    }

    pub fn udise_input(&self) -> &str {
        &self.udise_input
    }

    pub fn consent_given(&self) -> bool {
        self.consent_given
    }

    /// Set while the submission pipeline runs.
    ///
    /// `submit` holds `&mut self` for the whole run, so a second submit
    /// cannot interleave; the flag is only for callers rendering state.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Latest selectable joining date.
    pub fn max_date(&self) -> NaiveDate {
        self.form.max_date()
    }

    /// Update a field from user input.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// Pre-fill from the registration details and open the link dialog.
    pub fn on_view_ready(&mut self) {
        if let Some(name) = self.details.name.clone() {
            self.form.set(FormField::Name, name);
        }
        if let Some(mobile) = self.details.mobile.clone() {
            self.form.set(FormField::Phone, mobile);
        }

        self.modals.open(Dialog::Link);
    }

    /// Look up a UDISE code and record the verification state.
    #[instrument(skip(self))]
    pub async fn verify_udise(&mut self, udise: &str) -> VerificationState {
        self.udise_input = udise.to_string();
        let result = self.collaborators.backend.lookup_school(udise).await;
        self.lookup.record(udise, result);
        self.lookup.state()
    }

    /// Apply the verified school to the form and close the link dialog.
    ///
    /// Returns `false` without changes until a lookup has succeeded.
    pub fn link_udise(&mut self) -> bool {
        if self.lookup.state() != VerificationState::Yes {
            debug!("Link requested before successful verification");
            return false;
        }
        let Some(school) = self.lookup.school() else {
            return false;
        };
        let udise_code = school.udise_code();
        let school_name = school.school_name();

        if let Some(code) = udise_code {
            self.form.set(FormField::UdiseId, code);
        }
        if let Some(name) = school_name {
            self.form.set(FormField::SchoolName, name);
        }

        self.collaborators
            .notifier
            .success(MessageKey::SuccessfullyLinked);
        self.modals.close(Dialog::Link);
        true
    }

    /// Attempt a submission.
    ///
    /// Invalid forms are blocked silently. A valid form without consent opens
    /// the consent dialog; with consent the pipeline runs.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if let Some(dialog) = self.modals.active() {
            return SubmitOutcome::Blocked(dialog);
        }

        let Some(values) = self.form.validated() else {
            self.form.mark_all_touched();
            let invalid = self.form.invalid_fields();
            debug!(?invalid, "Form invalid, submission blocked");
            return SubmitOutcome::Invalid(invalid);
        };

        if !self.consent_given {
            self.modals.open(Dialog::Consent);
            return SubmitOutcome::ConsentRequested;
        }

        let payload = build_payload(
            &self.config,
            &self.details,
            &values,
            self.lookup.school(),
            self.today,
        );

        self.is_loading = true;
        let result = self.pipeline.run(payload).await;
        self.is_loading = false;
        self.consent_given = false;

        match result {
            Ok(_) => {
                info!(digimpid = %self.details.meripehchanid, "User registered");
                self.collaborators
                    .notifier
                    .success(MessageKey::UserRegisteredSuccessfully);
                self.collaborators.navigator.navigate(Route::Dashboard {
                    is_first_time_login: true,
                });
                SubmitOutcome::Registered
            }
            Err(e) => {
                error!(error = %e, key = %e.message_key(), "Registration failed");
                self.collaborators
                    .notifier
                    .error(MessageKey::ErrorWhileRegisterUser);
                SubmitOutcome::Failed(e)
            }
        }
    }

    /// Close the consent dialog; a confirmation re-invokes [`Self::submit`].
    ///
    /// Ignored unless the consent dialog is open.
    pub async fn submit_declaration(&mut self, confirmed: bool) -> SubmitOutcome {
        if !self.modals.is_open(Dialog::Consent) {
            debug!("Declaration without open consent dialog ignored");
            return match self.modals.active() {
                Some(dialog) => SubmitOutcome::Blocked(dialog),
                None => SubmitOutcome::Declined,
            };
        }

        self.consent_given = confirmed;
        self.modals.close(Dialog::Consent);

        if confirmed {
            self.submit().await
        } else {
            debug!("Declaration declined");
            SubmitOutcome::Declined
        }
    }
}
