//! Teacher registration - form state, school linking and sign-up pipeline.
//!
//! The flow:
//! - Validates the registration form locally
//! - Links a school through the UDISE lookup
//! - Requires an explicit declaration before anything is submitted
//! - Verifies the Aadhaar number, signs up, fetches school details and
//!   issues the credential, in that order

pub mod backend;
pub mod config;
pub mod context;
pub mod error;
pub mod flow;
pub mod form;
pub mod lookup;
pub mod modal;
pub mod navigation;
pub mod notify;
pub mod pipeline;

pub use backend::RegistrationBackend;
pub use config::Config;
pub use context::RegistrationDetails;
pub use error::{RegistrationError, RegistrationResult};
pub use flow::{Collaborators, RegistrationFlow, SubmitOutcome};
pub use form::{FormField, RegistrationForm};
pub use lookup::VerificationState;
pub use navigation::{NavigationState, Navigator, Route};
pub use notify::{MessageKey, Notifier, ToastKind};
