//! Error types for the registration flow.

use crate::notify::MessageKey;
use crate::pipeline::Stage;
use thiserror::Error;

/// Registration error types.
#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("Registration details missing from navigation state")]
    MissingContext,

    #[error("Aadhaar verification failed")]
    AadhaarVerificationFailed,

    #[error("{stage} failed: {source}")]
    Backend {
        stage: Stage,
        #[source]
        source: ulp_client::UlpError,
    },
}

impl RegistrationError {
    pub(crate) fn backend(stage: Stage) -> impl FnOnce(ulp_client::UlpError) -> Self {
        move |source| RegistrationError::Backend { stage, source }
    }

    /// Message key describing the failure for logs.
    ///
    /// Users only ever see [`MessageKey::ErrorWhileRegisterUser`].
    pub fn message_key(&self) -> MessageKey {
        match self {
            RegistrationError::AadhaarVerificationFailed => MessageKey::AadharVerificationFailed,
            _ => MessageKey::ErrorWhileRegisterUser,
        }
    }
}

/// Result type alias for registration errors.
pub type RegistrationResult<T> = Result<T, RegistrationError>;
