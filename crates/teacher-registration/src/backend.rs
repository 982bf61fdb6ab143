//! Remote operations used by the registration flow.

use async_trait::async_trait;
use secrecy::SecretString;
use serde_json::Value;
use ulp_client::{AadhaarVerifyResponse, SchoolLookupResponse, SignupPayload, UlpClient, UlpError};

/// Backend seam between the flow and the ULP services.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationBackend: Send + Sync {
    async fn lookup_school(&self, udise: &str) -> Result<SchoolLookupResponse, UlpError>;

    async fn verify_aadhaar(
        &self,
        aadhaar_id: &SecretString,
    ) -> Result<AadhaarVerifyResponse, UlpError>;

    async fn sso_signup(&self, payload: &SignupPayload) -> Result<Value, UlpError>;

    async fn get_school_details(&self) -> Result<Value, UlpError>;

    async fn issue_credential(&self) -> Result<Value, UlpError>;
}

#[async_trait]
impl RegistrationBackend for UlpClient {
    async fn lookup_school(&self, udise: &str) -> Result<SchoolLookupResponse, UlpError> {
        UlpClient::lookup_school(self, udise).await
    }

    async fn verify_aadhaar(
        &self,
        aadhaar_id: &SecretString,
    ) -> Result<AadhaarVerifyResponse, UlpError> {
        UlpClient::verify_aadhaar(self, aadhaar_id).await
    }

    async fn sso_signup(&self, payload: &SignupPayload) -> Result<Value, UlpError> {
        UlpClient::sso_signup(self, payload).await
    }

    async fn get_school_details(&self) -> Result<Value, UlpError> {
        UlpClient::get_school_details(self).await
    }

    async fn issue_credential(&self) -> Result<Value, UlpError> {
        UlpClient::issue_credential(self).await
    }
}
