//! ULP backend-for-frontend HTTP client.

use crate::error::UlpError;
use crate::types::*;
use reqwest::{Client, RequestBuilder, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument, warn};
use urlencoding::encode;

const UDISE_LOOKUP_PATH: &str = "/v1/sso/udise/school/list";
const AADHAAR_VERIFY_PATH: &str = "/v1/aadhaar/verify";
const SSO_SIGNUP_PATH: &str = "/v1/sso/digilocker/register";
const SCHOOL_DETAILS_PATH: &str = "/v1/sso/school/details";
const ISSUE_CREDENTIAL_PATH: &str = "/v1/credential/issue";

/// ULP client.
///
/// The optional bearer token is stored using `SecretString` so it never
/// shows up in debug output.
#[derive(Clone)]
pub struct UlpClient {
    client: Client,
    base_url: String,
    auth_token: Option<SecretString>,
}

impl UlpClient {
    /// Create a new ULP client.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, UlpError> {
        let client = Client::builder().timeout(timeout).build()?;

        let base_url: String = base_url.into();
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_token: None,
        })
    }

    /// Attach a bearer token sent with every request.
    pub fn with_auth_token(mut self, token: SecretString) -> Self {
        self.auth_token = Some(token);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve a UDISE code to a school record.
    #[instrument(skip(self))]
    pub async fn lookup_school(&self, udise: &str) -> Result<SchoolLookupResponse, UlpError> {
        let url = format!("{}{}/{}", self.base_url, UDISE_LOOKUP_PATH, encode(udise));
        debug!(url = %url, "Sending UDISE lookup");

        let response = self.authorized(self.client.get(&url)).send().await?;
        self.handle_response(response).await
    }

    /// Exchange a national ID for an Aadhaar token.
    #[instrument(skip_all)]
    pub async fn verify_aadhaar(
        &self,
        aadhaar_id: &SecretString,
    ) -> Result<AadhaarVerifyResponse, UlpError> {
        let request = AadhaarVerifyRequest {
            aadhaar_id: aadhaar_id.expose_secret(),
        };

        let response = self
            .authorized(self.client.post(format!("{}{}", self.base_url, AADHAAR_VERIFY_PATH)))
            .json(&request)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Submit the SSO sign-up payload.
    #[instrument(skip_all, fields(digimpid = %payload.digimpid))]
    pub async fn sso_signup(&self, payload: &SignupPayload) -> Result<Value, UlpError> {
        let response = self
            .authorized(self.client.post(format!("{}{}", self.base_url, SSO_SIGNUP_PATH)))
            .json(payload)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Fetch school details for the signed-up user.
    #[instrument(skip(self))]
    pub async fn get_school_details(&self) -> Result<Value, UlpError> {
        let response = self
            .authorized(self.client.get(format!("{}{}", self.base_url, SCHOOL_DETAILS_PATH)))
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Issue the teacher credential.
    #[instrument(skip(self))]
    pub async fn issue_credential(&self) -> Result<Value, UlpError> {
        let response = self
            .authorized(self.client.post(format!("{}{}", self.base_url, ISSUE_CREDENTIAL_PATH)))
            .send()
            .await?;

        self.handle_response(response).await
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.auth_token {
            Some(token) => builder.bearer_auth(token.expose_secret()),
            None => builder,
        }
    }

    /// Handle HTTP response, converting errors appropriately.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, UlpError> {
        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            debug!(
                "Response body: {}",
                body.chars().take(200).collect::<String>()
            );
            serde_json::from_str(&body).map_err(UlpError::from)
        } else {
            Err(self.extract_error(response).await)
        }
    }

    /// Extract error information from failed response.
    async fn extract_error(&self, response: reqwest::Response) -> UlpError {
        let status = response.status();

        match status {
            StatusCode::UNAUTHORIZED => {
                warn!("Authentication failed");
                UlpError::Unauthorized
            }
            _ => {
                let message = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".into());
                warn!(status = %status, "ULP request failed");
                UlpError::Api {
                    status: status.as_u16(),
                    message,
                }
            }
        }
    }
}
