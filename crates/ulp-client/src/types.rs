//! ULP API types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Lookup status reported when a UDISE code resolves to a school.
pub const STATUS_FOUND: &str = "found";

/// Response of the UDISE school lookup endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SchoolLookupResponse {
    #[serde(default)]
    pub success: bool,

    /// `"found"` or another lookup status
    #[serde(default)]
    pub status: Option<String>,

    /// School record, present when the lookup found a match
    #[serde(default)]
    pub data: Option<SchoolDetails>,
}

impl SchoolLookupResponse {
    /// Returns the school record when the lookup reports a match.
    pub fn into_found(self) -> Option<SchoolDetails> {
        if self.success && self.status.as_deref() == Some(STATUS_FOUND) {
            self.data
        } else {
            None
        }
    }
}

/// School record returned by the lookup.
///
/// The record is kept as received so it can be forwarded unchanged in the
/// sign-up payload. `udiseCode` and `schoolName` may arrive as strings or
/// numbers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchoolDetails {
    pub record: Map<String, Value>,
}

impl SchoolDetails {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.record.get(key)
    }

    pub fn udise_code(&self) -> Option<String> {
        self.text("udiseCode")
    }

    pub fn school_name(&self) -> Option<String> {
        self.text("schoolName")
    }

    fn text(&self, key: &str) -> Option<String> {
        match self.record.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

/// Aadhaar verification request body.
#[derive(Debug, Serialize)]
pub(crate) struct AadhaarVerifyRequest<'a> {
    pub aadhaar_id: &'a str,
}

/// Aadhaar verification response.
#[derive(Debug, Clone, Deserialize)]
pub struct AadhaarVerifyResponse {
    #[serde(default)]
    pub success: bool,

    #[serde(default)]
    pub result: Option<AadhaarVerifyResult>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AadhaarVerifyResult {
    #[serde(default)]
    pub aadhaar_token: Option<String>,
}

impl AadhaarVerifyResponse {
    /// The exchanged token, only when the service reported success.
    pub fn token(&self) -> Option<&str> {
        if !self.success {
            return None;
        }
        self.result
            .as_ref()
            .and_then(|r| r.aadhaar_token.as_deref())
            .filter(|t| !t.is_empty())
    }
}

/// SSO sign-up payload.
#[derive(Debug, Clone, Serialize)]
pub struct SignupPayload {
    pub digiacc: String,
    pub userdata: UserData,
    pub digimpid: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserData {
    pub teacher: TeacherRecord,

    /// Lookup record merged with the region code and an empty DID
    pub school: Map<String, Value>,
}

/// Teacher section of the sign-up payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherRecord {
    pub name: String,
    pub joiningdate: String,
    pub aadhar_id: String,
    pub school_udise: String,
    pub meripehchan_login_id: String,
    pub username: String,
    pub consent: String,
    pub consent_date: String,
    pub did: String,
}
