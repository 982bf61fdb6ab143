//! Registration context handed over by the SSO sign-in step.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identity details received through navigation state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationDetails {
    /// Holder identifier issued by the SSO provider
    pub meripehchanid: String,

    /// Pre-fill value for the name field
    #[serde(default)]
    pub name: Option<String>,

    /// Pre-fill value for the phone field
    #[serde(default)]
    pub mobile: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RegistrationDetails {
    pub fn new(meripehchanid: impl Into<String>) -> Self {
        Self {
            meripehchanid: meripehchanid.into(),
            name: None,
            mobile: None,
            extra: Map::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_mobile(mut self, mobile: impl Into<String>) -> Self {
        self.mobile = Some(mobile.into());
        self
    }
}
