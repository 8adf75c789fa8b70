// file: src/ring/activation.rs
// version: 1.0.0
// guid: d5a3e817-2c94-4f6b-a0e8-71b4c9d2f36e

//! Registration data for `ring license activate`

use serde::{Deserialize, Serialize};

/// Data sent to the licensing center when activating a license
///
/// `serial`, `country`, `town`, `street` and `zip_code` are mandatory for the
/// licensing center. Without `pin` the tool asks for one interactively.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivationRequest {
    pub serial: String,
    pub pin: Option<String>,
    /// Previous PIN, needed to register the license again
    pub previous_pin: Option<String>,
    pub company: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub country: String,
    pub zip_code: String,
    pub region: Option<String>,
    pub district: Option<String>,
    pub town: String,
    pub street: String,
    pub house: Option<String>,
    pub building: Option<String>,
    pub apartment: Option<String>,
    /// License directory
    pub path: Option<String>,
    /// Verify the hardware data reported by the system
    pub validate: bool,
}

impl ActivationRequest {
    /// Names of mandatory fields that are blank
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("serial", &self.serial),
            ("country", &self.country),
            ("zip-code", &self.zip_code),
            ("town", &self.town),
            ("street", &self.street),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}
