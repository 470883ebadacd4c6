#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the Ezrelo server.
//!
//! These types are serialized to JSON for the REST API and for the CLI's
//! `--json` output, so both front ends speak the same contract.

use ezrelo_address::NormalizedAddress;
use serde::{Deserialize, Serialize};

/// Error message for a request with the wrong HTTP method.
pub const METHOD_NOT_ALLOWED: &str = "Method not allowed";

/// Error message when normalization faults.
pub const VERIFICATION_FAILED: &str = "Address verification failed";

/// Body of `POST /api/verify-address`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VerifyAddressRequest {
    /// Free-text address to verify.
    #[serde(default)]
    pub address: Option<String>,
}

/// Successful verification result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiVerifiedAddress {
    /// The normalized address.
    pub verified_address: String,
    /// The address exactly as submitted.
    pub original: String,
    /// Always `true` for a successful verification.
    pub verified: bool,
    /// Whether normalization changed the address.
    pub usps_formatted: bool,
}

impl ApiVerifiedAddress {
    /// Builds the response for `original` from its normalization result.
    #[must_use]
    pub fn new(original: String, result: NormalizedAddress) -> Self {
        Self {
            verified_address: result.normalized,
            original,
            verified: true,
            usps_formatted: result.changed,
        }
    }
}

/// Degraded response when verification faults. Carries the original
/// address so clients still have something usable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiVerificationFailure {
    /// Error message.
    pub error: String,
    /// The unprocessed original address.
    pub verified_address: String,
}

impl ApiVerificationFailure {
    /// Builds the failure response for `original`.
    #[must_use]
    pub fn new(original: String) -> Self {
        Self {
            error: VERIFICATION_FAILED.to_string(),
            verified_address: original,
        }
    }
}

/// A plain error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Error message.
    pub error: String,
}

impl ApiError {
    /// Creates an error response with the given message.
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the server is healthy.
    pub healthy: bool,
    /// Server version.
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verified_address_uses_camel_case() {
        let response = ApiVerifiedAddress::new(
            "123 main st springfield IL 62704".to_string(),
            NormalizedAddress {
                normalized: "123 Main St, Springfield, IL 62704".to_string(),
                changed: true,
            },
        );

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({
                "verifiedAddress": "123 Main St, Springfield, IL 62704",
                "original": "123 main st springfield IL 62704",
                "verified": true,
                "uspsFormatted": true,
            })
        );
    }

    #[test]
    fn failure_carries_original_address() {
        assert_eq!(
            serde_json::to_value(ApiVerificationFailure::new("1 A St".to_string())).unwrap(),
            serde_json::json!({
                "error": "Address verification failed",
                "verifiedAddress": "1 A St",
            })
        );
    }

    #[test]
    fn request_address_is_optional() {
        let request: VerifyAddressRequest = serde_json::from_str("{}").unwrap();
        assert!(request.address.is_none());
    }
}
