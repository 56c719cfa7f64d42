//! Shared validation helpers for inbound HTTP adapters.
//!
//! Field validation itself lives in the domain
//! ([`crate::domain::ItemDraft::normalize`]); this module only translates
//! rejections into the transport error envelope with structured details.

use serde_json::json;

use crate::domain::{Error, ItemValidationError};

/// Map a normalizer rejection to a 400-category transport error.
///
/// The details object carries the failing field and a stable code so clients
/// can highlight the offending input.
pub fn map_validation_error(err: &ItemValidationError) -> Error {
    match err {
        ItemValidationError::MissingField { field } => {
            Error::invalid_request(format!("missing required field: {field}")).with_details(json!({
                "field": field,
                "code": "missing_field",
            }))
        }
        ItemValidationError::InvalidField { field } => {
            Error::invalid_request(format!("invalid value for field: {field}")).with_details(json!({
                "field": field,
                "code": "invalid_field",
            }))
        }
    }
}

/// Error for a path identifier that is not a valid UUID.
pub fn invalid_identifier_error(value: &str) -> Error {
    Error::invalid_request("item id must be a valid UUID").with_details(json!({
        "field": "id",
        "value": value,
        "code": "invalid_uuid",
    }))
}
