//! Decoding of a backend reply into a typed result.
//!
//! The body must parse as JSON. After that the HTTP status is consulted
//! first: any status of 400 or above is an
//! error reply regardless of what the body holds. Below 400 the body shape
//! decides: a `message` field means success, a lone `detail` means a backend
//! error, and anything else is malformed.

use serde::Deserialize;
use serde_json::Value;

use crate::errors::{PremstatsError, PremstatsResult};
use crate::types::{ErrorResponse, SuccessResponse};

/// Detail used when an error reply carries no `detail` text
pub const UNKNOWN_ERROR_DETAIL: &str = "Unknown error occurred.";

/// Map an HTTP status and the full reply body onto a success or a failure.
pub fn decode_reply(status: u16, body: &[u8]) -> PremstatsResult<SuccessResponse> {
    let value: Value = serde_json::from_slice(body).map_err(|e| {
        PremstatsError::MalformedResponse(format!("Reply body is not valid JSON: {}", e))
    })?;

    if status >= 400 {
        let detail = error_detail(&value).unwrap_or_else(|| UNKNOWN_ERROR_DETAIL.to_string());
        return Err(PremstatsError::BackendError(detail));
    }

    let has_message = value
        .as_object()
        .ok_or_else(|| {
            PremstatsError::MalformedResponse("Reply body is not a JSON object".to_string())
        })?
        .contains_key("message");

    if has_message {
        return serde_json::from_value(value).map_err(|e| {
            PremstatsError::MalformedResponse(format!("Failed to parse answer: {}", e))
        });
    }

    match error_detail(&value) {
        Some(detail) => Err(PremstatsError::BackendError(detail)),
        None => Err(PremstatsError::MalformedResponse(
            "Reply has neither a message nor a detail field".to_string(),
        )),
    }
}

/// The `detail` text, when the body has the error shape
fn error_detail(value: &Value) -> Option<String> {
    ErrorResponse::deserialize(value).ok().map(|e| e.detail)
}
