//! Response classification.
//!
//! Every store endpoint answers in one of three mutually exclusive shapes:
//! a typed success payload, a single structured error, or a list of
//! validation errors. [`classify`] maps a raw status code and body into
//! exactly one of them; the endpoint operations are thin wrappers around it.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::Error;

/// A single structured error reported by the store API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Machine-readable error code, when the API provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Error category, e.g. `invalid_data` or `not_allowed`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,

    /// Human-readable message.
    pub message: String,

    /// Field the error refers to, for validation failures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ApiError {
    /// Fixed error used for every 401 response. The body is never consulted.
    pub(crate) fn unauthorized() -> Self {
        Self {
            code: None,
            error_type: Some("unauthorized".into()),
            message: "Unauthorized".into(),
            field: None,
        }
    }
}

/// Multi-error body shape: `{"errors": [...]}`. An absent key decodes as an
/// empty list, which triggers the single-error fallback in [`classify`].
#[derive(Debug, Deserialize)]
struct ErrorList {
    #[serde(default)]
    errors: Vec<ApiError>,
}

/// Outcome of a store API call.
///
/// Exactly one variant exists per response. Decode and transport failures
/// are surfaced as [`Error`](crate::Error) instead, so a `StoreResponse`
/// always reflects something the API actually said.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreResponse<T> {
    /// 200 with the operation's success payload.
    Data(T),
    /// A single structured error, including the synthesized 401 case.
    Error(ApiError),
    /// Multiple validation errors, in the order the API reported them.
    /// Never empty.
    Errors(Vec<ApiError>),
}

impl<T> StoreResponse<T> {
    /// Whether this is a success payload.
    pub fn is_data(&self) -> bool {
        matches!(self, StoreResponse::Data(_))
    }

    /// The success payload, if any.
    pub fn data(self) -> Option<T> {
        match self {
            StoreResponse::Data(data) => Some(data),
            _ => None,
        }
    }

    /// The single error, if any.
    pub fn error(&self) -> Option<&ApiError> {
        match self {
            StoreResponse::Error(err) => Some(err),
            _ => None,
        }
    }

    /// The validation error list, if any.
    pub fn errors(&self) -> Option<&[ApiError]> {
        match self {
            StoreResponse::Errors(errs) => Some(errs),
            _ => None,
        }
    }
}

/// Classify a raw response into a [`StoreResponse`].
///
/// Dispatch order matters:
/// 1. 200 decodes the body as `T`.
/// 2. 401 ignores the body and synthesizes the fixed unauthorized error.
/// 3. 400 tries the multi-error list first and falls back to a single
///    error only when the list is empty or absent. A body that fails
///    either decode is a decode error, not an envelope.
/// 4. Anything else decodes the body as a single error.
pub(crate) fn classify<T: DeserializeOwned>(
    status: StatusCode,
    body: &[u8],
) -> Result<StoreResponse<T>, Error> {
    match status {
        StatusCode::OK => Ok(StoreResponse::Data(serde_json::from_slice(body)?)),

        StatusCode::UNAUTHORIZED => Ok(StoreResponse::Error(ApiError::unauthorized())),

        StatusCode::BAD_REQUEST => {
            let list: ErrorList = serde_json::from_slice(body)?;
            if list.errors.is_empty() {
                Ok(StoreResponse::Error(serde_json::from_slice(body)?))
            } else {
                Ok(StoreResponse::Errors(list.errors))
            }
        }

        _ => Ok(StoreResponse::Error(serde_json::from_slice(body)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Payload {
        exists: bool,
    }

    fn status(code: u16) -> StatusCode {
        StatusCode::from_u16(code).unwrap()
    }

    #[test]
    fn ok_decodes_success_payload() {
        let result: StoreResponse<Payload> =
            classify(status(200), br#"{"exists": true}"#).unwrap();

        assert_eq!(result, StoreResponse::Data(Payload { exists: true }));
    }

    #[test]
    fn ok_with_malformed_body_is_a_decode_error() {
        let result: Result<StoreResponse<Payload>, _> = classify(status(200), b"not json");

        assert!(matches!(result, Err(Error::Decode(_))));
    }

    #[test]
    fn unauthorized_ignores_body_entirely() {
        // Even a completely malformed body must not be parsed.
        let result: StoreResponse<Payload> = classify(status(401), b"<html>nope</html>").unwrap();

        let err = result.error().unwrap();
        assert_eq!(err.message, "Unauthorized");
        assert_eq!(err.error_type.as_deref(), Some("unauthorized"));
    }

    #[test]
    fn unauthorized_with_empty_body() {
        let result: StoreResponse<Payload> = classify(status(401), b"").unwrap();

        assert_eq!(result.error().unwrap().message, "Unauthorized");
    }

    #[test]
    fn bad_request_with_error_list_preserves_order() {
        let body = br#"{"errors": [
            {"message": "email is required", "field": "email"},
            {"message": "password too short", "field": "password"}
        ]}"#;

        let result: StoreResponse<Payload> = classify(status(400), body).unwrap();

        let errors = result.errors().unwrap();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].message, "email is required");
        assert_eq!(errors[0].field.as_deref(), Some("email"));
        assert_eq!(errors[1].message, "password too short");
    }

    #[test]
    fn bad_request_with_empty_list_falls_back_to_single_error() {
        let body = br#"{"errors": [], "type": "invalid_data", "message": "bad request"}"#;

        let result: StoreResponse<Payload> = classify(status(400), body).unwrap();

        let err = result.error().unwrap();
        assert_eq!(err.message, "bad request");
        assert_eq!(err.error_type.as_deref(), Some("invalid_data"));
    }

    #[test]
    fn bad_request_without_list_key_falls_back_to_single_error() {
        let body = br#"{"message": "email taken"}"#;

        let result: StoreResponse<Payload> = classify(status(400), body).unwrap();

        assert_eq!(result.error().unwrap().message, "email taken");
    }

    #[test]
    fn bad_request_with_garbage_body_is_a_decode_error() {
        let result: Result<StoreResponse<Payload>, _> = classify(status(400), b"{{{");

        assert!(matches!(result, Err(Error::Decode(_))));
    }

    #[test]
    fn bad_request_with_wrong_shape_is_a_decode_error() {
        // Valid JSON, but neither a multi-error nor a single-error shape.
        let result: Result<StoreResponse<Payload>, _> = classify(status(400), b"[1, 2, 3]");

        assert!(matches!(result, Err(Error::Decode(_))));
    }

    #[test]
    fn other_status_decodes_single_error() {
        let body = br#"{"type": "api_error", "message": "internal server error"}"#;

        let result: StoreResponse<Payload> = classify(status(500), body).unwrap();

        let err = result.error().unwrap();
        assert_eq!(err.message, "internal server error");
        assert_eq!(err.error_type.as_deref(), Some("api_error"));
    }

    #[test]
    fn not_found_decodes_single_error() {
        let body = br#"{"type": "not_found", "message": "Product with id prod_x was not found"}"#;

        let result: StoreResponse<Payload> = classify(status(404), body).unwrap();

        assert_eq!(result.error().unwrap().error_type.as_deref(), Some("not_found"));
    }

    #[test]
    fn accessors_are_mutually_exclusive() {
        let result: StoreResponse<Payload> =
            classify(status(200), br#"{"exists": false}"#).unwrap();

        assert!(result.is_data());
        assert!(result.error().is_none());
        assert!(result.errors().is_none());
    }
}
