//
//  ibm-platform-services
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/10.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Shared types for the API layer: the [`ApiError`] enum, error-body
//! parsing, standard request headers, and required-parameter validation.

use once_cell::sync::Lazy;
use reqwest::StatusCode;
use thiserror::Error;

/// Result alias used by every operation in the SDK.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors returned by API operations.
///
/// Client-side validation failures are reported before any network I/O.
/// Non-2xx responses are mapped to a variant by status code, carrying the
/// message extracted from the error body where one is present.
///
/// # Variants
///
/// - `Validation`: a required option field is missing or empty
/// - `AuthRequired`: 401 Unauthorized
/// - `Forbidden`: 403 Forbidden
/// - `NotFound`: 404 Not Found
/// - `RateLimited`: 429 Too Many Requests
/// - `BadRequest`: 400 Bad Request
/// - `Service`: any other non-success status
/// - `Network`: transport failures and body deserialization failures
/// - `InvalidUrl`: a malformed service URL
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required parameter was missing or empty. Detected before the
    /// request is sent.
    #[error("Missing or empty required parameter: {0}")]
    Validation(String),

    /// Authentication required (HTTP 401).
    #[error("Authentication required. Configure a valid credential.")]
    AuthRequired,

    /// Access forbidden (HTTP 403).
    #[error("Access forbidden: {0}")]
    Forbidden(String),

    /// Resource not found (HTTP 404).
    #[error("Not found: {0}")]
    NotFound(String),

    /// Rate limit exceeded (HTTP 429).
    #[error("Rate limit exceeded. Try again later.")]
    RateLimited,

    /// Bad request (HTTP 400).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Any other non-success response from the service.
    #[error("Service error ({status}): {message}")]
    Service {
        /// The HTTP status code.
        status: u16,
        /// The message extracted from the response body.
        message: String,
    },

    /// Network-level failure or response deserialization failure.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The configured service URL could not be parsed.
    #[error("Invalid service URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Extracts a human-readable message from an error response body.
///
/// The platform services are not uniform in their error shapes. The formats
/// seen in practice:
///
/// ```json
/// {"message": "..."}
/// {"errors": [{"message": "..."}]}
/// {"error": {"message": "..."}}
/// {"description": "..."}
/// ```
///
/// Falls back to the raw body when none of these match.
pub(crate) fn extract_error_message(body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = json.get("message").and_then(|m| m.as_str()) {
            return message.to_string();
        }

        if let Some(message) = json
            .get("errors")
            .and_then(|e| e.as_array())
            .and_then(|arr| arr.first())
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
        {
            return message.to_string();
        }

        if let Some(message) = json
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
        {
            return message.to_string();
        }

        if let Some(description) = json.get("description").and_then(|d| d.as_str()) {
            return description.to_string();
        }
    }

    body.to_string()
}

/// Maps a non-success response to an [`ApiError`].
pub(crate) fn error_from_response(status: StatusCode, body: &str) -> ApiError {
    let message = extract_error_message(body);
    match status {
        StatusCode::UNAUTHORIZED => ApiError::AuthRequired,
        StatusCode::FORBIDDEN => ApiError::Forbidden(message),
        StatusCode::NOT_FOUND => ApiError::NotFound(message),
        StatusCode::TOO_MANY_REQUESTS => ApiError::RateLimited,
        StatusCode::BAD_REQUEST => ApiError::BadRequest(message),
        _ => ApiError::Service {
            status: status.as_u16(),
            message,
        },
    }
}

/// Checks that a required string parameter is non-empty.
///
/// Typed constructors make required fields unforgettable, but an empty
/// string would still produce a malformed request path or query, so ops
/// validate them before any network I/O.
pub(crate) fn require(name: &str, value: &str) -> ApiResult<()> {
    if value.trim().is_empty() {
        return Err(ApiError::Validation(name.to_string()));
    }
    Ok(())
}

/// The `User-Agent` value sent with every request.
pub(crate) static USER_AGENT: Lazy<String> = Lazy::new(|| {
    format!(
        "{}/{} (lang=rust; os={}; arch={})",
        crate::SDK_NAME,
        crate::VERSION,
        std::env::consts::OS,
        std::env::consts::ARCH
    )
});

/// Header name for SDK analytics, consumed by IBM Cloud service frontends.
pub(crate) const SDK_ANALYTICS_HEADER: &str = "X-IBMCloud-SDK-Analytics";

/// Builds the analytics header value for one operation.
///
/// The format is fixed by the platform:
/// `service_name=<svc>;service_version=V1;operation_id=<op>`.
pub(crate) fn sdk_analytics_value(service_name: &str, operation_id: &str) -> String {
    format!("service_name={service_name};service_version=V1;operation_id={operation_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_plain_message() {
        let body = r#"{"message": "Case not found"}"#;
        assert_eq!(extract_error_message(body), "Case not found");
    }

    #[test]
    fn test_extract_errors_array() {
        let body = r#"{"errors": [{"message": "invalid status filter"}]}"#;
        assert_eq!(extract_error_message(body), "invalid status filter");
    }

    #[test]
    fn test_extract_nested_error() {
        let body = r#"{"error": {"message": "broken"}}"#;
        assert_eq!(extract_error_message(body), "broken");
    }

    #[test]
    fn test_extract_description() {
        let body = r#"{"description": "instance is disabled"}"#;
        assert_eq!(extract_error_message(body), "instance is disabled");
    }

    #[test]
    fn test_extract_fallback_raw() {
        assert_eq!(extract_error_message("plain text"), "plain text");
    }

    #[test]
    fn test_status_mapping() {
        assert!(matches!(
            error_from_response(StatusCode::UNAUTHORIZED, "{}"),
            ApiError::AuthRequired
        ));
        assert!(matches!(
            error_from_response(StatusCode::NOT_FOUND, "{}"),
            ApiError::NotFound(_)
        ));
        assert!(matches!(
            error_from_response(StatusCode::TOO_MANY_REQUESTS, "{}"),
            ApiError::RateLimited
        ));
        assert!(matches!(
            error_from_response(StatusCode::INTERNAL_SERVER_ERROR, "{}"),
            ApiError::Service { status: 500, .. }
        ));
    }

    #[test]
    fn test_require_rejects_empty() {
        assert!(require("case_number", "").is_err());
        assert!(require("case_number", "  ").is_err());
        assert!(require("case_number", "CS0001").is_ok());
    }

    #[test]
    fn test_sdk_analytics_value() {
        assert_eq!(
            sdk_analytics_value("case_management", "GetCases"),
            "service_name=case_management;service_version=V1;operation_id=GetCases"
        );
    }
}
