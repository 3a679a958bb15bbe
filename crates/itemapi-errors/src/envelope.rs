//! The structured error envelope the backend returns instead of data.

use crate::Error;
use bytes::Bytes;
use serde::Deserialize;
use tracing::warn;

/// Error body returned by the Item API, e.g.
///
/// ```json
/// {
///   "statusCode": 404,
///   "error": {
///     "message": "Item not found",
///     "type": "ItemNotFoundException",
///     "method": "item.get"
///   }
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    /// Status code reported inside the body. Mirrors the HTTP status on
    /// well-behaved instances.
    pub status_code: u16,
    /// Nested error detail.
    pub error: EnvelopeDetail,
}

/// The `error` object inside an [`ErrorEnvelope`]. Some instances omit
/// `type` and `method`, so both default to empty.
#[derive(Debug, Clone, Deserialize)]
pub struct EnvelopeDetail {
    /// Human-readable message.
    pub message: String,
    /// Server-side exception type name.
    #[serde(default, rename = "type")]
    pub error_type: String,
    /// The API method that failed.
    #[serde(default)]
    pub method: String,
}

impl ErrorEnvelope {
    /// Decode an envelope from a raw response body.
    ///
    /// A body that does not parse yields an `InvalidResponseFormat` error
    /// carrying the exact input bytes, with the decode failure as the
    /// underlying cause.
    pub fn from_slice(data: &[u8]) -> Result<Self, Error> {
        match serde_json::from_slice(data) {
            Ok(envelope) => Ok(envelope),
            Err(err) => {
                warn!(body_len = data.len(), error = %err, "response body is not an error envelope");
                Err(Error::invalid_response_format(Bytes::copy_from_slice(data)).with_source(err))
            }
        }
    }
}

impl From<ErrorEnvelope> for Error {
    /// Build a `Response` error with all four envelope fields carried
    /// verbatim.
    fn from(envelope: ErrorEnvelope) -> Self {
        Error::response(
            envelope.status_code,
            envelope.error.message,
            envelope.error.error_type,
            envelope.error.method,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_envelope() {
        let body = br#"{
            "statusCode": 404,
            "error": {
                "message": "Item not found",
                "type": "ItemNotFoundException",
                "method": "item.get"
            }
        }"#;

        let envelope = ErrorEnvelope::from_slice(body).unwrap();

        assert_eq!(envelope.status_code, 404);
        assert_eq!(envelope.error.message, "Item not found");
        assert_eq!(envelope.error.error_type, "ItemNotFoundException");
        assert_eq!(envelope.error.method, "item.get");
    }

    #[test]
    fn test_decode_defaults_optional_fields() {
        let body = br#"{"statusCode": 500, "error": {"message": "boom"}}"#;

        let envelope = ErrorEnvelope::from_slice(body).unwrap();

        assert_eq!(envelope.status_code, 500);
        assert_eq!(envelope.error.message, "boom");
        assert_eq!(envelope.error.error_type, "");
        assert_eq!(envelope.error.method, "");
    }

    #[test]
    fn test_malformed_body_keeps_raw_bytes() {
        let body: &[u8] = b"<html>502 Bad Gateway</html>";

        let err = ErrorEnvelope::from_slice(body).unwrap_err();

        assert_eq!(err.response_data().unwrap().as_ref(), body);
        assert!(err.underlying().is_some());
        assert!(err.is_backend());
    }

    #[test]
    fn test_envelope_into_response_error() {
        let envelope = ErrorEnvelope::from_slice(
            br#"{"statusCode": 403, "error": {"message": "Access denied", "type": "AccessDeniedException", "method": "item.create"}}"#,
        )
        .unwrap();

        let err = Error::from(envelope);

        assert_eq!(err.status_code(), Some(403));
        assert_eq!(err.message(), Some("Access denied"));
        assert_eq!(err.error_type(), Some("AccessDeniedException"));
        assert_eq!(err.method(), Some("item.create"));
        assert_eq!(err.code(), Some(403));
    }
}
