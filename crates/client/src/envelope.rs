//! Response envelope shared by every Urban Roof endpoint.
//!
//! Successful responses look like `{ "message": "...", "data": <payload> }`.
//! Failures carry a `message` and sometimes a bare string in `data` or `error`.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use urbanroof_core::errors::{Error, Result};

/// Envelope wrapping every successful payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub message: String,
    pub data: T,
}

#[derive(Debug, Default, Deserialize)]
struct ApiErrorResponse {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    data: Option<serde_json::Value>,
}

impl ApiErrorResponse {
    fn into_message(self, status: u16) -> String {
        let data_text = match self.data {
            Some(serde_json::Value::String(s)) => Some(s),
            _ => None,
        };
        self.message
            .filter(|m| !m.trim().is_empty())
            .or(data_text.filter(|m| !m.trim().is_empty()))
            .or(self.error.filter(|m| !m.trim().is_empty()))
            .unwrap_or_else(|| format!("HTTP {}", status))
    }
}

/// Maps a non-success status and its body to the matching error variant.
pub fn status_error(status: u16, body: &str) -> Error {
    let message = serde_json::from_str::<ApiErrorResponse>(body)
        .unwrap_or_default()
        .into_message(status);
    match status {
        401 => Error::Unauthorized(message),
        403 => Error::Forbidden(message),
        _ => Error::Api { status, message },
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Decodes a response body into the envelope payload.
pub fn decode_envelope<T: DeserializeOwned>(status: u16, body: &str) -> Result<T> {
    if !is_success(status) {
        return Err(status_error(status, body));
    }
    let envelope: ApiEnvelope<T> = serde_json::from_str(body).map_err(|e| {
        Error::Decode(format!(
            "{} - {}",
            e,
            body.chars().take(200).collect::<String>()
        ))
    })?;
    Ok(envelope.data)
}

/// Checks the status only; the body of a successful response is ignored.
pub fn expect_success(status: u16, body: &str) -> Result<()> {
    if !is_success(status) {
        return Err(status_error(status, body));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use urbanroof_core::users::User;

    #[test]
    fn test_decode_unwraps_data() {
        let body = r#"{"message":"ok","data":{"id":"u-1","name":"Amina","email":"amina@example.com"}}"#;
        let user: User = decode_envelope(200, body).unwrap();
        assert_eq!(user.id, "u-1");
        assert!(user.roles.is_none());
    }

    #[test]
    fn test_decode_rejects_malformed_success_body() {
        let err = decode_envelope::<User>(200, r#"{"message":"ok"}"#).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));

        let err = decode_envelope::<User>(201, "not json").unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn test_error_message_precedence() {
        let err = status_error(400, r#"{"message":"Bad amount","data":"ignored"}"#);
        assert_eq!(err.user_message(), "Bad amount");

        let err = status_error(400, r#"{"data":"Insufficient funds"}"#);
        assert_eq!(err.user_message(), "Insufficient funds");

        let err = status_error(500, r#"{"error":"Internal Server Error"}"#);
        assert_eq!(err.user_message(), "Internal Server Error");

        let err = status_error(502, "<html>bad gateway</html>");
        assert_eq!(err.user_message(), "HTTP 502");
    }

    #[test]
    fn test_status_mapping() {
        assert!(matches!(
            status_error(401, r#"{"message":"Invalid credentials"}"#),
            Error::Unauthorized(ref m) if m == "Invalid credentials"
        ));
        assert!(matches!(status_error(403, ""), Error::Forbidden(_)));
        assert!(matches!(
            status_error(404, r#"{"message":"Property not found"}"#),
            Error::Api { status: 404, .. }
        ));
    }

    #[test]
    fn test_expect_success_ignores_body() {
        assert!(expect_success(200, "").is_ok());
        assert!(expect_success(204, "whatever").is_ok());
        assert!(matches!(
            expect_success(404, r#"{"message":"gone"}"#),
            Err(Error::Api { status: 404, .. })
        ));
    }
}
