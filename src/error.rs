use serde::Deserialize;
use thiserror::Error;

/// Failure of a single API call.
///
/// `Unauthenticated` is the only variant with a side effect attached: by the
/// time the caller sees it, the session token has already been cleared.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// 401: the server rejected the bearer token (or the credentials).
    #[error("not authenticated")]
    Unauthenticated { detail: Option<String> },
    /// Any other non-2xx response.
    #[error("request failed with status {status}")]
    Status { status: u16, detail: Option<String> },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Transport(String),
    /// The response body did not match the expected shape.
    #[error("failed to parse response: {0}")]
    Decode(String),
    /// The request value could not be serialized.
    #[error("failed to serialize request: {0}")]
    Encode(String),
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

impl ApiError {
    /// Builds the error for a non-2xx response, reading the server's `detail`.
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = error_detail(body);
        if status == 401 {
            ApiError::Unauthenticated { detail }
        } else {
            ApiError::Status { status, detail }
        }
    }

    /// User-facing message supplied by the server, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Unauthenticated { detail } | ApiError::Status { detail, .. } => {
                detail.as_deref()
            }
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthenticated { .. } => Some(401),
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, ApiError::Unauthenticated { .. })
    }

    /// The server's detail, or `fallback` when there is none.
    pub fn user_message<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.detail().unwrap_or(fallback)
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

/// Only string details are surfaced; validation error arrays are dropped.
fn error_detail(body: &str) -> Option<String> {
    match serde_json::from_str::<ErrorBody>(body).ok()?.detail {
        serde_json::Value::String(s) => Some(s),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_detail_is_extracted() {
        let err = ApiError::from_status(400, r#"{"detail": "Email already registered"}"#);
        assert_eq!(
            err,
            ApiError::Status {
                status: 400,
                detail: Some("Email already registered".to_string())
            }
        );
        assert_eq!(err.user_message("Registration failed"), "Email already registered");
    }

    #[test]
    fn validation_arrays_fall_back() {
        let err = ApiError::from_status(
            422,
            r#"{"detail": [{"loc": ["body", "email"], "msg": "field required"}]}"#,
        );
        assert_eq!(err.detail(), None);
        assert_eq!(err.user_message("Login failed"), "Login failed");
    }

    #[test]
    fn non_json_body_has_no_detail() {
        let err = ApiError::from_status(502, "<html>Bad Gateway</html>");
        assert_eq!(err.status(), Some(502));
        assert_eq!(err.detail(), None);
    }

    #[test]
    fn unauthorized_maps_to_unauthenticated() {
        let err = ApiError::from_status(401, r#"{"detail": "Invalid email or password"}"#);
        assert!(err.is_unauthenticated());
        assert_eq!(err.status(), Some(401));
        assert_eq!(err.detail(), Some("Invalid email or password"));
    }

    #[test]
    fn transport_errors_have_no_status() {
        let err = ApiError::Transport("offline".into());
        assert_eq!(err.status(), None);
        assert_eq!(err.to_string(), "network error: offline");
    }
}
