//! API Errors

use serde::Deserialize;
use thiserror::Error;

/// Failure of a REST call. `Display` is the text shown to the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    /// Non-2xx response; `message` is the server's own message when it sent one
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("Unexpected response: {0}")]
    Decode(String),
    #[error("Could not encode request: {0}")]
    Encode(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ApiError {
    /// Build a status error from a response body, preferring its `message`
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("Request failed with status {}", status));
        ApiError::Status { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_prefers_server_message() {
        let err = ApiError::from_status(401, r#"{"message":"Invalid username or password"}"#);
        assert_eq!(err.to_string(), "Invalid username or password");
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn test_status_without_body() {
        let err = ApiError::from_status(500, "<html>oops</html>");
        assert_eq!(err.to_string(), "Request failed with status 500");
        let blank = ApiError::from_status(400, r#"{"message":"  "}"#);
        assert_eq!(blank.to_string(), "Request failed with status 400");
    }
}
