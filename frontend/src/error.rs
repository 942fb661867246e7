use std::fmt;

use shared::constants::{LOGIN_REQUIRED_ERROR, NETWORK_ERROR};

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    Unauthenticated,
    Network(String),
    Status(u16),
    Decode(String),
    /// The API answered but refused the operation.
    Rejected(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Unauthenticated => f.write_str(LOGIN_REQUIRED_ERROR),
            ApiError::Network(_) => f.write_str(NETWORK_ERROR),
            ApiError::Status(401) | ApiError::Status(403) => f.write_str(LOGIN_REQUIRED_ERROR),
            ApiError::Status(code) => write!(f, "Request failed with status {}", code),
            ApiError::Decode(_) => f.write_str("Unexpected response from server"),
            ApiError::Rejected(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}
