//! Error types for the blockchain collaborator and the content endpoint

use thiserror::Error;

/// Failure reported by the RPC collaborator
#[derive(Debug, Error)]
pub enum RpcError {
    /// The node could not be reached
    #[error("transport error: {0}")]
    Transport(String),

    /// The node answered with an error for the call
    #[error("call `{method}` failed: {message}")]
    Call { method: String, message: String },

    /// The node answered but the payload could not be interpreted
    #[error("malformed response for `{method}`: {message}")]
    Malformed { method: String, message: String },
}

impl RpcError {
    pub fn call(method: impl Into<String>, message: impl Into<String>) -> Self {
        RpcError::Call {
            method: method.into(),
            message: message.into(),
        }
    }

    pub fn malformed(method: impl Into<String>, message: impl Into<String>) -> Self {
        RpcError::Malformed {
            method: method.into(),
            message: message.into(),
        }
    }
}

pub type RpcResult<T> = Result<T, RpcError>;

/// Failure fetching a manifest from the content endpoint
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("request timed out")]
    Timeout,

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("request failed: {0}")]
    Request(String),

    #[error("content endpoint returned status {0}")]
    Status(u16),

    #[error("invalid manifest body: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ContentError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ContentError::Timeout
        } else if e.is_connect() {
            ContentError::Connect(e.to_string())
        } else if e.is_decode() {
            ContentError::Decode(e.to_string())
        } else {
            ContentError::Request(e.to_string())
        }
    }
}
