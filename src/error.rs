//! Client Errors
//!
//! Every failure a handler can report to the user.

use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    /// The page did not load the JS bridge, or it threw while building the actor
    #[error("backend bridge unavailable: {0}")]
    Bridge(String),

    /// A backend call threw or its promise rejected
    #[error("call to {method} failed: {message}")]
    Call { method: &'static str, message: String },

    /// A backend reply did not have the expected shape
    #[error("unexpected reply: {0}")]
    Decode(String),

    /// An argument could not be converted for the backend
    #[error("invalid argument: {0}")]
    Encode(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ClientError {
    pub fn call(method: &'static str, message: impl Into<String>) -> Self {
        ClientError::Call { method, message: message.into() }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::Config(e.to_string())
    }
}

impl From<serde_wasm_bindgen::Error> for ClientError {
    fn from(e: serde_wasm_bindgen::Error) -> Self {
        ClientError::Decode(e.to_string())
    }
}
