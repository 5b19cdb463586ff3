use thiserror::Error;

/// Failures that abort a JSON-RPC exchange and are reported as protocol errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("bad request: {message}")]
    BadRequest {
        code: &'static str,
        message: &'static str,
    },
    #[error("unknown tool: {name}")]
    ToolNotFound { name: String },
    #[error("internal error")]
    Internal { code: &'static str, message: String },
}

impl AppError {
    pub fn bad_request(code: &'static str, message: &'static str) -> Self {
        Self::BadRequest { code, message }
    }

    pub fn tool_not_found(name: impl Into<String>) -> Self {
        Self::ToolNotFound { name: name.into() }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            code: "internal_error",
            message: message.into(),
        }
    }
}

/// Failures inside a tool run. These are reported in the tool result with
/// `isError` set, the exchange itself still succeeds.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("{0}")]
    Source(String),
    #[error("count must be a number")]
    InvalidCount,
    #[error("uppercase must be a boolean")]
    InvalidUppercase,
    #[error("failed to encode result: {0}")]
    Encode(#[from] serde_json::Error),
}
