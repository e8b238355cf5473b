//! Shared error type across cachestat crates.
//!
//! Only boot paths fail. Serving a stats document never produces an error;
//! missing sources are normalized to empty objects instead.

use thiserror::Error;

/// Stable error codes for logs and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Config failed to parse or validate.
    BadConfig,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal failure (I/O, bind).
    Internal,
}

impl ClientCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadConfig => "BAD_CONFIG",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, CacheStatError>;

#[derive(Debug, Error)]
pub enum CacheStatError {
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl CacheStatError {
    /// Map the error to its stable code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            CacheStatError::BadConfig(_) => ClientCode::BadConfig,
            CacheStatError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            CacheStatError::Internal(_) => ClientCode::Internal,
        }
    }
}
