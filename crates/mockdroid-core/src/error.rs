//! Shared error type across mockdroid crates.

use thiserror::Error;

/// Stable error codes surfaced to test assertions (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Input failed URI-level or intent-fragment parsing.
    MalformedUri,
    /// Input uses a feature this codec refuses to handle.
    Unsupported,
}

impl ErrorCode {
    /// String representation used in test vectors.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MalformedUri => "MALFORMED_URI",
            ErrorCode::Unsupported => "UNSUPPORTED",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, MockDroidError>;

/// Unified error type used by the codecs.
#[derive(Debug, Error)]
pub enum MockDroidError {
    /// Malformed input. Carries the original input and the approximate byte
    /// offset where scanning failed.
    #[error("malformed uri at offset {offset}: {reason} (input: {input})")]
    MalformedUri {
        input: String,
        offset: usize,
        reason: String,
    },
    /// Syntactically recognizable input that this codec deliberately does not
    /// support (selectors, the pre-fragment legacy format).
    #[error("unsupported: {0}")]
    Unsupported(&'static str),
}

impl MockDroidError {
    /// Map to a stable test-facing code.
    pub fn code(&self) -> ErrorCode {
        match self {
            MockDroidError::MalformedUri { .. } => ErrorCode::MalformedUri,
            MockDroidError::Unsupported(_) => ErrorCode::Unsupported,
        }
    }

    pub(crate) fn malformed(input: &str, offset: usize, reason: impl Into<String>) -> Self {
        MockDroidError::MalformedUri {
            input: input.to_string(),
            offset,
            reason: reason.into(),
        }
    }
}
