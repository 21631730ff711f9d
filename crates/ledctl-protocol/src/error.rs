//! Error types for the LED toggle protocol.

use thiserror::Error;

/// Errors that can occur when decoding a received datagram.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProtocolError {
    /// The payload is valid text but not a known LED label.
    #[error("unknown LED label: {0:?}")]
    UnknownLabel(String),

    /// The payload is not valid UTF-8.
    #[error("payload is not valid UTF-8")]
    InvalidUtf8,

    /// The payload is longer than any label the protocol defines.
    #[error("payload too large: {size} bytes (max {max})")]
    TooLarge {
        /// Actual size.
        size: usize,
        /// Maximum allowed size.
        max: usize,
    },
}

/// Result type alias for protocol operations.
pub type ProtocolResult<T> = Result<T, ProtocolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ProtocolError::UnknownLabel("LED-9".to_string());
        assert!(err.to_string().contains("LED-9"));

        let err = ProtocolError::TooLarge { size: 64, max: 5 };
        assert_eq!(err.to_string(), "payload too large: 64 bytes (max 5)");
    }
}
