//! Error types for parcel decoding.

/// Parcel stream-format errors.
///
/// Raised only while reading: writes append to an owned buffer and cannot fail.
#[derive(Debug, thiserror::Error)]
pub enum ParcelError {
    /// The stream ended before the declared data was consumed.
    #[error("unexpected end of parcel: needed {needed} bytes, {remaining} remaining")]
    UnexpectedEof { needed: usize, remaining: usize },

    /// A length or count prefix was negative.
    #[error("negative length prefix in parcel: {value}")]
    NegativeLength { value: i32 },

    /// A string payload was not valid UTF-8.
    #[error("invalid UTF-8 in parcel string: {source}")]
    InvalidUtf8 {
        #[from]
        source: std::str::Utf8Error,
    },
}

impl ParcelError {
    /// Whether the error indicates a truncated stream (as opposed to corrupt
    /// framing). Truncation can mean the rest of the parcel has not arrived yet.
    pub fn is_truncation(&self) -> bool {
        matches!(self, Self::UnexpectedEof { .. })
    }
}

/// Result type for parcel operations.
pub type ParcelResult<T> = Result<T, ParcelError>;
