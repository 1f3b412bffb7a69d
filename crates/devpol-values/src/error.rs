//! Error types for policy value construction and decoding.

use devpol_parcel::ParcelError;

/// Policy value errors.
#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
    /// A string element exceeds the configured maximum length.
    /// Raised only when size tracking is enabled.
    #[error("{label} is too long: {length} bytes exceeds the {max} byte maximum")]
    ValueTooLarge {
        label: String,
        length: usize,
        max: usize,
    },

    /// Malformed or truncated parcel input during decode.
    #[error("malformed parcel: {0}")]
    Stream(#[from] ParcelError),

    /// The limits configuration could not be parsed.
    #[error("invalid limits config: {0}")]
    Config(#[from] serde_yaml::Error),
}

impl PolicyError {
    /// Whether the error is a size-tracking validation failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValueTooLarge { .. })
    }

    /// Whether the error came from the wire format rather than the value itself.
    pub fn is_stream(&self) -> bool {
        matches!(self, Self::Stream(_))
    }
}

/// Result type for policy value operations.
pub type PolicyResult<T> = Result<T, PolicyError>;
