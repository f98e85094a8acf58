//! Unified error types for codec operations.

use thiserror::Error;

use crate::format::SupportedFormat;

type Source = Box<dyn std::error::Error + Send + Sync>;

/// Unified error type for codec operations.
///
/// Every variant is an immutable, call-local value; concurrent operations
/// never share error state. [`CodecError::code`] exposes a stable
/// machine-readable code alongside the human-readable `Display` message,
/// and delegated-library failures keep their cause reachable through
/// [`std::error::Error::source`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CodecError {
    /// Requested format token has no registered codec. Carries the
    /// original, non-normalized input.
    #[error("format {0:?} is not supported")]
    UnsupportedFormat(String),

    /// An option value had the wrong type or an out-of-range value.
    #[error("invalid value for option {key:?}: {detail}")]
    InvalidArgument { key: &'static str, detail: String },

    /// Malformed hex color string.
    #[error("invalid color {spec:?}: {detail}")]
    InvalidColorSpec { spec: String, detail: &'static str },

    /// The format's codec does not implement the requested operation.
    #[error("format {format} does not support {detail}")]
    UnsupportedOperation {
        format: SupportedFormat,
        detail: &'static str,
    },

    /// The delegated decoder rejected the input bytes.
    #[error("failed to decode image")]
    Decode { source: Source },

    /// The delegated encoder rejected the image.
    #[error("failed to encode {format} image")]
    Encode {
        format: SupportedFormat,
        source: Source,
    },
}

impl CodecError {
    /// Stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            CodecError::UnsupportedFormat(_) => "UnsupportedFormat",
            CodecError::InvalidArgument { .. } => "InvalidArgument",
            CodecError::InvalidColorSpec { .. } => "InvalidColorSpec",
            CodecError::UnsupportedOperation { .. } => "UnsupportedOperation",
            CodecError::Decode { .. } => "DecodeFailure",
            CodecError::Encode { .. } => "EncodeFailure",
        }
    }

    /// Wrap a delegated decoder error.
    pub(crate) fn decode_failure<E>(error: E) -> Self
    where
        E: Into<Source>,
    {
        CodecError::Decode {
            source: error.into(),
        }
    }

    /// Wrap a delegated encoder error.
    pub(crate) fn encode_failure<E>(format: SupportedFormat, error: E) -> Self
    where
        E: Into<Source>,
    {
        CodecError::Encode {
            format,
            source: error.into(),
        }
    }
}
