//! Error types for the format bindings
//!
//! Every serialization boundary (structured text, tabular cells, store scan,
//! text unmarshal) reports a recoverable [`Error`]. Reading the wrong variant
//! of a wrapper is not an error: it panics.
//!
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use thiserror::Error;

/// Result type alias for codec operations
///
/// Not named `Result`: that name belongs to the wrapper type in
/// [`crate::result`].
pub type CodecResult<T> = std::result::Result<T, Error>;

/// Default error payload of [`crate::Result`]
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error types for the wrapper bindings
#[derive(Debug, Error)]
pub enum Error {
    /// Structured-text (JSON) encode or decode failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Tabular (CSV) encode or decode failure
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A tabular cell decoded to no record at all
    #[error("CSV cell decoded to no record")]
    EmptyRecord,

    /// Stored value does not have the payload's type
    #[error("failed to scan value of type {source_type} into optional of type {target_type}")]
    ScanTypeMismatch {
        /// Type of the value handed in by the store
        source_type: &'static str,
        /// Payload type of the receiving optional
        target_type: &'static str,
    },

    /// Payload type has no text marshaling capability
    #[error("failed to marshal value of type {type_name}, text marshaling not supported")]
    TextMarshalUnsupported {
        /// Payload type
        type_name: &'static str,
    },

    /// Payload type has no text unmarshaling capability
    #[error("failed to unmarshal value \"{input}\" into optional of type {type_name}, payload does not support text unmarshaling")]
    TextUnmarshalUnsupported {
        /// Payload type
        type_name: &'static str,
        /// Rejected input, lossily decoded
        input: String,
    },

    /// Payload type rejected the text
    #[error("failed to parse \"{input}\" as {type_name}: {reason}")]
    TextParse {
        /// Payload type
        type_name: &'static str,
        /// Rejected input
        input: String,
        /// Parser message
        reason: String,
    },

    /// Text input was not valid UTF-8
    #[error("invalid UTF-8 text: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

impl Error {
    /// True for failures caused by a payload type lacking a capability,
    /// as opposed to bad input data
    pub fn is_unsupported(&self) -> bool {
        matches!(
            self,
            Error::TextMarshalUnsupported { .. } | Error::TextUnmarshalUnsupported { .. }
        )
    }
}
