//! Error types for stem synthesis.

use thiserror::Error;

use crate::stem::StemKind;

/// Result type for synthesis operations.
pub type SynthResult<T> = Result<T, SynthError>;

/// Errors that can occur while rendering stems.
///
/// Generation is flat fail-fast: the first stem that cannot be encoded
/// fails the whole request, and the error names that stem.
#[derive(Debug, Error)]
pub enum SynthError {
    /// WAV container assembly failed for one stem.
    #[error("failed to encode {stem} stem: {source}")]
    Encode {
        /// The stem being encoded when the failure occurred.
        stem: StemKind,
        /// Underlying write error.
        #[source]
        source: std::io::Error,
    },
}

/// Errors from decoding a `data:audio/wav;base64,` URI.
#[derive(Debug, Error)]
pub enum DataUriError {
    /// The string does not start with the audio data-URI marker.
    #[error("missing 'data:audio/wav;base64,' prefix")]
    MissingPrefix,

    /// The payload after the marker is not valid base64.
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
}
