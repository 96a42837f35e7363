//! API error taxonomy and response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use stemforge_synth::SynthError;
use thiserror::Error;

use crate::types::ErrorEnvelope;

/// Errors surfaced by the stem generation endpoint.
///
/// Every variant is converted to the uniform envelope at the request
/// boundary; none escape as raw rejections.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body was empty or not valid JSON.
    #[error("Invalid JSON body: {0}")]
    BadRequest(String),

    /// Request lacked a usable `audio_data` field.
    #[error("Audio data is required")]
    MissingAudio,

    /// Stem generation failed.
    #[error(transparent)]
    Synthesis(#[from] SynthError),
}

impl ApiError {
    /// HTTP status for this error.
    ///
    /// Domain failures deliberately stay at 200 so clients do not
    /// auto-retry; only malformed input uses an error code.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::MissingAudio | ApiError::Synthesis(_) => StatusCode::OK,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let envelope = ErrorEnvelope::new(self.to_string());
        (status, Json(envelope)).into_response()
    }
}
