//! Wire-level request and response types for the stem generation API.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use stemforge_synth::{Quality, StemBundle, StemKind};

/// Body of a stem generation request.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    /// Uploaded audio payload. Presence-checked only; never decoded.
    #[serde(default)]
    pub audio_data: Option<String>,

    /// Client-side name of the uploaded file.
    #[serde(default)]
    pub filename: Option<String>,

    /// Output quality, selecting the sample rate.
    #[serde(default)]
    pub quality: Quality,

    /// Requested container format.
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "wav".to_string()
}

impl GenerateRequest {
    /// Whether the request carries a non-empty audio payload.
    pub fn has_audio(&self) -> bool {
        self.audio_data.as_deref().is_some_and(|data| !data.is_empty())
    }
}

/// Per-stem data URIs plus generation timing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StemsPayload {
    pub vocals: String,
    pub drums: String,
    pub bass: String,
    pub instruments: String,
    /// Wall-clock generation time in seconds.
    pub processing_time: f64,
}

impl StemsPayload {
    /// Builds the payload from a rendered bundle.
    pub fn from_bundle(bundle: &StemBundle) -> Self {
        Self {
            vocals: bundle.stem(StemKind::Vocals).to_string(),
            drums: bundle.stem(StemKind::Drums).to_string(),
            bass: bundle.stem(StemKind::Bass).to_string(),
            instruments: bundle.stem(StemKind::Instruments).to_string(),
            processing_time: bundle.processing_time,
        }
    }
}

/// Request metadata echoed back with a successful generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateMetadata {
    pub filename: String,
    pub quality: Quality,
    pub format: String,
    pub processing_time: f64,
    pub stem_count: usize,
    /// ISO-8601 generation timestamp.
    pub generated_at: String,
}

/// Successful generation response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub success: bool,
    pub stems: StemsPayload,
    pub metadata: GenerateMetadata,
}

impl GenerateResponse {
    /// Builds the success envelope for a request and its rendered bundle.
    pub fn new(request: &GenerateRequest, bundle: &StemBundle) -> Self {
        Self {
            success: true,
            stems: StemsPayload::from_bundle(bundle),
            metadata: GenerateMetadata {
                filename: request
                    .filename
                    .clone()
                    .unwrap_or_else(|| "untitled".to_string()),
                quality: request.quality,
                format: request.format.clone(),
                processing_time: bundle.processing_time,
                stem_count: StemKind::ALL.len(),
                generated_at: now_rfc3339(),
            },
        }
    }
}

/// Uniform error envelope.
///
/// Domain failures are sent with HTTP 200; see [`crate::error`] for the
/// status mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: String,
    /// ISO-8601 failure timestamp.
    pub timestamp: String,
}

impl ErrorEnvelope {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            timestamp: now_rfc3339(),
        }
    }
}

/// Current time as an ISO-8601 string.
fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
