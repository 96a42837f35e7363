//! Request handling for the stem generation endpoint.

use axum::body::Bytes;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use stemforge_synth::render_stems;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::types::{GenerateRequest, GenerateResponse};

/// `POST /api/stems` handler.
pub async fn generate(body: Bytes) -> Response {
    match process_request(&body) {
        Ok(response) => {
            info!(
                sample_rate = response.metadata.quality.sample_rate(),
                processing_time = response.metadata.processing_time,
                "stems generated"
            );
            Json(response).into_response()
        }
        Err(err) => {
            info!(error = %err, "generation request rejected");
            err.into_response()
        }
    }
}

/// Parses, validates, and runs one generation request.
pub fn process_request(body: &[u8]) -> Result<GenerateResponse, ApiError> {
    let request = parse_request(body)?;
    if !request.has_audio() {
        return Err(ApiError::MissingAudio);
    }

    let bundle = render_stems(request.quality)?;
    debug!(
        stems = bundle.stems.len(),
        processing_time = bundle.processing_time,
        "render complete"
    );
    Ok(GenerateResponse::new(&request, &bundle))
}

/// Parses the JSON body, surfacing empty and malformed bodies as bad
/// requests.
fn parse_request(body: &[u8]) -> Result<GenerateRequest, ApiError> {
    if body.is_empty() {
        return Err(ApiError::BadRequest("empty request body".to_string()));
    }
    serde_json::from_slice(body).map_err(|e| ApiError::BadRequest(e.to_string()))
}

/// `OPTIONS /api/stems` preflight acknowledgment.
pub async fn preflight() -> &'static str {
    "ok"
}

/// `GET /health` probe.
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
