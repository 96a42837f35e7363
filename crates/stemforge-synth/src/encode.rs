//! Data-URI encoding for rendered WAV stems.

use base64::Engine;

use crate::error::DataUriError;

/// URI scheme marker prefixed to every encoded stem.
pub const DATA_URI_PREFIX: &str = "data:audio/wav;base64,";

/// Encodes WAV bytes as a `data:audio/wav;base64,` URI.
pub fn encode_wav_data_uri(wav_data: &[u8]) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(wav_data);
    let mut uri = String::with_capacity(DATA_URI_PREFIX.len() + encoded.len());
    uri.push_str(DATA_URI_PREFIX);
    uri.push_str(&encoded);
    uri
}

/// Decodes a data URI produced by [`encode_wav_data_uri`] back to WAV bytes.
pub fn decode_wav_data_uri(uri: &str) -> Result<Vec<u8>, DataUriError> {
    let payload = uri
        .strip_prefix(DATA_URI_PREFIX)
        .ok_or(DataUriError::MissingPrefix)?;
    Ok(base64::engine::general_purpose::STANDARD.decode(payload)?)
}
