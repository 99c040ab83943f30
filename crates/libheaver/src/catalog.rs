//! Decoder for the `heaver-img -Qj` answer
//!
//! The answer is an envelope
//!
//! ```json
//! {"status": "ok", "data": {"<image>": {"updated": "...", "size": 1024, "zfs_path": "..."}}, "error": ""}
//! ```
//!
//! A non-empty `error` wins over whatever `data` holds.
use serde::Deserialize;
use serde_json::value::RawValue;

use crate::image::ImageCatalog;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to parse response envelope")]
    Envelope(#[source] serde_json::Error),
    #[error("heaver-img reported an error: {0}")]
    Upstream(String),
    #[error("response envelope has no data")]
    MissingData,
    #[error("failed to parse image data")]
    Data(#[source] serde_json::Error),
}

type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Debug, Deserialize)]
struct Envelope<'a> {
    #[serde(default)]
    status: Option<String>,
    #[serde(borrow, default)]
    data: Option<&'a RawValue>,
    #[serde(default)]
    error: Option<String>,
}

pub fn decode(raw: &[u8]) -> Result<ImageCatalog> {
    let envelope: Envelope = serde_json::from_slice(raw).map_err(CatalogError::Envelope)?;

    if let Some(message) = envelope.error.filter(|e| !e.is_empty()) {
        return Err(CatalogError::Upstream(message));
    }
    tracing::debug!(status = envelope.status.as_deref().unwrap_or_default(), "image query answered");

    let data = envelope.data.ok_or(CatalogError::MissingData)?;
    serde_json::from_str(data.get()).map_err(CatalogError::Data)
}
