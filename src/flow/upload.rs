use crate::models::ImageData;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

/// Whether `source` is an inline `data:` image rather than a file path
pub fn is_data_uri(source: &str) -> bool {
    source.starts_with("data:")
}

/// Read a gallery photo fully into memory.
///
/// `source` is either a file path or a `data:<mime>;base64,...` URI.
pub async fn load_image(source: &str) -> Result<ImageData> {
    if is_data_uri(source) {
        let image = ImageData::from_data_uri(source)?;
        info!(mime_type = %image.mime_type, bytes = image.bytes.len(), "Loaded inline listing photo");
        return Ok(image);
    }

    let path = Path::new(source);
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read image {}", path.display()))?;

    info!(path = %path.display(), bytes = bytes.len(), "Loaded listing photo");
    Ok(ImageData::new(ImageData::mime_for_path(path), bytes))
}
