use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::path::Path;

/// A still image held in memory, as picked from the gallery or returned by the AI gateway
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ImageData {
    pub fn new(mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Decode a `data:<mime>;base64,<payload>` URI
    pub fn from_data_uri(uri: &str) -> Result<Self> {
        let rest = uri
            .strip_prefix("data:")
            .context("Image reference is not a data URI")?;
        let (header, payload) = rest
            .split_once(',')
            .context("Data URI has no payload separator")?;
        let mime_type = header
            .strip_suffix(";base64")
            .context("Data URI is not base64 encoded")?;

        let bytes = STANDARD
            .decode(payload)
            .context("Data URI payload is not valid base64")?;

        Ok(Self::new(mime_type, bytes))
    }

    pub fn from_base64(mime_type: impl Into<String>, payload: &str) -> Result<Self> {
        let bytes = STANDARD
            .decode(payload)
            .context("Inline image payload is not valid base64")?;
        Ok(Self::new(mime_type, bytes))
    }

    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.bytes)
    }

    /// Displayable form of the image
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.to_base64())
    }

    /// Guess an image MIME type from a file extension, falling back to PNG
    pub fn mime_for_path(path: &Path) -> &'static str {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("jpg") | Some("jpeg") => "image/jpeg",
            Some("webp") => "image/webp",
            Some("gif") => "image/gif",
            Some("heic") => "image/heic",
            _ => "image/png",
        }
    }

    pub fn file_extension(&self) -> &'static str {
        match self.mime_type.as_str() {
            "image/jpeg" => "jpg",
            "image/webp" => "webp",
            "image/gif" => "gif",
            "image/heic" => "heic",
            _ => "png",
        }
    }
}

/// A generated video downloaded from the vendor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoClip {
    pub mime_type: String,
    pub bytes: Vec<u8>,
    /// Where the vendor served the asset from
    pub source_uri: String,
}

impl VideoClip {
    /// Write the clip to disk so a player can address it
    pub async fn save_to(&self, path: &Path) -> Result<()> {
        tokio::fs::write(path, &self.bytes)
            .await
            .with_context(|| format!("Failed to write video to {}", path.display()))
    }
}
