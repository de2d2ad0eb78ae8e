//! Export Surface - Preview and Download Contract

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::pipeline::CustomizedSvg;

/// File name offered for download.
pub const DOWNLOAD_FILENAME: &str = "custom_logo_and_curved_name.svg";

/// MIME type of the produced document.
pub const SVG_MIME: &str = "image/svg+xml";

/// Everything the calling layer needs to serve the result: download
/// metadata, a content hash, and the base64 payload backing the inline
/// preview.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SvgExport {
    pub filename: String,
    pub mime: String,
    pub size_bytes: usize,
    pub hash: String,
    pub data_base64: String,
}

/// Package a customized document for preview and download.
pub fn export(asset: &CustomizedSvg) -> SvgExport {
    let bytes = asset.svg.as_bytes();
    SvgExport {
        filename: DOWNLOAD_FILENAME.to_string(),
        mime: SVG_MIME.to_string(),
        size_bytes: bytes.len(),
        hash: sha256_hex(bytes),
        data_base64: STANDARD.encode(bytes),
    }
}

/// Inline-preview `data:` URI for the document text.
pub fn preview_data_uri(svg: &str) -> String {
    format!("data:{SVG_MIME};base64,{}", STANDARD.encode(svg.as_bytes()))
}

/// Compute SHA-256 hash of bytes, return hex string
pub fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().iter().map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_deterministic() {
        let data = b"test data";
        let h1 = sha256_hex(data);
        let h2 = sha256_hex(data);
        assert_eq!(h1, h2);
        assert_eq!(h1.len(), 64);
    }

    #[test]
    fn test_preview_round_trip() {
        let svg = "<svg viewBox=\"0 0 1 1\"></svg>";
        let uri = preview_data_uri(svg);
        let payload = uri.strip_prefix("data:image/svg+xml;base64,").unwrap();
        let decoded = STANDARD.decode(payload).unwrap();
        assert_eq!(decoded, svg.as_bytes());
    }
}
