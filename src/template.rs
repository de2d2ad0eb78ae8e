//! Input Assets - Uploaded Template and Font

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// The raw SVG document as supplied by the user.
///
/// The text is held verbatim. The pipeline works on its own copy, so a
/// `Template` can be reused across calls.
#[derive(Debug, Clone)]
pub struct Template {
    text: String,
}

impl Template {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// True when the document contains an `<svg` opening-tag marker.
    /// Without it the namespace and font-embedding insertions no-op.
    pub fn has_open_tag(&self) -> bool {
        self.text.contains("<svg")
    }

    /// True when the document contains a `</svg>` closing tag.
    /// Without it the text-layer insertion no-ops.
    pub fn has_close_tag(&self) -> bool {
        self.text.contains("</svg>")
    }

    /// True when the document already declares `xmlns:xlink` anywhere.
    /// The check is document-wide, not scoped to the opening tag.
    pub fn declares_xlink_namespace(&self) -> bool {
        self.text.contains("xmlns:xlink")
    }
}

/// Uploaded font bytes (OpenType or TrueType).
///
/// The data is opaque: no font parsing or validation happens, the bytes are
/// only base64-inlined into the generated `@font-face` block.
#[derive(Debug, Clone)]
pub struct FontAsset {
    bytes: Vec<u8>,
}

impl FontAsset {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Standard-alphabet base64 of the raw bytes.
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.bytes)
    }

    /// `data:` URI embedded as the `@font-face` source.
    pub fn data_uri(&self) -> String {
        format!("data:font/opentype;base64,{}", self.to_base64())
    }
}
