//! Media type metadata records.
//!
//! [`Info`] attaches a short human-readable name and a [`Category`] to a
//! well-known media type identifier constant. The records live in a registry
//! built once at startup and looked up explicitly via [`lookup_info`]; there is
//! no reflection involved.

use crate::category::Category;
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const PLAIN_TEXT_MIME_TYPE: &str = "text/plain";
pub const HTML_MIME_TYPE: &str = "text/html";
pub const CSV_MIME_TYPE: &str = "text/csv";
pub const MARKDOWN_MIME_TYPE: &str = "text/markdown";
pub const JSON_MIME_TYPE: &str = "application/json";
pub const XML_MIME_TYPE: &str = "application/xml";
pub const PDF_MIME_TYPE: &str = "application/pdf";
pub const ZIP_MIME_TYPE: &str = "application/zip";
pub const OCTET_STREAM_MIME_TYPE: &str = "application/octet-stream";
pub const PNG_MIME_TYPE: &str = "image/png";
pub const JPEG_MIME_TYPE: &str = "image/jpeg";
pub const GIF_MIME_TYPE: &str = "image/gif";
pub const WEBP_MIME_TYPE: &str = "image/webp";
pub const MPEG_AUDIO_MIME_TYPE: &str = "audio/mpeg";
pub const MP4_MIME_TYPE: &str = "video/mp4";
pub const RFC822_MIME_TYPE: &str = "message/rfc822";
pub const WOFF2_MIME_TYPE: &str = "font/woff2";

/// Immutable metadata for a media type identifier: a display name and the
/// resolved top-level category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Info {
    name: String,
    category: Category,
}

impl Info {
    /// Create a metadata record.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty. Metadata records are built from literals at
    /// startup, so an empty name is a programming error, not a runtime
    /// condition.
    pub fn new<S: Into<String>>(name: S, category: Category) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "Info name must be non-empty");
        Self { name, category }
    }

    /// The human-readable name, e.g. `PNG image`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The top-level category of the described media type.
    pub fn category(&self) -> &Category {
        &self.category
    }
}

/// Metadata registry: media type identifier constant -> [`Info`].
///
/// Built once on first access; read-only afterwards.
static INFO_REGISTRY: Lazy<HashMap<&'static str, Info>> = Lazy::new(|| {
    let mut m = HashMap::new();

    m.insert(PLAIN_TEXT_MIME_TYPE, Info::new("plain text", Category::Text));
    m.insert(HTML_MIME_TYPE, Info::new("HTML document", Category::Text));
    m.insert(CSV_MIME_TYPE, Info::new("CSV document", Category::Text));
    m.insert(MARKDOWN_MIME_TYPE, Info::new("Markdown document", Category::Text));

    m.insert(JSON_MIME_TYPE, Info::new("JSON document", Category::Application));
    m.insert(XML_MIME_TYPE, Info::new("XML document", Category::Application));
    m.insert(PDF_MIME_TYPE, Info::new("PDF document", Category::Application));
    m.insert(ZIP_MIME_TYPE, Info::new("ZIP archive", Category::Application));
    m.insert(
        OCTET_STREAM_MIME_TYPE,
        Info::new("binary data", Category::Application),
    );

    m.insert(PNG_MIME_TYPE, Info::new("PNG image", Category::Image));
    m.insert(JPEG_MIME_TYPE, Info::new("JPEG image", Category::Image));
    m.insert(GIF_MIME_TYPE, Info::new("GIF image", Category::Image));
    m.insert(WEBP_MIME_TYPE, Info::new("WebP image", Category::Image));

    m.insert(MPEG_AUDIO_MIME_TYPE, Info::new("MP3 audio", Category::Audio));
    m.insert(MP4_MIME_TYPE, Info::new("MP4 video", Category::Video));
    m.insert(RFC822_MIME_TYPE, Info::new("email message", Category::Message));
    m.insert(WOFF2_MIME_TYPE, Info::new("WOFF2 font", Category::Font));

    m
});

/// Look up the metadata record for a media type identifier constant.
///
/// Returns `None` for identifiers without registered metadata.
pub fn lookup_info(identifier: &str) -> Option<&'static Info> {
    INFO_REGISTRY.get(identifier)
}
