//! Filename-based detection backend.
//!
//! [`ExtensionParser`] classifies a file by its extension instead of its
//! content: first against a curated extension table, then through the
//! `mime_guess` database. It implements the same [`Parser`] contract as the
//! native backend, so callers can fall back from one to the other; a resource
//! stream carries no filename, so the stream entry point always fails with a
//! `Detection` error (and with it, via the provided delegation,
//! `from_contents`).

use crate::error::{MimetectError, Result};
use crate::info::{
    CSV_MIME_TYPE, GIF_MIME_TYPE, HTML_MIME_TYPE, JPEG_MIME_TYPE, JSON_MIME_TYPE, MARKDOWN_MIME_TYPE,
    MPEG_AUDIO_MIME_TYPE, MP4_MIME_TYPE, PDF_MIME_TYPE, PLAIN_TEXT_MIME_TYPE, PNG_MIME_TYPE, WEBP_MIME_TYPE,
    WOFF2_MIME_TYPE, XML_MIME_TYPE, ZIP_MIME_TYPE,
};
use crate::media_type::MediaType;
use crate::parser::{Parser, ResourceStream};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::Path;

/// Extension to MIME type table for the formats seen most often in practice.
/// Anything not listed here falls through to the `mime_guess` database.
static EXT_TO_MIME: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    m.insert("txt", PLAIN_TEXT_MIME_TYPE);
    m.insert("md", MARKDOWN_MIME_TYPE);
    m.insert("markdown", MARKDOWN_MIME_TYPE);
    m.insert("html", HTML_MIME_TYPE);
    m.insert("htm", HTML_MIME_TYPE);
    m.insert("csv", CSV_MIME_TYPE);

    m.insert("json", JSON_MIME_TYPE);
    m.insert("xml", XML_MIME_TYPE);
    m.insert("pdf", PDF_MIME_TYPE);
    m.insert("zip", ZIP_MIME_TYPE);

    m.insert("png", PNG_MIME_TYPE);
    m.insert("jpg", JPEG_MIME_TYPE);
    m.insert("jpeg", JPEG_MIME_TYPE);
    m.insert("gif", GIF_MIME_TYPE);
    m.insert("webp", WEBP_MIME_TYPE);

    m.insert("mp3", MPEG_AUDIO_MIME_TYPE);
    m.insert("mp4", MP4_MIME_TYPE);
    m.insert("woff2", WOFF2_MIME_TYPE);

    m
});

/// Filename-based detection backend.
///
/// Stateless; construction cannot fail because the extension table and the
/// `mime_guess` database are compiled in.
#[derive(Debug, Default)]
pub struct ExtensionParser;

impl ExtensionParser {
    pub fn new() -> Self {
        Self
    }
}

impl Parser for ExtensionParser {
    fn from_pathname(&self, path: &Path) -> Result<MediaType> {
        // Same readability contract as the native backend, even though only
        // the name is inspected: reporting a type for a file that is not there
        // would hide the caller's real problem.
        if let Err(source) = std::fs::metadata(path) {
            return Err(MimetectError::detection_with_source(
                format!("Unable to read file \"{}\" to determine MIME type", path.display()),
                source,
            ));
        }

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        if let Some(ext) = &extension {
            if let Some(mime_type) = EXT_TO_MIME.get(ext.as_str()).copied() {
                tracing::debug!(mime_type, extension = %ext, "extension matched table");
                return MediaType::parse(mime_type);
            }
        }

        if let Some(guess) = mime_guess::from_path(path).first() {
            tracing::debug!(mime_type = %guess, "extension matched mime_guess database");
            return MediaType::parse(guess.essence_str());
        }

        Err(MimetectError::detection(format!(
            "Unable to determine MIME type of \"{}\" from its filename",
            path.display()
        )))
    }

    fn from_resource_stream(&self, _stream: &mut dyn ResourceStream) -> Result<MediaType> {
        Err(MimetectError::detection(
            "A resource stream carries no filename to determine a MIME type from",
        ))
    }
}
