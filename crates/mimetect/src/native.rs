//! The native magic-byte detection backend.
//!
//! [`NativeParser`] classifies content by its leading bytes through the `infer`
//! matcher database. Construction runs a startup precondition check: the
//! matcher database must classify a known probe, otherwise the parser cannot be
//! built at all ([`MimetectError::Startup`]). Per-call failures are
//! [`MimetectError::Detection`] (unreadable path, unclassifiable content) or
//! [`MimetectError::InvalidInput`] (the stream handle itself is unusable).
//!
//! # Example
//!
//! ```rust
//! use mimetect::{Category, NativeParser, Parser};
//!
//! # fn main() -> mimetect::Result<()> {
//! let parser = NativeParser::new()?;
//! let media_type = parser.from_contents(&[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'])?;
//! assert_eq!(media_type.essence(), "image/png");
//! assert_eq!(*media_type.category(), Category::Image);
//! # Ok(())
//! # }
//! ```

use crate::category::{get_category_registry, CategoryRegistry};
use crate::error::{MimetectError, Result};
use crate::media_type::MediaType;
use crate::parser::{Parser, ResourceStream};
use std::fs::File;
use std::io::{Read, SeekFrom};
use std::path::Path;
use std::sync::Arc;

/// Upper bound on the number of bytes read when probing a source.
///
/// Magic-byte signatures live in the first few bytes of a file; 8 KiB covers
/// every matcher in the database with room to spare.
pub const MAX_SNIFF_LEN: usize = 8192;

/// Message used when the backend cannot classify content and reports no
/// diagnostic of its own. The matcher database returns no error text, so this
/// stable fallback keeps `Detection` messages non-empty.
const INTERNAL_ERROR_MESSAGE: &str = "An internal MIME type definition error occurred";

const STREAM_MESSAGE: &str = "Content argument must be a valid resource stream";

/// PNG header. Any functioning matcher database classifies this.
const STARTUP_PROBE: &[u8] = &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

/// Magic-byte detection backend.
pub struct NativeParser {
    sniffer: infer::Infer,
    registry: Arc<CategoryRegistry>,
}

impl NativeParser {
    /// Create a parser backed by the global category registry.
    ///
    /// # Errors
    ///
    /// Returns `Startup` when the content sniffing capability is unavailable,
    /// i.e. the matcher database fails to classify a known probe. This is a
    /// construction-time precondition, not a per-call error.
    pub fn new() -> Result<Self> {
        Self::with_registry(get_category_registry())
    }

    /// Create a parser resolving categories through an explicit registry.
    ///
    /// # Errors
    ///
    /// Same as [`NativeParser::new`].
    pub fn with_registry(registry: Arc<CategoryRegistry>) -> Result<Self> {
        let sniffer = infer::Infer::new();
        if sniffer.get(STARTUP_PROBE).is_none() {
            return Err(MimetectError::startup(
                "Content sniffing capability is unavailable: the matcher database failed its probe",
            ));
        }
        Ok(Self { sniffer, registry })
    }

    /// Run the sniffer over a probe buffer and parse its verdict.
    fn sniff(&self, contents: &[u8]) -> Result<MediaType> {
        match self.sniffer.get(contents) {
            Some(kind) => {
                tracing::debug!(mime_type = kind.mime_type(), probe_len = contents.len(), "content classified");
                MediaType::parse_with(kind.mime_type(), &self.registry)
            }
            None => {
                tracing::debug!(probe_len = contents.len(), "content not classified");
                Err(MimetectError::detection(INTERNAL_ERROR_MESSAGE))
            }
        }
    }
}

impl Parser for NativeParser {
    fn from_pathname(&self, path: &Path) -> Result<MediaType> {
        let unreadable = |source: std::io::Error| {
            MimetectError::detection_with_source(
                format!("Unable to read file \"{}\" to determine MIME type", path.display()),
                source,
            )
        };

        let file = File::open(path).map_err(unreadable)?;
        let mut head = Vec::new();
        file.take(MAX_SNIFF_LEN as u64)
            .read_to_end(&mut head)
            .map_err(unreadable)?;

        self.sniff(&head)
    }

    fn from_resource_stream(&self, stream: &mut dyn ResourceStream) -> Result<MediaType> {
        // Probing the handle doubles as the validity check: a handle that
        // cannot report its position or be read is not an open resource stream.
        let origin = stream.stream_position().map_err(|source| {
            MimetectError::invalid_input_with_source(
                format!("{}, but a handle that cannot report its position is given", STREAM_MESSAGE),
                source,
            )
        })?;

        let mut head = vec![0u8; MAX_SNIFF_LEN];
        let mut filled = 0;
        while filled < head.len() {
            let read = stream.read(&mut head[filled..]).map_err(|source| {
                MimetectError::invalid_input_with_source(
                    format!("{}, but a handle that cannot be read is given", STREAM_MESSAGE),
                    source,
                )
            })?;
            if read == 0 {
                break;
            }
            filled += read;
        }
        head.truncate(filled);

        // The stream stays the caller's: leave it where we found it.
        stream.seek(SeekFrom::Start(origin))?;

        self.sniff(&head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor, Seek};

    const PNG_HEADER: &[u8] = &[
        0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n', 0x00, 0x00, 0x00, 0x0d, b'I', b'H', b'D', b'R',
    ];

    #[test]
    fn test_construction_succeeds() {
        assert!(NativeParser::new().is_ok());
    }

    #[test]
    fn test_sniff_png_header() {
        let parser = NativeParser::new().unwrap();
        let media_type = parser.from_contents(PNG_HEADER).unwrap();
        assert_eq!(media_type.essence(), "image/png");
        assert_eq!(media_type.category().name(), "image");
    }

    #[test]
    fn test_unclassifiable_content_uses_fallback_message() {
        let parser = NativeParser::new().unwrap();
        let err = parser.from_contents(b"no magic here").unwrap_err();
        let MimetectError::Detection { message, .. } = err else {
            panic!("expected Detection error");
        };
        assert_eq!(message, INTERNAL_ERROR_MESSAGE);
    }

    // Golden: `infer` reports no match and no diagnostic for empty input, so
    // empty contents fail with the fallback message.
    #[test]
    fn test_empty_contents_detection_error() {
        let parser = NativeParser::new().unwrap();
        let err = parser.from_contents(b"").unwrap_err();
        let MimetectError::Detection { message, .. } = err else {
            panic!("expected Detection error");
        };
        assert_eq!(message, INTERNAL_ERROR_MESSAGE);
    }

    #[test]
    fn test_stream_left_at_original_position() {
        let parser = NativeParser::new().unwrap();
        let mut stream = Cursor::new(PNG_HEADER.to_vec());
        parser.from_resource_stream(&mut stream).unwrap();
        assert_eq!(stream.position(), 0);
    }

    #[test]
    fn test_stream_probed_from_current_position() {
        let parser = NativeParser::new().unwrap();
        let mut padded = vec![0xffu8; 4];
        padded.extend_from_slice(PNG_HEADER);
        let mut stream = Cursor::new(padded);
        stream.seek(SeekFrom::Start(4)).unwrap();

        let media_type = parser.from_resource_stream(&mut stream).unwrap();
        assert_eq!(media_type.essence(), "image/png");
        assert_eq!(stream.position(), 4);
    }

    /// A handle that refuses every operation, standing in for a closed or
    /// bogus resource.
    struct BrokenStream;

    impl Read for BrokenStream {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "handle is closed"))
        }
    }

    impl Seek for BrokenStream {
        fn seek(&mut self, _pos: SeekFrom) -> io::Result<u64> {
            Err(io::Error::new(io::ErrorKind::Other, "handle is closed"))
        }
    }

    #[test]
    fn test_broken_stream_is_invalid_input() {
        let parser = NativeParser::new().unwrap();
        let err = parser.from_resource_stream(&mut BrokenStream).unwrap_err();
        let MimetectError::InvalidInput { message, .. } = err else {
            panic!("expected InvalidInput error");
        };
        assert!(message.starts_with(STREAM_MESSAGE));
    }
}
