//! The detection backend contract.
//!
//! [`Parser`] normalizes three heterogeneous input shapes into one detection
//! call: a filesystem path, an in-memory byte buffer, or an open byte stream.
//! Backends implement [`Parser::from_pathname`] and
//! [`Parser::from_resource_stream`]. [`Parser::from_contents`] is a provided
//! method that adapts bytes to an in-memory stream and delegates, so the
//! bytes-to-stream conversion lives in exactly one place and every backend
//! receives it for free.
//!
//! Streams passed to `from_resource_stream` remain the caller's to close; a
//! backend never closes a stream it did not itself create. The buffer
//! `from_contents` creates is owned by that call and dropped with it.
//!
//! # Example: a constant backend
//!
//! ```rust
//! use mimetect::{MediaType, Parser, ResourceStream, Result};
//! use std::path::Path;
//!
//! struct AlwaysPng;
//!
//! impl Parser for AlwaysPng {
//!     fn from_pathname(&self, _path: &Path) -> Result<MediaType> {
//!         MediaType::parse("image/png")
//!     }
//!
//!     fn from_resource_stream(&self, _stream: &mut dyn ResourceStream) -> Result<MediaType> {
//!         MediaType::parse("image/png")
//!     }
//! }
//!
//! // from_contents comes for free, via the stream entry point.
//! let media_type = AlwaysPng.from_contents(b"anything").unwrap();
//! assert_eq!(media_type.essence(), "image/png");
//! ```

use crate::error::Result;
use crate::media_type::MediaType;
use std::io::{Cursor, Read, Seek, SeekFrom, Write};
use std::path::Path;

/// An open byte stream: readable and seekable.
///
/// Blanket-implemented for every `Read + Seek` type, so `File`, `Cursor`, and
/// friends all qualify without ceremony.
pub trait ResourceStream: Read + Seek {}

impl<T: Read + Seek> ResourceStream for T {}

/// A MIME type detection backend.
pub trait Parser {
    /// Detect the MIME type of the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `Detection` when the path is not readable or the backend cannot
    /// classify its content.
    fn from_pathname(&self, path: &Path) -> Result<MediaType>;

    /// Detect the MIME type of the content behind an open stream.
    ///
    /// The stream is probed from its current position; implementations restore
    /// the position before returning and never close the stream.
    ///
    /// # Errors
    ///
    /// Returns `Detection` when the backend cannot classify the stream's
    /// content, and `InvalidInput` when the handle does not behave like an
    /// open, readable, seekable stream.
    fn from_resource_stream(&self, stream: &mut dyn ResourceStream) -> Result<MediaType>;

    /// Detect the MIME type of an in-memory byte buffer.
    ///
    /// Provided for all backends: writes the bytes into a fresh in-memory
    /// buffer, rewinds it, and delegates to
    /// [`from_resource_stream`](Parser::from_resource_stream). Involves no
    /// external resource, so it can only fail with whatever the stream entry
    /// point fails with.
    fn from_contents(&self, contents: &[u8]) -> Result<MediaType> {
        let mut buffer = Cursor::new(Vec::with_capacity(contents.len()));
        buffer.write_all(contents)?;
        buffer.seek(SeekFrom::Start(0))?;
        self.from_resource_stream(&mut buffer)
    }
}
