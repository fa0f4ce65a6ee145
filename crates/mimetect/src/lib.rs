//! mimetect - MIME Type Detection Library
//!
//! mimetect resolves a MIME type from an arbitrary content source: a
//! filesystem path, an in-memory byte buffer, or an open byte stream. The
//! result is a structured [`MediaType`] carrying its top-level [`Category`]
//! (`application`, `image`, `text`, etc.), including any vendor or custom
//! category encountered in the wild.
//!
//! # Quick Start
//!
//! ```rust
//! use mimetect::{Category, NativeParser, Parser};
//!
//! # fn main() -> mimetect::Result<()> {
//! let parser = NativeParser::new()?;
//!
//! // Detect from bytes; paths and open streams work the same way.
//! let png_header = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];
//! let media_type = parser.from_contents(&png_header)?;
//!
//! assert_eq!(media_type.essence(), "image/png");
//! assert_eq!(*media_type.category(), Category::Image);
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - **Category model** (`category`): well-known categories as enum variants,
//!   custom categories interned through a process-wide registry so repeated
//!   resolution of the same name yields the same shared instance
//! - **Parser contract** (`parser`): one trait for the three input shapes, with
//!   the bytes-to-stream adaptation provided once for all backends
//! - **Backends**: [`NativeParser`] (magic bytes via `infer`) and
//!   [`ExtensionParser`] (filename via a curated table plus `mime_guess`)
//! - **Metadata** (`info`): identifier constants with an explicit
//!   startup-built [`Info`] registry
//!
//! All calls are synchronous and run on the caller's thread; detection is a
//! bounded read of local content.

#![deny(unsafe_code)]

pub mod category;
pub mod error;
pub mod extension;
pub mod info;
pub mod media_type;
pub mod native;
pub mod parser;

pub use category::{get_category_registry, Category, CategoryRegistry, UNKNOWN_CATEGORY_NAME, WELL_KNOWN_NAMES};
pub use error::{MimetectError, Result};
pub use extension::ExtensionParser;
pub use info::{lookup_info, Info};
pub use media_type::MediaType;
pub use native::{NativeParser, MAX_SNIFF_LEN};
pub use parser::{Parser, ResourceStream};

pub use info::{
    CSV_MIME_TYPE, GIF_MIME_TYPE, HTML_MIME_TYPE, JPEG_MIME_TYPE, JSON_MIME_TYPE, MARKDOWN_MIME_TYPE,
    MPEG_AUDIO_MIME_TYPE, MP4_MIME_TYPE, OCTET_STREAM_MIME_TYPE, PDF_MIME_TYPE, PLAIN_TEXT_MIME_TYPE, PNG_MIME_TYPE,
    RFC822_MIME_TYPE, WEBP_MIME_TYPE, WOFF2_MIME_TYPE, XML_MIME_TYPE, ZIP_MIME_TYPE,
};
