//! The `MediaType` value object.
//!
//! A [`MediaType`] is produced by [`MediaType::parse`] from a raw
//! `type/subtype; param=value` string, as reported by a detection backend. It
//! is immutable once constructed and carries the resolved [`Category`] for its
//! top-level type, so callers can match on `media_type.category()` without
//! re-resolving.

use crate::category::{Category, CategoryRegistry};
use crate::error::{MimetectError, Result};
use std::fmt;

/// A parsed MIME type, e.g. `image/png` or `text/plain; charset=utf-8`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaType {
    ty: String,
    subtype: String,
    parameters: Vec<(String, String)>,
    category: Category,
}

impl MediaType {
    /// Parse a raw MIME type string, resolving the category through the global
    /// registry.
    ///
    /// The type and subtype are lowercased; parameters keep their order and are
    /// lowercased in the key only. Surrounding quotes on parameter values are
    /// stripped.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the string has no `type/subtype` shape.
    pub fn parse(raw: &str) -> Result<MediaType> {
        Self::parse_with(raw, &crate::category::get_category_registry())
    }

    /// Parse a raw MIME type string against an explicit category registry.
    pub fn parse_with(raw: &str, registry: &CategoryRegistry) -> Result<MediaType> {
        let mut pieces = raw.split(';');
        let essence = pieces.next().unwrap_or("").trim();

        let Some((ty, subtype)) = essence.split_once('/') else {
            return Err(MimetectError::invalid_input(format!(
                "Malformed MIME type string: \"{}\"",
                raw
            )));
        };
        let ty = ty.trim().to_ascii_lowercase();
        let subtype = subtype.trim().to_ascii_lowercase();
        if ty.is_empty() || subtype.is_empty() {
            return Err(MimetectError::invalid_input(format!(
                "Malformed MIME type string: \"{}\"",
                raw
            )));
        }

        let mut parameters = Vec::new();
        for piece in pieces {
            let Some((key, value)) = piece.split_once('=') else {
                continue;
            };
            let key = key.trim().to_ascii_lowercase();
            let value = value.trim().trim_matches('"').to_string();
            if !key.is_empty() {
                parameters.push((key, value));
            }
        }

        let category = registry.resolve(&ty);
        Ok(MediaType {
            ty,
            subtype,
            parameters,
            category,
        })
    }

    /// The top-level type, e.g. `image`.
    pub fn r#type(&self) -> &str {
        &self.ty
    }

    /// The subtype, e.g. `png`.
    pub fn subtype(&self) -> &str {
        &self.subtype
    }

    /// The `type/subtype` pair without parameters.
    pub fn essence(&self) -> String {
        format!("{}/{}", self.ty, self.subtype)
    }

    /// Parameters in their original order.
    pub fn parameters(&self) -> &[(String, String)] {
        &self.parameters
    }

    /// Look up a parameter value by (case-insensitive) key.
    pub fn parameter(&self, key: &str) -> Option<&str> {
        let key = key.to_ascii_lowercase();
        self.parameters
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// The resolved top-level category.
    pub fn category(&self) -> &Category {
        &self.category
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.ty, self.subtype)?;
        for (key, value) in &self.parameters {
            write!(f, "; {}={}", key, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let media_type = MediaType::parse("image/png").unwrap();
        assert_eq!(media_type.r#type(), "image");
        assert_eq!(media_type.subtype(), "png");
        assert_eq!(media_type.essence(), "image/png");
        assert_eq!(*media_type.category(), Category::Image);
    }

    #[test]
    fn test_parse_with_parameters() {
        let media_type = MediaType::parse("text/plain; charset=utf-8; format=flowed").unwrap();
        assert_eq!(media_type.essence(), "text/plain");
        assert_eq!(media_type.parameter("charset"), Some("utf-8"));
        assert_eq!(media_type.parameter("format"), Some("flowed"));
        assert_eq!(media_type.parameters().len(), 2);
    }

    #[test]
    fn test_parse_lowercases_essence() {
        let media_type = MediaType::parse("Image/PNG").unwrap();
        assert_eq!(media_type.essence(), "image/png");
        assert_eq!(*media_type.category(), Category::Image);
    }

    #[test]
    fn test_parse_quoted_parameter_value() {
        let media_type = MediaType::parse("multipart/form-data; boundary=\"abc123\"").unwrap();
        assert_eq!(media_type.parameter("boundary"), Some("abc123"));
    }

    #[test]
    fn test_parse_custom_category() {
        let media_type = MediaType::parse("chemical/x-pdb").unwrap();
        assert_eq!(media_type.category().name(), "chemical");
        assert!(!media_type.category().is_well_known());
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(MediaType::parse("").is_err());
        assert!(MediaType::parse("noslash").is_err());
        assert!(MediaType::parse("/subtype-only").is_err());
        assert!(MediaType::parse("type-only/").is_err());
    }

    #[test]
    fn test_display_round_trip() {
        let media_type = MediaType::parse("text/plain; charset=utf-8").unwrap();
        assert_eq!(media_type.to_string(), "text/plain; charset=utf-8");
    }
}
