//! MIME top-level categories.
//!
//! A [`Category`] is the part of a media type before the `/`: `image` in
//! `image/png`. The well-known categories from the IANA registry are modeled as
//! enum variants so callers can match on them exhaustively; anything else seen
//! in the wild (vendor or experimental categories) becomes a [`Category::Custom`]
//! holding its lowercase name.
//!
//! Custom categories are interned through a [`CategoryRegistry`]. Resolving
//! the same name twice, in any casing, yields `Arc`s pointing at the same
//! allocation, so callers that compare categories by identity (`Arc::ptr_eq`)
//! get stable results for the whole process lifetime. The registry is never
//! evicted; its key space is the set of distinct category names ever observed,
//! which stays small in practice.
//!
//! # Example
//!
//! ```rust
//! use mimetect::Category;
//!
//! assert_eq!(Category::resolve("Image"), Category::Image);
//! assert_eq!(Category::resolve("x-custom").name(), "x-custom");
//! ```

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};

/// Custom category name substituted when `resolve` receives empty or
/// all-whitespace input. Keeps the non-empty-name guarantee of
/// [`Category::name`] without making resolution fallible.
pub const UNKNOWN_CATEGORY_NAME: &str = "x-unknown";

/// Names of the well-known categories, in declaration order.
///
/// The order is stable across calls and releases; it matches the variant order
/// of [`Category`].
pub const WELL_KNOWN_NAMES: &[&str] = &[
    "application",
    "audio",
    "example",
    "font",
    "image",
    "message",
    "model",
    "multipart",
    "text",
    "video",
];

/// A MIME top-level category.
///
/// One variant per well-known category, plus [`Category::Custom`] for any other
/// name. [`Category::name`] always returns a non-empty lowercase string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Application,
    Audio,
    Example,
    Font,
    Image,
    Message,
    Model,
    Multipart,
    Text,
    Video,
    /// A category outside the well-known set, identified by its lowercase name.
    Custom(Arc<str>),
}

impl Category {
    /// Resolve a category name through the global registry.
    ///
    /// Resolution is case-insensitive and never fails: names in the well-known
    /// set map to their enum variant, anything else is interned as a
    /// [`Category::Custom`]. Repeated resolution of the same custom name
    /// returns clones of the same shared instance.
    pub fn resolve(name: &str) -> Category {
        get_category_registry().resolve(name)
    }

    /// The names of the well-known categories, in stable declaration order.
    pub fn well_known_names() -> &'static [&'static str] {
        WELL_KNOWN_NAMES
    }

    /// The lowercase name of this category.
    pub fn name(&self) -> &str {
        match self {
            Category::Application => "application",
            Category::Audio => "audio",
            Category::Example => "example",
            Category::Font => "font",
            Category::Image => "image",
            Category::Message => "message",
            Category::Model => "model",
            Category::Multipart => "multipart",
            Category::Text => "text",
            Category::Video => "video",
            Category::Custom(name) => name,
        }
    }

    /// Whether this category is in the well-known set.
    pub fn is_well_known(&self) -> bool {
        !matches!(self, Category::Custom(_))
    }

    fn from_well_known_name(lowercase: &str) -> Option<Category> {
        match lowercase {
            "application" => Some(Category::Application),
            "audio" => Some(Category::Audio),
            "example" => Some(Category::Example),
            "font" => Some(Category::Font),
            "image" => Some(Category::Image),
            "message" => Some(Category::Message),
            "model" => Some(Category::Model),
            "multipart" => Some(Category::Multipart),
            "text" => Some(Category::Text),
            "video" => Some(Category::Video),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Interning registry for custom categories.
///
/// Guarantees one shared `Arc<str>` per distinct lowercase custom name for the
/// registry's lifetime. The lookup-or-insert step runs under a single write
/// lock, so concurrent resolution of an unseen name cannot create two
/// instances.
///
/// Most callers use the process-wide singleton via [`get_category_registry`] or
/// [`Category::resolve`]; an explicit registry is useful for tests that need
/// isolation.
pub struct CategoryRegistry {
    custom: RwLock<HashMap<String, Arc<str>>>,
}

impl CategoryRegistry {
    /// Create a new, empty registry.
    pub fn new() -> Self {
        Self {
            custom: RwLock::new(HashMap::new()),
        }
    }

    /// Resolve a category name, interning custom names on first sight.
    ///
    /// Never fails. Case-insensitive: `"Image"`, `"image"`, and `"IMAGE"` all
    /// resolve to [`Category::Image`]; custom names are lowercased (Unicode
    /// lowercasing, so vendor names like `"X-ÜBER"` intern as `"x-über"`)
    /// before interning. Empty or all-whitespace input resolves to the
    /// [`UNKNOWN_CATEGORY_NAME`] custom category, keeping `name()` non-empty
    /// for every possible input.
    pub fn resolve(&self, name: &str) -> Category {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return self.resolve(UNKNOWN_CATEGORY_NAME);
        }
        let lowercase = trimmed.to_lowercase();

        if let Some(category) = Category::from_well_known_name(&lowercase) {
            return category;
        }

        // Resolution is infallible by contract. A poisoned lock only means a
        // panic elsewhere mid-insert left nothing half-written (the map entry
        // is created in one step), so recover the guard instead of failing.
        if let Some(interned) = self
            .custom
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(&lowercase)
        {
            return Category::Custom(Arc::clone(interned));
        }

        let mut custom = self.custom.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        // Re-check under the write lock: another thread may have interned the
        // name between our read and write acquisitions.
        let interned = custom.entry(lowercase.clone()).or_insert_with(|| {
            tracing::trace!(category = %lowercase, "interning custom category");
            Arc::from(lowercase.as_str())
        });
        Category::Custom(Arc::clone(interned))
    }

    /// Number of distinct custom categories interned so far.
    pub fn custom_len(&self) -> usize {
        self.custom
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Global category registry singleton.
pub static CATEGORY_REGISTRY: Lazy<Arc<CategoryRegistry>> =
    Lazy::new(|| Arc::new(CategoryRegistry::new()));

/// Get the global category registry.
pub fn get_category_registry() -> Arc<CategoryRegistry> {
    CATEGORY_REGISTRY.clone()
}
