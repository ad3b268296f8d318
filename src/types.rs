//! Shared types passed between the scanner, extractor and repository.
//!
//! None of these are mutated after construction. A content change means a
//! fresh scan producing new values.

use serde::Serialize;
use std::path::PathBuf;

/// Raw input for one document, as read by the scanner.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentSource {
    /// Stable identifier derived from the filename (see [`crate::naming`]).
    pub slug: String,
    /// Path relative to the site root, e.g. `content/03-spring-boot-setup.md`.
    pub path: PathBuf,
    /// File name with extension, e.g. `03-spring-boot-setup.md`.
    pub file_name: String,
    /// Decoded file contents.
    #[serde(skip)]
    pub raw_text: String,
}

/// Lightweight metadata derived from a document's text and filename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentMetadata {
    pub title: String,
    /// First line of the `Overview` section. Empty when there is none.
    pub overview: String,
    /// Leading pictograph, or the configured default.
    pub glyph: String,
    /// Leading digits of the filename. `None` means unordered, not zero.
    pub sequence_number: Option<u32>,
}

/// A scanned source paired with its extracted metadata.
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    pub slug: String,
    pub path: PathBuf,
    #[serde(skip)]
    pub raw_text: String,
    #[serde(flatten)]
    pub metadata: DocumentMetadata,
}

impl Document {
    pub fn new(source: DocumentSource, metadata: DocumentMetadata) -> Self {
        Self {
            slug: source.slug,
            path: source.path,
            raw_text: source.raw_text,
            metadata,
        }
    }

    pub fn title(&self) -> &str {
        &self.metadata.title
    }
}
