//! # Guidebook
//!
//! A minimal static site generator for study-guide document collections.
//! A directory of loosely structured markdown files becomes a listing page
//! plus one page per document, each at a stable slug derived from its
//! filename.
//!
//! # Architecture: Scan, Extract, Serve
//!
//! ```text
//! content/ ─→ scan ─→ metadata ─→ Repository ─┬─→ paths     (routes to pre-render)
//!                                             └─→ render    (HTML per document)
//!                                                   └─→ generate (dist/)
//! ```
//!
//! The repository is assembled once, before anything reads it, and is never
//! mutated afterwards. Every stage downstream of the scan is a pure function
//! of the repository and the config, so unit tests can exercise them without
//! touching the filesystem.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Walks the content roots and reads every document file |
//! | [`naming`] | `NN-name` filename convention: sequence number, slug, fallback title |
//! | [`metadata`] | Title, overview, glyph and sequence heuristics; `+++` front matter |
//! | [`repository`] | Immutable, ordered document collection with lookup by slug |
//! | [`paths`] | Static path enumeration and route/file mapping |
//! | [`render`] | Markdown to HTML with tables and syntect-highlighted fences |
//! | [`generate`] | Minimal unstyled site host using Maud |
//! | [`config`] | `config.toml` loading, merging over stock defaults, validation |
//! | [`types`] | `DocumentSource`, `DocumentMetadata`, `Document` |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Heuristics Behind a Trait
//!
//! The corpus has no schema, so metadata is scraped from markers people
//! actually write: a leading emoji, an ordinal in the first heading, an
//! `## Overview` section. Those heuristics live behind
//! [`metadata::MetadataExtractor`]. A structured `+++` preamble is layered on
//! top by [`metadata::FrontMatter`] without the repository or renderer
//! knowing about it.
//!
//! ## Slugs Come From Filenames Only
//!
//! A slug never depends on the document text, so editing a title does not
//! break links. Two files that slugify identically are a configuration error,
//! not something to resolve silently.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/). Malformed markup
//! is a build error, interpolation is escaped by default, and there is no
//! template directory to ship.

pub mod config;
pub mod generate;
pub mod metadata;
pub mod naming;
pub mod output;
pub mod paths;
pub mod render;
pub mod repository;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
