//! Content store scanning.
//!
//! Stage 1 of the build. Walks every configured content root and reads each
//! document into a [`DocumentSource`]. Nothing here interprets the text;
//! metadata extraction happens in [`crate::metadata`].
//!
//! ## Directory Structure
//!
//! ```text
//! site/                            # Site root (holds config.toml)
//! └── content/                     # Content root (configurable, may be several)
//!     ├── 01-introduction.md       # Document, sequence 1, slug "introduction"
//!     ├── 02-spring-boot-setup.md  # Document, sequence 2
//!     ├── README.md                # Document, unordered, slug "readme"
//!     ├── diagram.png              # Not a document extension, ignored
//!     ├── .drafts/                 # Hidden, never descended into
//!     └── advanced/
//!         └── 10-testing.md        # Nested documents are found too
//! ```
//!
//! ## Failure Modes
//!
//! - A content root that is missing or unreadable aborts the scan
//!   ([`ScanError::RootUnreadable`]).
//! - A single file that cannot be read (permissions, invalid UTF-8) is logged
//!   and reported in [`ScanReport::skipped`]; the rest of the corpus survives.
//! - Two files producing the same slug is a configuration error
//!   ([`ScanError::DuplicateSlug`]).

use crate::config::SiteConfig;
use crate::naming;
use crate::types::DocumentSource;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Cannot read content root {path:?}: {source}")]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Duplicate slug '{slug}' produced by {first:?} and {second:?}")]
    DuplicateSlug {
        slug: String,
        first: PathBuf,
        second: PathBuf,
    },
}

/// A document file that was found but left out of the corpus.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedFile {
    /// Path relative to the site root.
    pub path: PathBuf,
    pub reason: String,
}

/// Everything a scan produced.
#[derive(Debug, Default)]
pub struct ScanReport {
    /// One entry per readable document, sorted by path.
    pub sources: Vec<DocumentSource>,
    pub skipped: Vec<SkippedFile>,
}

/// Scan all content roots of the site at `root`.
///
/// Files are read in parallel; the report is only returned once every read
/// has finished.
pub fn scan(root: &Path, config: &SiteConfig) -> Result<ScanReport, ScanError> {
    let mut skipped = Vec::new();
    let mut candidates = Vec::new();

    for content_root in &config.content_roots {
        let dir = root.join(content_root);
        check_root(&dir)?;
        candidates.extend(collect_candidates(root, &dir, config, &mut skipped));
    }

    // Overlapping roots (e.g. `content` and `content/advanced`) must not
    // yield the same file twice.
    candidates.sort();
    candidates.dedup();

    let reads: Vec<Result<DocumentSource, SkippedFile>> = candidates
        .par_iter()
        .map(|path| read_source(root, path))
        .collect();

    let mut sources = Vec::with_capacity(reads.len());
    for read in reads {
        match read {
            Ok(source) => {
                tracing::debug!(slug = %source.slug, path = %source.path.display(), "read document");
                sources.push(source);
            }
            Err(skip) => skipped.push(skip),
        }
    }

    for skip in &skipped {
        tracing::warn!(path = %skip.path.display(), reason = %skip.reason, "skipping document");
    }

    check_unique_slugs(&sources)?;

    Ok(ScanReport { sources, skipped })
}

fn check_root(dir: &Path) -> Result<(), ScanError> {
    fs::read_dir(dir)
        .map(|_| ())
        .map_err(|source| ScanError::RootUnreadable {
            path: dir.to_path_buf(),
            source,
        })
}

/// Walk one content root and return every file with a document extension.
///
/// Unreadable subdirectories are reported as skipped rather than aborting.
fn collect_candidates(
    root: &Path,
    dir: &Path,
    config: &SiteConfig,
    skipped: &mut Vec<SkippedFile>,
) -> Vec<PathBuf> {
    let mut files = Vec::new();

    let walker = WalkDir::new(dir)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e.file_name()));

    for entry in walker {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_file() && config.is_document(entry.path()) {
                    files.push(entry.into_path());
                }
            }
            Err(err) => {
                let path = err.path().unwrap_or(dir);
                skipped.push(SkippedFile {
                    path: relative_to(root, path),
                    reason: err.to_string(),
                });
            }
        }
    }

    files
}

fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}

fn relative_to(root: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(root).unwrap_or(path).to_path_buf()
}

fn read_source(root: &Path, path: &Path) -> Result<DocumentSource, SkippedFile> {
    let rel = relative_to(root, path);

    let mut raw_text = fs::read_to_string(path).map_err(|e| SkippedFile {
        path: rel.clone(),
        reason: e.to_string(),
    })?;
    // Editors on Windows like to save a byte-order mark.
    if raw_text.starts_with('\u{feff}') {
        raw_text.drain(..'\u{feff}'.len_utf8());
    }

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let file_name = path
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    let slug = naming::parse_entry_name(&stem).slug;
    if slug.is_empty() {
        return Err(SkippedFile {
            path: rel,
            reason: "filename does not produce a usable slug".to_string(),
        });
    }

    Ok(DocumentSource {
        slug,
        path: rel,
        file_name,
        raw_text,
    })
}

/// Reports the first repeated slug, paired with the earlier source that
/// claimed it.
pub(crate) fn check_unique_slugs(sources: &[DocumentSource]) -> Result<(), ScanError> {
    let mut seen: BTreeMap<&str, &Path> = BTreeMap::new();
    for source in sources {
        match seen.entry(source.slug.as_str()) {
            Entry::Occupied(first) => {
                return Err(ScanError::DuplicateSlug {
                    slug: source.slug.clone(),
                    first: first.get().to_path_buf(),
                    second: source.path.clone(),
                });
            }
            Entry::Vacant(slot) => {
                slot.insert(&source.path);
            }
        }
    }
    Ok(())
}
