//! In-memory document collection.
//!
//! The repository pairs every scanned source with its extracted metadata and
//! holds the result in listing order. It is built once and never mutated;
//! a content change means building a new one.
//!
//! ## Listing order
//!
//! Documents with a sequence number come first, ascending. Unordered
//! documents (`README.md`, `glossary.md`) follow. Ties break on slug, so the
//! order is total and stable across runs.

use crate::config::SiteConfig;
use crate::metadata::{self, MetadataExtractor};
use crate::scan::{self, ScanError, SkippedFile};
use crate::types::{Document, DocumentSource};
use rayon::prelude::*;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Lookup of a slug that is not in the collection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("No document with slug '{slug}'")]
pub struct NotFound {
    pub slug: String,
}

#[derive(Debug, Default)]
pub struct Repository {
    documents: Vec<Document>,
    index: HashMap<String, usize>,
    skipped: Vec<SkippedFile>,
}

impl Repository {
    /// Scan the site at `root` and extract metadata for every document.
    pub fn build(root: &Path, config: &SiteConfig) -> Result<Self, ScanError> {
        let report = scan::scan(root, config)?;
        let extractor = metadata::extractor_for(&config.metadata);

        let mut repo = Self::from_sources(report.sources, extractor.as_ref())?;
        repo.skipped = report.skipped;

        tracing::debug!(
            documents = repo.documents.len(),
            skipped = repo.skipped.len(),
            "repository built"
        );
        Ok(repo)
    }

    /// Build from sources that were already scanned. Two sources with the
    /// same slug are rejected, as in [`scan::scan`].
    pub fn from_sources(
        sources: Vec<DocumentSource>,
        extractor: &dyn MetadataExtractor,
    ) -> Result<Self, ScanError> {
        scan::check_unique_slugs(&sources)?;

        let mut documents: Vec<Document> = sources
            .into_par_iter()
            .map(|source| {
                let meta = extractor.extract(&source.raw_text, &source.file_name);
                Document::new(source, meta)
            })
            .collect();

        documents.sort_by(|a, b| {
            let a_key = (a.metadata.sequence_number.is_none(), a.metadata.sequence_number);
            let b_key = (b.metadata.sequence_number.is_none(), b.metadata.sequence_number);
            a_key.cmp(&b_key).then_with(|| a.slug.cmp(&b.slug))
        });

        let index = documents
            .iter()
            .enumerate()
            .map(|(i, doc)| (doc.slug.clone(), i))
            .collect();

        Ok(Self {
            documents,
            index,
            skipped: Vec::new(),
        })
    }

    /// Every document in listing order.
    pub fn all(&self) -> &[Document] {
        &self.documents
    }

    pub fn get(&self, slug: &str) -> Result<&Document, NotFound> {
        self.position(slug).map(|i| &self.documents[i])
    }

    /// The documents before and after `slug` in listing order.
    pub fn neighbors(&self, slug: &str) -> Result<(Option<&Document>, Option<&Document>), NotFound> {
        let i = self.position(slug)?;
        let prev = i.checked_sub(1).and_then(|p| self.documents.get(p));
        let next = self.documents.get(i + 1);
        Ok((prev, next))
    }

    /// Files the scan found but could not include.
    pub fn skipped(&self) -> &[SkippedFile] {
        &self.skipped
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    fn position(&self, slug: &str) -> Result<usize, NotFound> {
        self.index.get(slug).copied().ok_or_else(|| NotFound {
            slug: slug.to_string(),
        })
    }
}
