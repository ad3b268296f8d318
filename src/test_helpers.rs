//! Shared test utilities for the guidebook test suite.
//!
//! Fixture setup plus lookup helpers over scan reports and repositories.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let repo = Repository::build(tmp.path(), &SiteConfig::default()).unwrap();
//!
//! let doc = find_document(&repo, "spring-boot-setup");
//! assert_eq!(doc.metadata.sequence_number, Some(2));
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::repository::Repository;
use crate::scan::ScanReport;
use crate::types::{Document, DocumentSource};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/site/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/site");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// A site root whose `content/` holds the given `(relative path, text)` files.
pub fn site_with_docs(docs: &[(&str, &str)]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    let content = tmp.path().join("content");
    std::fs::create_dir_all(&content).unwrap();
    for (rel, text) in docs {
        let path = content.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, text).unwrap();
    }
    tmp
}

// =========================================================================
// Lookup helpers
// =========================================================================

pub fn source_slugs(report: &ScanReport) -> Vec<&str> {
    report.sources.iter().map(|s| s.slug.as_str()).collect()
}

/// Find a scanned source by slug. Panics with the available slugs if missing.
pub fn find_source<'a>(report: &'a ScanReport, slug: &str) -> &'a DocumentSource {
    report
        .sources
        .iter()
        .find(|s| s.slug == slug)
        .unwrap_or_else(|| {
            panic!(
                "source '{slug}' not found, available: {:?}",
                source_slugs(report)
            )
        })
}

/// Find a repository document by slug. Panics with the available slugs if missing.
pub fn find_document<'a>(repo: &'a Repository, slug: &str) -> &'a Document {
    repo.get(slug).unwrap_or_else(|_| {
        let available: Vec<&str> = repo.all().iter().map(|d| d.slug.as_str()).collect();
        panic!("document '{slug}' not found, available: {available:?}")
    })
}
