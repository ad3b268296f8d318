//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Every document is shown by its identity first: positional index, glyph
//! and title. The slug, source path and overview follow as indented context
//! lines, so the output reads as a content inventory while still tracing
//! back to files.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Documents
//! 001 🌱 introduction to spring
//!     Slug: introduction-to-spring
//!     Source: content/01-introduction-to-spring.md
//!     Overview: Spring is a framework for building Java applications.
//! 002 📄 Readme
//!     Slug: readme
//!     Source: content/README.md
//!
//! Skipped
//!     content/02-bad.md: stream did not contain valid UTF-8
//!
//! 2 documents, 1 skipped
//! ```
//!
//! ## Build
//!
//! ```text
//! Home → index.html
//! 001 introduction to spring → docs/introduction-to-spring/index.html
//! 002 Readme → docs/readme/index.html
//! Not found → 404.html
//! Stylesheet → syntax.css
//! Manifest → documents.json
//! Generated 2 document pages
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::generate::GenerateReport;
use crate::paths::{self, LISTING_ROUTE};
use crate::repository::Repository;
use crate::types::Document;
use serde::Serialize;

const OVERVIEW_WIDTH: usize = 72;

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        None => text.to_string(),
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
    }
}

fn document_header(pos: usize, doc: &Document) -> String {
    format!("{} {} {}", format_index(pos), doc.metadata.glyph, doc.title())
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

// ============================================================================
// check
// ============================================================================

/// Format the document inventory: every document in listing order, then
/// anything the scan skipped.
pub fn format_check_output(repo: &Repository) -> Vec<String> {
    let mut lines = vec!["Documents".to_string()];

    for (i, doc) in repo.all().iter().enumerate() {
        lines.push(document_header(i + 1, doc));
        lines.push(format!("{}Slug: {}", indent(1), doc.slug));
        lines.push(format!("{}Source: {}", indent(1), doc.path.display()));
        if !doc.metadata.overview.is_empty() {
            lines.push(format!(
                "{}Overview: {}",
                indent(1),
                truncate_desc(&doc.metadata.overview, OVERVIEW_WIDTH)
            ));
        }
    }

    if !repo.skipped().is_empty() {
        lines.push(String::new());
        lines.push("Skipped".to_string());
        for skip in repo.skipped() {
            lines.push(format!("{}{}: {}", indent(1), skip.path.display(), skip.reason));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "{}, {} skipped",
        plural(repo.len(), "document"),
        repo.skipped().len()
    ));
    lines
}

pub fn print_check_output(repo: &Repository) {
    for line in format_check_output(repo) {
        println!("{}", line);
    }
}

// ============================================================================
// paths
// ============================================================================

#[derive(Serialize)]
struct PathEntry<'a> {
    slug: &'a str,
    route: String,
}

/// Every route the host must serve, listing first.
pub fn format_paths(repo: &Repository) -> Vec<String> {
    std::iter::once(LISTING_ROUTE.to_string())
        .chain(paths::static_paths(repo).iter().map(|slug| paths::route(slug)))
        .collect()
}

/// The static paths as a JSON array of `{ slug, route }` objects.
pub fn format_paths_json(repo: &Repository) -> Result<String, serde_json::Error> {
    let entries: Vec<PathEntry<'_>> = repo
        .all()
        .iter()
        .map(|doc| PathEntry {
            slug: &doc.slug,
            route: paths::route(&doc.slug),
        })
        .collect();
    serde_json::to_string_pretty(&entries)
}

pub fn print_paths(repo: &Repository) {
    for line in format_paths(repo) {
        println!("{}", line);
    }
}

// ============================================================================
// show
// ============================================================================

/// Metadata block printed above a rendered document.
pub fn format_show_header(
    doc: &Document,
    prev: Option<&Document>,
    next: Option<&Document>,
) -> Vec<String> {
    let mut lines = vec![format!("{} {}", doc.metadata.glyph, doc.title())];
    lines.push(format!("{}Route: {}", indent(1), paths::route(&doc.slug)));
    lines.push(format!("{}Source: {}", indent(1), doc.path.display()));
    if let Some(n) = doc.metadata.sequence_number {
        lines.push(format!("{}Sequence: {}", indent(1), n));
    }
    if !doc.metadata.overview.is_empty() {
        lines.push(format!("{}Overview: {}", indent(1), doc.metadata.overview));
    }
    if let Some(prev) = prev {
        lines.push(format!("{}Previous: {}", indent(1), prev.slug));
    }
    if let Some(next) = next {
        lines.push(format!("{}Next: {}", indent(1), next.slug));
    }
    lines
}

// ============================================================================
// build
// ============================================================================

/// Format what a build wrote, each entry followed by `→` and its output path.
pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    let mut lines = vec![format!("Home \u{2192} {}", report.index.display())];

    for (i, page) in report.pages.iter().enumerate() {
        lines.push(format!(
            "{} {} \u{2192} {}",
            format_index(i + 1),
            page.title,
            page.file.display()
        ));
    }

    lines.push(format!("Not found \u{2192} {}", report.not_found.display()));
    if let Some(css) = &report.stylesheet {
        lines.push(format!("Stylesheet \u{2192} {}", css.display()));
    }
    lines.push(format!("Manifest \u{2192} {}", report.manifest.display()));
    lines.push(format!("Generated {}", plural(report.pages.len(), "document page")));
    lines
}

/// Print generate output to stdout.
pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::PageWritten;
    use crate::metadata::Heuristic;
    use crate::types::DocumentSource;
    use std::path::{Path, PathBuf};

    fn repo_of(docs: &[(&str, &str)]) -> Repository {
        let sources = docs
            .iter()
            .map(|(file_name, text)| {
                let stem = Path::new(file_name).file_stem().unwrap().to_string_lossy();
                DocumentSource {
                    slug: crate::naming::parse_entry_name(&stem).slug,
                    path: PathBuf::from("content").join(file_name),
                    file_name: file_name.to_string(),
                    raw_text: text.to_string(),
                }
            })
            .collect();
        Repository::from_sources(sources, &Heuristic::default()).unwrap()
    }

    // =========================================================================
    // Helper tests
    // =========================================================================

    #[test]
    fn truncate_desc_short() {
        assert_eq!(truncate_desc("hello", 10), "hello");
    }

    #[test]
    fn truncate_desc_exact() {
        assert_eq!(truncate_desc("hello", 5), "hello");
    }

    #[test]
    fn truncate_desc_long() {
        assert_eq!(truncate_desc("hello world", 5), "hello...");
    }

    #[test]
    fn truncate_desc_multibyte() {
        assert_eq!(truncate_desc("Ünïcödé text", 4), "Ünïc...");
    }

    #[test]
    fn format_index_pads() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(1234), "1234");
    }

    #[test]
    fn indent_levels() {
        assert_eq!(indent(0), "");
        assert_eq!(indent(2), "        ");
    }

    // =========================================================================
    // Command output tests
    // =========================================================================

    #[test]
    fn check_output_lists_documents_in_order() {
        let repo = repo_of(&[
            ("README.md", "Notes."),
            ("01-intro.md", "🌱\n# 01-intro\n## Overview\nWhere to start.\n"),
        ]);
        let lines = format_check_output(&repo);

        assert_eq!(
            lines,
            vec![
                "Documents",
                "001 🌱 intro",
                "    Slug: intro",
                "    Source: content/01-intro.md",
                "    Overview: Where to start.",
                "002 📄 Readme",
                "    Slug: readme",
                "    Source: content/README.md",
                "",
                "2 documents, 0 skipped",
            ]
        );
    }

    #[test]
    fn paths_start_with_listing() {
        let repo = repo_of(&[("01-a.md", "# A"), ("02-b.md", "# B")]);
        assert_eq!(format_paths(&repo), vec!["/", "/docs/a", "/docs/b"]);
    }

    #[test]
    fn paths_json_has_slug_and_route() {
        let repo = repo_of(&[("01-a.md", "# A")]);
        let json: serde_json::Value =
            serde_json::from_str(&format_paths_json(&repo).unwrap()).unwrap();
        assert_eq!(json[0]["slug"], "a");
        assert_eq!(json[0]["route"], "/docs/a");
    }

    #[test]
    fn show_header_includes_neighbors() {
        let repo = repo_of(&[("01-a.md", "# A"), ("02-b.md", "# B"), ("03-c.md", "# C")]);
        let (prev, next) = repo.neighbors("b").unwrap();
        let lines = format_show_header(repo.get("b").unwrap(), prev, next);

        assert_eq!(lines[0], "📄 B");
        assert!(lines.contains(&"    Route: /docs/b".to_string()));
        assert!(lines.contains(&"    Sequence: 2".to_string()));
        assert!(lines.contains(&"    Previous: a".to_string()));
        assert!(lines.contains(&"    Next: c".to_string()));
    }

    #[test]
    fn generate_output_lists_every_file() {
        let report = GenerateReport {
            index: PathBuf::from("index.html"),
            pages: vec![PageWritten {
                slug: "intro".to_string(),
                title: "Intro".to_string(),
                sequence_number: Some(1),
                file: PathBuf::from("docs/intro/index.html"),
            }],
            not_found: PathBuf::from("404.html"),
            stylesheet: None,
            manifest: PathBuf::from("documents.json"),
        };

        assert_eq!(
            format_generate_output(&report),
            vec![
                "Home \u{2192} index.html",
                "001 Intro \u{2192} docs/intro/index.html",
                "Not found \u{2192} 404.html",
                "Manifest \u{2192} documents.json",
                "Generated 1 document page",
            ]
        );
    }
}
