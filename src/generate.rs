//! Static site generation.
//!
//! A minimal host for the repository: it writes one listing page, one page
//! per document and a not-found page. The markup is deliberately unstyled;
//! the only stylesheet shipped is the one for highlighted code.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html                          # Listing, in sequence order
//! ├── 404.html                            # Served for unknown routes
//! ├── syntax.css                          # Highlight theme (when enabled)
//! ├── documents.json                      # Metadata for every document
//! └── docs/
//!     ├── introduction-to-spring/
//!     │   └── index.html                  # /docs/introduction-to-spring
//!     └── spring-boot-setup/
//!         └── index.html
//! ```
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Document bodies come from [`crate::render`] and embed through
//! `maud::Render`; everything else is escaped by maud.

use crate::config::SiteConfig;
use crate::paths::{self, LISTING_ROUTE};
use crate::render::{self, RenderError, Rendered, Renderer};
use crate::repository::Repository;
use crate::types::Document;
use maud::{DOCTYPE, Markup, html};
use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Render(#[from] RenderError),
}

const STYLESHEET_FILE: &str = "syntax.css";
const STYLESHEET_HREF: &str = "/syntax.css";
const MANIFEST_FILE: &str = "documents.json";
const NOT_FOUND_FILE: &str = "404.html";

/// One document page that was written.
#[derive(Debug, Clone, PartialEq)]
pub struct PageWritten {
    pub slug: String,
    pub title: String,
    pub sequence_number: Option<u32>,
    /// Relative to the output directory.
    pub file: PathBuf,
}

/// What a build wrote, relative to the output directory.
#[derive(Debug, Default)]
pub struct GenerateReport {
    pub index: PathBuf,
    pub pages: Vec<PageWritten>,
    pub not_found: PathBuf,
    pub stylesheet: Option<PathBuf>,
    pub manifest: PathBuf,
}

#[derive(Serialize)]
struct Manifest<'a> {
    title: &'a str,
    documents: Vec<ManifestEntry<'a>>,
}

#[derive(Serialize)]
struct ManifestEntry<'a> {
    #[serde(flatten)]
    document: &'a Document,
    route: String,
}

/// Write the whole site for `repo` into `output_dir`.
pub fn generate(
    repo: &Repository,
    config: &SiteConfig,
    output_dir: &Path,
) -> Result<GenerateReport, GenerateError> {
    fs::create_dir_all(output_dir)?;

    let stylesheet = if config.render.highlight {
        let css = render::highlight_css(&config.render.theme)?;
        fs::write(output_dir.join(STYLESHEET_FILE), css)?;
        Some(PathBuf::from(STYLESHEET_FILE))
    } else {
        None
    };
    let layout = Layout {
        site_title: &config.site.title,
        stylesheet: stylesheet.as_ref().map(|_| STYLESHEET_HREF),
        documents: repo.all(),
    };

    let index = PathBuf::from("index.html");
    fs::write(output_dir.join(&index), render_index(&layout).into_string())?;

    let renderer = Renderer::new(&config.render);
    let documents = repo.all();
    let pages = documents
        .par_iter()
        .enumerate()
        .map(|(i, doc)| {
            let prev = i.checked_sub(1).and_then(|p| documents.get(p));
            let next = documents.get(i + 1);
            write_document_page(doc, prev, next, &renderer, &layout, output_dir)
        })
        .collect::<Result<Vec<_>, GenerateError>>()?;

    let not_found = PathBuf::from(NOT_FOUND_FILE);
    fs::write(output_dir.join(&not_found), render_not_found(&layout).into_string())?;

    let manifest = PathBuf::from(MANIFEST_FILE);
    let entries = Manifest {
        title: &config.site.title,
        documents: repo
            .all()
            .iter()
            .map(|document| ManifestEntry {
                document,
                route: paths::route(&document.slug),
            })
            .collect(),
    };
    fs::write(output_dir.join(&manifest), serde_json::to_string_pretty(&entries)?)?;

    tracing::debug!(pages = pages.len(), output = %output_dir.display(), "site generated");

    Ok(GenerateReport {
        index,
        pages,
        not_found,
        stylesheet,
        manifest,
    })
}

fn write_document_page(
    doc: &Document,
    prev: Option<&Document>,
    next: Option<&Document>,
    renderer: &Renderer,
    layout: &Layout<'_>,
    output_dir: &Path,
) -> Result<PageWritten, GenerateError> {
    let body = renderer.render(&doc.raw_text);

    let file = paths::page_file(&doc.slug);
    let path = output_dir.join(&file);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, render_document_page(layout, doc, &body, prev, next).into_string())?;
    tracing::debug!(slug = %doc.slug, file = %file.display(), "wrote page");

    Ok(PageWritten {
        slug: doc.slug.clone(),
        title: doc.title().to_string(),
        sequence_number: doc.metadata.sequence_number,
        file,
    })
}

// ============================================================================
// HTML Components
// ============================================================================

/// Site-wide pieces every page shares.
struct Layout<'a> {
    site_title: &'a str,
    stylesheet: Option<&'a str>,
    documents: &'a [Document],
}

/// Renders the base HTML document structure
fn base_document(
    title: &str,
    stylesheet: Option<&str>,
    body_class: Option<&str>,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                @if let Some(href) = stylesheet {
                    link rel="stylesheet" href=(href);
                }
            }
            body class=[body_class] {
                (content)
            }
        }
    }
}

/// Renders the site header with breadcrumb and document navigation
fn site_header(breadcrumb: Markup, nav: Markup) -> Markup {
    html! {
        header.site-header {
            nav.breadcrumb {
                (breadcrumb)
            }
            nav.site-nav {
                (nav)
            }
        }
    }
}

/// Renders the document list used as site navigation
fn render_nav(documents: &[Document], current_slug: Option<&str>) -> Markup {
    html! {
        ul {
            @for doc in documents {
                @let is_current = current_slug == Some(doc.slug.as_str());
                li class=[is_current.then_some("current")] {
                    a href=(paths::route(&doc.slug)) { (doc.metadata.glyph) " " (doc.title()) }
                }
            }
        }
    }
}

fn home_link(layout: &Layout<'_>) -> Markup {
    html! {
        a href=(LISTING_ROUTE) { (layout.site_title) }
    }
}

// ============================================================================
// Page Renderers
// ============================================================================

/// Renders the listing page: glyph, title and overview per document
fn render_index(layout: &Layout<'_>) -> Markup {
    let content = html! {
        header.site-header {
            nav.breadcrumb { (home_link(layout)) }
        }
        main.index-page {
            h1 { (layout.site_title) }
            @if layout.documents.is_empty() {
                p.empty { "No documents yet." }
            } @else {
                ol.document-list {
                    @for doc in layout.documents {
                        li.document-card {
                            a href=(paths::route(&doc.slug)) {
                                span.glyph { (doc.metadata.glyph) }
                                " "
                                span.document-title { (doc.title()) }
                            }
                            @if !doc.metadata.overview.is_empty() {
                                p.overview { (doc.metadata.overview) }
                            }
                        }
                    }
                }
            }
        }
    };

    base_document(layout.site_title, layout.stylesheet, Some("index"), content)
}

/// Renders one document with previous/next links in listing order
fn render_document_page(
    layout: &Layout<'_>,
    doc: &Document,
    body: &Rendered,
    prev: Option<&Document>,
    next: Option<&Document>,
) -> Markup {
    let breadcrumb = html! {
        (home_link(layout))
        " › "
        (doc.title())
    };

    let content = html! {
        (site_header(breadcrumb, render_nav(layout.documents, Some(&doc.slug))))
        main.document-page {
            article.document-content {
                (body)
            }
            nav.page-nav {
                @if let Some(prev) = prev {
                    a.prev href=(paths::route(&prev.slug)) rel="prev" { "← " (prev.title()) }
                }
                @if let Some(next) = next {
                    a.next href=(paths::route(&next.slug)) rel="next" { (next.title()) " →" }
                }
            }
        }
    };

    let page_title = format!("{} · {}", doc.title(), layout.site_title);
    base_document(&page_title, layout.stylesheet, Some("document"), content)
}

fn render_not_found(layout: &Layout<'_>) -> Markup {
    let content = html! {
        (site_header(home_link(layout), render_nav(layout.documents, None)))
        main.not-found-page {
            h1 { "Document not found" }
            p {
                "There is no document at this address. "
                a href=(LISTING_ROUTE) { "Back to the listing" }
                "."
            }
        }
    };

    let page_title = format!("Not found · {}", layout.site_title);
    base_document(&page_title, layout.stylesheet, Some("not-found"), content)
}

// ============================================================================
// Tests
// ============================================================================
