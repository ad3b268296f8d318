//! Document metadata extraction.
//!
//! Every document yields a title, a one-line overview, a display glyph and an
//! optional sequence number. The corpus has no enforced schema, so these are
//! scraped from the text with heuristics, optionally overridden by a
//! structured TOML preamble.
//!
//! ## Heuristics ([`Heuristic`])
//!
//! - **Title**: the first heading outside fenced code, ATX (`# Title`) or
//!   setext (`Title` over `=====`), whose plain text is non-empty once
//!   leading ordinals, dashes, hash marks and pictographs are stripped.
//!   `# 01-introduction to spring` becomes "introduction to spring" and
//!   `# **Spring** Basics` becomes "Spring Basics". Without one, the filename is
//!   title-cased: `03-spring-boot-setup.md` → "Spring Boot Setup".
//! - **Overview**: the first prose line after a heading whose text is exactly
//!   `Overview`. Reaching another heading first, or having no such section,
//!   gives an empty overview.
//! - **Glyph**: a pictograph (emoji sequence) at the very start of the text,
//!   optionally behind a heading marker (`# 🌱 Basics`). Otherwise the
//!   configured default.
//! - **Sequence number**: the leading digits of the filename, see
//!   [`crate::naming`].
//!
//! ## Front matter ([`FrontMatter`])
//!
//! A document may start with a TOML block between `+++` lines:
//!
//! ```text
//! +++
//! title = "Dependency Injection"
//! overview = "How the container wires beans together."
//! glyph = "🧩"
//! order = 3
//! +++
//! ```
//!
//! Each key present wins over its heuristic; missing keys fall back. A block
//! that does not parse is ignored with a warning.
//!
//! ## Resolution priority
//!
//! Each field is resolved independently; the first non-empty value wins:
//!
//! ```text
//! title:    front matter → first heading → filename
//! overview: front matter → Overview section → ""
//! glyph:    front matter → leading pictograph → default glyph
//! sequence: front matter `order` → filename digits → None
//! ```

use crate::config::MetadataConfig;
use crate::naming;
use crate::types::DocumentMetadata;
use pulldown_cmark::{Event, Options, Parser};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;
use std::sync::LazyLock;

/// ATX heading: up to three spaces, one to six `#`, then whitespace or end of line.
static HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^ {0,3}#{1,6}(?:[ \t]+(.*))?$").expect("valid heading regex")
});

/// A leading emoji sequence, including variation selectors, keycaps,
/// skin-tone modifiers and zero-width-joined parts.
static LEADING_GLYPH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(?:#{1,6}[ \t]+)?(\p{Extended_Pictographic}(?:\x{FE0F}|\x{20E3}|[\x{1F3FB}-\x{1F3FF}]|\x{200D}\p{Extended_Pictographic}\x{FE0F}?)*)",
    )
    .expect("valid glyph regex")
});

/// Setext underline: a run of `=` (level 1) or `-` (level 2).
static SETEXT_UNDERLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ {0,3}(?:=+|-+)[ \t]*$").expect("valid underline regex"));

/// Ordinals, dashes, hash marks, whitespace and pictographs ahead of a title.
/// Digits only count when a separator or the end of the text follows.
static TITLE_NOISE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:[\s#\-\x{2013}\x{2014}]|\p{Extended_Pictographic}|[\x{FE0F}\x{200D}\x{20E3}\x{1F3FB}-\x{1F3FF}]|[0-9]+(?:[.):_\-]|\s|$))+",
    )
    .expect("valid title noise regex")
});

/// List bullets, ordered-list numbers and quote markers ahead of a prose line.
static BLOCK_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:>[ \t]?|[-*+][ \t]+|[0-9]{1,9}[.)][ \t]+)+").expect("valid block marker regex")
});

pub const DEFAULT_GLYPH: &str = "📄";

/// Derives [`DocumentMetadata`] from raw text and the source filename.
///
/// Implementations must be pure: the same input always produces the same
/// metadata.
pub trait MetadataExtractor: Send + Sync {
    fn extract(&self, raw_text: &str, file_name: &str) -> DocumentMetadata;
}

/// Build the extractor described by the `[metadata]` config section.
pub fn extractor_for(config: &MetadataConfig) -> Box<dyn MetadataExtractor> {
    let heuristic = Heuristic::new(config.default_glyph.clone());
    if config.front_matter {
        Box::new(FrontMatter::new(heuristic))
    } else {
        Box::new(heuristic)
    }
}

/// Extract metadata with the default configuration (front matter + heuristics).
pub fn extract_metadata(raw_text: &str, file_name: &str) -> DocumentMetadata {
    FrontMatter::new(Heuristic::default()).extract(raw_text, file_name)
}

/// Resolve a metadata field from multiple sources.
///
/// Takes a list of optional values in priority order and returns the first
/// non-None, non-empty value, trimmed.
///
/// ```text
/// title: resolve(&[front_matter_title, heading_title, filename_title])
/// ```
pub fn resolve(sources: &[Option<&str>]) -> Option<String> {
    sources
        .iter()
        .filter_map(|opt| {
            opt.map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
        })
        .next()
}

// ============================================================================
// Heuristics
// ============================================================================

/// Pattern-based extraction over free-form markdown.
#[derive(Debug, Clone)]
pub struct Heuristic {
    default_glyph: String,
}

impl Heuristic {
    pub fn new(default_glyph: impl Into<String>) -> Self {
        Self {
            default_glyph: default_glyph.into(),
        }
    }
}

impl Default for Heuristic {
    fn default() -> Self {
        Self::new(DEFAULT_GLYPH)
    }
}

impl MetadataExtractor for Heuristic {
    fn extract(&self, raw_text: &str, file_name: &str) -> DocumentMetadata {
        let stem = Path::new(file_name)
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let parsed = naming::parse_entry_name(&stem);
        let raw_text = raw_text.strip_prefix('\u{feff}').unwrap_or(raw_text);
        let lines = classify(raw_text);

        let heading_title = lines.iter().find_map(|line| match line {
            Line::Heading(text) => Some(heading_phrase(text)).filter(|t| !t.is_empty()),
            _ => None,
        });

        DocumentMetadata {
            title: resolve(&[
                heading_title.as_deref(),
                Some(parsed.display_title.as_str()),
                Some(stem.as_str()),
            ])
            .unwrap_or_default(),
            overview: overview(&lines).unwrap_or_default(),
            glyph: leading_glyph(raw_text)
                .unwrap_or(&self.default_glyph)
                .to_string(),
            sequence_number: parsed.number,
        }
    }
}

/// One line of a document, as far as the heuristics care.
#[derive(Debug, PartialEq)]
enum Line<'a> {
    /// Heading text with the marker and any closing hashes removed.
    Heading(&'a str),
    Text(&'a str),
    /// Inside a fenced code block, fence lines included.
    Code,
    /// A setext underline, already folded into the heading above it.
    Underline,
}

/// Split text into lines, tracking fenced code so that `# comment` lines in
/// shell snippets are not read as headings.
///
/// A setext underline turns the single prose line above it into a heading.
/// Only that line is kept as the heading text.
fn classify(text: &str) -> Vec<Line<'_>> {
    let mut lines = Vec::new();
    let mut fence: Option<(char, usize)> = None;

    for line in text.lines() {
        let marker = fence_marker(line);

        if let Some((ch, len)) = fence {
            if let Some((close_ch, close_len, info)) = marker {
                if close_ch == ch && close_len >= len && info.trim().is_empty() {
                    fence = None;
                }
            }
            lines.push(Line::Code);
            continue;
        }

        if let Some((ch, len, _)) = marker {
            fence = Some((ch, len));
            lines.push(Line::Code);
        } else if let Some(caps) = HEADING.captures(line) {
            let text = caps.get(1).map(|m| m.as_str()).unwrap_or("");
            lines.push(Line::Heading(strip_closing_hashes(text.trim())));
        } else if SETEXT_UNDERLINE.is_match(line) && underlines_previous(&lines) {
            if let Some(Line::Text(previous)) = lines.pop() {
                lines.push(Line::Heading(previous.trim()));
            }
            lines.push(Line::Underline);
        } else {
            lines.push(Line::Text(line));
        }
    }

    lines
}

/// Whether the line above can carry a setext underline. Under a blank line or
/// a list item, `---` is a thematic break instead.
fn underlines_previous(lines: &[Line<'_>]) -> bool {
    match lines.last() {
        Some(Line::Text(previous)) => {
            !previous.trim().is_empty() && !BLOCK_MARKER.is_match(previous.trim_start())
        }
        _ => false,
    }
}

/// Recognize a code fence opener/closer: up to three spaces of indentation,
/// then three or more backticks or tildes. Returns the fence character, its
/// length and the info string that follows.
fn fence_marker(line: &str) -> Option<(char, usize, &str)> {
    let indent = line.len() - line.trim_start_matches(' ').len();
    if indent > 3 {
        return None;
    }
    let rest = &line[indent..];
    let ch = rest.chars().next().filter(|c| *c == '`' || *c == '~')?;
    let len = rest.len() - rest.trim_start_matches(ch).len();
    if len < 3 {
        return None;
    }
    let info = &rest[len..];
    // Backtick fences cannot carry backticks in their info string.
    if ch == '`' && info.contains('`') {
        return None;
    }
    Some((ch, len, info))
}

/// Drop an optional closing sequence (`## Title ##`) without eating the
/// hash in names like `Learning C#`.
fn strip_closing_hashes(text: &str) -> &str {
    let without = text.trim_end_matches('#');
    if without.len() == text.len() {
        text
    } else if without.is_empty() {
        ""
    } else if without.ends_with([' ', '\t']) {
        without.trim_end()
    } else {
        text
    }
}

/// The human-readable phrase of a heading: inline markup reduced to its
/// text, then leading ordinal and symbol noise dropped. `# **02.** Setup`
/// and `# 🚀 02 - Setup` both give "Setup"; `3D Printing` keeps its digit.
fn heading_phrase(heading: &str) -> String {
    let text = plain_text(heading);
    let noise = TITLE_NOISE.find(&text).map_or(0, |m| m.end());
    text[noise..].trim_end().to_string()
}

/// Text and code-span content of a markdown fragment. Tags, link targets
/// and emphasis markers are dropped.
fn plain_text(markdown: &str) -> String {
    let mut text = String::new();
    for event in Parser::new_ext(markdown, Options::ENABLE_STRIKETHROUGH) {
        if let Event::Text(s) | Event::Code(s) = event {
            text.push_str(&s);
        }
    }
    text
}

fn overview(lines: &[Line<'_>]) -> Option<String> {
    let start = lines
        .iter()
        .position(|line| *line == Line::Heading("Overview"))?;

    let mut in_comment = false;
    for line in &lines[start + 1..] {
        let text = match line {
            Line::Heading(_) => return None,
            Line::Text(text) => text.trim(),
            _ => continue,
        };
        if in_comment || text.starts_with("<!--") {
            in_comment = !text.contains("-->");
            continue;
        }
        let prose = BLOCK_MARKER.replace(text, "");
        if !prose.trim().is_empty() {
            return Some(prose.trim().to_string());
        }
    }
    None
}

fn leading_glyph(text: &str) -> Option<&str> {
    LEADING_GLYPH
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

// ============================================================================
// Front matter
// ============================================================================

/// Fields accepted in a `+++` preamble. Unrecognized keys are ignored so
/// documents can carry extra authoring notes.
#[derive(Debug, Default, Deserialize)]
struct Preamble {
    title: Option<String>,
    overview: Option<String>,
    glyph: Option<String>,
    order: Option<u32>,
}

/// Structured preamble first, then the wrapped extractor for anything it omits.
#[derive(Debug, Clone, Default)]
pub struct FrontMatter<E> {
    fallback: E,
}

impl<E: MetadataExtractor> FrontMatter<E> {
    pub fn new(fallback: E) -> Self {
        Self { fallback }
    }
}

impl<E: MetadataExtractor> MetadataExtractor for FrontMatter<E> {
    fn extract(&self, raw_text: &str, file_name: &str) -> DocumentMetadata {
        let (preamble, body) = split_front_matter(raw_text);

        let fields = match preamble.map(toml::from_str::<Preamble>) {
            Some(Ok(fields)) => fields,
            Some(Err(err)) => {
                tracing::warn!(file = file_name, error = %err, "ignoring malformed front matter");
                Preamble::default()
            }
            None => Preamble::default(),
        };

        let fallback = self.fallback.extract(body, file_name);

        DocumentMetadata {
            title: resolve(&[fields.title.as_deref(), Some(fallback.title.as_str())]).unwrap_or_default(),
            overview: resolve(&[fields.overview.as_deref(), Some(fallback.overview.as_str())])
                .unwrap_or_default(),
            glyph: resolve(&[fields.glyph.as_deref(), Some(fallback.glyph.as_str())]).unwrap_or_default(),
            sequence_number: fields.order.or(fallback.sequence_number),
        }
    }
}

/// Split a leading `+++` TOML block from the body.
///
/// Returns `(None, text)` when there is no block or it is never closed.
pub fn split_front_matter(text: &str) -> (Option<&str>, &str) {
    let Some(rest) = text.strip_prefix("+++") else {
        return (None, text);
    };
    let Some(rest) = rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n')) else {
        return (None, text);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "+++" {
            return (Some(&rest[..offset]), &rest[offset + line.len()..]);
        }
        offset += line.len();
    }
    (None, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heuristic(text: &str, file_name: &str) -> DocumentMetadata {
        Heuristic::default().extract(text, file_name)
    }

    // =========================================================================
    // Title
    // =========================================================================

    #[test]
    fn title_strips_leading_ordinal_and_markers() {
        let meta = heuristic("# 01-introduction to spring\n\nBody.", "01-intro.md");
        assert_eq!(meta.title, "introduction to spring");
    }

    #[test]
    fn title_strips_glyph_and_dotted_ordinal() {
        let meta = heuristic("# 🚀 02. Spring Boot Setup\n", "02-setup.md");
        assert_eq!(meta.title, "Spring Boot Setup");
    }

    #[test]
    fn title_keeps_digits_that_are_part_of_a_word() {
        assert_eq!(heuristic("# 3D Printing Basics", "x.md").title, "3D Printing Basics");
        assert_eq!(heuristic("## Java 17 Records", "x.md").title, "Java 17 Records");
    }

    #[test]
    fn title_keeps_trailing_hash_in_language_names() {
        assert_eq!(heuristic("# Learning C#", "x.md").title, "Learning C#");
        assert_eq!(heuristic("# Closed heading ##", "x.md").title, "Closed heading");
    }

    #[test]
    fn title_skips_headings_that_are_only_noise() {
        let meta = heuristic("# 01 -\n\n## Real Title\n", "x.md");
        assert_eq!(meta.title, "Real Title");
    }

    #[test]
    fn title_ignores_comments_inside_code_fences() {
        let text = "Intro text.\n\n```bash\n# install the CLI\nsdk install springboot\n```\n\n## Afterwards\n";
        assert_eq!(heuristic(text, "x.md").title, "Afterwards");
    }

    #[test]
    fn title_falls_back_to_filename() {
        let meta = heuristic("This directory holds the guide.\n", "README.md");
        assert_eq!(meta.title, "Readme");

        let meta = heuristic("No headings here.", "03-spring-boot-setup.md");
        assert_eq!(meta.title, "Spring Boot Setup");
    }

    #[test]
    fn title_drops_inline_markup() {
        assert_eq!(heuristic("# **Spring** Basics", "x.md").title, "Spring Basics");
        assert_eq!(heuristic("# [Docs](http://x) intro", "x.md").title, "Docs intro");
        assert_eq!(heuristic("# The `@Autowired` annotation", "x.md").title, "The @Autowired annotation");
        assert_eq!(heuristic("# <em>Bean</em> scopes", "x.md").title, "Bean scopes");
        assert_eq!(heuristic("# **02.** _Setup_", "x.md").title, "Setup");
    }

    #[test]
    fn title_keeps_leading_punctuation_that_is_part_of_a_name() {
        assert_eq!(heuristic("# .NET vs Spring", "x.md").title, ".NET vs Spring");
        assert_eq!(heuristic("# @Transactional pitfalls", "x.md").title, "@Transactional pitfalls");
    }

    #[test]
    fn title_from_setext_heading() {
        assert_eq!(heuristic("Spring Data\n===========\n", "x.md").title, "Spring Data");
        assert_eq!(heuristic("Intro text\n\nSecond level\n---\n", "x.md").title, "Second level");
    }

    #[test]
    fn thematic_breaks_are_not_setext_underlines() {
        assert_eq!(heuristic("Intro text\n\n---\n", "05-rules.md").title, "Rules");
        assert_eq!(heuristic("- item\n---\n", "05-rules.md").title, "Rules");
    }

    #[test]
    fn byte_order_mark_does_not_hide_heading_or_glyph() {
        let meta = heuristic("\u{feff}# 🌱 Growing\n", "x.md");
        assert_eq!(meta.title, "Growing");
        assert_eq!(meta.glyph, "🌱");
        assert_eq!(heuristic("\u{feff}🌱\n# A", "x.md").glyph, "🌱");
    }

    #[test]
    fn hashes_without_space_are_not_headings() {
        let meta = heuristic("#hashtag line\n", "05-tags.md");
        assert_eq!(meta.title, "Tags");
    }

    // =========================================================================
    // Overview
    // =========================================================================

    #[test]
    fn overview_is_first_line_after_section() {
        let meta = heuristic("# Spring\n\n## Overview\nSpring Boot is...\n", "x.md");
        assert_eq!(meta.overview, "Spring Boot is...");
    }

    #[test]
    fn overview_skips_blank_lines() {
        let meta = heuristic("## Overview\n\n\n   Lots of space.  \nSecond line.\n", "x.md");
        assert_eq!(meta.overview, "Lots of space.");
    }

    #[test]
    fn overview_heading_match_is_case_sensitive() {
        let meta = heuristic("## overview\nlowercase section\n", "x.md");
        assert_eq!(meta.overview, "");
    }

    #[test]
    fn overview_empty_when_section_has_no_prose() {
        let meta = heuristic("## Overview\n\n## Details\nNot the overview.\n", "x.md");
        assert_eq!(meta.overview, "");
    }

    #[test]
    fn overview_skips_leading_code_in_section() {
        let text = "## Overview\n```java\nclass A {}\n```\nA tiny class.\n";
        assert_eq!(heuristic(text, "x.md").overview, "A tiny class.");
    }

    #[test]
    fn overview_strips_list_and_quote_markers() {
        assert_eq!(heuristic("## Overview\n- bullet summary\n", "x.md").overview, "bullet summary");
        assert_eq!(heuristic("## Overview\n> Quoted summary.\n", "x.md").overview, "Quoted summary.");
        assert_eq!(heuristic("## Overview\n1. First step\n", "x.md").overview, "First step");
    }

    #[test]
    fn overview_skips_html_comments() {
        assert_eq!(heuristic("## Overview\n<!-- c -->\nReal line.\n", "x.md").overview, "Real line.");
        let text = "## Overview\n<!--\nauthor notes\n-->\nAfter the notes.\n";
        assert_eq!(heuristic(text, "x.md").overview, "After the notes.");
    }

    #[test]
    fn overview_missing_section_is_empty() {
        assert_eq!(heuristic("# Title\n\nBody.\n", "x.md").overview, "");
    }

    // =========================================================================
    // Glyph
    // =========================================================================

    #[test]
    fn glyph_from_start_of_text() {
        assert_eq!(heuristic("🌱\n\n# Spring", "x.md").glyph, "🌱");
        assert_eq!(heuristic("  🌱 Spring", "x.md").glyph, "🌱");
    }

    #[test]
    fn glyph_behind_heading_marker() {
        assert_eq!(heuristic("# 🚀 Setup", "x.md").glyph, "🚀");
    }

    #[test]
    fn glyph_keeps_whole_emoji_sequence() {
        assert_eq!(heuristic("❤️ Favorites", "x.md").glyph, "❤️");
        assert_eq!(heuristic("👩‍💻 Coding", "x.md").glyph, "👩‍💻");
        assert_eq!(heuristic("👍🏽 Tips", "x.md").glyph, "👍🏽");
    }

    #[test]
    fn glyph_defaults_when_text_starts_with_words() {
        assert_eq!(heuristic("# Setup 🚀", "x.md").glyph, DEFAULT_GLYPH);
        assert_eq!(heuristic("Plain text", "x.md").glyph, DEFAULT_GLYPH);
        assert_eq!(Heuristic::new("📘").extract("", "x.md").glyph, "📘");
    }

    // =========================================================================
    // Sequence number
    // =========================================================================

    #[test]
    fn sequence_from_filename_digits() {
        assert_eq!(heuristic("", "03-spring-boot-setup.md").sequence_number, Some(3));
        assert_eq!(heuristic("", "00-preface.md").sequence_number, Some(0));
        assert_eq!(heuristic("", "README.md").sequence_number, None);
    }

    #[test]
    fn extraction_is_deterministic() {
        let text = "🌱\n# 01-intro\n\n## Overview\nFirst.\n";
        let a = extract_metadata(text, "01-intro.md");
        let b = extract_metadata(text, "01-intro.md");
        assert_eq!(a, b);
    }

    // =========================================================================
    // Front matter
    // =========================================================================

    #[test]
    fn split_front_matter_separates_body() {
        let (fm, body) = split_front_matter("+++\ntitle = \"A\"\n+++\n# Body\n");
        assert_eq!(fm, Some("title = \"A\"\n"));
        assert_eq!(body, "# Body\n");
    }

    #[test]
    fn split_front_matter_requires_opening_line() {
        let text = "# Title\n+++\nnot front matter\n+++\n";
        assert_eq!(split_front_matter(text), (None, text));
    }

    #[test]
    fn unterminated_front_matter_is_body() {
        let text = "+++\ntitle = \"never closed\"\n# Heading\n";
        assert_eq!(split_front_matter(text), (None, text));
    }

    #[test]
    fn front_matter_overrides_each_field() {
        let text = "+++\ntitle = \"Dependency Injection\"\noverview = \"Wiring beans.\"\nglyph = \"🧩\"\norder = 7\n+++\n# Beans\n";
        let meta = extract_metadata(text, "03-di.md");
        assert_eq!(meta.title, "Dependency Injection");
        assert_eq!(meta.overview, "Wiring beans.");
        assert_eq!(meta.glyph, "🧩");
        assert_eq!(meta.sequence_number, Some(7));
    }

    #[test]
    fn front_matter_missing_keys_fall_back_to_heuristics() {
        let text = "+++\nglyph = \"🧩\"\nauthor = \"someone\"\n+++\n# 03 - Beans\n\n## Overview\nThe container.\n";
        let meta = extract_metadata(text, "03-di.md");
        assert_eq!(meta.title, "Beans");
        assert_eq!(meta.overview, "The container.");
        assert_eq!(meta.glyph, "🧩");
        assert_eq!(meta.sequence_number, Some(3));
    }

    #[test]
    fn malformed_front_matter_is_ignored() {
        let text = "+++\ntitle = = broken\n+++\n# Real\n";
        let meta = extract_metadata(text, "x.md");
        assert_eq!(meta.title, "Real");
    }

    #[test]
    fn heuristic_alone_does_not_read_front_matter() {
        let text = "+++\ntitle = \"Ignored\"\n+++\n# Heading\n";
        assert_eq!(heuristic(text, "x.md").title, "Heading");
    }

    #[test]
    fn extractor_for_respects_config() {
        let text = "+++\ntitle = \"From Preamble\"\n+++\n# From Heading\n";

        let with = extractor_for(&MetadataConfig::default());
        assert_eq!(with.extract(text, "x.md").title, "From Preamble");

        let without = extractor_for(&MetadataConfig {
            front_matter: false,
            default_glyph: "📘".to_string(),
        });
        let meta = without.extract(text, "x.md");
        assert_eq!(meta.title, "From Heading");
        assert_eq!(meta.glyph, "📘");
    }

    #[test]
    fn resolve_takes_first_non_empty() {
        assert_eq!(resolve(&[None, Some("  "), Some(" b "), Some("c")]), Some("b".to_string()));
        assert_eq!(resolve(&[None, Some("")]), None);
    }
}
