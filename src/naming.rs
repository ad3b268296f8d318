//! Centralized filename parsing for the `NN-name` convention.
//!
//! Every document filename follows the same pattern: an optional run of
//! leading digits, a separator, and the words that make up the slug.
//! This module owns that parse so the scanner (which derives slugs) and the
//! metadata extractor (which derives sequence numbers and fallback titles)
//! always agree.
//!
//! ## Separators
//!
//! The digit prefix ends at the first `-`, `_`, `.` or space:
//! - `03-spring-boot-setup` → number=3, name="spring-boot-setup"
//! - `10_testing` → number=10, name="testing"
//! - `03spring` → no number (digits are not followed by a separator)
//!
//! ## Slugs and titles
//!
//! The name part is slugified (transliterated, lowercased, non-word runs
//! collapsed into a single dash). The fallback title is the name with
//! separators turned into spaces and every word capitalized.

/// Result of parsing a filename stem like `03-spring-boot-setup`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedName {
    /// Number prefix if present (e.g., `3` from `03-spring-boot-setup`)
    pub number: Option<u32>,
    /// Raw name part after the prefix and separator. Empty if number-only.
    /// For unnumbered stems, this is the full input.
    pub name: String,
    /// URL-safe identifier derived from the name (or the stem when the name is empty).
    pub slug: String,
    /// Title-cased display form of the name.
    pub display_title: String,
}

const SEPARATORS: &[char] = &['-', '_', '.', ' '];

/// Parse a filename stem following the `NN-name` convention.
///
/// Handles these patterns:
/// - `"03-spring-boot-setup"` → number=Some(3), slug="spring-boot-setup", display_title="Spring Boot Setup"
/// - `"README"` → number=None, slug="readme", display_title="Readme"
/// - `"07"` → number=Some(7), name="", slug="07", display_title="07"
/// - `"00-preface"` → number=Some(0), slug="preface"
pub fn parse_entry_name(stem: &str) -> ParsedName {
    let digits = stem.bytes().take_while(u8::is_ascii_digit).count();
    let rest = &stem[digits..];

    let numbered = digits > 0 && (rest.is_empty() || rest.starts_with(SEPARATORS));
    let number = if numbered {
        stem[..digits].parse::<u32>().ok()
    } else {
        None
    };

    let name = match number {
        Some(_) => rest.trim_start_matches(SEPARATORS),
        None => stem,
    };

    let slug = match slugify(name) {
        s if s.is_empty() => slugify(stem),
        s => s,
    };

    let display_title = if name.is_empty() {
        stem.to_string()
    } else {
        title_case(name)
    };

    ParsedName {
        number,
        name: name.to_string(),
        slug,
        display_title,
    }
}

/// Turn arbitrary text into a URL-safe identifier.
///
/// Non-ASCII characters are transliterated; every run of characters outside
/// `[a-z0-9_]` becomes one `-`, with no leading or trailing dash.
pub fn slugify(text: &str) -> String {
    let mut output = String::with_capacity(text.len());

    let mut need_dash = false;
    for ch in text.chars() {
        for b in deunicode::deunicode_char(ch).unwrap_or("-").bytes() {
            match b {
                b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_' => {
                    if need_dash {
                        output.push('-');
                        need_dash = false;
                    }
                    output.push(b.to_ascii_lowercase() as char);
                }
                _ => need_dash = !output.is_empty(),
            }
        }
    }

    output
}

/// Split on separators and capitalize the first letter of every word.
fn title_case(name: &str) -> String {
    name.split(SEPARATORS)
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
