//! Markdown to embeddable HTML.
//!
//! Rendering is a pulldown-cmark event stream passed through two remapping
//! iterators before it reaches the HTML writer:
//!
//! ```text
//! Parser ─→ Highlighter ─→ HeadingIds ─→ push_html
//! ```
//!
//! - `Highlighter` collects each fenced code block and replaces it with
//!   syntect's class-based spans. Blocks without a known language pass
//!   through untouched, so they become a plain `<pre><code>`.
//! - `HeadingIds` gives every heading an `id` built with the same slugify
//!   used for document slugs, suffixed `-1`, `-2`... on repeats.
//!
//! Colors are not inlined. [`highlight_css`] produces the stylesheet for the
//! span classes from one of syntect's bundled themes.
//!
//! Nothing here fails on bad input: malformed markdown degrades the way
//! CommonMark says it should, and a highlighting error falls back to the
//! unhighlighted block.

use crate::config::RenderConfig;
use crate::metadata::split_front_matter;
use crate::naming::slugify;
use maud::{PreEscaped, html};
use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd, html as md_html};
use std::collections::{BTreeMap, HashSet, VecDeque};
use std::fmt;
use std::sync::LazyLock;
use syntect::highlighting::ThemeSet;
use syntect::html::{ClassStyle, ClassedHTMLGenerator, css_for_theme_with_class_style};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;
use thiserror::Error;

static SYNTAXES: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEMES: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Unknown highlight theme '{name}' (available: {available})")]
    UnknownTheme { name: String, available: String },
    #[error("Cannot build stylesheet for theme '{name}': {message}")]
    Stylesheet { name: String, message: String },
}

/// HTML produced from one document.
///
/// Embeds into maud templates as-is: `html! { article { (rendered) } }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    html: String,
}

impl Rendered {
    pub fn as_str(&self) -> &str {
        &self.html
    }

    pub fn into_string(self) -> String {
        self.html
    }
}

impl maud::Render for Rendered {
    fn render_to(&self, buffer: &mut String) {
        buffer.push_str(&self.html);
    }
}

impl fmt::Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.html)
    }
}

#[derive(Debug, Clone)]
pub struct Renderer {
    highlight: bool,
    languages: BTreeMap<String, String>,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(&RenderConfig::default())
    }
}

/// Render with the default configuration.
pub fn render(raw_text: &str) -> Rendered {
    Renderer::default().render(raw_text)
}

impl Renderer {
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            highlight: config.highlight,
            languages: config
                .languages
                .iter()
                .map(|(alias, token)| (alias.to_ascii_lowercase(), token.clone()))
                .collect(),
        }
    }

    /// Render a document's raw text. A leading `+++` front matter block is
    /// not part of the output.
    pub fn render(&self, raw_text: &str) -> Rendered {
        let (_, body) = split_front_matter(raw_text);

        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS;
        let parser = Parser::new_ext(body, options);
        let events = HeadingIds::new(Highlighter::new(parser, self));

        let mut html = String::with_capacity(body.len() * 2);
        md_html::push_html(&mut html, events);
        Rendered { html }
    }

    /// The syntax to highlight a code block with, and the language token it
    /// resolved to. `None` means render the block plain.
    fn syntax_for(&self, kind: &CodeBlockKind<'_>) -> Option<(String, &'static SyntaxReference)> {
        if !self.highlight {
            return None;
        }
        let CodeBlockKind::Fenced(info) = kind else {
            return None;
        };
        let token = fence_language(info)?;
        let token = self
            .languages
            .get(&token.to_ascii_lowercase())
            .map(String::as_str)
            .unwrap_or(token);

        let syntaxes: &'static SyntaxSet = &SYNTAXES;
        let syntax = syntaxes.find_syntax_by_token(token)?;
        if syntax.name == syntaxes.find_syntax_plain_text().name {
            return None;
        }
        Some((token.to_string(), syntax))
    }
}

/// The language token of a fence info string: everything before the first
/// comma or whitespace (` ```java,ignore ` → `java`).
fn fence_language(info: &str) -> Option<&str> {
    info.split(|c: char| c == ',' || c.is_whitespace())
        .next()
        .filter(|token| !token.is_empty())
}

fn highlight(syntax: &SyntaxReference, lang: &str, code: &str) -> Result<String, syntect::Error> {
    let mut generator =
        ClassedHTMLGenerator::new_with_class_style(syntax, &SYNTAXES, ClassStyle::Spaced);
    for line in LinesWithEndings::from(code) {
        generator.parse_html_for_line_which_includes_newline(line)?;
    }
    let body = generator.finalize();

    Ok(html! {
        pre class="highlight" data-lang=(lang) {
            code class=(format!("language-{lang}")) { (PreEscaped(body)) }
        }
    }
    .into_string())
}

/// Stylesheet for the highlight span classes, from a bundled syntect theme.
pub fn highlight_css(theme: &str) -> Result<String, RenderError> {
    let Some(found) = THEMES.themes.get(theme) else {
        let available: Vec<&str> = THEMES.themes.keys().map(String::as_str).collect();
        return Err(RenderError::UnknownTheme {
            name: theme.to_string(),
            available: available.join(", "),
        });
    };

    css_for_theme_with_class_style(found, ClassStyle::Spaced).map_err(|e| RenderError::Stylesheet {
        name: theme.to_string(),
        message: e.to_string(),
    })
}

// ============================================================================
// Event remapping
// ============================================================================

struct Highlighter<'a, 'r, I> {
    inner: I,
    renderer: &'r Renderer,
    pending: VecDeque<Event<'a>>,
}

impl<'a, 'r, I: Iterator<Item = Event<'a>>> Highlighter<'a, 'r, I> {
    fn new(inner: I, renderer: &'r Renderer) -> Self {
        Self {
            inner,
            renderer,
            pending: VecDeque::new(),
        }
    }
}

impl<'a, I: Iterator<Item = Event<'a>>> Iterator for Highlighter<'a, '_, I> {
    type Item = Event<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(event) = self.pending.pop_front() {
            return Some(event);
        }

        let event = self.inner.next()?;
        let Event::Start(Tag::CodeBlock(ref kind)) = event else {
            return Some(event);
        };
        let Some((lang, syntax)) = self.renderer.syntax_for(kind) else {
            return Some(event);
        };

        // An unterminated fence still gets its End event at end of input.
        let mut buffered = vec![event];
        let mut code = String::new();
        for event in self.inner.by_ref() {
            let end = matches!(event, Event::End(TagEnd::CodeBlock));
            if let Event::Text(ref text) = event {
                code.push_str(text);
            }
            buffered.push(event);
            if end {
                break;
            }
        }

        match highlight(syntax, &lang, &code) {
            Ok(html) => Some(Event::Html(html.into())),
            Err(err) => {
                tracing::debug!(lang = %lang, error = %err, "highlighting failed, rendering plain");
                self.pending.extend(buffered);
                self.pending.pop_front()
            }
        }
    }
}

struct HeadingIds<'a, I> {
    inner: I,
    pending: VecDeque<Event<'a>>,
    used: HashSet<String>,
}

impl<'a, I: Iterator<Item = Event<'a>>> HeadingIds<'a, I> {
    fn new(inner: I) -> Self {
        Self {
            inner,
            pending: VecDeque::with_capacity(4),
            used: HashSet::new(),
        }
    }

    fn unique_id(&mut self, text: &str) -> String {
        let base = match slugify(text) {
            s if s.is_empty() => "section".to_string(),
            s => s,
        };
        let mut id = base.clone();
        let mut n = 1;
        while self.used.contains(&id) {
            id = format!("{base}-{n}");
            n += 1;
        }
        self.used.insert(id.clone());
        id
    }
}

impl<'a, I: Iterator<Item = Event<'a>>> Iterator for HeadingIds<'a, I> {
    type Item = Event<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(event) = self.pending.pop_front() {
            return Some(event);
        }

        match self.inner.next()? {
            Event::Start(Tag::Heading {
                level,
                id: None,
                classes,
                attrs,
            }) => {
                let mut text = String::new();
                for event in self.inner.by_ref() {
                    if let Event::Text(ref s) | Event::Code(ref s) = event {
                        text.push_str(s);
                    }
                    let end = matches!(event, Event::End(TagEnd::Heading(_)));
                    self.pending.push_back(event);
                    if end {
                        break;
                    }
                }

                let id = self.unique_id(&text);
                Some(Event::Start(Tag::Heading {
                    level,
                    id: Some(id.into()),
                    classes,
                    attrs,
                }))
            }
            event => Some(event),
        }
    }
}
