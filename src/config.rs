//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults are
//! serialized to a TOML table and the user's file is merged on top of it, so
//! a config file only needs the keys it wants to change.
//!
//! ## Config File Location
//!
//! Place `config.toml` in the site root, next to the content directories:
//!
//! ```text
//! site/
//! ├── config.toml              # Optional
//! └── content/
//!     ├── 01-introduction.md
//!     └── 02-setup.md
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! content_roots = ["content"]     # Directories scanned for documents
//! extensions = ["md", "markdown"] # Recognized document extensions
//!
//! [site]
//! title = "Study Guide"           # Listing page title
//!
//! [metadata]
//! default_glyph = "📄"            # Used when a document has no leading pictograph
//! front_matter = true             # Honor `+++` TOML preambles
//!
//! [render]
//! highlight = true                # Syntax-highlight fenced code
//! theme = "InspiredGitHub"        # Highlight stylesheet theme
//!
//! [render.languages]              # Fence tag aliases → syntax token
//! shell = "bash"
//!
//! [processing]
//! max_processes = 4               # Max worker threads (omit for auto = CPU cores)
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Directories (relative to the site root) scanned recursively for documents.
    pub content_roots: Vec<String>,
    /// File extensions, without the dot, that count as documents.
    pub extensions: Vec<String>,
    /// Listing page settings.
    pub site: SiteSection,
    /// Metadata extraction settings.
    pub metadata: MetadataConfig,
    /// Markdown rendering settings.
    pub render: RenderConfig,
    /// Parallel processing settings.
    pub processing: ProcessingConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_roots: vec!["content".to_string()],
            extensions: vec!["md".to_string(), "markdown".to_string()],
            site: SiteSection::default(),
            metadata: MetadataConfig::default(),
            render: RenderConfig::default(),
            processing: ProcessingConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.content_roots.is_empty() {
            return Err(ConfigError::Validation(
                "content_roots must not be empty".into(),
            ));
        }
        if self.extensions.is_empty() {
            return Err(ConfigError::Validation(
                "extensions must not be empty".into(),
            ));
        }
        if let Some(ext) = self
            .extensions
            .iter()
            .find(|e| e.is_empty() || e.starts_with('.'))
        {
            return Err(ConfigError::Validation(format!(
                "extensions must be non-empty and written without a leading dot, got {ext:?}"
            )));
        }
        if self.metadata.default_glyph.trim().is_empty() {
            return Err(ConfigError::Validation(
                "metadata.default_glyph must not be empty".into(),
            ));
        }
        if let Some((alias, _)) = self
            .render
            .languages
            .iter()
            .find(|(_, token)| token.trim().is_empty())
        {
            return Err(ConfigError::Validation(format!(
                "render.languages.{alias} must name a syntax"
            )));
        }
        Ok(())
    }

    /// Whether `path` carries one of the configured document extensions.
    pub fn is_document(&self, path: &Path) -> bool {
        path.extension()
            .map(|ext| {
                self.extensions
                    .iter()
                    .any(|known| ext.eq_ignore_ascii_case(known.as_str()))
            })
            .unwrap_or(false)
    }
}

/// Listing page settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteSection {
    /// Title of the listing page and suffix of every document page title.
    pub title: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: "Study Guide".to_string(),
        }
    }
}

/// Metadata extraction settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MetadataConfig {
    /// Glyph shown for documents whose text does not start with a pictograph.
    pub default_glyph: String,
    /// When true, a leading `+++` TOML block overrides the heuristics.
    pub front_matter: bool,
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            default_glyph: crate::metadata::DEFAULT_GLYPH.to_string(),
            front_matter: true,
        }
    }
}

/// Markdown rendering settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Syntax-highlight fenced code blocks with a recognized language tag.
    pub highlight: bool,
    /// Theme used for the generated highlight stylesheet.
    pub theme: String,
    /// Fence tag aliases, e.g. `shell = "bash"`. Keys are matched case-insensitively.
    pub languages: BTreeMap<String, String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        let languages = [
            ("shell", "bash"),
            ("console", "bash"),
            ("terminal", "bash"),
            ("jsonc", "json"),
        ]
        .into_iter()
        .map(|(alias, token)| (alias.to_string(), token.to_string()))
        .collect();

        Self {
            highlight: true,
            theme: "InspiredGitHub".to_string(),
            languages,
        }
    }
}

/// Parallel processing settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Maximum number of worker threads for file reads and page rendering.
    /// When absent or null, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    pub max_processes: Option<usize>,
}

/// Worker threads for the rayon pool: `max_processes` clamped to `1..=cores`,
/// or every core when unset.
pub fn effective_threads(config: &ProcessingConfig) -> usize {
    let cores = std::thread::available_parallelism().map_or(1, |n| n.get());
    config.max_processes.map_or(cores, |n| n.clamp(1, cores))
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Merge `overlay` into `base`. Tables merge key by key, anything else in
/// `overlay` (arrays included) replaces the base value.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut merged), toml::Value::Table(overlay)) => {
            for (key, value) in overlay {
                let value = match merged.remove(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => value,
                };
                merged.insert(key, value);
            }
            toml::Value::Table(merged)
        }
        (_, overlay) => overlay,
    }
}

/// Load the site's `config.toml` over the stock defaults.
///
/// A missing file means all defaults. Unknown keys and out-of-range values
/// are errors.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let config_path = root.join("config.toml");
    if !config_path.exists() {
        let config = SiteConfig::default();
        config.validate()?;
        return Ok(config);
    }

    let user: toml::Value = toml::from_str(&fs::read_to_string(&config_path)?)?;
    let defaults = toml::Value::try_from(SiteConfig::default())
        .map_err(|e| ConfigError::Validation(format!("stock defaults: {e}")))?;
    let config: SiteConfig = merge_toml(defaults, user).try_into()?;
    config.validate()?;
    tracing::debug!(path = %config_path.display(), "loaded site config");
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r###"# Guidebook Configuration
# =======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# Directories, relative to this file, scanned recursively for documents.
content_roots = ["content"]

# File extensions (without the dot) treated as documents. Everything else
# under the content roots (images, code samples) is ignored.
extensions = ["md", "markdown"]

# ---------------------------------------------------------------------------
# Listing page
# ---------------------------------------------------------------------------
[site]
title = "Study Guide"

# ---------------------------------------------------------------------------
# Metadata extraction
# ---------------------------------------------------------------------------
[metadata]
# Glyph shown in listings when a document does not start with a pictograph.
default_glyph = "📄"

# Read an optional TOML preamble at the top of each document:
#
#   +++
#   title = "Dependency Injection"
#   overview = "How the container wires beans together."
#   glyph = "🧩"
#   order = 3
#   +++
#
# Any key left out falls back to the heuristics (first heading, the line
# after "## Overview", leading pictograph, filename digits).
front_matter = true

# ---------------------------------------------------------------------------
# Rendering
# ---------------------------------------------------------------------------
[render]
# Syntax-highlight fenced code blocks. Unknown languages render plain.
highlight = true

# Theme for the generated syntax.css. Bundled themes:
# "InspiredGitHub", "Solarized (light)", "Solarized (dark)",
# "base16-ocean.dark", "base16-ocean.light", "base16-eighties.dark",
# "base16-mocha.dark"
theme = "InspiredGitHub"

# Fence tag aliases mapped to a syntax name or file extension.
[render.languages]
console = "bash"
jsonc = "json"
shell = "bash"
terminal = "bash"

# ---------------------------------------------------------------------------
# Processing
# ---------------------------------------------------------------------------
[processing]
# Maximum worker threads for reading files and rendering pages.
# Omit or comment out to auto-detect (= number of CPU cores).
# max_processes = 4
"###
}
