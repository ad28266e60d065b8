//! `[markdown]` section configuration.
//!
//! Settings handed to the Markdown renderer and its code highlighter.
//!
//! # Example
//!
//! ```toml
//! [markdown]
//! pygments_style = "monokai"
//! extensions = ["toc", "fenced_code", "codehilite(css_class=highlight)"]
//! ```

use crate::config::ConfigDiagnostics;
use macros::Config;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Markdown rendering and syntax highlighting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "markdown")]
pub struct MarkdownConfig {
    /// Highlighting style for fenced code blocks.
    pub pygments_style: String,

    /// Renderer extensions in load order. Options go in parentheses:
    /// "codehilite(css_class=highlight)".
    pub extensions: Vec<MarkdownExtension>,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            pygments_style: "monokai".into(),
            extensions: vec![
                MarkdownExtension::new("toc"),
                MarkdownExtension::new("fenced_code"),
                MarkdownExtension::new("codehilite").with_option("css_class", "highlight"),
            ],
        }
    }
}

impl MarkdownConfig {
    /// Look up an extension by name.
    pub fn extension(&self, name: &str) -> Option<&MarkdownExtension> {
        self.extensions.iter().find(|ext| ext.name() == name)
    }

    /// CSS class the code highlighter wraps blocks in.
    pub fn css_class(&self) -> Option<&str> {
        self.extension("codehilite")?.option("css_class")
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.pygments_style.trim().is_empty() {
            diag.error(Self::FIELDS.pygments_style, "highlight style is empty");
        }

        let mut seen = FxHashSet::default();
        for ext in &self.extensions {
            if !seen.insert(ext.name()) {
                diag.warn(
                    Self::FIELDS.extensions,
                    format!("extension '{}' is listed more than once", ext.name()),
                );
            }
        }
    }
}

// ============================================================================
// MarkdownExtension
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtensionError {
    #[error("extension name is empty")]
    EmptyName,

    #[error("invalid character in extension name `{0}`")]
    InvalidName(String),

    #[error("unbalanced parentheses in `{0}`")]
    Unbalanced(String),

    #[error("option `{0}` must be written as key=value")]
    MissingValue(String),

    #[error("option with empty key in `{0}`")]
    EmptyKey(String),
}

/// One renderer extension, written `name` or `name(key=value,...)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MarkdownExtension {
    name: String,
    options: Vec<(String, String)>,
}

impl MarkdownExtension {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Vec::new(),
        }
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.push((key.into(), value.into()));
        self
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Options in the order they were written.
    #[inline]
    pub fn options(&self) -> &[(String, String)] {
        &self.options
    }

    pub fn option(&self, key: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl FromStr for MarkdownExtension {
    type Err = ExtensionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        let (name, inner) = match s.split_once('(') {
            Some((name, rest)) => {
                let inner = rest
                    .strip_suffix(')')
                    .ok_or_else(|| ExtensionError::Unbalanced(s.to_string()))?;
                (name.trim(), Some(inner))
            }
            None => (s, None),
        };

        if name.contains(')') || inner.is_some_and(|i| i.contains(['(', ')'])) {
            return Err(ExtensionError::Unbalanced(s.to_string()));
        }
        if name.is_empty() {
            return Err(ExtensionError::EmptyName);
        }
        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        {
            return Err(ExtensionError::InvalidName(name.to_string()));
        }

        let mut ext = Self::new(name);
        for option in inner.into_iter().flat_map(|i| i.split(',')) {
            let option = option.trim();
            if option.is_empty() {
                continue;
            }
            let (key, value) = option
                .split_once('=')
                .ok_or_else(|| ExtensionError::MissingValue(option.to_string()))?;
            let key = key.trim();
            if key.is_empty() {
                return Err(ExtensionError::EmptyKey(s.to_string()));
            }
            ext = ext.with_option(key, value.trim());
        }
        Ok(ext)
    }
}

impl fmt::Display for MarkdownExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if !self.options.is_empty() {
            f.write_str("(")?;
            for (i, (key, value)) in self.options.iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{key}={value}")?;
            }
            f.write_str(")")?;
        }
        Ok(())
    }
}

impl TryFrom<String> for MarkdownExtension {
    type Error = ExtensionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MarkdownExtension> for String {
    fn from(ext: MarkdownExtension) -> Self {
        ext.to_string()
    }
}
