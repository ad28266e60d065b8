//! Brace-placeholder template parser.
//!
//! Syntax follows the site generator's URL settings:
//!
//! ```text
//! posts/{date:%Y}/{date:%b}/{slug}/index.html
//! ^^^^^^ literal   ^^^^ name  ^^^ strftime format
//! ```
//!
//! `{{` and `}}` stand for literal braces. Only `date` and `modified`
//! accept a format, and the format may only use the strftime directives
//! in [`DATE_DIRECTIVES`] (optionally with the `-` no-padding flag).

use super::ContentKind;
use rustc_hash::FxHashSet;
use std::fmt;
use thiserror::Error;

/// strftime directives accepted inside a date format.
pub const DATE_DIRECTIVES: &str = "aAbBdHIjmMpSUwWyYzZ%";

/// Placeholders that carry a timestamp and take a format.
const DATE_PLACEHOLDERS: &[&str] = &["date", "modified"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("template is empty")]
    Empty,

    #[error("unclosed `{{` at byte {0}")]
    Unclosed(usize),

    #[error("unmatched `}}` at byte {0}, write `}}}}` for a literal brace")]
    StrayClose(usize),

    #[error("empty placeholder `{{}}` at byte {0}")]
    EmptyName(usize),

    #[error("unknown placeholder `{name}` for {kind} urls")]
    UnknownPlaceholder { name: String, kind: ContentKind },

    #[error("placeholder `{0}` does not take a format")]
    UnexpectedFormat(String),

    #[error("empty format after `{0}:`, drop the `:` to use the default")]
    EmptyFormat(String),

    #[error("unknown date directive `%{directive}` in `{name}`")]
    UnknownDirective { name: String, directive: char },

    #[error("dangling `%` at the end of the `{0}` format")]
    DanglingPercent(String),
}

/// A `{name}` or `{name:format}` placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Placeholder {
    pub name: String,
    pub format: Option<String>,
}

impl Placeholder {
    fn parse(body: &str, pos: usize, kind: ContentKind) -> Result<Self, TemplateError> {
        let (name, format) = match body.split_once(':') {
            Some((name, format)) => (name, Some(format)),
            None => (body, None),
        };

        if name.is_empty() {
            return Err(TemplateError::EmptyName(pos));
        }
        if !kind.accepts(name) {
            return Err(TemplateError::UnknownPlaceholder {
                name: name.to_string(),
                kind,
            });
        }

        let placeholder = Self {
            name: name.to_string(),
            format: format.map(str::to_string),
        };
        if let Some(format) = format {
            if !placeholder.is_date() {
                return Err(TemplateError::UnexpectedFormat(placeholder.name));
            }
            if format.is_empty() {
                return Err(TemplateError::EmptyFormat(placeholder.name));
            }
            check_date_format(name, format)?;
        }

        Ok(placeholder)
    }

    /// True for `date` and `modified`.
    pub fn is_date(&self) -> bool {
        DATE_PLACEHOLDERS.contains(&self.name.as_str())
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.format {
            Some(format) => write!(f, "{{{}:{}}}", self.name, format),
            None => write!(f, "{{{}}}", self.name),
        }
    }
}

fn check_date_format(name: &str, format: &str) -> Result<(), TemplateError> {
    let mut chars = format.chars();
    while let Some(c) = chars.next() {
        if c != '%' {
            continue;
        }
        let directive = match chars.next() {
            Some('-') => chars.next(),
            other => other,
        };
        match directive {
            Some(d) if DATE_DIRECTIVES.contains(d) => {}
            Some(d) => {
                return Err(TemplateError::UnknownDirective {
                    name: name.to_string(),
                    directive: d,
                });
            }
            None => return Err(TemplateError::DanglingPercent(name.to_string())),
        }
    }
    Ok(())
}

/// One piece of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Placeholder(Placeholder),
}

/// A parsed URL or save-as template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTemplate {
    source: String,
    segments: Vec<Segment>,
}

impl UrlTemplate {
    /// Parse `source`, accepting only the placeholders `kind` can fill.
    pub fn parse(source: &str, kind: ContentKind) -> Result<Self, TemplateError> {
        if source.is_empty() {
            return Err(TemplateError::Empty);
        }

        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = source.char_indices().peekable();

        while let Some((pos, c)) = chars.next() {
            match c {
                '{' if matches!(chars.peek(), Some((_, '{'))) => {
                    chars.next();
                    literal.push('{');
                }
                '}' if matches!(chars.peek(), Some((_, '}'))) => {
                    chars.next();
                    literal.push('}');
                }
                '}' => return Err(TemplateError::StrayClose(pos)),
                '{' => {
                    let mut body = String::new();
                    let mut closed = false;
                    for (_, c) in chars.by_ref() {
                        match c {
                            '}' => {
                                closed = true;
                                break;
                            }
                            '{' => return Err(TemplateError::Unclosed(pos)),
                            c => body.push(c),
                        }
                    }
                    if !closed {
                        return Err(TemplateError::Unclosed(pos));
                    }
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Placeholder(Placeholder::parse(&body, pos, kind)?));
                }
                c => literal.push(c),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Distinct placeholders used, `{date:%Y}` and `{date:%m}` counting separately.
    pub fn placeholders(&self) -> FxHashSet<&Placeholder> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Placeholder(p) => Some(p),
                Segment::Literal(_) => None,
            })
            .collect()
    }

    /// True if any placeholder is named `name`, whatever its format.
    pub fn uses(&self, name: &str) -> bool {
        self.placeholders().iter().any(|p| p.name == name)
    }

    /// Output paths are relative to the output directory.
    pub fn is_absolute(&self) -> bool {
        self.source.starts_with('/')
    }

    /// A trailing slash names a directory, not a file.
    pub fn is_directory(&self) -> bool {
        self.source.ends_with('/')
    }
}

impl fmt::Display for UrlTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
