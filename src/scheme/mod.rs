//! URL and save-as templates for generated content.
//!
//! Each content kind has a pair of templates: the public URL and the
//! output path the file is written to. Both are parsed here so that a
//! broken template is reported while loading the config instead of
//! halfway through a site build.
//!
//! | Module     | Purpose                                  |
//! |------------|------------------------------------------|
//! | `template` | Brace-placeholder template parser        |

mod template;

pub use template::{Placeholder, Segment, TemplateError, UrlTemplate};

use std::fmt;

/// Kind of content a URL template is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    /// Standalone page (about, contact, ...).
    Page,
    /// Dated blog post.
    Article,
}

impl ContentKind {
    /// Placeholders available to pages.
    const PAGE_PLACEHOLDERS: &'static [&'static str] =
        &["slug", "lang", "title", "author", "date", "modified"];

    /// Placeholders available to articles.
    const ARTICLE_PLACEHOLDERS: &'static [&'static str] = &[
        "slug", "lang", "title", "author", "date", "modified", "category",
    ];

    /// Placeholder names this kind of content can fill in.
    pub const fn placeholders(self) -> &'static [&'static str] {
        match self {
            Self::Page => Self::PAGE_PLACEHOLDERS,
            Self::Article => Self::ARTICLE_PLACEHOLDERS,
        }
    }

    #[inline]
    pub fn accepts(self, name: &str) -> bool {
        self.placeholders().contains(&name)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Page => "page",
            Self::Article => "article",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed url / save-as template pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlScheme {
    pub kind: ContentKind,
    pub url: UrlTemplate,
    pub save_as: UrlTemplate,
}

impl UrlScheme {
    /// Parse both templates for `kind`.
    pub fn parse(kind: ContentKind, url: &str, save_as: &str) -> Result<Self, TemplateError> {
        Ok(Self {
            kind,
            url: UrlTemplate::parse(url, kind)?,
            save_as: UrlTemplate::parse(save_as, kind)?,
        })
    }

    /// True when url and save-as use exactly the same placeholders.
    ///
    /// A placeholder present on one side only means two items can share
    /// a URL while being written to different files, or the reverse.
    pub fn is_consistent(&self) -> bool {
        self.url.placeholders() == self.save_as.placeholders()
    }

    /// Placeholders used by the url but not by save-as, sorted.
    pub fn only_in_url(&self) -> Vec<String> {
        difference(&self.url, &self.save_as)
    }

    /// Placeholders used by save-as but not by the url, sorted.
    pub fn only_in_save_as(&self) -> Vec<String> {
        difference(&self.save_as, &self.url)
    }
}

fn difference(a: &UrlTemplate, b: &UrlTemplate) -> Vec<String> {
    let other = b.placeholders();
    let mut out: Vec<String> = a
        .placeholders()
        .into_iter()
        .filter(|p| !other.contains(p))
        .map(ToString::to_string)
        .collect();
    out.sort();
    out
}
