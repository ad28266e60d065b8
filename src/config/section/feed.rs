//! `[feed]` section configuration.
//!
//! Each feed is an output path. A key that is absent disables that feed,
//! which is the default for all of them.
//!
//! # Example
//!
//! ```toml
//! [feed]
//! feed_all_atom = "feeds/all.atom.xml"
//! category_feed_atom = "feeds/{slug}.atom.xml"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use macros::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Feed output paths. Leave a key out to skip that feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "feed")]
pub struct FeedConfig {
    #[config(inline_doc = "Atom feed of every article.")]
    pub feed_all_atom: Option<PathBuf>,

    #[config(inline_doc = "One Atom feed per category, needs {slug}.")]
    pub category_feed_atom: Option<PathBuf>,

    #[config(inline_doc = "One Atom feed per language, needs {lang}.")]
    pub translation_feed_atom: Option<PathBuf>,

    #[config(inline_doc = "One Atom feed per author, needs {slug}.")]
    pub author_feed_atom: Option<PathBuf>,

    #[config(inline_doc = "One RSS feed per author, needs {slug}.")]
    pub author_feed_rss: Option<PathBuf>,
}

impl FeedConfig {
    /// Every feed slot with the placeholder it needs, if any.
    fn slots(&self) -> [(FieldPath, Option<&Path>, Option<&'static str>); 5] {
        [
            (Self::FIELDS.feed_all_atom, self.feed_all_atom.as_deref(), None),
            (
                Self::FIELDS.category_feed_atom,
                self.category_feed_atom.as_deref(),
                Some("{slug}"),
            ),
            (
                Self::FIELDS.translation_feed_atom,
                self.translation_feed_atom.as_deref(),
                Some("{lang}"),
            ),
            (
                Self::FIELDS.author_feed_atom,
                self.author_feed_atom.as_deref(),
                Some("{slug}"),
            ),
            (
                Self::FIELDS.author_feed_rss,
                self.author_feed_rss.as_deref(),
                Some("{slug}"),
            ),
        ]
    }

    /// Enabled feeds as (field, output path), in declaration order.
    pub fn enabled(&self) -> Vec<(FieldPath, &Path)> {
        self.slots()
            .into_iter()
            .filter_map(|(field, path, _)| path.map(|p| (field, p)))
            .collect()
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        !self.is_disabled()
    }

    /// True when no feed will be written.
    #[inline]
    pub fn is_disabled(&self) -> bool {
        self.slots().iter().all(|(_, path, _)| path.is_none())
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (field, path, placeholder) in self.slots() {
            let Some(path) = path else { continue };

            if path.as_os_str().is_empty() {
                diag.error_with_hint(
                    field,
                    "feed path is empty",
                    "remove the key to disable this feed",
                );
                continue;
            }
            if path.is_absolute() {
                diag.error(
                    field,
                    format!("'{}' must be relative to the output path", path.display()),
                );
            }
            if let Some(placeholder) = placeholder
                && !path.to_string_lossy().contains(placeholder)
            {
                diag.warn(
                    field,
                    format!(
                        "'{}' has no {} placeholder, every feed would be written to the same file",
                        path.display(),
                        placeholder
                    ),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_all_disabled_by_default() {
        let feed = test_parse_config("").feed;
        assert_eq!(feed, FeedConfig::default());
        assert!(feed.feed_all_atom.is_none());
        assert!(feed.category_feed_atom.is_none());
        assert!(feed.translation_feed_atom.is_none());
        assert!(feed.author_feed_atom.is_none());
        assert!(feed.author_feed_rss.is_none());
        assert!(feed.is_disabled());
        assert!(feed.enabled().is_empty());
    }

    #[test]
    fn test_enabled_order() {
        let feed = test_parse_config(
            "[feed]\nauthor_feed_rss = \"feeds/{slug}.rss.xml\"\nfeed_all_atom = \"feeds/all.atom.xml\"",
        )
        .feed;
        assert!(feed.is_enabled());
        let enabled = feed.enabled();
        assert_eq!(enabled.len(), 2);
        assert_eq!(enabled[0].0, FeedConfig::FIELDS.feed_all_atom);
        assert_eq!(enabled[1].1, Path::new("feeds/{slug}.rss.xml"));
    }

    #[test]
    fn test_validation() {
        let feed = test_parse_config(
            "[feed]\nfeed_all_atom = \"/feeds/all.atom.xml\"\ncategory_feed_atom = \"feeds/category.atom.xml\"\ntranslation_feed_atom = \"\"",
        )
        .feed;
        let mut diag = ConfigDiagnostics::new();
        feed.validate(&mut diag);
        assert_eq!(diag.len(), 2);
        assert_eq!(diag.errors()[0].field, FeedConfig::FIELDS.feed_all_atom);
        assert_eq!(diag.errors()[1].field, FeedConfig::FIELDS.translation_feed_atom);
        assert_eq!(diag.warnings().len(), 1);
        assert_eq!(diag.warnings()[0].field, FeedConfig::FIELDS.category_feed_atom);
    }
}
