//! `[urls]` section configuration.
//!
//! Public URL and output path templates for pages and articles. Each
//! `*_url` has a matching `*_save_as`, and both must use the same
//! placeholders. The `*_lang_*` pairs apply to translations.
//!
//! # Example
//!
//! ```toml
//! [urls]
//! article_url = "posts/{date:%Y}/{date:%b}/{date:%d}/{slug}/"
//! article_save_as = "posts/{date:%Y}/{date:%b}/{date:%d}/{slug}/index.html"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::scheme::{ContentKind, TemplateError, UrlScheme, UrlTemplate};
use macros::Config;
use serde::{Deserialize, Serialize};

/// URL schemes for generated content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "urls")]
pub struct UrlsConfig {
    pub page_url: String,
    pub page_save_as: String,
    pub page_lang_url: String,
    pub page_lang_save_as: String,
    pub article_url: String,
    pub article_save_as: String,
    pub article_lang_url: String,
    pub article_lang_save_as: String,
}

impl Default for UrlsConfig {
    fn default() -> Self {
        Self {
            page_url: "{slug}.html".into(),
            page_save_as: "{slug}.html".into(),
            page_lang_url: "{slug}-{lang}.html".into(),
            page_lang_save_as: "{slug}-{lang}.html".into(),
            article_url: "posts/{date:%Y}/{date:%b}/{date:%d}/{slug}/".into(),
            article_save_as: "posts/{date:%Y}/{date:%b}/{date:%d}/{slug}/index.html".into(),
            article_lang_url: "{slug}-{lang}.html".into(),
            article_lang_save_as: "{slug}-{lang}.html".into(),
        }
    }
}

/// One url/save-as pair with its field paths.
struct Pair<'a> {
    name: &'static str,
    kind: ContentKind,
    translation: bool,
    url: (FieldPath, &'a str),
    save_as: (FieldPath, &'a str),
}

impl UrlsConfig {
    pub fn page(&self) -> Result<UrlScheme, TemplateError> {
        UrlScheme::parse(ContentKind::Page, &self.page_url, &self.page_save_as)
    }

    pub fn page_lang(&self) -> Result<UrlScheme, TemplateError> {
        UrlScheme::parse(ContentKind::Page, &self.page_lang_url, &self.page_lang_save_as)
    }

    pub fn article(&self) -> Result<UrlScheme, TemplateError> {
        UrlScheme::parse(ContentKind::Article, &self.article_url, &self.article_save_as)
    }

    pub fn article_lang(&self) -> Result<UrlScheme, TemplateError> {
        UrlScheme::parse(
            ContentKind::Article,
            &self.article_lang_url,
            &self.article_lang_save_as,
        )
    }

    /// All schemes as (name, parsed scheme), in declaration order.
    pub fn schemes(&self) -> Vec<(&'static str, Result<UrlScheme, TemplateError>)> {
        vec![
            ("page", self.page()),
            ("page_lang", self.page_lang()),
            ("article", self.article()),
            ("article_lang", self.article_lang()),
        ]
    }

    fn pairs(&self) -> [Pair<'_>; 4] {
        let f = &Self::FIELDS;
        [
            Pair {
                name: "page",
                kind: ContentKind::Page,
                translation: false,
                url: (f.page_url, &self.page_url),
                save_as: (f.page_save_as, &self.page_save_as),
            },
            Pair {
                name: "page_lang",
                kind: ContentKind::Page,
                translation: true,
                url: (f.page_lang_url, &self.page_lang_url),
                save_as: (f.page_lang_save_as, &self.page_lang_save_as),
            },
            Pair {
                name: "article",
                kind: ContentKind::Article,
                translation: false,
                url: (f.article_url, &self.article_url),
                save_as: (f.article_save_as, &self.article_save_as),
            },
            Pair {
                name: "article_lang",
                kind: ContentKind::Article,
                translation: true,
                url: (f.article_lang_url, &self.article_lang_url),
                save_as: (f.article_lang_save_as, &self.article_lang_save_as),
            },
        ]
    }

    /// Validate every template pair.
    ///
    /// # Checks
    /// - both templates parse for their content kind
    /// - url and save-as use the same placeholders
    /// - save-as is a relative file path
    /// - translation pairs use `{lang}` (warning only)
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for pair in self.pairs() {
            let url = Self::parse_field(pair.kind, pair.url, diag);
            let save_as = Self::parse_field(pair.kind, pair.save_as, diag);
            let (Some(url), Some(save_as)) = (url, save_as) else {
                continue;
            };

            if save_as.is_absolute() {
                diag.error_with_hint(
                    pair.save_as.0,
                    format!("'{}' is absolute", save_as),
                    "output paths are relative to the output directory, remove the leading '/'",
                );
            }
            if save_as.is_directory() {
                diag.error_with_hint(
                    pair.save_as.0,
                    format!("'{}' names a directory, not a file", save_as),
                    format!("write to a file inside it, e.g. \"{}index.html\"", save_as),
                );
            }

            let scheme = UrlScheme {
                kind: pair.kind,
                url,
                save_as,
            };
            if !scheme.is_consistent() {
                let mut parts = Vec::new();
                let only_url = scheme.only_in_url();
                let only_save = scheme.only_in_save_as();
                if !only_url.is_empty() {
                    parts.push(format!("only in url: {}", only_url.join(" ")));
                }
                if !only_save.is_empty() {
                    parts.push(format!("only in save_as: {}", only_save.join(" ")));
                }
                diag.error_with_hint(
                    pair.save_as.0,
                    format!(
                        "{} url and save_as use different placeholders ({})",
                        pair.name,
                        parts.join(", ")
                    ),
                    format!("use the same placeholders as {}", pair.url.0.as_str()),
                );
            }

            if pair.translation && !scheme.url.uses("lang") {
                diag.warn(
                    pair.url.0,
                    "translations have no {lang} placeholder and will overwrite each other",
                );
            }
        }
    }

    fn parse_field(
        kind: ContentKind,
        (field, source): (FieldPath, &str),
        diag: &mut ConfigDiagnostics,
    ) -> Option<UrlTemplate> {
        match UrlTemplate::parse(source, kind) {
            Ok(template) => Some(template),
            Err(e) => {
                diag.error_with_hint(
                    field,
                    format!("invalid template '{}': {}", source, e),
                    format!(
                        "{} placeholders: {}",
                        kind,
                        kind.placeholders()
                            .iter()
                            .map(|p| format!("{{{p}}}"))
                            .collect::<Vec<_>>()
                            .join(" ")
                    ),
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::scheme::Placeholder;

    fn diagnose(urls: &UrlsConfig) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        urls.validate(&mut diag);
        diag
    }

    #[test]
    fn test_defaults() {
        let urls = test_parse_config("").urls;
        assert_eq!(urls.page_url, "{slug}.html");
        assert_eq!(urls.page_save_as, "{slug}.html");
        assert_eq!(urls.page_lang_url, "{slug}-{lang}.html");
        assert_eq!(urls.page_lang_save_as, "{slug}-{lang}.html");
        assert_eq!(urls.article_url, "posts/{date:%Y}/{date:%b}/{date:%d}/{slug}/");
        assert_eq!(
            urls.article_save_as,
            "posts/{date:%Y}/{date:%b}/{date:%d}/{slug}/index.html"
        );
    }

    #[test]
    fn test_default_schemes_consistent() {
        let urls = UrlsConfig::default();
        for (name, scheme) in urls.schemes() {
            let scheme = scheme.unwrap_or_else(|e| panic!("{name}: {e}"));
            assert!(scheme.is_consistent(), "{name} is inconsistent");
        }

        let diag = diagnose(&urls);
        assert!(!diag.has_errors(), "{:?}", diag.errors());
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_article_placeholder_set() {
        let article = UrlsConfig::default().article().unwrap();
        let mut set: Vec<Placeholder> = article.url.placeholders().into_iter().cloned().collect();
        set.sort();
        let shown: Vec<String> = set.iter().map(ToString::to_string).collect();
        assert_eq!(shown, ["{date:%Y}", "{date:%b}", "{date:%d}", "{slug}"]);
    }

    #[test]
    fn test_mismatch_is_error() {
        let urls = test_parse_config(
            "[urls]\narticle_url = \"posts/{date:%Y}/{slug}/\"\narticle_save_as = \"posts/{slug}/index.html\"",
        )
        .urls;
        let diag = diagnose(&urls);
        assert_eq!(diag.len(), 1);
        let err = &diag.errors()[0];
        assert_eq!(err.field, UrlsConfig::FIELDS.article_save_as);
        assert!(err.message.contains("only in url: {date:%Y}"));
    }

    #[test]
    fn test_save_as_shape() {
        let urls = test_parse_config(
            "[urls]\npage_url = \"{slug}/\"\npage_save_as = \"/{slug}/\"",
        )
        .urls;
        let diag = diagnose(&urls);
        assert_eq!(diag.len(), 2);
        assert!(diag.errors()[0].message.contains("absolute"));
        assert!(diag.errors()[1].message.contains("directory"));
    }

    #[test]
    fn test_parse_errors_reported_per_field() {
        let urls = test_parse_config(
            "[urls]\npage_url = \"{category}.html\"\npage_save_as = \"{slug.html\"",
        )
        .urls;
        let diag = diagnose(&urls);
        assert_eq!(diag.len(), 2);
        assert_eq!(diag.errors()[0].field, UrlsConfig::FIELDS.page_url);
        assert_eq!(diag.errors()[1].field, UrlsConfig::FIELDS.page_save_as);
        assert!(urls.page().is_err());
    }

    #[test]
    fn test_translation_without_lang_warns() {
        let urls = test_parse_config(
            "[urls]\narticle_lang_url = \"{slug}.html\"\narticle_lang_save_as = \"{slug}.html\"",
        )
        .urls;
        let diag = diagnose(&urls);
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);
        assert_eq!(diag.warnings()[0].field, UrlsConfig::FIELDS.article_lang_url);
    }
}
