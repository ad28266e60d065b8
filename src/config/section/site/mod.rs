//! `[site]` section configuration.
//!
//! Identity of the site plus the links and widgets every page shows.
//!
//! # Example
//!
//! ```toml
//! [site]
//! author = "Adam Jefferiss"
//! site_name = "Open-Moments"
//! site_url = "https://open-moments.example"
//! timezone = "Europe/London"
//! default_language = "en"
//! social = [
//!     ["github", "https://github.com/ajefferiss"],
//!     ["stack overflow", "https://stackoverflow.com/users/1823022/ajefferiss"],
//! ]
//!
//! [site.icons]
//! favicon = "theme/images/favicon.png"
//!
//! [site.comments]
//! disqus_sitename = "open-moments"
//! ```

mod comments;
mod icons;
mod social;

pub use comments::CommentsConfig;
pub use icons::IconsConfig;
pub use social::SocialLink;

use super::feed::FeedConfig;
use crate::config::{ConfigDiagnostics, util::extract_url_path};
use macros::Config;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Site identity and links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site")]
pub struct SiteSectionConfig {
    /// Author credited on every post.
    pub author: String,

    /// Site name shown in the header and page titles.
    pub site_name: String,

    /// Tagline shown under the site name.
    pub site_subtitle: String,

    /// Public base URL. Leave empty to keep links relative while developing.
    pub site_url: String,

    /// Timezone used for post dates (IANA name).
    #[config(inline_doc = "e.g. \"Europe/London\", \"UTC\"")]
    pub timezone: String,

    /// Language of content without an explicit `lang`.
    pub default_language: String,

    /// Make every link document-relative.
    pub relative_urls: bool,

    /// Social links as [label, url] pairs, in display order.
    pub social: Vec<SocialLink>,

    #[config(sub)]
    pub icons: IconsConfig,

    #[config(sub)]
    pub comments: CommentsConfig,
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            author: "Adam Jefferiss".into(),
            site_name: "Open-Moments".into(),
            site_subtitle: String::new(),
            site_url: String::new(),
            timezone: "Europe/London".into(),
            default_language: "en".into(),
            relative_urls: false,
            social: vec![
                SocialLink::new("github", "https://github.com/ajefferiss"),
                SocialLink::new("twitter", "https://twitter.com/adamjefferiss"),
                SocialLink::new(
                    "linkedin",
                    "https://www.linkedin.com/in/adam-jefferiss-b4567256/",
                ),
                SocialLink::new("google+", "https://plus.google.com/+AdamJefferiss"),
                SocialLink::new(
                    "stack overflow",
                    "https://stackoverflow.com/users/1823022/ajefferiss",
                ),
            ],
            icons: IconsConfig::default(),
            comments: CommentsConfig::default(),
        }
    }
}

impl SiteSectionConfig {
    /// URL path component of `site_url`, without surrounding slashes.
    ///
    /// Empty when the site lives at the domain root or `site_url` is unset.
    pub fn path_prefix(&self) -> String {
        extract_url_path(&self.site_url).unwrap_or_default()
    }

    /// True when links should be written relative to the current document.
    pub fn uses_relative_urls(&self) -> bool {
        self.relative_urls || self.site_url.is_empty()
    }

    /// Validate site configuration.
    ///
    /// # Checks
    /// - `site_url`, when set, is an http(s) URL with a host
    /// - `timezone` and `default_language` look like identifiers
    /// - social links have a label and an absolute URL
    pub fn validate(&self, feed_enabled: bool, diag: &mut ConfigDiagnostics) {
        if self.site_name.trim().is_empty() {
            diag.warn(Self::FIELDS.site_name, "site name is empty");
        }

        self.validate_url(feed_enabled, diag);
        self.validate_locale(diag);
        self.validate_social(diag);
        self.icons.validate(diag);
        self.comments.validate(diag);
    }

    fn validate_url(&self, feed_enabled: bool, diag: &mut ConfigDiagnostics) {
        if self.site_url.is_empty() {
            if feed_enabled {
                diag.warn(
                    Self::FIELDS.site_url,
                    format!(
                        "feeds are enabled in [{}] but links in them will be relative",
                        FeedConfig::TEMPLATE_SECTION
                    ),
                );
            }
            return;
        }

        match url::Url::parse(&self.site_url) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::FIELDS.site_url,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        Self::FIELDS.site_url,
                        "URL must have a valid host",
                        "use format like https://example.com",
                    );
                }
                if parsed.query().is_some() || parsed.fragment().is_some() {
                    diag.error(
                        Self::FIELDS.site_url,
                        "base URL cannot carry a query or fragment",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::FIELDS.site_url,
                    format!("invalid URL: {}", e),
                    "use format like https://example.com, or leave empty for relative links",
                );
            }
        }
    }

    fn validate_locale(&self, diag: &mut ConfigDiagnostics) {
        let tz_ok = !self.timezone.is_empty()
            && !self.timezone.starts_with('/')
            && !self.timezone.ends_with('/')
            && self
                .timezone
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | '_' | '-' | '+'));
        if !tz_ok {
            diag.error_with_hint(
                Self::FIELDS.timezone,
                format!("'{}' is not a timezone name", self.timezone),
                "use an IANA name such as \"Europe/London\" or \"UTC\"",
            );
        }

        let lang_ok = !self.default_language.is_empty()
            && self
                .default_language
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'));
        if !lang_ok {
            diag.error_with_hint(
                Self::FIELDS.default_language,
                format!("'{}' is not a language code", self.default_language),
                "use a code such as \"en\" or \"pt-BR\"",
            );
        }
    }

    fn validate_social(&self, diag: &mut ConfigDiagnostics) {
        let mut seen = FxHashSet::default();
        for (i, link) in self.social.iter().enumerate() {
            if link.label().trim().is_empty() {
                diag.error(Self::FIELDS.social, format!("entry {} has an empty label", i));
            } else if !seen.insert(link.label()) {
                diag.warn(
                    Self::FIELDS.social,
                    format!("label '{}' appears more than once", link.label()),
                );
            }

            if let Err(e) = link.parsed_url() {
                diag.error_with_hint(
                    Self::FIELDS.social,
                    format!("entry {} ('{}'): invalid URL: {}", i, link.label(), e),
                    "social links must be absolute, e.g. \"https://github.com/me\"",
                );
            }
        }
    }
}
