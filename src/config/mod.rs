//! Site configuration management for `moments.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site/      # [site], [site.icons], [site.comments]
//! │   ├── content    # [content]
//! │   ├── markdown   # [markdown]
//! │   ├── feed       # [feed]
//! │   ├── display    # [display]
//! │   └── urls       # [urls]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! Every key has a default, so an empty file resolves to the published
//! Open-Moments settings. Settings are read once and never change for
//! the rest of the run.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{
    CommentsConfig, ContentConfig, DisplayConfig, ExtensionError, FeedConfig, IconsConfig,
    MarkdownConfig, MarkdownExtension, SiteSectionConfig, SocialLink, UrlsConfig,
};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use crate::{cli::Cli, debug, log};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing moments.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Identity, social links, icons and comments
    #[serde(default)]
    pub site: SiteSectionConfig,

    /// Source, theme and output locations
    #[serde(default)]
    pub content: ContentConfig,

    /// Markdown renderer settings
    #[serde(default)]
    pub markdown: MarkdownConfig,

    /// Feed outputs
    #[serde(default)]
    pub feed: FeedConfig,

    /// Theme menu and sidebar toggles
    #[serde(default)]
    pub display: DisplayConfig,

    /// URL and save-as templates
    #[serde(default)]
    pub urls: UrlsConfig,
}

impl SiteConfig {
    /// Load configuration for a CLI invocation.
    ///
    /// Searches upward from cwd for the config file unless an absolute path
    /// was given. The project root is the config file's parent directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let config_path =
            find_config_file(&cli.config).ok_or_else(|| ConfigError::NotFound(cli.config.clone()))?;
        debug!("config"; "using {}", config_path.display());

        let strict = cli.load_args().is_some_and(|args| args.strict);
        let mut config = Self::from_path(&config_path, strict)?;

        config.config_path = config_path;
        config.finalize(cli);
        config.validate()?;

        Ok(config)
    }

    /// Finalize configuration after loading.
    fn finalize(&mut self, cli: &Cli) {
        let root = self
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        self.set_root(&root);

        self.apply_command_options(cli);
        self.normalize();
    }

    /// Apply CLI overrides shared by the loading commands.
    fn apply_command_options(&mut self, cli: &Cli) {
        if let Some(args) = cli.load_args() {
            Self::update_option(&mut self.site.site_url, args.site_url.as_ref());
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Canonical forms: no trailing slash on `site_url`, expanded theme path.
    fn normalize(&mut self) {
        let trimmed = self.site.site_url.trim_end_matches('/').len();
        self.site.site_url.truncate(trimmed);
        self.content.expand_theme();
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path, strict: bool) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            if strict {
                return Err(ConfigError::UnknownFields(ignored).into());
            }
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    // ========================================================================
    // paths
    // ========================================================================

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.root = path.to_path_buf();
    }

    /// Join a path with the root directory.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    pub fn content_dir(&self) -> PathBuf {
        self.root_join(&self.content.path)
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root_join(&self.content.output_path)
    }

    /// Theme directory; absolute theme paths are kept as-is.
    pub fn theme_dir(&self) -> PathBuf {
        self.root_join(&self.content.theme)
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Run every section check and collect the results.
    pub fn diagnose(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(self.feed.is_enabled(), &mut diag);
        self.content.validate(&mut diag);
        self.markdown.validate(&mut diag);
        self.feed.validate(&mut diag);
        self.urls.validate(&mut diag);

        diag
    }

    /// Validate configuration.
    ///
    /// Prints warnings and returns all collected errors at once.
    pub fn validate(&self) -> Result<()> {
        let diag = self.diagnose();
        diag.print_warnings();
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse a config snippet.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("moments").chain(args.iter().copied()))
    }

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("moments.toml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_from_str_invalid_toml() {
        assert!(SiteConfig::from_str("[site\nsite_name = \"x\"").is_err());
    }

    #[test]
    fn test_empty_file_is_default() {
        let config = test_parse_config("");
        assert_eq!(config, SiteConfig::default());
        assert!(config.diagnose().into_result().is_ok());
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content =
            "[site]\nsite_name = \"Test\"\ntitel = \"typo\"\n[unknown_section]\nfield = 1";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.site.site_name, "Test");
        assert!(ignored.iter().any(|f| f == "site.titel"));
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_root_and_paths() {
        let mut config = SiteConfig::default();
        config.set_root(Path::new("/srv/blog"));
        assert_eq!(config.get_root(), Path::new("/srv/blog"));
        assert_eq!(config.content_dir(), PathBuf::from("/srv/blog/content"));
        assert_eq!(config.output_dir(), PathBuf::from("/srv/blog/output"));
        assert_eq!(
            config.theme_dir(),
            PathBuf::from("/srv/blog/themes/bootstrap-brew")
        );

        config.content.theme = "/usr/share/themes/brew".into();
        assert_eq!(config.theme_dir(), PathBuf::from("/usr/share/themes/brew"));
    }

    #[test]
    fn test_load_finalizes() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            "[site]\nsite_url = \"https://example.com/blog/\"\n[content]\ndefault_pagination = 5",
        );

        let config = SiteConfig::load(&cli(&["-C", path.to_str().unwrap(), "check"])).unwrap();
        assert_eq!(config.config_path, path);
        assert_eq!(config.get_root(), dir.path());
        assert_eq!(config.site.site_url, "https://example.com/blog");
        assert_eq!(config.site.path_prefix(), "blog");
        assert_eq!(config.content.default_pagination, 5);
    }

    #[test]
    fn test_load_site_url_override() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "");

        let config = SiteConfig::load(&cli(&[
            "-C",
            path.to_str().unwrap(),
            "show",
            "--site-url",
            "https://open-moments.example/",
        ]))
        .unwrap();
        assert_eq!(config.site.site_url, "https://open-moments.example");
    }

    #[test]
    fn test_load_strict_rejects_unknown() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[site]\nsitename = \"Typo\"");
        let path = path.to_str().unwrap();

        assert!(SiteConfig::load(&cli(&["-C", path, "check"])).is_ok());

        let err = SiteConfig::load(&cli(&["-C", path, "check", "--strict"])).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::UnknownFields(fields)) if fields == &["site.sitename".to_string()]
        ));
    }

    #[test]
    fn test_load_reports_all_errors() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            "[site]\ntimezone = \"\"\n[urls]\npage_save_as = \"{slug}/\"",
        );

        let err = SiteConfig::load(&cli(&["-C", path.to_str().unwrap(), "check"])).unwrap_err();
        match err.downcast_ref::<ConfigError>() {
            Some(ConfigError::Diagnostics(diag)) => {
                assert_eq!(diag.len(), 2);
                assert_eq!(diag.errors()[0].field, SiteSectionConfig::FIELDS.timezone);
                assert_eq!(diag.errors()[1].field, UrlsConfig::FIELDS.page_save_as);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("moments.toml");
        let err = SiteConfig::load(&cli(&["-C", path.to_str().unwrap(), "check"])).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::NotFound(_))
        ));
    }
}
