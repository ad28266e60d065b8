//! `[content]` section configuration.
//!
//! Where sources, theme and output live, and how listings paginate.
//!
//! # Example
//!
//! ```toml
//! [content]
//! path = "content"
//! page_paths = ["pages"]
//! theme = "themes/bootstrap-brew"
//! default_pagination = 3
//! ```

use crate::config::ConfigDiagnostics;
use macros::Config;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use std::path::PathBuf;

/// Content, theme and output locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "content")]
pub struct ContentConfig {
    /// Content source directory, relative to the config file.
    pub path: PathBuf,

    /// Page directories, relative to `path`.
    pub page_paths: Vec<PathBuf>,

    /// Article directories, relative to `path`. `""` means all of it.
    pub article_paths: Vec<PathBuf>,

    /// Generated site directory, relative to the config file.
    pub output_path: PathBuf,

    /// Theme directory (relative, absolute or `~/...`).
    pub theme: PathBuf,

    /// Items per listing page, 0 disables pagination.
    pub default_pagination: u32,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            path: "content".into(),
            page_paths: vec!["pages".into()],
            article_paths: vec![PathBuf::new()],
            output_path: "output".into(),
            theme: "themes/bootstrap-brew".into(),
            default_pagination: 3,
        }
    }
}

impl ContentConfig {
    /// Page size for listings, `None` when pagination is off.
    #[inline]
    pub fn pagination(&self) -> Option<NonZeroU32> {
        NonZeroU32::new(self.default_pagination)
    }

    /// Expand a leading `~` in the theme path.
    pub fn expand_theme(&mut self) {
        if let Some(theme) = self.theme.to_str()
            && theme.starts_with('~')
        {
            self.theme = PathBuf::from(shellexpand::tilde(theme).into_owned());
        }
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.path.as_os_str().is_empty() {
            diag.error(Self::FIELDS.path, "content path is empty");
        }
        if self.output_path.as_os_str().is_empty() {
            diag.error(Self::FIELDS.output_path, "output path is empty");
        } else if self.output_path == self.path {
            diag.error_with_hint(
                Self::FIELDS.output_path,
                "output path is the content path, a build would overwrite sources",
                "use a separate directory such as \"output\"",
            );
        }
        if self.theme.as_os_str().is_empty() {
            diag.error(Self::FIELDS.theme, "theme is empty");
        }

        Self::check_relative(Self::FIELDS.page_paths, &self.page_paths, diag);
        Self::check_relative(Self::FIELDS.article_paths, &self.article_paths, diag);

        if self.page_paths.is_empty() && self.article_paths.is_empty() {
            diag.warn(Self::FIELDS.page_paths, "no page or article directories configured");
        }
    }

    fn check_relative(
        field: crate::config::FieldPath,
        paths: &[PathBuf],
        diag: &mut ConfigDiagnostics,
    ) {
        for path in paths.iter().filter(|p| p.is_absolute()) {
            diag.error_with_hint(
                field,
                format!("'{}' must be relative to the content path", path.display()),
                "remove the leading '/'",
            );
        }
    }
}
