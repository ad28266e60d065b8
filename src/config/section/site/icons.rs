//! `[site.icons]` configuration.

use crate::config::ConfigDiagnostics;
use macros::Config;
use serde::{Deserialize, Serialize};

/// Browser and home-screen icons, relative to the site root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site.icons")]
pub struct IconsConfig {
    #[config(inline_doc = "Standard favicon.")]
    pub favicon: String,

    #[config(inline_doc = "32x32 icon for Internet Explorer.")]
    pub favicon_ie: String,

    #[config(inline_doc = "Apple touch icon.")]
    pub touchicon: String,
}

impl Default for IconsConfig {
    fn default() -> Self {
        Self {
            favicon: "theme/images/favicon.png".into(),
            favicon_ie: "theme/images/favicon-32x32.png".into(),
            touchicon: "theme/images/favicon-touch.png".into(),
        }
    }
}

impl IconsConfig {
    /// Absolute icon paths bypass `site_url` and break under a path prefix.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (field, value) in [
            (Self::FIELDS.favicon, &self.favicon),
            (Self::FIELDS.favicon_ie, &self.favicon_ie),
            (Self::FIELDS.touchicon, &self.touchicon),
        ] {
            if value.starts_with('/') {
                diag.warn(
                    field,
                    format!("'{}' is absolute, icons are resolved against site_url", value),
                );
            }
        }
    }
}
