//! `[site.comments]` configuration.

use crate::config::ConfigDiagnostics;
use macros::Config;
use serde::{Deserialize, Serialize};

/// Comment system settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site.comments")]
pub struct CommentsConfig {
    /// Disqus shortname. Empty disables comments.
    pub disqus_sitename: String,
}

impl Default for CommentsConfig {
    fn default() -> Self {
        Self {
            disqus_sitename: "open-moments".into(),
        }
    }
}

impl CommentsConfig {
    #[inline]
    pub fn is_enabled(&self) -> bool {
        !self.disqus_sitename.is_empty()
    }

    /// Disqus shortnames are lowercase letters, digits and hyphens.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let valid = self
            .disqus_sitename
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
        if !valid {
            diag.error_with_hint(
                Self::FIELDS.disqus_sitename,
                format!("'{}' is not a valid Disqus shortname", self.disqus_sitename),
                "use lowercase letters, digits and hyphens only",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_default_enabled() {
        let config = test_parse_config("");
        assert_eq!(config.site.comments.disqus_sitename, "open-moments");
        assert!(config.site.comments.is_enabled());
    }

    #[test]
    fn test_empty_disables() {
        let config = test_parse_config("[site.comments]\ndisqus_sitename = \"\"");
        assert!(!config.site.comments.is_enabled());
        let mut diag = ConfigDiagnostics::new();
        config.site.comments.validate(&mut diag);
        assert!(!diag.has_errors());
    }

    #[test]
    fn test_invalid_shortname() {
        let config = test_parse_config("[site.comments]\ndisqus_sitename = \"Open Moments\"");
        let mut diag = ConfigDiagnostics::new();
        config.site.comments.validate(&mut diag);
        assert_eq!(diag.len(), 1);
    }
}
