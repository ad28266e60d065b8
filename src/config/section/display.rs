//! `[display]` section configuration.

use macros::Config;
use serde::{Deserialize, Serialize};

/// Menu and sidebar toggles read by the theme templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "display")]
pub struct DisplayConfig {
    pub display_categories_on_menu: bool,
    pub display_pages_on_menu: bool,
    pub display_recent_posts_on_sidebar: bool,
    pub display_categories_on_sidebar: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            display_categories_on_menu: true,
            display_pages_on_menu: true,
            display_recent_posts_on_sidebar: true,
            display_categories_on_sidebar: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let display = test_parse_config("").display;
        assert!(display.display_categories_on_menu);
        assert!(display.display_pages_on_menu);
        assert!(display.display_recent_posts_on_sidebar);
        assert!(display.display_categories_on_sidebar);
    }

    #[test]
    fn test_partial_override() {
        let display = test_parse_config("[display]\ndisplay_pages_on_menu = false").display;
        assert!(!display.display_pages_on_menu);
        assert!(display.display_categories_on_menu);
    }
}
