//! Configuration file generation.
//!
//! Renders every section's annotated defaults into one `moments.toml`.

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::config::section::{
    ContentConfig, DisplayConfig, FeedConfig, MarkdownConfig, SiteSectionConfig, UrlsConfig,
};

/// Generate moments.toml content with comments
pub fn generate_config_template() -> String {
    let mut out = String::new();

    // Header
    out.push_str(&format!(
        "# Open-Moments site settings (moments v{})\n",
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str("# Every key is optional; removed keys fall back to the values below.\n\n");

    // [site] section, including [site.icons] and [site.comments]
    out.push_str(&SiteSectionConfig::template_with_header());
    out.push('\n');

    // [content] section
    out.push_str(&ContentConfig::template_with_header());
    out.push('\n');

    // [markdown] section
    out.push_str(&MarkdownConfig::template_with_header());
    out.push('\n');

    // [feed] section
    out.push_str(&FeedConfig::template_with_header());
    out.push('\n');

    // [display] section
    out.push_str(&DisplayConfig::template_with_header());
    out.push('\n');

    // [urls] section
    out.push_str(&UrlsConfig::template_with_header());

    out
}

/// Write the default config into `root` as `file_name`.
pub fn write_config(root: &Path, file_name: &Path) -> Result<()> {
    let content = generate_config_template();

    fs::create_dir_all(root)
        .with_context(|| format!("Failed to create directory '{}'", root.display()))?;

    let path = root.join(file_name);
    fs::write(&path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    Ok(())
}
