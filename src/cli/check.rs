//! `moments check` - load, validate and summarize the settings.

use crate::config::SiteConfig;
use crate::log;
use anyhow::Result;

/// Print a summary of an already validated config.
pub fn check_site(config: &SiteConfig) -> Result<()> {
    for line in summary(config) {
        log!("check"; "{}", line);
    }
    log!("check"; "{} is valid", config.config_path.display());
    Ok(())
}

/// One line per summarized setting.
fn summary(config: &SiteConfig) -> Vec<String> {
    let site = &config.site;
    let mut lines = Vec::new();

    let url = if site.site_url.is_empty() {
        "no site_url, links are relative".to_string()
    } else {
        site.site_url.clone()
    };
    lines.push(format!("site: {} ({})", site.site_name, url));

    lines.push(match config.content.pagination() {
        Some(n) => format!("pagination: {n} per page"),
        None => "pagination: off".to_string(),
    });

    let feeds = config.feed.enabled();
    if feeds.is_empty() {
        lines.push("feeds: disabled".to_string());
    } else {
        for (field, path) in feeds {
            lines.push(format!("feed: {} -> {}", field.as_str(), path.display()));
        }
    }

    for (name, scheme) in config.urls.schemes() {
        // Broken schemes never get here, validation already failed on them
        if let Ok(scheme) = scheme {
            lines.push(format!("{name}: {} -> {}", scheme.url, scheme.save_as));
        }
    }

    lines.push(format!("social links: {}", site.social.len()));

    let extensions: Vec<String> = config
        .markdown
        .extensions
        .iter()
        .map(ToString::to_string)
        .collect();
    lines.push(format!("markdown extensions: {}", extensions.join(", ")));

    if !site.comments.is_enabled() {
        lines.push("comments: off".to_string());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_default_summary() {
        let lines = summary(&SiteConfig::default());
        let site = "site: Open-Moments (no site_url, links are relative)";
        assert!(lines.contains(&site.to_string()));
        assert!(lines.contains(&"pagination: 3 per page".to_string()));
        assert!(lines.contains(&"feeds: disabled".to_string()));
        assert!(lines.contains(&"page: {slug}.html -> {slug}.html".to_string()));
        assert!(lines.contains(
            &"article: posts/{date:%Y}/{date:%b}/{date:%d}/{slug}/ -> posts/{date:%Y}/{date:%b}/{date:%d}/{slug}/index.html"
                .to_string()
        ));
        assert!(lines.contains(&"social links: 5".to_string()));
        assert!(lines.contains(
            &"markdown extensions: toc, fenced_code, codehilite(css_class=highlight)".to_string()
        ));
        assert!(!lines.iter().any(|l| l.starts_with("comments")));
    }

    #[test]
    fn test_summary_lists_feeds() {
        let config = test_parse_config(
            r#"
            [content]
            default_pagination = 0
            [feed]
            feed_all_atom = "feeds/all.atom.xml"
            [site.comments]
            disqus_sitename = ""
        "#,
        );
        let lines = summary(&config);
        assert!(lines.contains(&"pagination: off".to_string()));
        assert!(lines.contains(&"feed: feed.feed_all_atom -> feeds/all.atom.xml".to_string()));
        assert!(!lines.contains(&"feeds: disabled".to_string()));
        assert!(lines.contains(&"comments: off".to_string()));
    }
}
