//! `moments show` and `moments get` - print resolved settings.
//!
//! Output goes to stdout, logs to stderr, so both commands can be piped.

use super::OutputFormat;
use crate::config::SiteConfig;
use anyhow::{Context, Result, bail};
use serde_json::Value;

/// Print the whole resolved config.
pub fn show_config(config: &SiteConfig, format: OutputFormat) -> Result<()> {
    let rendered = match format {
        OutputFormat::Toml => {
            toml::to_string_pretty(config).context("Failed to serialize config as TOML")?
        }
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(config)
                .context("Failed to serialize config as JSON")?;
            json.push('\n');
            json
        }
    };
    print!("{rendered}");
    Ok(())
}

/// Print a single value addressed by a dotted key.
pub fn get_value(config: &SiteConfig, key: &str) -> Result<()> {
    let root = serde_json::to_value(config).context("Failed to serialize config")?;
    let value = lookup(&root, key)?;
    println!("{}", render(value)?);
    Ok(())
}

/// Resolve `key` against `root`; numeric segments index into arrays.
fn lookup<'a>(root: &'a Value, key: &str) -> Result<&'a Value> {
    if key.is_empty() {
        bail!("empty key");
    }

    let mut current = root;
    for (depth, segment) in key.split('.').enumerate() {
        let next = match current {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        };
        current = match next {
            Some(value) => value,
            None => {
                let parent = key.split('.').take(depth).collect::<Vec<_>>().join(".");
                bail!("unknown key `{key}`{}", available(current, &parent));
            }
        };
    }
    Ok(current)
}

/// Hint listing what could follow `parent`.
fn available(value: &Value, parent: &str) -> String {
    let prefix = if parent.is_empty() {
        String::new()
    } else {
        format!("{parent}.")
    };
    match value {
        Value::Object(map) if !map.is_empty() => {
            let keys: Vec<String> = map.keys().map(|k| format!("{prefix}{k}")).collect();
            format!(" (available: {})", keys.join(", "))
        }
        Value::Array(items) if !items.is_empty() => {
            format!(" ({prefix}0 to {prefix}{})", items.len() - 1)
        }
        _ => String::new(),
    }
}

/// Strings print raw, everything else as JSON.
fn render(value: &Value) -> Result<String> {
    Ok(match value {
        Value::String(s) => s.clone(),
        other => serde_json::to_string(other)?,
    })
}
