//! Site initialization module.
//!
//! Writes a `moments.toml` holding every setting at its default.
//!
//! # Module Structure
//!
//! - [`validate`]: Pre-initialization validation
//! - [`config`]: Configuration file generation

mod config;
mod validate;

use crate::log;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub use config::generate_config_template;

/// Default config filename
const CONFIG_FILE: &str = "moments.toml";

/// Write the default config into `name` (or the current directory).
///
/// The file name comes from `--config`, so `moments -C site.toml init`
/// writes `site.toml`. If `dry_run` is true, only prints the template.
pub fn new_site(config: &Path, name: Option<&Path>, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", dry_run_output());
        return Ok(());
    }

    let root = target_dir(name)?;
    let path = init_at(&root, &config_file_name(config))?;

    log!("init"; "wrote {}", path.display());
    Ok(())
}

/// What `init --dry` prints.
fn dry_run_output() -> String {
    generate_config_template()
}

/// Validate `root` and write `file_name` into it, returning the written path.
fn init_at(root: &Path, file_name: &Path) -> Result<PathBuf> {
    validate::validate_target(root, file_name)?;
    config::write_config(root, file_name)?;
    Ok(root.join(file_name))
}

/// File name part of `--config`, falling back to `moments.toml`.
fn config_file_name(config: &Path) -> PathBuf {
    config
        .file_name()
        .map_or_else(|| PathBuf::from(CONFIG_FILE), PathBuf::from)
}

fn target_dir(name: Option<&Path>) -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    Ok(match name {
        Some(name) => cwd.join(name),
        None => cwd,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_dry_run_prints_template() {
        let output = dry_run_output();
        assert_eq!(output, generate_config_template());
        assert_eq!(SiteConfig::from_str(&output).unwrap(), SiteConfig::default());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("blog");
        let name = Path::new(CONFIG_FILE);

        let path = init_at(&root, name).unwrap();
        assert_eq!(path, root.join(CONFIG_FILE));
        fs::write(&path, "[site]\nsite_name = \"Mine\"\n").unwrap();

        let err = init_at(&root, name).unwrap_err();
        assert!(err.to_string().contains("already exists"));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "[site]\nsite_name = \"Mine\"\n"
        );
    }

    #[test]
    fn test_config_file_name_follows_flag() {
        assert_eq!(
            config_file_name(Path::new("moments.toml")),
            PathBuf::from("moments.toml")
        );
        assert_eq!(
            config_file_name(Path::new("conf/site.toml")),
            PathBuf::from("site.toml")
        );
        assert_eq!(config_file_name(Path::new("/")), PathBuf::from(CONFIG_FILE));
    }
}
