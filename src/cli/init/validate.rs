//! Pre-initialization validation.

use anyhow::{Result, bail};
use std::path::Path;

/// Validate the target before writing `file_name` into `root`.
///
/// # Rules
/// - `root` must be a directory or not exist yet
/// - `root/file_name` must not exist (an existing config is never overwritten)
pub fn validate_target(root: &Path, file_name: &Path) -> Result<()> {
    if root.exists() && !root.is_dir() {
        bail!("'{}' exists and is not a directory.", root.display());
    }

    let path = root.join(file_name);
    if path.exists() {
        bail!(
            "'{}' already exists.\n\
             Remove it first or use `moments init --dry` to print the defaults.",
            path.display()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const NAME: &str = "moments.toml";

    #[test]
    fn test_empty_dir() {
        let temp = TempDir::new().unwrap();
        assert!(validate_target(temp.path(), Path::new(NAME)).is_ok());
    }

    #[test]
    fn test_missing_dir() {
        let temp = TempDir::new().unwrap();
        assert!(validate_target(&temp.path().join("new"), Path::new(NAME)).is_ok());
    }

    #[test]
    fn test_existing_config() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(NAME), "").unwrap();
        let err = validate_target(temp.path(), Path::new(NAME)).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn test_other_files_are_fine() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("README.md"), "hello").unwrap();
        assert!(validate_target(temp.path(), Path::new(NAME)).is_ok());
    }

    #[test]
    fn test_root_is_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("blog");
        fs::write(&file, "").unwrap();
        assert!(validate_target(&file, Path::new(NAME)).is_err());
    }
}
