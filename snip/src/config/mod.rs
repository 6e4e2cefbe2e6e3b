//! Configuration loading and management.

mod config_data;
mod config_update;
mod markers;
mod shell;

use std::fs;
use std::path::{Path, PathBuf};

pub use config_data::Config;
pub use config_update::ConfigUpdate;
pub use markers::ScissorMarkers;
pub use shell::ShellConfig;
pub use crate::mode::Mode;

use crate::errors::{Result, SnipError};

/// Standard configuration file names to search for.
const CONFIG_FILES: &[&str] = &["snip.toml", ".snip.toml"];

/// Looks for a configuration file in `start_dir`, then in each ancestor.
///
/// Within one directory `snip.toml` wins over `.snip.toml`.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    start_dir
        .ancestors()
        .flat_map(|dir| CONFIG_FILES.iter().map(move |name| dir.join(name)))
        .find(|candidate| candidate.is_file())
}

/// Parses one configuration file, filling unset fields with defaults.
pub fn read_config_file(path: &Path) -> Result<Config> {
    let text = fs::read_to_string(path).map_err(|source| SnipError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let update: ConfigUpdate = toml::from_str(&text)?;
    Ok(update.merge_into(&Config::default()))
}

/// Loads the configuration that applies to `start_dir`.
pub fn read_config(start_dir: &Path) -> Result<Config> {
    let Some(path) = find_config_file(start_dir) else {
        return Ok(Config::default());
    };
    tracing::debug!("Using configuration {}", path.display());
    read_config_file(&path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_find_config_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("snip.toml");
        fs::write(&config_path, "preview_indent = 2").unwrap();

        let found = find_config_file(dir.path()).unwrap();
        assert_eq!(found, config_path);
    }

    #[test]
    fn test_find_config_file_parent() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(".snip.toml");
        fs::write(&config_path, "preview_indent = 2").unwrap();

        let subdir = dir.path().join("subdir");
        fs::create_dir(&subdir).unwrap();

        let found = find_config_file(&subdir).unwrap();
        assert_eq!(found, config_path);
    }

    #[test]
    fn test_read_config_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("snip.toml");
        fs::write(
            &config_path,
            r#"
source_patterns = ["BUILD.md"]
lenient_blockquotes = true

[shell]
program = "bash"
args = ["-e", "-c"]
"#,
        )
        .unwrap();

        let config = read_config_file(&config_path).unwrap();
        assert_eq!(config.source_patterns, vec!["BUILD.md"]);
        assert!(config.lenient_blockquotes);
        assert_eq!(config.shell.program, "bash");
        assert_eq!(config.mode, Mode::Execute);
    }

    #[test]
    fn test_read_config_default() {
        let dir = tempdir().unwrap();
        let config = read_config(dir.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_read_config_invalid() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("snip.toml");
        fs::write(&config_path, "preview_indent = \"wide\"").unwrap();

        let result = read_config_file(&config_path);
        assert!(matches!(result, Err(SnipError::TomlParse(_))));
    }

    #[test]
    fn test_plain_name_wins_over_hidden() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(".snip.toml"), "preview_indent = 1").unwrap();
        fs::write(dir.path().join("snip.toml"), "preview_indent = 2").unwrap();

        let config = read_config(dir.path()).unwrap();
        assert_eq!(config.preview_indent, 2);
    }

    #[test]
    fn test_read_config_file_missing() {
        let dir = tempdir().unwrap();
        let result = read_config_file(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(SnipError::Read { .. })));
    }
}
