use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use nestnote::logic::folder::RESERVED_CONFIG_FOLDER;
use nestnote::logic::plan::DEFAULT_EXTENSION;
use nestnote::submit::SubmitOptions;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Vault directory; the CLI argument wins, then the current directory
    pub vault_root: Option<PathBuf>,
    /// Extension appended to every note name (no dot)
    pub extension: String,
    /// Top-level folder never offered as a choice
    pub reserved_folder: String,
    /// Command used to open a created note, run as `<cmd> <path>`
    pub open_command: Option<String>,
    /// Content written into every new note
    pub initial_content: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vault_root: None,
            extension: DEFAULT_EXTENSION.to_string(),
            reserved_folder: RESERVED_CONFIG_FOLDER.to_string(),
            open_command: None,
            initial_content: String::new(),
        }
    }
}

impl Config {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty file deserializes to unit, not a map
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_yaml(&config_str)
            .with_context(|| format!("Failed to parse config {}", path.display()))
    }

    pub fn submit_options(&self) -> SubmitOptions {
        SubmitOptions {
            extension: self.extension.trim_start_matches('.').to_string(),
            initial_content: self.initial_content.clone(),
        }
    }
}

/// Determine the config file path with fallback logic
///
/// An explicit path must exist. Otherwise `<config_dir>/nestnote/config.yaml`
/// and then `./config.yaml` are tried; finding neither means defaults.
pub fn get_config_path(cli_path: Option<String>) -> Result<Option<PathBuf>> {
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(Some(p));
        }
        anyhow::bail!("Config file not found at specified path: {}", path);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("nestnote").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_yaml("").unwrap();
        assert_eq!(config.extension, "md");
        assert_eq!(config.reserved_folder, ".obsidian");
        assert!(config.vault_root.is_none());
        assert!(config.open_command.is_none());
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let config = Config::from_yaml("open_command: xdg-open\n").unwrap();
        assert_eq!(config.open_command.as_deref(), Some("xdg-open"));
        assert_eq!(config.extension, "md");
    }

    #[test]
    fn test_full_config() {
        let yaml = "vault_root: /home/me/notes\n\
                    extension: txt\n\
                    reserved_folder: .config\n\
                    initial_content: \"# New\\n\"\n";
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.vault_root, Some(PathBuf::from("/home/me/notes")));
        assert_eq!(config.reserved_folder, ".config");
        assert_eq!(config.submit_options().extension, "txt");
        assert_eq!(config.submit_options().initial_content, "# New\n");
    }

    #[test]
    fn test_extension_leading_dot_is_dropped() {
        let config = Config::from_yaml("extension: .md\n").unwrap();
        assert_eq!(config.submit_options().extension, "md");
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        assert!(Config::from_yaml("extension: [unclosed").is_err());
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        assert!(get_config_path(Some("/definitely/not/here.yaml".to_string())).is_err());
    }
}
