use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::prelude::*;

pub const DEFAULT_ADDRESS_FORMAT: &str = "{city}, {state_abbr}";

/// Persisted user settings.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
#[must_use]
pub struct Settings {
    /// Folder prefixes whose newly created notes get a location automatically.
    ///
    /// An empty list disables auto-add.
    pub auto_add_folders: Vec<String>,

    /// OpenCage API key. Empty disables address lookups.
    pub api_key: String,

    /// Template for the `address` value, with `{field}` placeholders.
    pub address_format: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            auto_add_folders: Vec::new(),
            api_key: String::new(),
            address_format: DEFAULT_ADDRESS_FORMAT.to_owned(),
        }
    }
}

impl Settings {
    /// Default settings location under the user's configuration directory.
    pub fn default_path() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("could not determine the configuration directory")?
            .join("geostamp")
            .join("settings.json"))
    }

    /// Load the settings, falling back to the defaults when the file does not
    /// exist. Missing fields take their default values.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("`{}` does not exist, using the defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse `{}`", path.display()))
    }

    /// Whether the path falls under any configured auto-add folder.
    ///
    /// Pure prefix matching, each folder normalized to end with `/`. No
    /// wildcard or glob semantics.
    pub fn is_auto_add_path(&self, path: &str) -> bool {
        self.auto_add_folders.iter().any(|folder| {
            let folder = folder.trim_end_matches('/');
            !folder.is_empty() && path.starts_with(&format!("{folder}/"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_folders(folders: &[&str]) -> Settings {
        Settings {
            auto_add_folders: folders.iter().map(|&folder| folder.to_owned()).collect(),
            ..Settings::default()
        }
    }

    #[test]
    fn prefix_matches_folder_boundary_ok() {
        let settings = with_folders(&["Journal"]);
        assert!(settings.is_auto_add_path("Journal/2024/note.md"));
        assert!(!settings.is_auto_add_path("JournalX/note.md"));
    }

    #[test]
    fn trailing_slash_is_normalized_ok() {
        let settings = with_folders(&["Journal/"]);
        assert!(settings.is_auto_add_path("Journal/note.md"));
        assert!(!settings.is_auto_add_path("Diary/note.md"));
    }

    #[test]
    fn empty_folder_list_disables_auto_add_ok() {
        assert!(!Settings::default().is_auto_add_path("Journal/note.md"));
    }

    #[test]
    fn partial_settings_file_takes_defaults_ok() -> Result {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("settings.json");
        // language=json
        fs::write(&path, r#"{"api_key": "secret"}"#)?;

        let settings = Settings::load(&path)?;
        assert_eq!(settings.api_key, "secret");
        assert!(settings.auto_add_folders.is_empty());
        assert_eq!(settings.address_format, DEFAULT_ADDRESS_FORMAT);
        Ok(())
    }

    #[test]
    fn missing_settings_file_yields_defaults_ok() -> Result {
        let dir = tempfile::tempdir()?;
        let settings = Settings::load(&dir.path().join("settings.json"))?;
        assert_eq!(settings, Settings::default());
        Ok(())
    }
}
