use std::path::PathBuf;

pub const APP_DIR_NAME: &str = "ImageToPDF";

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct UserPreferences {
    /// Directory the file picker opens in.
    #[serde(default)]
    pub last_directory: Option<PathBuf>,
}

impl UserPreferences {
    pub fn config_path() -> PathBuf {
        if let Some(config_dir) = dirs::config_dir() {
            config_dir.join(APP_DIR_NAME).join("preferences.json")
        } else {
            PathBuf::from("preferences.json")
        }
    }

    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &std::path::Path) -> Self {
        if let Ok(content) = std::fs::read_to_string(path) {
            match serde_json::from_str(&content) {
                Ok(prefs) => return prefs,
                Err(e) => log::warn!("Ignoring unreadable preferences {}: {e}", path.display()),
            }
        }
        Self::default()
    }

    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &std::path::Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preferences_persist() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.json");
        let prefs = UserPreferences {
            last_directory: Some(PathBuf::from("/home/user/Pictures")),
        };

        prefs.save_to(&path).unwrap();
        assert_eq!(UserPreferences::load_from(&path), prefs);
    }

    #[test]
    fn test_missing_or_corrupt_file_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        assert_eq!(UserPreferences::load_from(&path), UserPreferences::default());

        std::fs::write(&path, "{ not json").unwrap();
        assert_eq!(UserPreferences::load_from(&path), UserPreferences::default());
    }
}
