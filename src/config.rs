use crate::domain::{Category, Priority};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// User settings stored in config.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Event loop tick in milliseconds
    pub tick_ms: u64,
    /// Emoji glyphs (false falls back to ASCII)
    pub use_emoji: bool,
    /// Hour of the due day when the reminder fires
    pub reminder_hour: u32,
    /// How long the completion celebration plays
    pub celebration_ms: u64,
    /// Step of the +/- progress keys
    pub progress_step: u8,
    /// Preselected category for new tasks
    pub default_category: Option<Category>,
    /// Preselected priority for new tasks
    pub default_priority: Option<Priority>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_ms: 250,
            use_emoji: true,
            reminder_hour: 9,
            celebration_ms: 2000,
            progress_step: 10,
            default_category: None,
            default_priority: None,
        }
    }
}

impl Config {
    /// Load config from `path`, or defaults if the file doesn't exist
    #[tracing::instrument]
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config: {}", path.display()))?;
        config.validate()?;

        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.reminder_hour > 23 {
            anyhow::bail!("reminder_hour must be 0..=23, got {}", self.reminder_hour);
        }
        if self.progress_step == 0 || self.progress_step > 100 {
            anyhow::bail!("progress_step must be 1..=100, got {}", self.progress_step);
        }
        if self.tick_ms == 0 {
            anyhow::bail!("tick_ms must be positive");
        }
        Ok(())
    }

    /// Number of ticks the celebration stays on screen (at least one)
    pub fn celebration_ticks(&self) -> u32 {
        let ticks = (self.celebration_ms / self.tick_ms.max(1)).max(1);
        u32::try_from(ticks).unwrap_or(u32::MAX)
    }
}

/// Default config location: <config dir>/listo/config.json
pub fn default_config_path() -> Result<PathBuf> {
    let dir = dirs::config_dir().context("Could not determine config directory")?;
    Ok(dir.join("listo").join("config.json"))
}

/// Write a default config file, refusing to overwrite an existing one
pub fn init_config(path: &Path) -> Result<()> {
    if path.exists() {
        anyhow::bail!("Config already exists: {}", path.display());
    }
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }

    let json = serde_json::to_string_pretty(&Config::default())?;
    atomic_write(path, &json)
}

/// Atomically write content to a file using temp file + rename
fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let dir = path
        .parent()
        .context("File path has no parent directory")?;

    let mut temp_file = NamedTempFile::new_in(dir)
        .context("Failed to create temporary file")?;

    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temporary file")?;

    temp_file
        .as_file()
        .sync_all()
        .context("Failed to sync temporary file")?;

    temp_file
        .persist(path)
        .with_context(|| format!("Failed to persist file: {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_load_nonexistent_config() {
        let temp_dir = tempdir().unwrap();
        let config = Config::load(&temp_dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.reminder_hour, 9);
    }

    #[test]
    fn test_init_and_load_config() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("nested").join("config.json");

        init_config(&path).unwrap();
        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded, Config::default());

        // Second init must not clobber the file
        assert!(init_config(&path).is_err());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(
            &path,
            r#"{ "use_emoji": false, "default_priority": "urgent", "default_category": "health" }"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert!(!config.use_emoji);
        assert_eq!(config.default_priority, Some(Priority::Urgent));
        assert_eq!(config.default_category, Some(Category::Health));
        assert_eq!(config.tick_ms, 250);
    }

    #[test]
    fn test_invalid_reminder_hour() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{ "reminder_hour": 24 }"#).unwrap();

        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn test_invalid_progress_step() {
        let config = Config {
            progress_step: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_celebration_ticks() {
        let config = Config::default();
        assert_eq!(config.celebration_ticks(), 8);

        let config = Config {
            celebration_ms: 10,
            ..Config::default()
        };
        assert_eq!(config.celebration_ticks(), 1);
    }

    #[test]
    fn test_celebration_ticks_saturate() {
        let config = Config {
            celebration_ms: u64::MAX,
            tick_ms: 1,
            ..Config::default()
        };
        assert_eq!(config.celebration_ticks(), u32::MAX);
    }
}
