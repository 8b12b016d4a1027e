use crate::{Error, Result};
use linkhub_engine::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Terminal width (columns) below which the hub switches to paged mode
pub const DEFAULT_NARROW_WIDTH: u16 = 80;

/// Resolve the data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. LINKHUB_PATH environment variable (with tilde expansion)
/// 3. XDG data directory
/// 4. ~/.linkhub (fallback for systems without XDG)
pub fn resolve_workspace_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("LINKHUB_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("linkhub"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".linkhub"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(stripped);
        }
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Links file; relative paths resolve against the data directory
    pub source: PathBuf,
    pub page_size: usize,
    pub narrow_width: u16,
    /// Heading shown above the links
    pub name: String,
    pub tagline: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: PathBuf::from("links.csv"),
            page_size: DEFAULT_PAGE_SIZE,
            narrow_width: DEFAULT_NARROW_WIDTH,
            name: "Link Hub".to_string(),
            tagline: "Links worth keeping close.".to_string(),
        }
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join("config.toml")
    }

    /// Absolute location of the links file.
    pub fn source_path(&self, data_dir: &Path) -> PathBuf {
        let source = expand_tilde(&self.source.to_string_lossy());
        if source.is_absolute() {
            source
        } else {
            data_dir.join(source)
        }
    }

    fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::Config("page_size must be at least 1".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.page_size, 5);
        assert_eq!(config.narrow_width, 80);
        assert_eq!(config.source, PathBuf::from("links.csv"));
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = Config::path_in(temp_dir.path());

        let config = Config {
            source: PathBuf::from("/srv/links.csv"),
            page_size: 8,
            narrow_width: 100,
            name: "Ada".to_string(),
            ..Config::default()
        };
        config.save_to(&config_path)?;

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);
        Ok(())
    }

    #[test]
    fn test_partial_file_fills_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = Config::path_in(temp_dir.path());
        std::fs::write(&config_path, "page_size = 3\n")?;

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded.page_size, 3);
        assert_eq!(loaded.narrow_width, DEFAULT_NARROW_WIDTH);
        Ok(())
    }

    #[test]
    fn test_zero_page_size_is_rejected() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = Config::path_in(temp_dir.path());
        std::fs::write(&config_path, "page_size = 0\n")?;

        assert!(matches!(
            Config::load_from(&config_path),
            Err(Error::Config(_))
        ));
        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = Config::load_from(&temp_dir.path().join("nonexistent.toml"))?;
        assert_eq!(config, Config::default());
        Ok(())
    }

    #[test]
    fn test_source_path_resolution() {
        let data_dir = Path::new("/data/linkhub");
        let config = Config::default();
        assert_eq!(
            config.source_path(data_dir),
            PathBuf::from("/data/linkhub/links.csv")
        );

        let absolute = Config {
            source: PathBuf::from("/etc/links.csv"),
            ..Config::default()
        };
        assert_eq!(absolute.source_path(data_dir), PathBuf::from("/etc/links.csv"));
    }

    #[test]
    fn test_resolve_explicit_path() -> Result<()> {
        let path = resolve_workspace_path(Some("/tmp/hub"))?;
        assert_eq!(path, PathBuf::from("/tmp/hub"));
        Ok(())
    }
}
