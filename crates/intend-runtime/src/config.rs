use crate::{Error, Result};
use intend_engine::DEFAULT_TOP_N;
use intend_types::Lexicon;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Resolve the workspace data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. INTEND_PATH environment variable (with tilde expansion)
/// 3. XDG data directory (recommended default)
/// 4. ~/.intend (fallback for systems without XDG)
pub fn resolve_workspace_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("INTEND_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("intend"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".intend"));
    }

    Err(Error::Config(
        "Could not determine workspace path: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

fn default_database() -> String {
    "intend.db".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconConfig {
    /// External lexicon file; relative paths are resolved against the
    /// data directory. The built-in lexicon is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_database")]
    pub database: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database: default_database(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub analyzer: AnalyzerConfig,
    #[serde(default)]
    pub lexicon: LexiconConfig,
    #[serde(default)]
    pub store: StoreConfig,
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

    pub fn validate(&self) -> Result<()> {
        if self.analyzer.top_n == 0 {
            return Err(Error::Config("analyzer.top_n must be at least 1".to_string()));
        }
        if self.store.database.trim().is_empty() {
            return Err(Error::Config("store.database must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn database_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.store.database)
    }

    /// Lexicon path after resolving it against `data_dir`
    pub fn lexicon_path(&self, data_dir: &Path) -> Option<PathBuf> {
        self.lexicon.path.as_ref().map(|path| {
            if path.is_absolute() {
                path.clone()
            } else {
                data_dir.join(path)
            }
        })
    }

    pub fn load_lexicon(&self, data_dir: &Path) -> Result<Lexicon> {
        match self.lexicon_path(data_dir) {
            Some(path) => crate::lexicon::load_lexicon(&path),
            None => Ok(Lexicon::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.analyzer.top_n, DEFAULT_TOP_N);
        assert_eq!(config.store.database, "intend.db");
        assert!(config.lexicon.path.is_none());
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");

        let mut config = Config::default();
        config.analyzer.top_n = 8;
        config.lexicon.path = Some(PathBuf::from("lexicon.toml"));

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);
        assert_eq!(
            loaded.lexicon_path(temp_dir.path()),
            Some(temp_dir.path().join("lexicon.toml"))
        );

        Ok(())
    }

    #[test]
    fn test_partial_config_fills_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[analyzer]\ntop_n = 3\n")?;

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.analyzer.top_n, 3);
        assert_eq!(config.store, StoreConfig::default());
        Ok(())
    }

    #[test]
    fn test_zero_top_n_rejected() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[analyzer]\ntop_n = 0\n")?;

        assert!(matches!(Config::load_from(&config_path), Err(Error::Config(_))));
        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path)?;
        assert_eq!(config, Config::default());

        Ok(())
    }

    #[test]
    fn test_builtin_lexicon_when_unset() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let lexicon = Config::default().load_lexicon(temp_dir.path())?;
        assert_eq!(lexicon, Lexicon::default());
        Ok(())
    }

    #[test]
    fn test_expand_tilde_leaves_plain_paths() {
        assert_eq!(expand_tilde("/tmp/intend"), PathBuf::from("/tmp/intend"));
        assert_eq!(expand_tilde("relative"), PathBuf::from("relative"));
    }
}
