use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::validation::{PasswordRules, UsernameRules};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigSortOrder {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// History file or directory
    #[serde(default)]
    pub file: Option<PathBuf>,
    #[serde(default)]
    pub no_color: bool,
    #[serde(default)]
    pub debug: bool,
    #[serde(default)]
    pub order: Option<ConfigSortOrder>,
    #[serde(default)]
    pub color: Option<ConfigColorMode>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub username: UsernameRules,
    #[serde(default)]
    pub password: PasswordRules,
}

impl Config {
    pub fn load() -> Self {
        Self::load_internal(false)
    }

    pub fn load_quiet() -> Self {
        Self::load_internal(true)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    fn load_internal(quiet: bool) -> Self {
        for path in Self::get_config_paths() {
            if let Some(config) = Self::load_file(&path, quiet) {
                return config;
            }
        }

        Self::default()
    }

    fn load_file(path: &Path, quiet: bool) -> Option<Self> {
        let content = fs::read_to_string(path).ok()?;
        match Self::from_toml_str(&content) {
            Ok(config) => {
                if !quiet {
                    eprintln!("Loaded config from {}", path.display());
                }
                Some(config)
            }
            Err(e) => {
                if !quiet {
                    eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                }
                None
            }
        }
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/liftlog/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("liftlog").join("config.toml"));
        }

        // 2. Platform config dir (e.g. ~/Library/Application Support on macOS)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("liftlog").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.liftlog.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".liftlog.toml"));
        }

        paths
    }

    /// Default history location: ~/.liftlog/history
    pub fn default_history_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".liftlog").join("history"))
    }
}
