use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://firestore.googleapis.com/v1";
pub const DEFAULT_MANAGEMENT_URL: &str = "https://firebase.googleapis.com/v1beta1";
pub const DEFAULT_TOKEN_ENV: &str = "FIRETREE_TOKEN";
pub const DEFAULT_PAGE_SIZE: u32 = 50;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub theme: ThemeConfig,
    pub icons: IconConfig,
    pub store: StoreConfig,
}

/// Style specs are lists of color names, `#rrggbb`, 256-color indices, or
/// attributes (`bold`, `underline`, `reverse`, `dim`, `italic`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeConfig {
    pub active_border_color: Vec<String>,
    pub inactive_border_color: Vec<String>,
    pub options_text_color: Vec<String>,
    pub selected_line_bg_color: Vec<String>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            active_border_color: vec!["green".to_string(), "bold".to_string()],
            inactive_border_color: vec!["white".to_string()],
            options_text_color: vec!["blue".to_string()],
            selected_line_bg_color: vec!["blue".to_string()],
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IconConfig {
    pub nerd_fonts_version: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StoreConfig {
    pub base_url: String,
    pub management_url: String,
    pub token: Option<String>,
    pub token_env: String,
    pub page_size: u32,
    pub projects: Vec<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            management_url: DEFAULT_MANAGEMENT_URL.to_string(),
            token: None,
            token_env: DEFAULT_TOKEN_ENV.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            projects: Vec::new(),
        }
    }
}

impl StoreConfig {
    pub fn is_emulator(&self) -> bool {
        let url = self.base_url.trim_start_matches("http://");
        url.starts_with("localhost") || url.starts_with("127.0.0.1")
    }
}

/// `~/.firetree`
pub fn firetree_home() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".firetree"))
}

pub fn default_config_path() -> Option<PathBuf> {
    firetree_home().map(|h| h.join("config.json"))
}

impl AppConfig {
    /// Loads `path` (or the default location). A missing file yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match default_config_path() {
                Some(p) => p,
                None => return Ok(Self::default()),
            },
        };
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file; using defaults");
            return Ok(Self::default());
        }
        Self::read(&path)
    }

    pub fn read(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).with_context(|| format!("read {}", path.display()))?;
        let mut cfg: AppConfig = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse config {}", path.display()))?;
        if cfg.store.page_size == 0 {
            cfg.store.page_size = DEFAULT_PAGE_SIZE;
        }
        Ok(cfg)
    }
}
