use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::config::StoreConfig;

const EMULATOR_TOKEN: &str = "owner";

#[derive(Debug, Default, serde::Deserialize)]
struct FirebaseToolsConfig {
    #[serde(default)]
    tokens: Option<FirebaseToolsTokens>,
}

#[derive(Debug, serde::Deserialize)]
struct FirebaseToolsTokens {
    #[serde(default)]
    access_token: String,

    /// Milliseconds since the epoch.
    #[serde(default)]
    expires_at: i64,
}

/// Explicit token, then `$token_env`, then the emulator token, then a live
/// firebase-tools access token.
pub fn resolve_token(cfg: &StoreConfig) -> Result<String> {
    if let Some(token) = cfg.token.as_deref().filter(|t| !t.is_empty()) {
        return Ok(token.to_string());
    }
    if let Ok(token) = std::env::var(&cfg.token_env) {
        if !token.trim().is_empty() {
            return Ok(token.trim().to_string());
        }
    }
    if cfg.is_emulator() {
        return Ok(EMULATOR_TOKEN.to_string());
    }
    if let Some(path) = firebase_tools_path().filter(|p| p.exists()) {
        if let Some(token) = read_firebase_tools_token(&path)? {
            return Ok(token);
        }
    }
    anyhow::bail!(
        "no credentials (set {} or store.token, or run `firebase login`)",
        cfg.token_env
    )
}

fn firebase_tools_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| {
        h.join(".config")
            .join("configstore")
            .join("firebase-tools.json")
    })
}

fn read_firebase_tools_token(path: &std::path::Path) -> Result<Option<String>> {
    let bytes = std::fs::read(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: FirebaseToolsConfig = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse {}", path.display()))?;
    let Some(tokens) = cfg.tokens else {
        return Ok(None);
    };
    let now_ms = time::OffsetDateTime::now_utc().unix_timestamp() * 1000;
    if tokens.access_token.is_empty() || tokens.expires_at <= now_ms {
        tracing::warn!("firebase-tools access token missing or expired");
        return Ok(None);
    }
    Ok(Some(tokens.access_token))
}
