use std::path::PathBuf;

use tokio::sync::RwLock;

use crate::fs::write_theme_file;
use crate::types::ThemeConfig;

const THEME_FILE: &str = "theme.json";

/// Persistent theme store: one JSON file under the widget's data directory.
///
/// The file holds whatever was last written, possibly a sparse or foreign
/// object, and the recognized options are resolved by merging it over the
/// defaults on every read. Loading is therefore total: a missing file means
/// defaults, a torn value falls back to defaults.
pub struct ThemeStore {
    path: PathBuf,
    lock: RwLock<()>,
}

impl ThemeStore {
    pub fn new(base: PathBuf) -> Self {
        Self {
            path: base.join(THEME_FILE),
            lock: RwLock::new(()),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    async fn read_or_default(&self) -> crate::Result<serde_json::Value> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(serde_json::json!({})),
            Err(e) => Err(e.into()),
        }
    }

    /// Resolve the current theme: stored JSON merged over the defaults.
    pub async fn load(&self) -> crate::Result<ThemeConfig> {
        let _guard = self.lock.read().await;
        Ok(resolve_theme(self.read_or_default().await?))
    }

    /// Merge `updates` over the stored JSON and persist; returns the
    /// resolved theme after the update.
    pub async fn update(&self, updates: serde_json::Value) -> crate::Result<ThemeConfig> {
        let _guard = self.lock.write().await;

        let existing = self.read_or_default().await?;
        let merged = merge_values(existing, updates);

        write_theme_file(&self.path, &merged).await?;
        Ok(resolve_theme(merged))
    }

    /// Back to defaults: the stored file is removed entirely.
    pub async fn reset(&self) -> crate::Result<()> {
        let _guard = self.lock.write().await;

        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Pretty JSON of the resolved theme, for sharing.
    pub async fn export(&self) -> crate::Result<String> {
        let _guard = self.lock.read().await;
        let theme = resolve_theme(self.read_or_default().await?);
        Ok(serde_json::to_string_pretty(&theme)?)
    }

    /// Replace the stored JSON with `json` wholesale. Accepts arbitrary
    /// JSON: unrecognized keys ride along, recognized ones override the
    /// defaults on resolve. Returns `false` and leaves the store untouched
    /// when the input does not parse or the write fails.
    pub async fn import(&self, json: &str) -> bool {
        let value: serde_json::Value = match serde_json::from_str(json) {
            Ok(value) => value,
            Err(error) => {
                tracing::warn!(%error, "theme_import_rejected");
                return false;
            }
        };

        let _guard = self.lock.write().await;
        match write_theme_file(&self.path, &value).await {
            Ok(()) => true,
            Err(error) => {
                tracing::warn!(%error, "theme_import_write_failed");
                false
            }
        }
    }
}

/// Merge two JSON values the way the settings file expects: objects merge
/// key-wise with incoming keys winning, anything else is replaced outright.
fn merge_values(existing: serde_json::Value, incoming: serde_json::Value) -> serde_json::Value {
    match (existing, incoming) {
        (serde_json::Value::Object(mut existing_map), serde_json::Value::Object(incoming_map)) => {
            for (key, value) in incoming_map {
                existing_map.insert(key, value);
            }
            serde_json::Value::Object(existing_map)
        }
        (_, incoming) => incoming,
    }
}

fn resolve_theme(stored: serde_json::Value) -> ThemeConfig {
    let defaults =
        serde_json::to_value(ThemeConfig::default()).unwrap_or(serde_json::Value::Null);
    serde_json::from_value(merge_values(defaults, stored)).unwrap_or_default()
}
