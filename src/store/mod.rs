//! Persistent key-value storage for panel settings.
//!
//! Every entity lives under its own key in one flat store, the way a browser
//! extension keeps `chrome.storage.local`:
//!
//! - `themeMode`: `"light"` or `"dark"`
//! - `groqApiKey`: the API key string
//! - `translationSettings`: `{ "style": ..., "level": ... }`
//!
//! Backends implement [`SettingsStore`]. The controller only ever sees the
//! trait, so tests inject a [`MemoryStore`].

mod file;
mod keychain;
mod memory;
mod secret;

use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

pub use file::JsonFileStore;
pub use keychain::{KeyringStore, RoutedStore};
pub use memory::MemoryStore;
pub use secret::SecretString;

pub const THEME_MODE_KEY: &str = "themeMode";
pub const API_KEY_KEY: &str = "groqApiKey";
pub const TRANSLATION_SETTINGS_KEY: &str = "translationSettings";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Storage file {path} is not a JSON object: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode value for {key}: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Keyring error: {0}")]
    Keyring(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Async key-value store with get/set/remove by key.
///
/// `set` replaces the whole value under `key`; composite records are written
/// as one unit.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;

    async fn set(&self, key: &str, value: Value) -> Result<(), StoreError>;

    /// Removing an absent key succeeds.
    async fn remove(&self, key: &str) -> Result<(), StoreError>;
}
