use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use super::{SettingsStore, StoreError};

/// Stores values in the OS keyring (Secret Service on Linux), one entry per
/// key. Values are kept as JSON text so non-string values round-trip.
pub struct KeyringStore {
    service: String,
}

impl KeyringStore {
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    fn entry(service: &str, key: &str) -> Result<keyring::Entry, StoreError> {
        keyring::Entry::new(service, key)
            .map_err(|e| StoreError::Keyring(format!("Failed to create keyring entry: {}", e)))
    }

    async fn blocking<T, F>(&self, key: &str, op: F) -> Result<T, StoreError>
    where
        T: Send + 'static,
        F: FnOnce(keyring::Entry) -> Result<T, StoreError> + Send + 'static,
    {
        let entry = Self::entry(&self.service, key)?;
        tokio::task::spawn_blocking(move || op(entry))
            .await
            .map_err(|e| StoreError::Unavailable(format!("Keyring task failed: {}", e)))?
    }
}

fn decode(raw: String) -> Value {
    serde_json::from_str(&raw).unwrap_or(Value::String(raw))
}

#[async_trait]
impl SettingsStore for KeyringStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        self.blocking(key, |entry| match entry.get_password() {
            Ok(raw) => Ok(Some(decode(raw))),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(StoreError::Keyring(format!(
                "Failed to retrieve key from keyring: {}",
                e
            ))),
        })
        .await
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        let raw = value.to_string();
        self.blocking(key, move |entry| {
            entry
                .set_password(&raw)
                .map_err(|e| StoreError::Keyring(format!("Failed to store key in keyring: {}", e)))
        })
        .await
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.blocking(key, |entry| match entry.delete_credential() {
            Ok(()) => Ok(()),
            Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(StoreError::Keyring(format!(
                "Failed to delete key from keyring: {}",
                e
            ))),
        })
        .await
    }
}

/// Sends secret keys to one store and everything else to another.
pub struct RoutedStore {
    settings: Arc<dyn SettingsStore>,
    secrets: Arc<dyn SettingsStore>,
    secret_keys: Vec<String>,
}

impl RoutedStore {
    pub fn new(
        settings: Arc<dyn SettingsStore>,
        secrets: Arc<dyn SettingsStore>,
        secret_keys: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            settings,
            secrets,
            secret_keys: secret_keys.into_iter().map(Into::into).collect(),
        }
    }

    fn route(&self, key: &str) -> &dyn SettingsStore {
        if self.secret_keys.iter().any(|k| k == key) {
            self.secrets.as_ref()
        } else {
            self.settings.as_ref()
        }
    }
}

#[async_trait]
impl SettingsStore for RoutedStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        self.route(key).get(key).await
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        self.route(key).set(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.route(key).remove(key).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, API_KEY_KEY, THEME_MODE_KEY};
    use serde_json::json;

    #[test]
    fn test_decode_json_and_plain_values() {
        assert_eq!(decode("\"gsk_abc\"".to_string()), json!("gsk_abc"));
        assert_eq!(decode("gsk_abc".to_string()), json!("gsk_abc"));
        assert_eq!(decode("{\"style\":\"direct\"}".to_string()), json!({"style": "direct"}));
    }

    #[tokio::test]
    async fn test_routed_store_splits_secret_keys() {
        let settings = Arc::new(MemoryStore::new());
        let secrets = Arc::new(MemoryStore::new());
        let routed = RoutedStore::new(settings.clone(), secrets.clone(), [API_KEY_KEY]);

        routed.set(API_KEY_KEY, json!("gsk_abc")).await.unwrap();
        routed.set(THEME_MODE_KEY, json!("dark")).await.unwrap();

        assert_eq!(secrets.get(API_KEY_KEY).await.unwrap(), Some(json!("gsk_abc")));
        assert!(settings.get(API_KEY_KEY).await.unwrap().is_none());
        assert_eq!(settings.get(THEME_MODE_KEY).await.unwrap(), Some(json!("dark")));
        assert!(secrets.get(THEME_MODE_KEY).await.unwrap().is_none());

        routed.remove(API_KEY_KEY).await.unwrap();
        assert!(routed.get(API_KEY_KEY).await.unwrap().is_none());
        assert_eq!(routed.get(THEME_MODE_KEY).await.unwrap(), Some(json!("dark")));
    }
}
