// Two-phase credential save: write the candidate, then keep or roll it back
// depending on the validation outcome.

use std::sync::Arc;

use serde_json::Value;

use crate::error::{PanelError, Result};
use crate::store::{SecretString, SettingsStore, API_KEY_KEY};
use crate::validator::ValidationError;

pub struct CredentialTransaction {
    store: Arc<dyn SettingsStore>,
}

impl CredentialTransaction {
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        Self { store }
    }

    /// Store `candidate` ahead of validation.
    ///
    /// If the write itself fails, a partial entry may still exist, so a
    /// best-effort remove runs before the error is returned.
    pub async fn tentative_write(self, candidate: &SecretString) -> Result<PendingCredential> {
        let value = Value::String(candidate.expose().to_string());
        if let Err(e) = self.store.set(API_KEY_KEY, value).await {
            tracing::error!("Tentative credential write failed: {}", e);
            if let Err(cleanup) = self.store.remove(API_KEY_KEY).await {
                tracing::warn!("Cleanup after failed credential write failed: {}", cleanup);
            }
            return Err(PanelError::Persistence(e.to_string()));
        }

        tracing::debug!("Credential written tentatively");
        Ok(PendingCredential { store: self.store })
    }
}

/// A credential that is in the store but not yet confirmed.
#[must_use = "a pending credential must be confirmed or rolled back"]
pub struct PendingCredential {
    store: Arc<dyn SettingsStore>,
}

impl PendingCredential {
    /// Keep the stored credential on success. On failure remove it and
    /// return the validation error, even if the removal itself fails.
    pub async fn confirm_or_rollback(
        self,
        outcome: std::result::Result<(), ValidationError>,
    ) -> Result<()> {
        match outcome {
            Ok(()) => {
                tracing::info!("API key validated and saved");
                Ok(())
            }
            Err(err) => {
                tracing::warn!("API key validation failed: {}", err);
                if let Err(e) = self.store.remove(API_KEY_KEY).await {
                    tracing::error!("Rollback of rejected credential failed: {}", e);
                }
                Err(PanelError::Validation(err))
            }
        }
    }
}
