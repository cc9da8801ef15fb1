//! Settings panel controller.
//!
//! Every user action is one read-modify-write against the [`SettingsStore`],
//! optionally gated by a [`KeyValidator`] round-trip. The controller owns no
//! view state of its own; it updates a [`PanelState`] and reports outcomes
//! through a [`Notifier`].

mod credential;

use credential::CredentialTransaction;

use std::sync::Arc;

use serde_json::Value;

use crate::components::Notifier;
use crate::error::{PanelError, Result};
use crate::panel::{PanelState, SAVING_MESSAGE, VALIDATING_MESSAGE};
use crate::settings::{ThemeMode, TranslationSettings};
use crate::store::{
    SecretString, SettingsStore, API_KEY_KEY, THEME_MODE_KEY, TRANSLATION_SETTINGS_KEY,
};
use crate::validator::KeyValidator;

pub const EMPTY_KEY_MESSAGE: &str = "Please enter your API key";
pub const KEY_SAVED_MESSAGE: &str = "API key saved successfully";
pub const REMOVE_FAILED_MESSAGE: &str = "Failed to remove API key";
pub const SETTINGS_SAVED_MESSAGE: &str = "Settings saved successfully";
pub const SETTINGS_FAILED_MESSAGE: &str = "Failed to save settings";

#[derive(Clone)]
pub struct SettingsController {
    store: Arc<dyn SettingsStore>,
    validator: Arc<dyn KeyValidator>,
}

impl SettingsController {
    pub fn new(store: Arc<dyn SettingsStore>, validator: Arc<dyn KeyValidator>) -> Self {
        Self { store, validator }
    }

    /// Load stored state into the panel. Without a credential the panel
    /// switches to onboarding and translation settings are left unread.
    pub async fn initialize(&self, panel: &mut PanelState) {
        let theme = self.read(THEME_MODE_KEY).await;
        panel.theme_mode = ThemeMode::from_stored(theme.as_ref());

        let credential = self.read(API_KEY_KEY).await;
        if !credential_present(credential.as_ref()) {
            tracing::info!("No API key stored, showing onboarding");
            panel.navigate_to_onboarding();
            return;
        }

        panel.navigate_to_settings();
        panel.key_configured = true;
        panel.editor_visible = false;

        let stored = self.read(TRANSLATION_SETTINGS_KEY).await;
        panel.apply_translation_settings(TranslationSettings::from_stored(stored.as_ref()));
        tracing::debug!(style = %panel.style, level = %panel.level, "Panel initialized");
    }

    /// Flip the theme and persist it. A failed write leaves the new theme
    /// applied on screen.
    pub async fn toggle_theme(&self, panel: &mut PanelState) {
        panel.theme_mode = panel.theme_mode.toggled();
        let value = Value::String(panel.theme_mode.as_str().to_string());
        if let Err(e) = self.store.set(THEME_MODE_KEY, value).await {
            tracing::warn!("Failed to persist theme mode: {}", e);
        }
    }

    pub fn toggle_credential_visibility(&self, panel: &mut PanelState) {
        panel.credential_masked = !panel.credential_masked;
    }

    /// First step of a credential save: check the input and show the
    /// loading line. Returns the trimmed candidate to validate, or `None`
    /// when nothing should be sent.
    pub fn begin_credential_save(
        &self,
        panel: &mut PanelState,
        notifier: &mut dyn Notifier,
    ) -> Option<SecretString> {
        if panel.validation_pending {
            tracing::debug!("Save ignored, validation already in flight");
            return None;
        }

        let trimmed = panel.credential_input.trim();
        if trimmed.is_empty() {
            notifier.error(&PanelError::UserInput(EMPTY_KEY_MESSAGE.to_string()).to_string());
            return None;
        }

        let candidate = SecretString::new(trimmed);
        panel.set_loading(VALIDATING_MESSAGE);
        panel.validation_pending = true;
        Some(candidate)
    }

    /// Tentative write, one validation request, then commit or rollback.
    pub async fn save_credential(&self, candidate: SecretString) -> Result<()> {
        let pending = CredentialTransaction::new(self.store.clone())
            .tentative_write(&candidate)
            .await?;
        let outcome = self.validator.validate(&candidate).await;
        pending.confirm_or_rollback(outcome).await
    }

    /// Apply the outcome of [`save_credential`](Self::save_credential).
    /// Returns true when the key was saved.
    pub fn finish_credential_save(
        &self,
        panel: &mut PanelState,
        notifier: &mut dyn Notifier,
        outcome: Result<()>,
    ) -> bool {
        panel.clear_loading();
        panel.validation_pending = false;

        match outcome {
            Ok(()) => {
                notifier.success(KEY_SAVED_MESSAGE);
                panel.clear_credential_input();
                panel.editor_visible = false;
                panel.key_configured = true;
                true
            }
            Err(e) => {
                notifier.error(&e.to_string());
                false
            }
        }
    }

    /// Whole save flow awaited inline.
    #[cfg(test)]
    pub async fn validate_and_save_credential(
        &self,
        panel: &mut PanelState,
        notifier: &mut dyn Notifier,
    ) -> bool {
        let Some(candidate) = self.begin_credential_save(panel, notifier) else {
            return false;
        };
        let outcome = self.save_credential(candidate).await;
        self.finish_credential_save(panel, notifier, outcome)
    }

    pub fn reveal_credential_editor(&self, panel: &mut PanelState) {
        panel.editor_visible = true;
        panel.focus = crate::panel::PanelFocus::CredentialInput;
    }

    /// Delete the stored key and return to onboarding. Ignored while a
    /// save is still validating.
    pub async fn remove_credential(&self, panel: &mut PanelState, notifier: &mut dyn Notifier) {
        if panel.validation_pending {
            tracing::debug!("Remove ignored, validation in flight");
            return;
        }

        match self.store.remove(API_KEY_KEY).await {
            Ok(()) => {
                tracing::info!("API key removed");
                panel.navigate_to_onboarding();
            }
            Err(e) => {
                tracing::error!("Error removing API key: {}", e);
                notifier.error(REMOVE_FAILED_MESSAGE);
            }
        }
    }

    /// Write both selector values verbatim as one record. While a key is
    /// validating the loading line keeps showing that instead.
    pub async fn save_translation_settings(
        &self,
        panel: &mut PanelState,
        notifier: &mut dyn Notifier,
    ) {
        let owns_loading = !panel.validation_pending;
        if owns_loading {
            panel.set_loading(SAVING_MESSAGE);
        }
        let result = self.write_translation_settings(&panel.translation_settings()).await;
        if owns_loading {
            panel.clear_loading();
        }

        match result {
            Ok(()) => notifier.success(SETTINGS_SAVED_MESSAGE),
            Err(e) => {
                tracing::error!("Error saving settings: {}", e);
                notifier.error(SETTINGS_FAILED_MESSAGE);
            }
        }
    }

    async fn write_translation_settings(&self, settings: &TranslationSettings) -> Result<()> {
        let value =
            serde_json::to_value(settings).map_err(|e| PanelError::Persistence(e.to_string()))?;
        self.store
            .set(TRANSLATION_SETTINGS_KEY, value)
            .await
            .map_err(|e| PanelError::Persistence(e.to_string()))
    }

    /// Read errors are treated as absence.
    async fn read(&self, key: &str) -> Option<Value> {
        match self.store.get(key).await {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", key, e);
                None
            }
        }
    }
}

/// An empty string or null counts as no credential.
fn credential_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::Value;
    use tokio::sync::Notify;

    use crate::components::Notifier;
    use crate::store::{MemoryStore, SecretString, SettingsStore, StoreError};
    use crate::validator::{KeyValidator, ValidationError};

    /// Wraps a [`MemoryStore`] and records every key that was read.
    #[derive(Default)]
    pub struct RecordingStore {
        pub inner: MemoryStore,
        reads: Mutex<Vec<String>>,
    }

    impl RecordingStore {
        pub fn new(inner: MemoryStore) -> Self {
            Self {
                inner,
                reads: Mutex::new(Vec::new()),
            }
        }

        pub fn reads(&self) -> Vec<String> {
            self.reads.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SettingsStore for RecordingStore {
        async fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
            self.reads.lock().unwrap().push(key.to_string());
            self.inner.get(key).await
        }

        async fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
            self.inner.set(key, value).await
        }

        async fn remove(&self, key: &str) -> Result<(), StoreError> {
            self.inner.remove(key).await
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum FailOn {
        Get,
        Set,
        Remove,
    }

    /// Store whose chosen operation always fails.
    pub struct FailingStore {
        pub inner: MemoryStore,
        fail_on: FailOn,
        removes: AtomicUsize,
    }

    impl FailingStore {
        pub fn new(fail_on: FailOn) -> Self {
            Self {
                inner: MemoryStore::new(),
                fail_on,
                removes: AtomicUsize::new(0),
            }
        }

        pub fn remove_calls(&self) -> usize {
            self.removes.load(Ordering::SeqCst)
        }

        fn check(&self, op: FailOn) -> Result<(), StoreError> {
            if self.fail_on == op {
                Err(StoreError::Unavailable(format!("{:?} disabled", op)))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl SettingsStore for FailingStore {
        async fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
            self.check(FailOn::Get)?;
            self.inner.get(key).await
        }

        async fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
            self.check(FailOn::Set)?;
            self.inner.set(key, value).await
        }

        async fn remove(&self, key: &str) -> Result<(), StoreError> {
            self.removes.fetch_add(1, Ordering::SeqCst);
            self.check(FailOn::Remove)?;
            self.inner.remove(key).await
        }
    }

    /// Validator returning a fixed outcome and counting calls.
    pub struct ScriptedValidator {
        outcome: Result<(), ValidationError>,
        calls: AtomicUsize,
        last_key: Mutex<Option<String>>,
    }

    impl ScriptedValidator {
        pub fn accepting() -> Self {
            Self::with_outcome(Ok(()))
        }

        pub fn rejecting(status: u16, message: &str) -> Self {
            Self::with_outcome(Err(ValidationError::Rejected {
                status,
                message: message.to_string(),
            }))
        }

        pub fn unreachable(message: &str) -> Self {
            Self::with_outcome(Err(ValidationError::Network {
                message: message.to_string(),
            }))
        }

        fn with_outcome(outcome: Result<(), ValidationError>) -> Self {
            Self {
                outcome,
                calls: AtomicUsize::new(0),
                last_key: Mutex::new(None),
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        pub fn last_key(&self) -> Option<String> {
            self.last_key.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl KeyValidator for ScriptedValidator {
        async fn validate(&self, api_key: &SecretString) -> Result<(), ValidationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_key.lock().unwrap() = Some(api_key.expose().to_string());
            self.outcome.clone()
        }
    }

    /// Validator that accepts, but only after [`release`](Self::release).
    #[derive(Default)]
    pub struct GatedValidator {
        entered: Notify,
        gate: Notify,
    }

    impl GatedValidator {
        /// Resolves once a validation request is waiting on the gate.
        pub async fn wait_until_entered(&self) {
            self.entered.notified().await;
        }

        pub fn release(&self) {
            self.gate.notify_one();
        }
    }

    #[async_trait]
    impl KeyValidator for GatedValidator {
        async fn validate(&self, _api_key: &SecretString) -> Result<(), ValidationError> {
            self.entered.notify_one();
            self.gate.notified().await;
            Ok(())
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Toast {
        Success(String),
        Error(String),
    }

    #[derive(Default)]
    pub struct RecordingNotifier {
        pub toasts: Vec<Toast>,
    }

    impl Notifier for RecordingNotifier {
        fn success(&mut self, message: &str) {
            self.toasts.push(Toast::Success(message.to_string()));
        }

        fn error(&mut self, message: &str) {
            self.toasts.push(Toast::Error(message.to_string()));
        }
    }
}
