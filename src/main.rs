mod action;
mod app;
mod cli;
mod components;
mod config;
mod controller;
mod error;
mod event;
mod logging;
mod panel;
mod settings;
mod store;
mod validator;

use std::sync::Arc;

use cli::Cli;
use color_eyre::eyre::Result;
use config::{ConfigManager, CredentialBackend};
use controller::SettingsController;
use store::{JsonFileStore, KeyringStore, MemoryStore, RoutedStore, SettingsStore, API_KEY_KEY};
use validator::GroqValidator;

const KEYRING_SERVICE: &str = "hinglish-control";

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse_args();
    let config = ConfigManager::with_cli(&cli)?;

    let _log_guard = logging::init(&config.log_file(), &config.app_config().general.log_level)?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config_dir = %config.config_dir().display(),
        "Starting hinglish-control"
    );

    let store = open_store(&cli, &config);
    let validator = Arc::new(GroqValidator::new(&config.app_config().validation)?);
    tracing::debug!("Validating keys against {}", validator.endpoint());

    let controller = SettingsController::new(store, validator);

    let mut app = app::App::new(controller, config.app_config())?;
    app.initialize().await;
    app.run().await?;

    Ok(())
}

fn open_store(cli: &Cli, config: &ConfigManager) -> Arc<dyn SettingsStore> {
    if cli.ephemeral {
        tracing::info!("Ephemeral mode, settings stay in memory");
        return Arc::new(MemoryStore::new());
    }

    let file_store = Arc::new(JsonFileStore::new(config.storage_path()));
    tracing::info!("Settings file: {}", file_store.path().display());

    match config.app_config().storage.credential_backend {
        CredentialBackend::File => file_store,
        CredentialBackend::Keyring => {
            tracing::info!("API key kept in the OS keyring");
            Arc::new(RoutedStore::new(
                file_store,
                Arc::new(KeyringStore::new(KEYRING_SERVICE)),
                [API_KEY_KEY],
            ))
        }
    }
}
