// Events delivered to the UI loop from background tasks

use crate::error::PanelError;

#[derive(Debug)]
pub enum AppEvent {
    /// Outcome of a spawned credential validation.
    CredentialSaved(Result<(), PanelError>),
}
