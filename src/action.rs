/// Everything a key press or paste can ask the panel to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    Tick,

    ToggleTheme,

    // Credential field
    ToggleCredentialVisibility,
    CredentialInput(char),
    CredentialBackspace,
    CredentialClear,
    Paste(String),
    SaveCredential,
    RevealCredentialEditor,
    RemoveCredential,

    // Translation preferences
    CycleStyle { forward: bool },
    CycleLevel { forward: bool },
    SaveTranslationSettings,

    FocusNext,
    FocusPrev,
    DismissNotification,
}
