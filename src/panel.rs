//! View state of the settings panel.
//!
//! `PanelState` is what the screen shows. The controller mutates it; the
//! components only read it. Nothing here is persisted directly.

use std::fmt;

use zeroize::Zeroize;

use crate::config::TranslationOptions;
use crate::settings::{ThemeMode, TranslationSettings};

pub const VALIDATING_MESSAGE: &str = "🔄 Validating API key...";
pub const SAVING_MESSAGE: &str = "🔄 Saving settings...";
pub const CONFIGURED_STATUS: &str = "✓ API Key Configured";

const MASK_CHAR: &str = "•";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Settings,
    Onboarding,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelFocus {
    #[default]
    CredentialInput,
    Style,
    Level,
}

impl PanelFocus {
    pub fn next(self) -> Self {
        match self {
            PanelFocus::CredentialInput => PanelFocus::Style,
            PanelFocus::Style => PanelFocus::Level,
            PanelFocus::Level => PanelFocus::CredentialInput,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            PanelFocus::CredentialInput => PanelFocus::Level,
            PanelFocus::Style => PanelFocus::CredentialInput,
            PanelFocus::Level => PanelFocus::Style,
        }
    }
}

pub struct PanelState {
    pub screen: Screen,
    pub theme_mode: ThemeMode,
    pub key_configured: bool,
    pub credential_input: String,
    pub credential_masked: bool,
    pub editor_visible: bool,
    pub style: String,
    pub level: String,
    pub loading: Option<String>,
    pub validation_pending: bool,
    pub focus: PanelFocus,
    options: TranslationOptions,
}

impl fmt::Debug for PanelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanelState")
            .field("screen", &self.screen)
            .field("theme_mode", &self.theme_mode)
            .field("key_configured", &self.key_configured)
            .field("credential_input", &"[REDACTED]")
            .field("credential_masked", &self.credential_masked)
            .field("editor_visible", &self.editor_visible)
            .field("style", &self.style)
            .field("level", &self.level)
            .field("loading", &self.loading)
            .field("validation_pending", &self.validation_pending)
            .field("focus", &self.focus)
            .finish_non_exhaustive()
    }
}

impl Default for PanelState {
    fn default() -> Self {
        Self::new(TranslationOptions::default())
    }
}

impl PanelState {
    pub fn new(options: TranslationOptions) -> Self {
        let defaults = TranslationSettings::default();
        Self {
            screen: Screen::Settings,
            theme_mode: ThemeMode::default(),
            key_configured: false,
            credential_input: String::new(),
            credential_masked: true,
            editor_visible: true,
            style: defaults.style,
            level: defaults.level,
            loading: None,
            validation_pending: false,
            focus: PanelFocus::default(),
            options,
        }
    }

    pub fn translation_settings(&self) -> TranslationSettings {
        TranslationSettings::new(self.style.clone(), self.level.clone())
    }

    pub fn apply_translation_settings(&mut self, settings: TranslationSettings) {
        self.style = settings.style;
        self.level = settings.level;
    }

    /// Glyph on the visibility toggle: 👁️ while masked, 🙈 while shown.
    pub fn visibility_icon(&self) -> &'static str {
        if self.credential_masked {
            "👁️"
        } else {
            "🙈"
        }
    }

    /// The input as rendered: bullets while masked.
    pub fn credential_display(&self) -> String {
        if self.credential_masked {
            MASK_CHAR.repeat(self.credential_input.chars().count())
        } else {
            self.credential_input.clone()
        }
    }

    pub fn push_credential_char(&mut self, c: char) {
        self.credential_input.push(c);
    }

    pub fn pop_credential_char(&mut self) {
        self.credential_input.pop();
    }

    pub fn paste_credential(&mut self, text: &str) {
        self.credential_input
            .extend(text.chars().filter(|c| !c.is_control()));
    }

    pub fn clear_credential_input(&mut self) {
        self.credential_input.zeroize();
    }

    pub fn cycle_style(&mut self, forward: bool) {
        self.style = cycle(&self.options.styles, &self.style, forward);
    }

    pub fn cycle_level(&mut self, forward: bool) {
        self.level = cycle(&self.options.levels, &self.level, forward);
    }

    pub fn set_loading(&mut self, message: &str) {
        self.loading = Some(message.to_string());
    }

    pub fn clear_loading(&mut self) {
        self.loading = None;
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_some()
    }

    pub fn navigate_to_onboarding(&mut self) {
        self.screen = Screen::Onboarding;
        self.key_configured = false;
        self.editor_visible = true;
        self.focus = PanelFocus::CredentialInput;
        self.clear_credential_input();
    }

    pub fn navigate_to_settings(&mut self) {
        self.screen = Screen::Settings;
    }

    /// Whether the credential field accepts typing right now.
    pub fn credential_field_active(&self) -> bool {
        match self.screen {
            Screen::Onboarding => true,
            Screen::Settings => self.editor_visible && self.focus == PanelFocus::CredentialInput,
        }
    }
}

/// Step through `options` from `current`. A value outside the list stays
/// selectable: stepping from it lands on the first (or last) option.
fn cycle(options: &[String], current: &str, forward: bool) -> String {
    if options.is_empty() {
        return current.to_string();
    }

    let len = options.len();
    let next = match options.iter().position(|o| o == current) {
        Some(idx) if forward => (idx + 1) % len,
        Some(idx) => (idx + len - 1) % len,
        None if forward => 0,
        None => len - 1,
    };
    options[next].clone()
}
