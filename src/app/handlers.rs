// Event handlers and action dispatch

use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::App;
use crate::action::Action;
use crate::components::Component;
use crate::error::Result;
use crate::panel::Screen;

impl App {
    pub(super) fn handle_event(&mut self, event: CrosstermEvent) -> Option<Action> {
        if let CrosstermEvent::Key(key) = &event {
            if key.kind != KeyEventKind::Press {
                return None;
            }
            if let Some(action) = global_key_action(key) {
                return Some(action);
            }
        }

        match self.panel.screen {
            Screen::Settings => self.settings_view.handle_event(&event, &self.panel),
            Screen::Onboarding => self.onboarding_view.handle_event(&event, &self.panel),
        }
    }

    pub(super) async fn dispatch(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Quit => {
                self.should_quit = true;
            }
            Action::Tick => {
                if self.notification_manager.tick() || self.notification_manager.has_notifications() {
                    self.mark_dirty();
                }
                if !self.panel.is_loading() {
                    self.spinner.reset();
                }
            }
            Action::ToggleTheme => {
                self.controller.toggle_theme(&mut self.panel).await;
            }
            Action::ToggleCredentialVisibility => {
                self.controller.toggle_credential_visibility(&mut self.panel);
            }
            Action::CredentialInput(c) => self.panel.push_credential_char(c),
            Action::CredentialBackspace => self.panel.pop_credential_char(),
            Action::CredentialClear => self.panel.clear_credential_input(),
            Action::Paste(text) => self.panel.paste_credential(&text),
            Action::SaveCredential => self.spawn_credential_save(),
            Action::RevealCredentialEditor => {
                self.controller.reveal_credential_editor(&mut self.panel);
            }
            Action::RemoveCredential => {
                if self.panel.screen == Screen::Settings {
                    self.controller
                        .remove_credential(&mut self.panel, &mut self.notification_manager)
                        .await;
                }
            }
            Action::CycleStyle { forward } => self.panel.cycle_style(forward),
            Action::CycleLevel { forward } => self.panel.cycle_level(forward),
            Action::SaveTranslationSettings => {
                if self.panel.screen == Screen::Settings {
                    self.controller
                        .save_translation_settings(&mut self.panel, &mut self.notification_manager)
                        .await;
                }
            }
            Action::FocusNext => self.panel.focus = self.panel.focus.next(),
            Action::FocusPrev => self.panel.focus = self.panel.focus.prev(),
            Action::DismissNotification => self.notification_manager.dismiss_first(),
        }
        Ok(())
    }

    /// Validation runs off the UI loop; the outcome comes back as
    /// `AppEvent::CredentialSaved`.
    fn spawn_credential_save(&mut self) {
        let Some(candidate) = self
            .controller
            .begin_credential_save(&mut self.panel, &mut self.notification_manager)
        else {
            return;
        };

        self.spinner.reset();
        let controller = self.controller.clone();
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let outcome = controller.save_credential(candidate).await;
            if tx.send(crate::event::AppEvent::CredentialSaved(outcome)).is_err() {
                tracing::warn!("Credential outcome dropped, UI loop gone");
            }
        });
    }
}

/// Bindings that work on every screen.
fn global_key_action(key: &KeyEvent) -> Option<Action> {
    if !key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        KeyCode::Char('c') => Some(Action::Quit),
        KeyCode::Char('t') => Some(Action::ToggleTheme),
        KeyCode::Char('d') => Some(Action::DismissNotification),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_bindings_need_ctrl() {
        let ctrl = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL);
        assert_eq!(global_key_action(&ctrl('c')), Some(Action::Quit));
        assert_eq!(global_key_action(&ctrl('t')), Some(Action::ToggleTheme));
        assert_eq!(global_key_action(&ctrl('d')), Some(Action::DismissNotification));
        assert_eq!(
            global_key_action(&KeyEvent::new(KeyCode::Char('t'), KeyModifiers::NONE)),
            None
        );
    }
}
