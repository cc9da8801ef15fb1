// Masked API key input shared by the settings and onboarding screens

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::action::Action;
use crate::config::Theme;
use crate::panel::PanelState;

/// Keys understood while the credential field has focus.
pub fn handle_key(key: &KeyEvent) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Enter => Some(Action::SaveCredential),
        KeyCode::Backspace => Some(Action::CredentialBackspace),
        // Ctrl+U: Toggle mask visibility
        KeyCode::Char('u') if ctrl => Some(Action::ToggleCredentialVisibility),
        // Ctrl+K: Clear input
        KeyCode::Char('k') if ctrl => Some(Action::CredentialClear),
        KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            Some(Action::CredentialInput(c))
        }
        _ => None,
    }
}

pub fn input_line(panel: &PanelState, theme: &Theme, focused: bool) -> Line<'static> {
    let muted = Style::default().fg(theme.colors.muted.to_color());
    let value_style = if focused {
        Style::default()
            .fg(theme.colors.accent.to_color())
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.colors.foreground.to_color())
    };

    let mut spans = vec![
        Span::styled(if focused { " ▸ " } else { "   " }, Style::default().fg(theme.colors.accent.to_color())),
        Span::styled("API key ", value_style),
        Span::styled("[", muted),
    ];

    if panel.credential_input.is_empty() {
        spans.push(Span::styled("gsk_...", muted.add_modifier(Modifier::ITALIC)));
    } else {
        spans.push(Span::styled(panel.credential_display(), value_style));
    }
    if focused {
        spans.push(Span::styled("█", Style::default().fg(theme.colors.accent.to_color())));
    }
    spans.push(Span::styled("]", muted));
    spans.push(Span::styled(format!(" {}", panel.visibility_icon()), muted));

    Line::from(spans)
}

pub fn hint_line(theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(
        "     [↵] Save & validate  [Ctrl+U] Show/hide  [Ctrl+K] Clear",
        Style::default().fg(theme.colors.muted.to_color()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_typing_and_controls() {
        assert_eq!(
            handle_key(&key(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(Action::CredentialInput('q'))
        );
        assert_eq!(
            handle_key(&key(KeyCode::Char('G'), KeyModifiers::SHIFT)),
            Some(Action::CredentialInput('G'))
        );
        assert_eq!(
            handle_key(&key(KeyCode::Char('u'), KeyModifiers::CONTROL)),
            Some(Action::ToggleCredentialVisibility)
        );
        assert_eq!(
            handle_key(&key(KeyCode::Char('k'), KeyModifiers::CONTROL)),
            Some(Action::CredentialClear)
        );
        assert_eq!(
            handle_key(&key(KeyCode::Enter, KeyModifiers::NONE)),
            Some(Action::SaveCredential)
        );
        assert_eq!(handle_key(&key(KeyCode::Char('x'), KeyModifiers::CONTROL)), None);
    }

    #[test]
    fn test_input_line_masks_value() {
        let mut panel = PanelState::default();
        panel.paste_credential("gsk_123");
        let line = input_line(&panel, &Theme::light(), true);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains("•••••••"));
        assert!(!text.contains("gsk_123"));
        assert!(text.contains("👁️"));
    }
}
