//! Settings screen: API key status, translation preferences.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::action::Action;
use crate::components::{credential_field, Component};
use crate::config::Theme;
use crate::panel::{PanelFocus, PanelState, CONFIGURED_STATUS};

#[derive(Debug, Default)]
pub struct SettingsPanel;

impl SettingsPanel {
    pub fn new() -> Self {
        Self
    }

    fn handle_key(&self, key: &KeyEvent, panel: &PanelState) -> Option<Action> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Tab | KeyCode::Down => return Some(Action::FocusNext),
            KeyCode::BackTab | KeyCode::Up => return Some(Action::FocusPrev),
            KeyCode::Esc => return Some(Action::Quit),
            KeyCode::Char('e') if ctrl => return Some(Action::RevealCredentialEditor),
            KeyCode::Char('r') if ctrl => return Some(Action::RemoveCredential),
            KeyCode::Char('s') if ctrl => return Some(Action::SaveTranslationSettings),
            _ => {}
        }

        if panel.credential_field_active() {
            return credential_field::handle_key(key);
        }

        match (panel.focus, key.code) {
            (_, KeyCode::Char('q')) => Some(Action::Quit),
            (_, KeyCode::Char('j')) => Some(Action::FocusNext),
            (_, KeyCode::Char('k')) => Some(Action::FocusPrev),
            (PanelFocus::CredentialInput, KeyCode::Enter | KeyCode::Char('e')) => {
                Some(Action::RevealCredentialEditor)
            }
            (PanelFocus::Style, KeyCode::Left | KeyCode::Char('h')) => {
                Some(Action::CycleStyle { forward: false })
            }
            (PanelFocus::Style, KeyCode::Right | KeyCode::Char('l')) => {
                Some(Action::CycleStyle { forward: true })
            }
            (PanelFocus::Level, KeyCode::Left | KeyCode::Char('h')) => {
                Some(Action::CycleLevel { forward: false })
            }
            (PanelFocus::Level, KeyCode::Right | KeyCode::Char('l')) => {
                Some(Action::CycleLevel { forward: true })
            }
            (PanelFocus::Style | PanelFocus::Level, KeyCode::Enter | KeyCode::Char('s')) => {
                Some(Action::SaveTranslationSettings)
            }
            _ => None,
        }
    }

    fn credential_lines(&self, panel: &PanelState, theme: &Theme) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        let focused = panel.focus == PanelFocus::CredentialInput;

        if panel.key_configured {
            let selector = if focused && !panel.editor_visible { " ▸ " } else { "   " };
            lines.push(Line::from(vec![
                Span::styled(selector, Style::default().fg(theme.colors.accent.to_color())),
                Span::styled(
                    CONFIGURED_STATUS,
                    Style::default()
                        .fg(theme.colors.success.to_color())
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(Line::from(Span::styled(
                "     [Ctrl+E] Change  [Ctrl+R] Remove",
                Style::default().fg(theme.colors.muted.to_color()),
            )));
        }

        if panel.editor_visible {
            lines.push(Line::default());
            lines.push(credential_field::input_line(panel, theme, focused));
            if focused {
                lines.push(credential_field::hint_line(theme));
            }
        }

        lines
    }

    fn selector_line(
        &self,
        label: &str,
        value: &str,
        focused: bool,
        theme: &Theme,
    ) -> Line<'static> {
        let label_style = if focused {
            Style::default()
                .fg(theme.colors.accent.to_color())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.colors.foreground.to_color())
        };
        let arrow_style = Style::default().fg(if focused {
            theme.colors.primary.to_color()
        } else {
            theme.colors.muted.to_color()
        });

        Line::from(vec![
            Span::styled(
                if focused { " ▸ " } else { "   " },
                Style::default().fg(theme.colors.accent.to_color()),
            ),
            Span::styled(format!("{:8}", label), label_style),
            Span::styled("◀ ", arrow_style),
            Span::styled(value.to_string(), label_style),
            Span::styled(" ▶", arrow_style),
        ])
    }

    fn translation_lines(&self, panel: &PanelState, theme: &Theme) -> Vec<Line<'static>> {
        vec![
            self.selector_line("Style", &panel.style, panel.focus == PanelFocus::Style, theme),
            self.selector_line("Level", &panel.level, panel.focus == PanelFocus::Level, theme),
            Line::default(),
            Line::from(Span::styled(
                "     [←/→] Change  [Ctrl+S] Save settings",
                Style::default().fg(theme.colors.muted.to_color()),
            )),
        ]
    }
}

impl Component for SettingsPanel {
    fn handle_event(&mut self, event: &Event, panel: &PanelState) -> Option<Action> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key, panel),
            Event::Paste(text) if panel.credential_field_active() => {
                Some(Action::Paste(text.clone()))
            }
            _ => None,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, panel: &PanelState, theme: &Theme) {
        let credential_lines = self.credential_lines(panel, theme);
        let credential_height = credential_lines.len() as u16 + 2;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(credential_height), Constraint::Min(6)])
            .split(area);

        let key_focused = panel.focus == PanelFocus::CredentialInput;
        let key_block = Block::default()
            .title(" API Key ")
            .title_style(theme.title_style(key_focused))
            .borders(Borders::ALL)
            .border_style(theme.border_style(key_focused));
        frame.render_widget(Paragraph::new(credential_lines).block(key_block), chunks[0]);

        let prefs_focused = !key_focused;
        let prefs_block = Block::default()
            .title(" Translation ")
            .title_style(theme.title_style(prefs_focused))
            .borders(Borders::ALL)
            .border_style(theme.border_style(prefs_focused));
        frame.render_widget(
            Paragraph::new(self.translation_lines(panel, theme)).block(prefs_block),
            chunks[1],
        );
    }
}
