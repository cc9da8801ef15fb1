// Onboarding screen shown while no API key is stored

use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::action::Action;
use crate::components::{credential_field, Component};
use crate::config::Theme;
use crate::panel::PanelState;

const WELCOME_TITLE: &str = "Welcome to Hinglish Translator";
const WELCOME_TEXT: &str =
    "Translate English into natural Hinglish. Paste your Groq API key to get started. \
     It is checked with a single request before it is saved.";
const KEY_SOURCE_HINT: &str = "Get a free key at https://console.groq.com/keys";

#[derive(Debug, Default)]
pub struct OnboardingView;

impl OnboardingView {
    pub fn new() -> Self {
        Self
    }
}

impl Component for OnboardingView {
    fn handle_event(&mut self, event: &Event, _panel: &PanelState) -> Option<Action> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Esc => Some(Action::Quit),
                _ => credential_field::handle_key(key),
            },
            Event::Paste(text) => Some(Action::Paste(text.clone())),
            _ => None,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, panel: &PanelState, theme: &Theme) {
        let block = Block::default()
            .title(" Get Started ")
            .title_style(theme.title_style(true))
            .borders(Borders::ALL)
            .border_style(theme.border_style(true));

        let muted = Style::default().fg(theme.colors.muted.to_color());
        let lines = vec![
            Line::default(),
            Line::from(Span::styled(
                WELCOME_TITLE,
                Style::default()
                    .fg(theme.colors.primary.to_color())
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            Line::default(),
            Line::from(Span::styled(WELCOME_TEXT, Style::default().fg(theme.colors.foreground.to_color()))),
            Line::default(),
            credential_field::input_line(panel, theme, true),
            credential_field::hint_line(theme),
            Line::default(),
            Line::from(Span::styled(KEY_SOURCE_HINT, muted)),
        ];

        frame.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
            area,
        );
    }
}
