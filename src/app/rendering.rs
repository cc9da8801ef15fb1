// Rendering - draw() method and UI layout helpers

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use super::App;
use crate::components::{Component, Spinner};
use crate::config::Theme;
use crate::error::{PanelError, Result};
use crate::panel::{PanelState, Screen};

const TITLE: &str = "🌐 Hinglish Translator";

impl App {
    pub(super) fn draw(&mut self) -> Result<()> {
        let theme = Theme::for_mode(self.panel.theme_mode);
        let panel = &self.panel;
        let settings_view = &self.settings_view;
        let onboarding_view = &self.onboarding_view;
        let notifications = &self.notification_manager;
        let spinner = &self.spinner;

        self.terminal
            .draw(|frame| {
                let area = frame.area();
                frame.render_widget(Block::default().style(theme.base_style()), area);

                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Length(1),
                        Constraint::Min(8),
                        Constraint::Length(1),
                        Constraint::Length(1),
                    ])
                    .split(area);

                render_header(frame, chunks[0], panel, &theme);
                match panel.screen {
                    Screen::Settings => settings_view.render(frame, chunks[1], panel, &theme),
                    Screen::Onboarding => onboarding_view.render(frame, chunks[1], panel, &theme),
                }
                render_loading(frame, chunks[2], panel, spinner, &theme);
                render_footer(frame, chunks[3], panel, &theme);

                notifications.render(frame, area, &theme);
            })
            .map_err(|e| PanelError::Terminal(e.to_string()))?;

        Ok(())
    }
}

fn render_header(frame: &mut Frame, area: Rect, panel: &PanelState, theme: &Theme) {
    let title_style = Style::default()
        .fg(theme.colors.primary.to_color())
        .add_modifier(Modifier::BOLD);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(12)])
        .split(area);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(format!(" {}", TITLE), title_style))),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(
                panel.theme_mode.toggle_icon(),
                Style::default().fg(theme.colors.accent.to_color()),
            ),
            Span::styled(" ^T ", Style::default().fg(theme.colors.muted.to_color())),
        ]))
        .alignment(Alignment::Right),
        chunks[1],
    );
}

fn render_loading(frame: &mut Frame, area: Rect, panel: &PanelState, spinner: &Spinner, theme: &Theme) {
    let Some(message) = &panel.loading else {
        return;
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", spinner.frame()),
            Style::default().fg(theme.colors.accent.to_color()),
        ),
        Span::styled(message.clone(), Style::default().fg(theme.colors.warning.to_color())),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_footer(frame: &mut Frame, area: Rect, panel: &PanelState, theme: &Theme) {
    let hints = match panel.screen {
        Screen::Onboarding => " Esc quit  ^C quit  ^T theme",
        Screen::Settings if panel.credential_field_active() => {
            " Tab focus  ^S save settings  ^T theme  Esc quit"
        }
        Screen::Settings => " j/k focus  ←/→ change  ^S save  ^E change key  ^R remove key  ^T theme  q quit",
    };

    frame.render_widget(
        Paragraph::new(Span::styled(hints, Style::default().fg(theme.colors.muted.to_color()))),
        area,
    );
}
