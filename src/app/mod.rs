// App module
// - mod.rs: App struct, terminal setup and teardown
// - event_loop.rs: run() loop, background event polling
// - handlers.rs: input routing and action dispatch
// - rendering.rs: draw() and layout

mod event_loop;
mod handlers;
mod rendering;

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use crate::components::{NotificationManager, OnboardingView, SettingsPanel, Spinner};
use crate::config::AppConfig;
use crate::controller::SettingsController;
use crate::error::{PanelError, Result};
use crate::event::AppEvent;
use crate::panel::PanelState;

pub struct App {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    controller: SettingsController,
    panel: PanelState,
    settings_view: SettingsPanel,
    onboarding_view: OnboardingView,
    notification_manager: NotificationManager,
    spinner: Spinner,
    event_tx: mpsc::UnboundedSender<AppEvent>,
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
    tick_interval: Duration,
    last_tick: Instant,
    should_quit: bool,
    needs_redraw: bool,
}

impl App {
    pub fn new(controller: SettingsController, config: &AppConfig) -> Result<Self> {
        enable_raw_mode().map_err(|e| PanelError::Terminal(e.to_string()))?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)
            .map_err(|e| PanelError::Terminal(e.to_string()))?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).map_err(|e| PanelError::Terminal(e.to_string()))?;

        let (event_tx, event_rx) = mpsc::unbounded_channel();

        Ok(Self {
            terminal,
            controller,
            panel: PanelState::new(config.translation.clone()),
            settings_view: SettingsPanel::new(),
            onboarding_view: OnboardingView::new(),
            notification_manager: NotificationManager::with_duration(Duration::from_millis(
                config.notifications.duration_ms,
            )),
            spinner: Spinner::new(),
            event_tx,
            event_rx,
            tick_interval: Duration::from_millis(config.general.tick_interval_ms),
            last_tick: Instant::now(),
            should_quit: false,
            needs_redraw: true,
        })
    }

    /// Load stored settings before the first frame.
    pub async fn initialize(&mut self) {
        self.controller.initialize(&mut self.panel).await;
        self.mark_dirty();
    }

    fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableBracketedPaste);
    }
}
