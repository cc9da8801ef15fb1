// Event loop - main run() method

use std::time::{Duration, Instant};

use crossterm::event;

use super::App;
use crate::action::Action;
use crate::error::{PanelError, Result};
use crate::event::AppEvent;
use crate::panel::Screen;

impl App {
    /// Drain outcomes of background tasks. Returns true if any arrived.
    pub(super) async fn poll_app_events(&mut self) -> bool {
        let mut events = Vec::new();
        while let Ok(event) = self.event_rx.try_recv() {
            events.push(event);
        }

        if events.is_empty() {
            return false;
        }

        for event in events {
            match event {
                AppEvent::CredentialSaved(outcome) => {
                    let saved = self.controller.finish_credential_save(
                        &mut self.panel,
                        &mut self.notification_manager,
                        outcome,
                    );
                    if saved && self.panel.screen == Screen::Onboarding {
                        self.controller.initialize(&mut self.panel).await;
                    }
                }
            }
        }

        true
    }

    pub async fn run(&mut self) -> Result<()> {
        loop {
            // ---- 1. Poll non-input sources ----

            if self.poll_app_events().await {
                self.mark_dirty();
            }

            if self.panel.is_loading() && self.spinner.tick() {
                self.mark_dirty();
            }

            if self.last_tick.elapsed() >= self.tick_interval {
                self.dispatch(Action::Tick).await?;
                self.last_tick = Instant::now();
            }

            if self.should_quit {
                break;
            }

            // ---- 2. Poll user input ----

            if event::poll(Duration::from_millis(16)).map_err(|e| PanelError::Terminal(e.to_string()))? {
                let event = event::read().map_err(|e| PanelError::Terminal(e.to_string()))?;
                self.mark_dirty();

                if let Some(action) = self.handle_event(event) {
                    self.dispatch(action).await?;
                }
            }

            if self.should_quit {
                break;
            }

            // ---- 3. Draw once if anything changed ----

            if self.needs_redraw {
                self.draw()?;
                self.needs_redraw = false;
            }
        }

        tracing::info!("Panel closed");
        Ok(())
    }
}
