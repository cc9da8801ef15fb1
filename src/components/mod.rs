pub mod credential_field;
pub mod notification;
pub mod onboarding;
pub mod settings_panel;
pub mod spinner;

use crossterm::event::Event;
use ratatui::{layout::Rect, Frame};

use crate::action::Action;
use crate::config::Theme;
use crate::panel::PanelState;

pub use notification::{NotificationManager, Notifier};
pub use onboarding::OnboardingView;
pub use settings_panel::SettingsPanel;
pub use spinner::Spinner;

/// A screen of the panel. Components read [`PanelState`] and translate
/// input into [`Action`]s; the app applies them.
pub trait Component {
    fn handle_event(&mut self, event: &Event, panel: &PanelState) -> Option<Action>;

    fn render(&self, frame: &mut Frame, area: Rect, panel: &PanelState, theme: &Theme);
}
