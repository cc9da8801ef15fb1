use std::collections::VecDeque;
use std::time::{Duration, Instant};

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::config::Theme;

const DEFAULT_DURATION_MS: u64 = 3000;
const MAX_VISIBLE_NOTIFICATIONS: usize = 5;
const TOAST_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 4;

/// Toast-style feedback for panel operations.
pub trait Notifier {
    fn success(&mut self, message: &str);

    fn error(&mut self, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

impl NotificationLevel {
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationLevel::Success => "✓",
            NotificationLevel::Error => "✗",
        }
    }
}

/// One toast. Expires `duration` after it was raised.
#[derive(Debug, Clone)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    raised_at: Instant,
    duration: Duration,
}

impl Notification {
    pub fn new(level: NotificationLevel, message: impl Into<String>, duration: Duration) -> Self {
        Self {
            level,
            message: message.into(),
            raised_at: Instant::now(),
            duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.raised_at.elapsed() >= self.duration
    }

    /// Share of the lifetime still left, from 1.0 down to 0.0.
    fn remaining(&self) -> f32 {
        let total = self.duration.as_secs_f32();
        if total <= 0.0 {
            return 0.0;
        }
        (1.0 - self.raised_at.elapsed().as_secs_f32() / total).clamp(0.0, 1.0)
    }
}

/// Queue of toasts stacked in the top-right corner. The oldest toast is
/// dropped once more than [`MAX_VISIBLE_NOTIFICATIONS`] are queued.
pub struct NotificationManager {
    toasts: VecDeque<Notification>,
    duration: Duration,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self::with_duration(Duration::from_millis(DEFAULT_DURATION_MS))
    }

    pub fn with_duration(duration: Duration) -> Self {
        Self {
            toasts: VecDeque::with_capacity(MAX_VISIBLE_NOTIFICATIONS),
            duration,
        }
    }

    fn raise(&mut self, level: NotificationLevel, message: &str) {
        if self.toasts.len() == MAX_VISIBLE_NOTIFICATIONS {
            self.toasts.pop_front();
        }
        self.toasts
            .push_back(Notification::new(level, message, self.duration));
    }

    /// Drop expired toasts. Returns true if anything was removed.
    pub fn tick(&mut self) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| !t.is_expired());
        before != self.toasts.len()
    }

    pub fn dismiss_first(&mut self) {
        self.toasts.pop_front();
    }

    pub fn has_notifications(&self) -> bool {
        !self.toasts.is_empty()
    }

    #[cfg(test)]
    pub fn count(&self) -> usize {
        self.toasts.len()
    }

    #[cfg(test)]
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.toasts.iter()
    }

    pub fn render(&self, frame: &mut Frame, screen: Rect, theme: &Theme) {
        let width = TOAST_WIDTH.min(screen.width);
        let x = screen.x + screen.width.saturating_sub(width + 1);
        let mut y = screen.y + 1;

        for toast in &self.toasts {
            if y + TOAST_HEIGHT > screen.y + screen.height {
                break;
            }
            render_toast(frame, Rect::new(x, y, width, TOAST_HEIGHT), toast, theme);
            y += TOAST_HEIGHT;
        }
    }
}

fn render_toast(frame: &mut Frame, area: Rect, toast: &Notification, theme: &Theme) {
    let colors = &theme.notifications;
    let (fg, bg) = match toast.level {
        NotificationLevel::Success => (colors.success_fg.to_color(), colors.success_bg.to_color()),
        NotificationLevel::Error => (colors.error_fg.to_color(), colors.error_bg.to_color()),
    };
    let base = Style::default().fg(fg).bg(bg);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(base)
        .style(base);
    let inner = block.inner(area);

    let text = format!("{} {}", toast.level.icon(), toast.message);
    let bar = "▔".repeat((inner.width as f32 * toast.remaining()) as usize);
    let lines = vec![
        Line::from(Span::styled(
            truncate_string(&text, inner.width as usize),
            base.add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(bar, base.add_modifier(Modifier::DIM))),
    ];

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for NotificationManager {
    fn success(&mut self, message: &str) {
        tracing::debug!("notify success: {}", message);
        self.raise(NotificationLevel::Success, message);
    }

    fn error(&mut self, message: &str) {
        tracing::debug!("notify error: {}", message);
        self.raise(NotificationLevel::Error, message);
    }
}

fn truncate_string(s: &str, max_len: usize) -> String {
    match s.char_indices().nth(max_len) {
        None => s.to_string(),
        Some(_) if max_len <= 3 => s.chars().take(max_len).collect(),
        Some(_) => {
            let head: String = s.chars().take(max_len - 1).collect();
            head + "…"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toasts_last_three_seconds_by_default() {
        let mut mgr = NotificationManager::new();
        mgr.success("Saved");
        let toast = mgr.visible().next().unwrap();
        assert_eq!(toast.message, "Saved");
        assert_eq!(toast.duration, Duration::from_secs(3));
        assert!(!toast.is_expired());
    }

    #[test]
    fn test_notifier_methods_set_levels() {
        let mut mgr = NotificationManager::new();
        mgr.success("Settings saved successfully");
        mgr.error("Failed to save settings");

        let levels: Vec<_> = mgr.visible().map(|n| n.level).collect();
        assert_eq!(levels, vec![NotificationLevel::Success, NotificationLevel::Error]);
    }

    #[test]
    fn test_expired_toasts_removed_on_tick() {
        let mut mgr = NotificationManager::with_duration(Duration::from_millis(1));
        mgr.error("API error: 401");
        std::thread::sleep(Duration::from_millis(10));
        assert!(mgr.tick());
        assert!(!mgr.has_notifications());
    }

    #[test]
    fn test_tick_keeps_live_toasts() {
        let mut mgr = NotificationManager::new();
        mgr.success("API key saved successfully");
        assert!(!mgr.tick());
        assert_eq!(mgr.count(), 1);
    }

    #[test]
    fn test_dismiss_drops_oldest() {
        let mut mgr = NotificationManager::new();
        mgr.success("First");
        mgr.success("Second");
        mgr.dismiss_first();
        assert_eq!(mgr.visible().next().unwrap().message, "Second");
    }

    #[test]
    fn test_at_most_five_toasts() {
        let mut mgr = NotificationManager::new();
        for i in 0..8 {
            mgr.error(&format!("Toast {}", i));
        }
        assert_eq!(mgr.count(), MAX_VISIBLE_NOTIFICATIONS);
        assert_eq!(mgr.visible().next().unwrap().message, "Toast 3");
    }

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("short", 10), "short");
        assert_eq!(truncate_string("exactly10!", 10), "exactly10!");
        assert_eq!(truncate_string("a very long string", 10), "a very lo…");
        assert_eq!(truncate_string("abcdef", 3), "abc");
    }
}
