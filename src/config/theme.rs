use ratatui::style::{Color, Modifier, Style};

use crate::settings::ThemeMode;

/// Palette for one [`ThemeMode`]. The panel swaps the whole palette when the
/// mode is toggled.
#[derive(Debug, Clone)]
pub struct Theme {
    pub colors: ThemeColors,
    pub focus: FocusStyle,
    pub notifications: NotificationStyle,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    pub fn light() -> Self {
        Self {
            colors: ThemeColors {
                background: HexColor::new("#f5f5f5"),
                foreground: HexColor::new("#2d2d2d"),
                primary: HexColor::new("#1a73e8"),
                accent: HexColor::new("#8e24aa"),
                success: HexColor::new("#4caf50"),
                warning: HexColor::new("#f9a825"),
                muted: HexColor::new("#9e9e9e"),
            },
            focus: FocusStyle {
                focused_border: HexColor::new("#1a73e8"),
                unfocused_border: HexColor::new("#c8c8c8"),
                focused_title: HexColor::new("#8e24aa"),
                unfocused_title: HexColor::new("#757575"),
                use_bold_focused: true,
            },
            notifications: NotificationStyle {
                success_fg: HexColor::new("#ffffff"),
                success_bg: HexColor::new("#4caf50"),
                error_fg: HexColor::new("#ffffff"),
                error_bg: HexColor::new("#d32f2f"),
            },
        }
    }

    pub fn dark() -> Self {
        Self {
            colors: ThemeColors {
                background: HexColor::new("#1a1b26"),
                foreground: HexColor::new("#c0caf5"),
                primary: HexColor::new("#7aa2f7"),
                accent: HexColor::new("#bb9af7"),
                success: HexColor::new("#9ece6a"),
                warning: HexColor::new("#e0af68"),
                muted: HexColor::new("#565f89"),
            },
            focus: FocusStyle {
                focused_border: HexColor::new("#7aa2f7"),
                unfocused_border: HexColor::new("#3b4261"),
                focused_title: HexColor::new("#bb9af7"),
                unfocused_title: HexColor::new("#565f89"),
                use_bold_focused: true,
            },
            notifications: NotificationStyle {
                success_fg: HexColor::new("#1a1b26"),
                success_bg: HexColor::new("#9ece6a"),
                error_fg: HexColor::new("#c0caf5"),
                error_bg: HexColor::new("#f7768e"),
            },
        }
    }

    pub fn base_style(&self) -> Style {
        Style::default()
            .fg(self.colors.foreground.to_color())
            .bg(self.colors.background.to_color())
    }

    pub fn border_style(&self, focused: bool) -> Style {
        let color = if focused {
            self.focus.focused_border.to_color()
        } else {
            self.focus.unfocused_border.to_color()
        };

        let mut style = Style::default().fg(color);
        if focused && self.focus.use_bold_focused {
            style = style.add_modifier(Modifier::BOLD);
        }
        style
    }

    pub fn title_style(&self, focused: bool) -> Style {
        let color = if focused {
            self.focus.focused_title.to_color()
        } else {
            self.focus.unfocused_title.to_color()
        };

        let mut style = Style::default().fg(color);
        if focused && self.focus.use_bold_focused {
            style = style.add_modifier(Modifier::BOLD);
        }
        style
    }
}

#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub background: HexColor,
    pub foreground: HexColor,
    pub primary: HexColor,
    pub accent: HexColor,
    pub success: HexColor,
    pub warning: HexColor,
    pub muted: HexColor,
}

#[derive(Debug, Clone)]
pub struct FocusStyle {
    pub focused_border: HexColor,
    pub unfocused_border: HexColor,
    pub focused_title: HexColor,
    pub unfocused_title: HexColor,
    pub use_bold_focused: bool,
}

#[derive(Debug, Clone)]
pub struct NotificationStyle {
    pub success_fg: HexColor,
    pub success_bg: HexColor,
    pub error_fg: HexColor,
    pub error_bg: HexColor,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexColor(String);

impl HexColor {
    pub fn new(hex: &str) -> Self {
        Self(hex.to_string())
    }

    pub fn to_color(&self) -> Color {
        self.parse_hex().unwrap_or(Color::Reset)
    }

    fn parse_hex(&self) -> Option<Color> {
        let hex = self.0.trim_start_matches('#');
        if hex.len() != 6 {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Color::Rgb(r, g, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color_parsing() {
        assert_eq!(HexColor::new("#ff0000").to_color(), Color::Rgb(255, 0, 0));
        assert_eq!(HexColor::new("00ff00").to_color(), Color::Rgb(0, 255, 0));
        assert_eq!(HexColor::new("#fff").to_color(), Color::Reset);
        assert_eq!(HexColor::new("#zzzzzz").to_color(), Color::Reset);
    }

    #[test]
    fn test_theme_for_mode() {
        let light = Theme::light().colors.background;
        let dark = Theme::dark().colors.background;
        assert_eq!(Theme::for_mode(ThemeMode::Light).colors.background, light);
        assert_eq!(Theme::for_mode(ThemeMode::Dark).colors.background, dark);
        assert_eq!(Theme::default().colors.background, light);
    }

    #[test]
    fn test_palettes_differ() {
        let light = Theme::light();
        let dark = Theme::dark();
        assert_ne!(light.colors.background, dark.colors.background);
        assert_ne!(light.colors.foreground, dark.colors.foreground);
    }

    #[test]
    fn test_focused_border_is_bold() {
        let theme = Theme::dark();
        assert!(theme.border_style(true).add_modifier.contains(Modifier::BOLD));
        assert!(!theme.border_style(false).add_modifier.contains(Modifier::BOLD));
    }
}
