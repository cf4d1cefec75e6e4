use crate::domain::{Severity, Variant};
use ratatui::style::{Color, Modifier, Style};

/// Default text style
pub fn default_style() -> Style {
    Style::default().fg(Color::White)
}

/// Selected row highlight style
pub fn selected_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::LightCyan)
        .add_modifier(Modifier::BOLD)
}

/// Title style for panes
pub fn title_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Border style
pub fn border_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Border of the focused pane
pub fn focused_border_style() -> Style {
    Style::default().fg(Color::Green)
}

/// Modal background style
pub fn modal_bg_style() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::White)
}

/// Modal title style
pub fn modal_title_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Keybinding hint style
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Completed todo style
pub fn done_style() -> Style {
    Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::CROSSED_OUT)
}

/// Id / date chips in the list
pub fn chip_style() -> Style {
    Style::default().fg(Color::Blue)
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Success => Color::Green,
        Severity::Info => Color::Cyan,
        Severity::Warning => Color::Yellow,
        Severity::Error => Color::Red,
    }
}

/// Snackbar body style
pub fn notice_style(severity: Severity, variant: Variant) -> Style {
    let color = severity_color(severity);
    match variant {
        Variant::Filled => Style::default()
            .bg(color)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
        Variant::Outlined | Variant::Standard => Style::default().fg(color),
    }
}

/// Snackbar border style (only outlined notices draw one)
pub fn notice_border_style(severity: Severity) -> Style {
    Style::default().fg(severity_color(severity))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_notice_uses_background() {
        let style = notice_style(Severity::Error, Variant::Filled);
        assert_eq!(style.bg, Some(Color::Red));
    }

    #[test]
    fn test_outlined_notice_uses_foreground() {
        let style = notice_style(Severity::Success, Variant::Outlined);
        assert_eq!(style.fg, Some(Color::Green));
        assert_eq!(style.bg, None);
    }
}
