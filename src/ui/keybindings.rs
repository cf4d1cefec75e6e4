use crate::domain::UiMode;
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Hints for the current mode
fn hints(mode: UiMode) -> Vec<&'static str> {
    match mode {
        UiMode::Normal => vec![
            " ↑/↓ select   ",
            "Enter/Space done   ",
            "a add   ",
            "o options   ",
            "q quit",
        ],
        UiMode::Input => vec![" type a todo   ", "Enter add   ", "Esc back"],
        UiMode::OptionPanel => vec![" e edit   ", "d delete   ", "Esc close"],
        UiMode::EditModal => vec![" Enter save   ", "Esc cancel"],
        UiMode::ConfirmDelete => vec![" y delete   ", "any other key keep"],
    }
}

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, mode: UiMode, area: Rect) {
    let line = Line::from(hints(mode).into_iter().map(Span::raw).collect::<Vec<_>>());
    let paragraph = Paragraph::new(line).style(hint_style());
    f.render_widget(paragraph, area);
}
