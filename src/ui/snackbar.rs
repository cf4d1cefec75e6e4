use crate::domain::Variant;
use crate::notice::{Notice, Snackbar};
use crate::ui::{
    layout::create_snackbar_area,
    styles::{notice_border_style, notice_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

fn notice_line(notice: &Notice) -> Line<'_> {
    Line::from(vec![
        Span::raw(format!(" {} ", notice.severity.symbol())),
        Span::raw(notice.message.as_str()),
    ])
}

/// Render the snackbar if a notice is visible
pub fn render_snackbar(f: &mut Frame, snackbar: &Snackbar, area: Rect) {
    let Some(notice) = snackbar.current() else {
        return;
    };

    let snackbar_area = create_snackbar_area(area);
    f.render_widget(Clear, snackbar_area);

    // Outlined notices spend their first row on the border
    let (borders, lines) = match notice.variant {
        Variant::Outlined => (Borders::ALL, vec![notice_line(notice)]),
        Variant::Filled | Variant::Standard => {
            (Borders::NONE, vec![Line::raw(""), notice_line(notice)])
        }
    };

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(borders)
            .border_style(notice_border_style(notice.severity))
            .style(notice_style(notice.severity, notice.variant)),
    );

    f.render_widget(paragraph, snackbar_area);
}
