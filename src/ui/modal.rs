use crate::app::AppState;
use crate::domain::UiMode;
use crate::persistence::KeyValueStore;
use crate::ui::{
    layout::{create_drawer_area, create_modal_area},
    styles::{modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the option drawer for the selected todo
pub fn render_option_panel<S: KeyValueStore>(f: &mut Frame, app: &AppState<S>, area: Rect) {
    let Some(id) = app.option_panel.todo_id() else {
        return;
    };

    let drawer_area = create_drawer_area(area, 7);
    f.render_widget(Clear, drawer_area);

    let preview = app
        .option_target()
        .map(|t| t.content.clone())
        .unwrap_or_default();

    let lines = vec![
        Line::from(vec![
            Span::styled(format!("  Todo {}  ", id), modal_title_style()),
            Span::raw(preview),
        ]),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  [e]", modal_title_style()),
            Span::raw(" Edit  "),
        ]),
        Line::from(vec![
            Span::styled("  [d]", modal_title_style()),
            Span::raw(" Delete  "),
        ]),
        Line::from(vec![
            Span::styled("  [Esc]", modal_title_style()),
            Span::raw(" Close"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .title(Span::styled(" Options ", modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, drawer_area);
}

/// Render the delete confirmation
pub fn render_confirm_delete<S: KeyValueStore>(f: &mut Frame, app: &AppState<S>, area: Rect) {
    if app.ui_mode != UiMode::ConfirmDelete {
        return;
    }
    let Some(id) = app.option_panel.todo_id() else {
        return;
    };

    let modal_area = create_modal_area(area, 7);
    f.render_widget(Clear, modal_area);

    let lines = vec![
        Line::raw(""),
        Line::raw(format!("  Delete todo {}?", id)),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  [y]", modal_title_style()),
            Span::raw(" Delete  "),
            Span::styled("[any other key]", modal_title_style()),
            Span::raw(" Keep"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" Confirm ", modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}
