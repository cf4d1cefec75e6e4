use crate::app::AppState;
use crate::domain::UiMode;
use crate::persistence::KeyValueStore;
use crate::ui::{
    layout::create_modal_area,
    styles::{border_style, focused_border_style, hint_style, modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the always-visible "new todo" field
pub fn render_input_bar<S: KeyValueStore>(f: &mut Frame, app: &AppState<S>, area: Rect) {
    let focused = app.ui_mode == UiMode::Input;

    let line = if app.input.is_empty() && !focused {
        Line::styled("Press `a` to write a new todo", hint_style())
    } else {
        Line::from(vec![
            Span::raw("> "),
            Span::raw(app.input.as_str()),
            if focused {
                Span::styled("█", modal_title_style()) // Cursor
            } else {
                Span::raw("")
            },
        ])
    };

    let (title, border) = if focused {
        (" New todo · Enter to add · Esc to leave ", focused_border_style())
    } else {
        (" New todo ", border_style())
    };

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(title),
    );

    f.render_widget(paragraph, area);
}

/// Render the edit modal for the option panel's todo
pub fn render_edit_modal<S: KeyValueStore>(f: &mut Frame, app: &AppState<S>, area: Rect) {
    let (Some(id), Some(draft)) = (app.edit_modal.todo_id(), app.edit_modal.draft()) else {
        return;
    };

    let modal_area = create_modal_area(area, 9);

    // Clear the area behind the modal
    f.render_widget(Clear, modal_area);

    let lines = vec![
        Line::raw(""),
        Line::raw("Content:"),
        Line::from(vec![
            Span::raw("> "),
            Span::styled(draft, modal_title_style()),
            Span::styled("█", modal_title_style()), // Cursor
        ]),
        Line::raw(""),
        Line::raw("Enter to save  ·  Esc to cancel"),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(
                    format!(" Edit todo {} ", id),
                    modal_title_style(),
                ))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}
