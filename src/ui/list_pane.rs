use crate::app::AppState;
use crate::domain::Todo;
use crate::persistence::KeyValueStore;
use crate::ui::styles::{
    border_style, chip_style, default_style, done_style, hint_style, selected_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Render the todo list pane
pub fn render_list_pane<S: KeyValueStore>(f: &mut Frame, app: &AppState<S>, area: Rect) {
    let todos = app.repo.list();
    let title = format!(
        " Todos ({} done / {}) ",
        app.repo.completed_count(),
        app.repo.len()
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(title, title_style()));

    if todos.is_empty() {
        let empty = Paragraph::new(Line::styled(
            "Nothing to do yet. Press `a` to add a todo!",
            hint_style(),
        ))
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = todos
        .iter()
        .map(|todo| ListItem::new(create_todo_line(todo)).style(default_style()))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(selected_style());

    let mut state = ListState::default();
    state.select(Some(app.selected_index));
    f.render_stateful_widget(list, area, &mut state);
}

/// Create a single line for a todo
/// Format: [✔] #3  2024-03-09 14:05:07  Buy milk
fn create_todo_line(todo: &Todo) -> Line<'static> {
    let content_style = if todo.is_completed {
        done_style()
    } else {
        default_style()
    };

    Line::from(vec![
        Span::raw(format!("[{}] ", todo.check_mark())),
        Span::styled(format!("#{:<4}", todo.id), chip_style()),
        Span::styled(format!("{}  ", todo.registered_at), chip_style()),
        Span::styled(todo.content.clone(), content_style),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::{MemoryKvStore, Settings};
    use crate::repository::TodoRepository;
    use ratatui::{backend::TestBackend, Terminal};

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_create_todo_line() {
        let mut todo = Todo::new(3, "Buy milk".to_string());
        let text = line_text(&create_todo_line(&todo));
        assert!(text.starts_with("[·] #3"));
        assert!(text.ends_with("Buy milk"));

        todo.is_completed = true;
        let line = create_todo_line(&todo);
        assert!(line_text(&line).starts_with("[✔]"));
        assert_eq!(line.spans[3].style, done_style());
    }

    #[test]
    fn test_render_empty_and_filled_list() {
        let backend = TestBackend::new(60, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = AppState::new(
            TodoRepository::initialize(MemoryKvStore::new()),
            &Settings::default(),
        );

        terminal
            .draw(|f| render_list_pane(f, &app, f.size()))
            .unwrap();
        let buffer = format!("{:?}", terminal.backend().buffer());
        assert!(buffer.contains("Nothing to do yet"));

        let _ = app.repo.add("walk the dog").unwrap();
        terminal
            .draw(|f| render_list_pane(f, &app, f.size()))
            .unwrap();
        let buffer = format!("{:?}", terminal.backend().buffer());
        assert!(buffer.contains("walk the dog"));
        assert!(buffer.contains("Todos (0 done / 1)"));
    }
}
