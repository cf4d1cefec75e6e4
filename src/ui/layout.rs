use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub keybindings_area: Rect,
    pub input_area: Rect,
    pub list_area: Rect,
}

/// Create the main layout
/// - Top bar: keybindings (1 row)
/// - New-todo field (3 rows)
/// - Todo list (rest)
pub fn create_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Keybindings bar
            Constraint::Length(3), // Input field
            Constraint::Min(0),    // List
        ])
        .split(area);

    MainLayout {
        keybindings_area: chunks[0],
        input_area: chunks[1],
        list_area: chunks[2],
    }
}

/// Create centered modal area (edit form, delete confirmation)
pub fn create_modal_area(area: Rect, height: u16) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Length(height),
            Constraint::Percentage(25),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}

/// Full-width drawer anchored to the top edge
pub fn create_drawer_area(area: Rect, height: u16) -> Rect {
    Rect {
        height: height.min(area.height),
        ..area
    }
}

/// Banner anchored to the bottom-left corner
pub fn create_snackbar_area(area: Rect) -> Rect {
    let height = 3u16.min(area.height);
    let width = (area.width / 2).max(30).min(area.width);
    Rect {
        x: area.x + 1u16.min(area.width.saturating_sub(width)),
        y: area.y + area.height - height,
        width,
        height,
    }
}
