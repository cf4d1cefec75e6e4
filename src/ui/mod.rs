pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod modal;
pub mod snackbar;
pub mod styles;

use crate::app::AppState;
use crate::persistence::KeyValueStore;
use input_form::{render_edit_modal, render_input_bar};
use keybindings::render_keybindings;
use layout::create_layout;
use list_pane::render_list_pane;
use modal::{render_confirm_delete, render_option_panel};
use ratatui::Frame;
use snackbar::render_snackbar;

/// Main render function - draws the entire UI
pub fn render<S: KeyValueStore>(f: &mut Frame, app: &AppState<S>) {
    let size = f.size();
    let layout = create_layout(size);

    render_keybindings(f, app.ui_mode, layout.keybindings_area);
    render_input_bar(f, app, layout.input_area);
    render_list_pane(f, app, layout.list_area);

    // Overlays, bottom to top
    if app.option_panel.is_open() {
        render_option_panel(f, app, size);
    }
    if app.edit_modal.is_open() {
        render_edit_modal(f, app, size);
    }
    render_confirm_delete(f, app, size);

    // The snackbar sits above everything else
    render_snackbar(f, &app.snackbar, size);
}
