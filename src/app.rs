use crate::controllers::{EditModal, OptionPanel};
use crate::domain::{Severity, Todo, TodoId, UiMode, Variant};
use crate::notice::Snackbar;
use crate::persistence::{KeyValueStore, Settings, StoreError};
use crate::repository::{Persisted, TodoError, TodoRepository};
use log::{debug, warn};
use std::time::Instant;

/// Main application state
pub struct AppState<S> {
    pub repo: TodoRepository<S>,
    pub snackbar: Snackbar,
    pub option_panel: OptionPanel,
    pub edit_modal: EditModal,
    pub ui_mode: UiMode,
    pub input: String, // New-todo field
    pub selected_index: usize,
    pub notice_duration_ms: u64,
    pub notice_variant: Variant,
}

impl<S: KeyValueStore> AppState<S> {
    pub fn new(repo: TodoRepository<S>, settings: &Settings) -> Self {
        Self {
            repo,
            snackbar: Snackbar::default(),
            option_panel: OptionPanel::default(),
            edit_modal: EditModal::default(),
            ui_mode: UiMode::Normal,
            input: String::new(),
            selected_index: 0,
            notice_duration_ms: settings.notice_duration_ms,
            notice_variant: settings.notice_variant,
        }
    }

    /// Show a notice with the configured duration and variant
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) {
        let message = message.into();
        debug!("event=notice_open severity={} message={}", severity.name(), message);
        self.snackbar
            .open(message, severity, self.notice_duration_ms, self.notice_variant);
    }

    /// Surface a failed write. The warning replaces any notice shown for the
    /// same action.
    fn report_write<T>(&mut self, persisted: Persisted<T>) -> T {
        if let Some(e) = persisted.warning {
            self.report_store_error(&e);
        }
        persisted.value
    }

    fn report_store_error(&mut self, e: &StoreError) {
        warn!("event=store_write status=surfaced error={}", e);
        self.notify(format!("Could not save changes: {}", e), Severity::Warning);
    }

    /// Advance timers (called every loop iteration)
    pub fn tick(&mut self) {
        self.snackbar.tick(Instant::now());
    }

    /// Id of the todo under the cursor
    pub fn selected_todo_id(&self) -> Option<TodoId> {
        self.repo.list().get(self.selected_index).map(|t| t.id)
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move selection down
    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.repo.len() {
            self.selected_index += 1;
        }
    }

    /// Keep the cursor inside the list after it shrinks
    fn clamp_selection(&mut self) {
        let len = self.repo.len();
        if self.selected_index >= len {
            self.selected_index = len.saturating_sub(1);
        }
    }

    // New-todo field

    pub fn focus_input(&mut self) {
        self.ui_mode = UiMode::Input;
    }

    pub fn blur_input(&mut self) {
        self.ui_mode = UiMode::Normal;
    }

    pub fn input_add_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn input_backspace(&mut self) {
        self.input.pop();
    }

    /// Add a todo from the input field. The field is cleared only on success.
    pub fn submit_new_todo(&mut self) {
        match self.repo.add(&self.input) {
            Ok(saved) => {
                let id = saved.value;
                self.input.clear();
                // Newest todo sits at the top
                self.selected_index = 0;
                self.notify(format!("Todo {} added.", id), Severity::Success);
                self.report_write(saved);
            }
            Err(TodoError::EmptyContent) => {
                self.notify("Please enter a todo.", Severity::Error);
            }
            Err(TodoError::IdsExhausted) => {
                self.notify("No more todo ids are available.", Severity::Error);
            }
        }
    }

    /// Toggle completion of the todo under the cursor
    pub fn toggle_selected(&mut self) {
        let Some(id) = self.selected_todo_id() else {
            return;
        };

        let toggled = self.repo.toggle_complete(id);
        match toggled.value {
            Some(true) => self.notify(format!("Todo {} completed.", id), Severity::Info),
            Some(false) => self.notify(format!("Todo {} reopened.", id), Severity::Info),
            None => {}
        }
        self.report_write(toggled);
    }

    // Option panel

    pub fn open_options(&mut self) {
        if let Some(id) = self.selected_todo_id() {
            self.option_panel.open(id);
            self.ui_mode = UiMode::OptionPanel;
        }
    }

    pub fn close_options(&mut self) {
        self.option_panel.close();
        self.edit_modal.close();
        self.ui_mode = UiMode::Normal;
    }

    /// The todo the option panel points at, looked up fresh
    pub fn option_target(&self) -> Option<&Todo> {
        self.option_panel
            .todo_id()
            .and_then(|id| self.repo.find_by_id(id))
    }

    // Edit modal

    pub fn start_edit(&mut self) {
        let Some(id) = self.option_panel.todo_id() else {
            return;
        };

        if self.edit_modal.open(&self.repo, id) {
            self.ui_mode = UiMode::EditModal;
        } else {
            // Target vanished while the panel was open
            self.close_options();
        }
    }

    pub fn edit_add_char(&mut self, c: char) {
        self.edit_modal.push_char(c);
    }

    pub fn edit_backspace(&mut self) {
        self.edit_modal.backspace();
    }

    /// Save the draft. Blank drafts keep the modal open.
    pub fn submit_edit(&mut self) {
        let Some(id) = self.edit_modal.todo_id() else {
            return;
        };
        let draft = self.edit_modal.draft().unwrap_or_default().to_string();

        match self.repo.edit_content(id, &draft) {
            Ok(saved) => {
                if saved.value {
                    self.notify(format!("Todo {} updated.", id), Severity::Success);
                }
                self.report_write(saved);
                self.close_options();
            }
            // Edits never allocate ids, so content is the only rejection
            Err(_) => {
                self.notify("Please enter the new content.", Severity::Error);
            }
        }
    }

    /// Leave the modal and go back to the option panel
    pub fn cancel_edit(&mut self) {
        self.edit_modal.close();
        self.ui_mode = if self.option_panel.is_open() {
            UiMode::OptionPanel
        } else {
            UiMode::Normal
        };
    }

    // Delete flow

    pub fn request_delete(&mut self) {
        if self.option_panel.is_open() {
            self.ui_mode = UiMode::ConfirmDelete;
        }
    }

    pub fn confirm_delete(&mut self) {
        let Some(id) = self.option_panel.todo_id() else {
            self.ui_mode = UiMode::Normal;
            return;
        };

        let removed = self.repo.remove(id);
        self.close_options();
        self.clamp_selection();
        if removed.value.is_some() {
            self.notify(format!("Todo {} deleted.", id), Severity::Error);
        }
        self.report_write(removed);
    }

    /// Declining the confirmation closes the panel, like the drawer does
    pub fn cancel_delete(&mut self) {
        self.close_options();
    }

    /// Final write before exit. Hands the store back once it is synced.
    pub fn shutdown(mut self) -> Result<S, StoreError> {
        self.repo.flush()?;
        debug!(
            "event=shutdown_flush status=ok todos={} last_id={}",
            self.repo.len(),
            self.repo.last_id()
        );
        Ok(self.repo.into_store())
    }
}
