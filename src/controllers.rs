use crate::domain::TodoId;
use crate::persistence::KeyValueStore;
use crate::repository::TodoRepository;

/// Option drawer for a single todo. Open exactly when it has a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OptionPanel {
    #[default]
    Closed,
    Open(TodoId),
}

impl OptionPanel {
    pub fn open(&mut self, id: TodoId) {
        *self = OptionPanel::Open(id);
    }

    pub fn close(&mut self) {
        *self = OptionPanel::Closed;
    }

    pub fn todo_id(&self) -> Option<TodoId> {
        match self {
            OptionPanel::Open(id) => Some(*id),
            OptionPanel::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.todo_id().is_some()
    }
}

/// Edit form for a single todo.
///
/// The draft is seeded from the repository every time the modal opens and
/// dropped when it closes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditModal {
    #[default]
    Closed,
    Open { todo_id: TodoId, draft: String },
}

impl EditModal {
    /// Open for `id` with its current content. Stays closed if `id` is gone.
    pub fn open<S: KeyValueStore>(&mut self, repo: &TodoRepository<S>, id: TodoId) -> bool {
        match repo.find_by_id(id) {
            Some(todo) => {
                *self = EditModal::Open {
                    todo_id: id,
                    draft: todo.content.clone(),
                };
                true
            }
            None => {
                self.close();
                false
            }
        }
    }

    pub fn close(&mut self) {
        *self = EditModal::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, EditModal::Open { .. })
    }

    pub fn todo_id(&self) -> Option<TodoId> {
        match self {
            EditModal::Open { todo_id, .. } => Some(*todo_id),
            EditModal::Closed => None,
        }
    }

    pub fn draft(&self) -> Option<&str> {
        match self {
            EditModal::Open { draft, .. } => Some(draft.as_str()),
            EditModal::Closed => None,
        }
    }

    pub fn push_char(&mut self, c: char) {
        if let EditModal::Open { draft, .. } = self {
            draft.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let EditModal::Open { draft, .. } = self {
            draft.pop();
        }
    }
}
