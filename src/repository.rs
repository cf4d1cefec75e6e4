//! In-memory todo list with write-through persistence.
//!
//! # Invariants
//! - Ids come from a counter that only moves forward, so a removed id is
//!   never handed out again.
//! - Ids are positive and never exceed [`MAX_TODO_ID`].
//! - Stored content is always trimmed and non-empty.
//! - New todos are prepended (newest first).
//! - A successful mutation performs exactly one store write (list and
//!   counter together). Rejected input and lookup misses write nothing.
//! - A failed write never rolls back memory; the caller gets a warning.

use crate::domain::{normalize_content, Todo, TodoId};
use crate::persistence::{KeyValueStore, StoreAdapter, StoreError};
use log::{debug, info, warn};
use thiserror::Error;

/// Store key holding the serialized list
pub const TODOS_KEY: &str = "todos";
/// Store key holding the last assigned id
pub const LAST_ID_KEY: &str = "lastTodoId";
/// Largest id a stored list can hold (2^53 - 1, the JSON-safe integer limit)
pub const MAX_TODO_ID: TodoId = 9_007_199_254_740_991;

/// Rejected user input
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TodoError {
    #[error("todo content must not be empty")]
    EmptyContent,
    #[error("no todo ids left")]
    IdsExhausted,
}

/// Result of a mutation that went through, plus the write failure (if any)
/// that happened while syncing it to the store.
#[derive(Debug)]
#[must_use]
pub struct Persisted<T> {
    pub value: T,
    pub warning: Option<StoreError>,
}

impl<T> Persisted<T> {
    fn unwritten(value: T) -> Self {
        Self {
            value,
            warning: None,
        }
    }
}

/// Owner of the todo list and the id counter
#[derive(Debug)]
pub struct TodoRepository<S> {
    todos: Vec<Todo>,
    last_id: TodoId,
    adapter: StoreAdapter<S>,
}

impl<S: KeyValueStore> TodoRepository<S> {
    /// Load state from `store`, falling back to an empty list and counter 0
    /// for anything missing or unreadable.
    pub fn initialize(store: S) -> Self {
        let adapter = StoreAdapter::new(store);

        let mut todos: Vec<Todo> = adapter.load(TODOS_KEY).unwrap_or_default();
        let before = todos.len();
        todos.retain(|t| t.id > 0 && t.id <= MAX_TODO_ID);
        if todos.len() < before {
            warn!(
                "event=repo_init status=bad_ids dropped={}",
                before - todos.len()
            );
        }

        let stored_last_id: TodoId = match adapter.load(LAST_ID_KEY) {
            Some(id) if id > MAX_TODO_ID => {
                warn!("event=repo_init status=counter_out_of_range stored={}", id);
                0
            }
            Some(id) => id,
            None => 0,
        };

        // A lost counter must not lead to reissuing ids that are still in the list
        let max_id = todos.iter().map(|t| t.id).max().unwrap_or(0);
        if max_id > stored_last_id {
            warn!(
                "event=repo_init status=counter_behind stored={} max_id={}",
                stored_last_id, max_id
            );
        }
        let last_id = stored_last_id.max(max_id);

        info!(
            "event=repo_init status=ok todos={} last_id={}",
            todos.len(),
            last_id
        );

        Self {
            todos,
            last_id,
            adapter,
        }
    }

    /// Add a todo at the top of the list and return its id
    pub fn add(&mut self, content: &str) -> Result<Persisted<TodoId>, TodoError> {
        let content = normalize_content(content).ok_or_else(|| {
            debug!("event=todo_add status=rejected reason=empty");
            TodoError::EmptyContent
        })?;

        let id = self
            .last_id
            .checked_add(1)
            .filter(|id| *id <= MAX_TODO_ID)
            .ok_or_else(|| {
                warn!("event=todo_add status=rejected reason=ids_exhausted last_id={}", self.last_id);
                TodoError::IdsExhausted
            })?;
        self.last_id = id;
        self.todos.insert(0, Todo::new(id, content));
        info!("event=todo_add status=ok id={}", id);

        Ok(self.persisted(id))
    }

    /// Remove the todo with `id`. Unknown ids are ignored.
    pub fn remove(&mut self, id: TodoId) -> Persisted<Option<Todo>> {
        let Some(pos) = self.position(id) else {
            debug!("event=todo_remove status=miss id={}", id);
            return Persisted::unwritten(None);
        };

        let removed = self.todos.remove(pos);
        info!("event=todo_remove status=ok id={}", id);
        self.persisted(Some(removed))
    }

    /// Flip the completion flag; returns the new value when `id` exists
    pub fn toggle_complete(&mut self, id: TodoId) -> Persisted<Option<bool>> {
        let Some(pos) = self.position(id) else {
            debug!("event=todo_toggle status=miss id={}", id);
            return Persisted::unwritten(None);
        };

        let todo = &mut self.todos[pos];
        todo.is_completed = !todo.is_completed;
        let completed = todo.is_completed;
        info!("event=todo_toggle status=ok id={} completed={}", id, completed);

        self.persisted(Some(completed))
    }

    /// Replace the content of `id`, keeping every other field.
    /// Returns whether a todo was updated.
    pub fn edit_content(
        &mut self,
        id: TodoId,
        new_content: &str,
    ) -> Result<Persisted<bool>, TodoError> {
        let content = normalize_content(new_content).ok_or_else(|| {
            debug!("event=todo_edit status=rejected reason=empty id={}", id);
            TodoError::EmptyContent
        })?;

        let Some(pos) = self.position(id) else {
            debug!("event=todo_edit status=miss id={}", id);
            return Ok(Persisted::unwritten(false));
        };

        self.todos[pos].content = content;
        info!("event=todo_edit status=ok id={}", id);

        Ok(self.persisted(true))
    }

    pub fn find_by_id(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    /// Current list, newest first
    pub fn list(&self) -> &[Todo] {
        &self.todos
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|t| t.is_completed).count()
    }

    pub fn last_id(&self) -> TodoId {
        self.last_id
    }

    /// Write the full state once more (used on shutdown)
    pub fn flush(&mut self) -> Result<(), StoreError> {
        self.write()
    }

    /// Tear down the repository and hand back its store
    pub fn into_store(self) -> S {
        self.adapter.into_inner()
    }

    fn position(&self, id: TodoId) -> Option<usize> {
        self.todos.iter().position(|t| t.id == id)
    }

    fn write(&mut self) -> Result<(), StoreError> {
        self.adapter
            .save_pair((TODOS_KEY, &self.todos), (LAST_ID_KEY, &self.last_id))
    }

    fn persisted<T>(&mut self, value: T) -> Persisted<T> {
        let warning = self.write().err();
        if let Some(e) = &warning {
            warn!("event=store_write status=failed error={}", e);
        }
        Persisted { value, warning }
    }
}
