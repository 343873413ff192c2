use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::io::storage::{KeyValueStore, StorageError, THEME_KEY, TODOS_KEY};
use crate::model::filter::Filter;
use crate::model::prefs::ThemeMode;
use crate::model::todo::{Todo, TodoId};
use crate::ops::store::TodoStore;

/// Everything an event handler needs: the task store, the theme, and the
/// storage they persist to.
///
/// Data mutations write the full list back under `todos` before returning.
/// The filter is view state and is never written.
pub struct Session {
    storage: Box<dyn KeyValueStore>,
    store: TodoStore,
    theme: ThemeMode,
}

impl Session {
    /// Load the task list and theme from `storage`
    pub fn open(storage: Box<dyn KeyValueStore>) -> Self {
        let todos = match storage.get(TODOS_KEY) {
            Some(raw) => decode_todos(&raw),
            None => Vec::new(),
        };
        let theme = ThemeMode::from_stored(storage.get(THEME_KEY).as_deref());
        info!(todos = todos.len(), theme = %theme, "session opened");
        Session {
            storage,
            store: TodoStore::from_todos(todos),
            theme,
        }
    }

    pub fn store(&self) -> &TodoStore {
        &self.store
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn filter(&self) -> Filter {
        self.store.filter()
    }

    // -----------------------------------------------------------------------
    // Task list
    // -----------------------------------------------------------------------

    /// Add a task stamped with the current time. Blank text is ignored and
    /// nothing is written.
    pub fn add(&mut self, text: &str) -> Result<Option<TodoId>, StorageError> {
        self.add_at(text, Utc::now())
    }

    pub fn add_at(&mut self, text: &str, now: DateTime<Utc>) -> Result<Option<TodoId>, StorageError> {
        let Some(id) = self.store.add(text, now) else {
            debug!("ignored blank add");
            return Ok(None);
        };
        debug!(%id, "added task");
        self.save_todos()?;
        Ok(Some(id))
    }

    /// Toggle completion. Unknown ids change nothing but the list is still
    /// written back.
    pub fn toggle(&mut self, id: TodoId) -> Result<bool, StorageError> {
        let hit = self.store.toggle(id);
        debug!(%id, hit, "toggle");
        self.save_todos()?;
        Ok(hit)
    }

    pub fn delete(&mut self, id: TodoId) -> Result<bool, StorageError> {
        let hit = self.store.delete(id);
        debug!(%id, hit, "delete");
        self.save_todos()?;
        Ok(hit)
    }

    pub fn clear_completed(&mut self) -> Result<usize, StorageError> {
        let removed = self.store.clear_completed();
        debug!(removed, "cleared completed");
        self.save_todos()?;
        Ok(removed)
    }

    /// View-only: changes which tasks `filtered()` returns, writes nothing
    pub fn set_filter(&mut self, filter: Filter) {
        self.store.set_filter(filter);
    }

    pub fn filtered(&self) -> Vec<&Todo> {
        self.store.filtered()
    }

    fn save_todos(&mut self) -> Result<(), StorageError> {
        let json = serde_json::to_string(self.store.todos())?;
        self.storage.set(TODOS_KEY, &json)
    }

    // -----------------------------------------------------------------------
    // Theme
    // -----------------------------------------------------------------------

    pub fn toggle_theme(&mut self) -> Result<ThemeMode, StorageError> {
        self.set_theme(self.theme.toggled())
    }

    pub fn set_theme(&mut self, theme: ThemeMode) -> Result<ThemeMode, StorageError> {
        self.theme = theme;
        self.storage.set(THEME_KEY, theme.as_str())?;
        debug!(%theme, "theme set");
        Ok(theme)
    }

    /// Give the storage back, e.g. to reopen a fresh session on it
    pub fn into_storage(self) -> Box<dyn KeyValueStore> {
        self.storage
    }
}

/// Decode a persisted task list, dropping anything that is not a valid
/// task record instead of trusting the stored shape.
pub fn decode_todos(raw: &str) -> Vec<Todo> {
    let items = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(items)) => items,
        Ok(other) => {
            warn!(kind = json_kind(&other), "stored task list is not an array, starting empty");
            return Vec::new();
        }
        Err(e) => {
            warn!(error = %e, "stored task list is not valid JSON, starting empty");
            return Vec::new();
        }
    };

    let mut seen = HashSet::new();
    let mut todos = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let mut todo: Todo = match serde_json::from_value(item) {
            Ok(todo) => todo,
            Err(e) => {
                warn!(index, error = %e, "dropping malformed task record");
                continue;
            }
        };
        let trimmed = todo.text.trim().to_string();
        if trimmed.is_empty() {
            warn!(index, "dropping task record with empty text");
            continue;
        }
        todo.text = trimmed;
        if !seen.insert(todo.id) {
            warn!(index, id = %todo.id, "dropping task record with duplicate id");
            continue;
        }
        todos.push(todo);
    }
    todos
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
