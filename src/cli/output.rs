use serde::Serialize;

use crate::model::{Filter, ThemeMode, Todo, TodoId};
use crate::ops::store::TodoStore;
use crate::tui::view_model::{empty_message, remaining_label};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TodoListJson<'a> {
    pub filter: Filter,
    pub todos: Vec<&'a Todo>,
    pub remaining: usize,
}

#[derive(Serialize)]
pub struct StatsJson {
    pub total: usize,
    pub remaining: usize,
    pub completed: usize,
}

#[derive(Serialize)]
pub struct AddedJson {
    /// `None` when the text was blank and nothing was added
    pub id: Option<TodoId>,
}

#[derive(Serialize)]
pub struct ChangedJson {
    pub id: TodoId,
    /// Whether a task with this id existed
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

#[derive(Serialize)]
pub struct ClearedJson {
    pub removed: usize,
}

#[derive(Serialize)]
pub struct ThemeJson {
    pub theme: ThemeMode,
}

impl StatsJson {
    pub fn from_store(store: &TodoStore) -> Self {
        StatsJson {
            total: store.len(),
            remaining: store.remaining(),
            completed: store.completed_count(),
        }
    }
}

// ---------------------------------------------------------------------------
// Text formatting
// ---------------------------------------------------------------------------

/// One task per line: `[x] <id>  <text>`
pub fn format_todo_line(todo: &Todo) -> String {
    let check = if todo.completed { 'x' } else { ' ' };
    format!("[{}] {}  {}", check, todo.id, todo.text)
}

/// The filtered list followed by the remaining-count label
pub fn format_list(store: &TodoStore) -> String {
    let todos = store.filtered();
    let mut out = String::new();
    if todos.is_empty() {
        out.push_str(&empty_message(store.filter()));
        out.push('\n');
    } else {
        for todo in &todos {
            out.push_str(&format_todo_line(todo));
            out.push('\n');
        }
    }
    out.push('\n');
    out.push_str(&remaining_label(store.remaining()));
    out.push('\n');
    out
}
