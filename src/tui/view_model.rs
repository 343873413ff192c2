use crate::model::filter::Filter;
use crate::model::todo::TodoId;
use crate::ops::store::TodoStore;

/// One visible row of the task list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: TodoId,
    pub text: String,
    pub completed: bool,
}

/// Everything the home section shows about the list, rebuilt from the
/// store after each change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    pub filter: Filter,
    pub rows: Vec<RowView>,
    /// Set only when `rows` is empty
    pub empty_message: Option<String>,
    pub remaining_label: String,
    pub completed_count: usize,
}

impl ListView {
    pub fn build(store: &TodoStore) -> Self {
        let filter = store.filter();
        let rows: Vec<RowView> = store
            .filtered()
            .into_iter()
            .map(|t| RowView {
                id: t.id,
                text: t.text.clone(),
                completed: t.completed,
            })
            .collect();
        let empty_message = rows.is_empty().then(|| empty_message(filter));
        ListView {
            filter,
            rows,
            empty_message,
            remaining_label: remaining_label(store.remaining()),
            completed_count: store.completed_count(),
        }
    }
}

/// "No tasks yet" under `all`, "No tasks <filter>" otherwise
pub fn empty_message(filter: Filter) -> String {
    match filter {
        Filter::All => "No tasks yet".to_string(),
        other => format!("No tasks {}", other.as_str()),
    }
}

/// "N task(s) remaining", singular only for exactly one
pub fn remaining_label(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("{count} task{plural} remaining")
}
