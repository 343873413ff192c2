use chrono::{DateTime, Utc};

use crate::model::filter::Filter;
use crate::model::todo::{Todo, TodoId};

/// In-memory owner of the task list and the current filter.
///
/// The list is newest first. Nothing here touches storage; callers decide
/// when to persist (see [`crate::ops::session::Session`]). Operations never
/// fail: blank text and unknown ids are silent no-ops.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoStore {
    todos: Vec<Todo>,
    filter: Filter,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from an already-validated list (newest first)
    pub fn from_todos(todos: Vec<Todo>) -> Self {
        TodoStore {
            todos,
            filter: Filter::All,
        }
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Prepend a new task. Returns `None` (and changes nothing) when the
    /// trimmed text is empty.
    pub fn add(&mut self, text: &str, now: DateTime<Utc>) -> Option<TodoId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = self.fresh_id(now);
        self.todos.insert(0, Todo::new(id, text.to_string(), now));
        Some(id)
    }

    /// Flip completion on the matching task. Returns false if no task matched.
    pub fn toggle(&mut self, id: TodoId) -> bool {
        match self.todos.iter_mut().find(|t| t.id == id) {
            Some(todo) => {
                todo.completed = !todo.completed;
                true
            }
            None => false,
        }
    }

    /// Remove the matching task. Returns false if no task matched.
    pub fn delete(&mut self, id: TodoId) -> bool {
        let before = self.todos.len();
        self.todos.retain(|t| t.id != id);
        self.todos.len() != before
    }

    /// Remove every completed task, returning how many were removed
    pub fn clear_completed(&mut self) -> usize {
        let before = self.todos.len();
        self.todos.retain(|t| !t.completed);
        before - self.todos.len()
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    /// Tasks passing the current filter, in list order
    pub fn filtered(&self) -> Vec<&Todo> {
        self.filtered_by(self.filter)
    }

    /// Tasks passing `filter`, ignoring the current one
    pub fn filtered_by(&self, filter: Filter) -> Vec<&Todo> {
        self.todos.iter().filter(|t| filter.matches(t)).collect()
    }

    /// Number of incomplete tasks, regardless of filter
    pub fn remaining(&self) -> usize {
        self.todos.iter().filter(|t| !t.completed).count()
    }

    pub fn completed_count(&self) -> usize {
        self.todos.len() - self.remaining()
    }

    /// Creation timestamp in millis, bumped past the newest existing id so
    /// two adds within the same millisecond still get distinct ids.
    ///
    /// If the newest id is already `i64::MAX` there is nothing above it, so
    /// the smallest unused id is taken instead.
    fn fresh_id(&self, now: DateTime<Utc>) -> TodoId {
        let candidate = TodoId::from_instant(now);
        match self.todos.iter().map(|t| t.id).max() {
            Some(max) if max >= candidate => match max.0.checked_add(1) {
                Some(next) => TodoId(next),
                None => self.lowest_unused_id(),
            },
            _ => candidate,
        }
    }

    fn lowest_unused_id(&self) -> TodoId {
        let mut used: Vec<i64> = self.todos.iter().map(|t| t.id.0).collect();
        used.sort_unstable();
        used.dedup();
        let mut next = i64::MIN;
        for id in used {
            if id != next {
                break;
            }
            // A list can never hold every i64, so this never overflows
            next += 1;
        }
        TodoId(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 14, 9, 0, 0).unwrap()
    }

    /// Store with three tasks added one second apart; "second" is completed.
    fn sample_store() -> TodoStore {
        let mut store = TodoStore::new();
        store.add("first", t0());
        let second = store.add("second", t0() + Duration::seconds(1)).unwrap();
        store.add("third", t0() + Duration::seconds(2));
        store.toggle(second);
        store
    }

    fn texts(todos: &[&Todo]) -> Vec<String> {
        todos.iter().map(|t| t.text.clone()).collect()
    }

    // --- add ---

    #[test]
    fn add_trims_and_prepends() {
        let mut store = sample_store();
        let id = store.add("  buy milk  ", t0() + Duration::seconds(10)).unwrap();
        assert_eq!(store.len(), 4);
        let first = &store.todos()[0];
        assert_eq!(first.id, id);
        assert_eq!(first.text, "buy milk");
        assert!(!first.completed);
        assert_eq!(first.created_at, "2025-05-14T09:00:10.000Z");
    }

    #[test]
    fn add_blank_is_noop() {
        let mut store = sample_store();
        let before = store.clone();
        assert_eq!(store.add("", t0()), None);
        assert_eq!(store.add("   \t\n ", t0()), None);
        assert_eq!(store, before);
    }

    #[test]
    fn ids_are_creation_millis() {
        let mut store = TodoStore::new();
        let id = store.add("a", t0()).unwrap();
        assert_eq!(id, TodoId(t0().timestamp_millis()));
    }

    #[test]
    fn ids_unique_within_same_millisecond() {
        let mut store = TodoStore::new();
        let a = store.add("a", t0()).unwrap();
        let b = store.add("b", t0()).unwrap();
        let c = store.add("c", t0() - Duration::seconds(5)).unwrap();
        assert_ne!(a, b);
        assert_eq!(b, TodoId(a.0 + 1));
        assert_eq!(c, TodoId(b.0 + 1));
    }

    fn stored(id: i64, text: &str) -> Todo {
        Todo::new(TodoId(id), text.to_string(), t0())
    }

    #[test]
    fn add_after_max_id_does_not_overflow() {
        let mut store = TodoStore::from_todos(vec![stored(i64::MAX, "edge")]);
        let id = store.add("next", t0()).unwrap();
        assert_eq!(id, TodoId(i64::MIN));

        let id = store.add("after", t0()).unwrap();
        assert_eq!(id, TodoId(i64::MIN + 1));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn add_after_max_id_skips_used_low_ids() {
        let mut store = TodoStore::from_todos(vec![
            stored(i64::MAX, "edge"),
            stored(i64::MIN, "low"),
            stored(i64::MIN + 1, "lower"),
            stored(i64::MIN + 3, "gap above"),
        ]);
        let id = store.add("next", t0()).unwrap();
        assert_eq!(id, TodoId(i64::MIN + 2));
    }

    #[test]
    fn newest_first_order() {
        let store = sample_store();
        let all: Vec<&Todo> = store.todos().iter().collect();
        assert_eq!(texts(&all), vec!["third", "second", "first"]);
    }

    // --- toggle / delete ---

    #[test]
    fn toggle_flips_and_flips_back() {
        let mut store = sample_store();
        let id = store.todos()[0].id;
        assert!(store.toggle(id));
        assert!(store.get(id).unwrap().completed);
        assert!(store.toggle(id));
        assert!(!store.get(id).unwrap().completed);
    }

    #[test]
    fn toggle_unknown_id_is_noop() {
        let mut store = sample_store();
        let before = store.clone();
        assert!(!store.toggle(TodoId(-1)));
        assert_eq!(store, before);
    }

    #[test]
    fn delete_removes_only_match() {
        let mut store = sample_store();
        let id = store.todos()[1].id;
        assert!(store.delete(id));
        assert_eq!(store.len(), 2);
        assert!(store.get(id).is_none());
        assert!(!store.delete(id));
        assert_eq!(store.len(), 2);
    }

    // --- clear completed ---

    #[test]
    fn clear_completed_is_idempotent() {
        let mut store = sample_store();
        assert_eq!(store.clear_completed(), 1);
        let once = store.clone();
        assert_eq!(store.clear_completed(), 0);
        assert_eq!(store, once);
        assert!(store.todos().iter().all(|t| !t.completed));
    }

    // --- filters ---

    #[test]
    fn filtered_respects_current_filter() {
        let mut store = sample_store();
        assert_eq!(texts(&store.filtered()), vec!["third", "second", "first"]);
        store.set_filter(Filter::Active);
        assert_eq!(texts(&store.filtered()), vec!["third", "first"]);
        store.set_filter(Filter::Completed);
        assert_eq!(texts(&store.filtered()), vec!["second"]);
    }

    #[test]
    fn set_filter_does_not_touch_data() {
        let mut store = sample_store();
        let todos = store.todos().to_vec();
        store.set_filter(Filter::Completed);
        assert_eq!(store.todos(), todos.as_slice());
    }

    #[test]
    fn active_and_completed_partition_all() {
        // Deterministic mix of adds, toggles and deletes
        let mut store = TodoStore::new();
        let mut ids = Vec::new();
        for i in 0..12 {
            let at = t0() + Duration::milliseconds(i);
            ids.push(store.add(&format!("task {i}"), at).unwrap());
            if i % 3 == 0 {
                store.toggle(ids[(i as usize) / 2]);
            }
            if i % 5 == 4 {
                store.delete(ids[i as usize - 1]);
            }
        }

        let all: Vec<TodoId> = store.filtered_by(Filter::All).iter().map(|t| t.id).collect();
        let active: Vec<TodoId> = store.filtered_by(Filter::Active).iter().map(|t| t.id).collect();
        let done: Vec<TodoId> = store
            .filtered_by(Filter::Completed)
            .iter()
            .map(|t| t.id)
            .collect();

        assert_eq!(active.len() + done.len(), all.len());
        assert!(active.iter().all(|id| !done.contains(id)));
        assert!(all.iter().all(|id| active.contains(id) || done.contains(id)));
    }

    #[test]
    fn remaining_ignores_filter() {
        let mut store = sample_store();
        store.set_filter(Filter::Completed);
        assert_eq!(store.remaining(), 2);
        assert_eq!(store.completed_count(), 1);
    }
}
