//! To-do items and the collection that owns them.
//!
//! All list state lives in [`TodoList`]; the UI never touches the backing
//! vector directly. Three mutators cover the whole lifecycle:
//!
//! ```text
//! draft text ──add()──▶ TodoItem ──toggle()──▶ completed flipped
//!                           │
//!                        remove()
//! ```
//!
//! Ids are handed out by a monotonic counter owned by the list, so they stay
//! unique for the list's lifetime even as items come and go.

/// A single to-do entry.
///
/// `text` is stored exactly as typed (untrimmed) and never changes after
/// creation; only `completed` is mutable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    /// Unique within the owning list for its lifetime
    pub id: u64,
    /// Display text, non-empty after trimming at creation
    pub text: String,
    /// Completion flag, flipped by toggle
    pub completed: bool,
}

/// Ordered collection of to-do items.
///
/// Insertion order is display order (newest last). Lookups that miss are
/// silent no-ops rather than errors - there is nothing to recover from.
#[derive(Debug, Default)]
pub struct TodoList {
    items: Vec<TodoItem>,
    next_id: u64,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new item from the draft text.
    ///
    /// Returns the new item's id, or `None` when the text is blank after
    /// trimming - in that case the list is untouched. The stored text is the
    /// untrimmed original.
    pub fn add(&mut self, text: &str) -> Option<u64> {
        if text.trim().is_empty() {
            return None;
        }

        let id = self.next_id;
        self.next_id += 1;

        self.items.push(TodoItem {
            id,
            text: text.to_string(),
            completed: false,
        });

        tracing::debug!("Added todo {} ({:?})", id, text);
        Some(id)
    }

    /// Flip the completion flag of the item with the given id.
    ///
    /// Unknown ids are ignored; no other item is touched either way.
    pub fn toggle(&mut self, id: u64) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.completed = !item.completed;
            tracing::debug!("Toggled todo {} -> {}", id, item.completed);
        }
    }

    /// Remove the item with the given id, keeping the relative order of the
    /// rest. Unknown ids are ignored, so calling this twice is harmless.
    pub fn remove(&mut self, id: u64) {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() < before {
            tracing::debug!("Removed todo {}", id);
        }
    }

    /// Items in display order
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&TodoItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_blank_is_noop() {
        let mut list = TodoList::new();
        assert_eq!(list.add(""), None);
        assert_eq!(list.add("   "), None);
        assert_eq!(list.add("\t\n"), None);
        assert!(list.is_empty());
    }

    #[test]
    fn test_add_keeps_text_untrimmed() {
        let mut list = TodoList::new();
        let id = list.add("  Buy milk ").expect("non-blank add");

        assert_eq!(list.len(), 1);
        let item = &list.items()[0];
        assert_eq!(item.id, id);
        assert_eq!(item.text, "  Buy milk ");
        assert!(!item.completed);
    }

    #[test]
    fn test_ids_unique_and_in_insertion_order() {
        let mut list = TodoList::new();
        let ids: Vec<u64> = (0..5)
            .map(|i| list.add(&format!("task {}", i)).unwrap())
            .collect();

        assert_eq!(list.len(), 5);
        // Strictly increasing implies distinct
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
        for (item, id) in list.items().iter().zip(&ids) {
            assert_eq!(item.id, *id);
        }
    }

    #[test]
    fn test_toggle_flips_only_target() {
        let mut list = TodoList::new();
        let a = list.add("A").unwrap();
        let b = list.add("B").unwrap();

        let before_b = list.items()[1].clone();
        list.toggle(a);

        assert!(list.items()[0].completed);
        assert_eq!(list.items()[1], before_b);

        // Involution
        list.toggle(a);
        assert!(!list.items()[0].completed);
        let _ = b;
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut list = TodoList::new();
        list.add("A").unwrap();
        let snapshot: Vec<TodoItem> = list.items().to_vec();

        list.toggle(9999);
        assert_eq!(list.items(), snapshot.as_slice());
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut list = TodoList::new();
        let a = list.add("A").unwrap();
        let b = list.add("B").unwrap();
        let c = list.add("C").unwrap();

        list.remove(b);

        let remaining: Vec<u64> = list.items().iter().map(|i| i.id).collect();
        assert_eq!(remaining, vec![a, c]);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut list = TodoList::new();
        let a = list.add("A").unwrap();
        list.add("B").unwrap();

        list.remove(a);
        let snapshot: Vec<TodoItem> = list.items().to_vec();
        list.remove(a);

        assert_eq!(list.items(), snapshot.as_slice());
    }

    #[test]
    fn test_end_to_end_scenario() {
        let mut list = TodoList::new();
        let a = list.add("A").unwrap();
        let b = list.add("B").unwrap();
        list.toggle(a);
        list.remove(b);

        assert_eq!(list.len(), 1);
        assert_eq!(list.items()[0].text, "A");
        assert!(list.items()[0].completed);
    }
}
