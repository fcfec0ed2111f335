//! To-do list demo state: a draft input plus an ordered list of items.
//!
//! DESIGN
//! ======
//! Every mutation goes through `&mut self` on a value held in one
//! `RwSignal`, so the page re-renders from a single notification per action.
//! Ids come from a per-list counter and are never reused, which keeps keyed
//! list rendering stable across deletes.

#[cfg(test)]
#[path = "todos_test.rs"]
mod todos_test;

/// A single to-do entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    pub text: String,
    pub completed: bool,
}

/// Draft text and list items for the to-do card.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TodoList {
    pub draft: String,
    pub items: Vec<Todo>,
    next_id: u64,
}

impl TodoList {
    /// Replace the draft with the current input value.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Append the draft as a new item and clear it.
    ///
    /// A blank draft (empty after trimming) is ignored and left in place.
    /// Returns the new item's id when one was added.
    pub fn add(&mut self) -> Option<u64> {
        let text = self.draft.trim();
        if text.is_empty() {
            return None;
        }
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Todo { id, text: text.to_owned(), completed: false });
        self.draft.clear();
        Some(id)
    }

    /// Flip completion for `id`. Unknown ids are ignored.
    pub fn toggle(&mut self, id: u64) {
        if let Some(todo) = self.items.iter_mut().find(|t| t.id == id) {
            todo.completed = !todo.completed;
        }
    }

    /// Remove `id` from the list. Unknown ids are ignored.
    pub fn remove(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|t| t.completed).count()
    }
}
