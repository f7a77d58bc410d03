//! The in-memory shopping list. Not persisted; the display adapter reads it
//! through `entries`.

/// One line of the current shopping list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    /// Lowercase, non-empty item name.
    pub item: String,
    pub qty: u64,
    pub category: String,
}

/// Ordered list store, mutated only by the session. Duplicate items stay as
/// separate entries; adds never merge quantities.
#[derive(Debug, Default)]
pub struct ShoppingList {
    entries: Vec<ListEntry>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: ListEntry) {
        self.entries.push(entry);
    }

    /// Delete the first entry matching `item`, leaving later duplicates in
    /// place. Returns whether anything was removed.
    pub fn remove_first(&mut self, item: &str) -> bool {
        match self
            .entries
            .iter()
            .position(|e| e.item.eq_ignore_ascii_case(item))
        {
            Some(pos) => {
                self.entries.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Snapshot for the display adapter.
    pub fn entries(&self) -> &[ListEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
