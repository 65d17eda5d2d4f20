// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Actions that can be applied to a list.
//!
//! Each action describes one transition from a [`ListState`] to the next.
//! [`ListEngine::reduce`] dispatches an action to the matching transition.
//! Actions address items by key, except [`Action::Insert`] which takes a
//! position.
//!
//! [`ListState`]: crate::state::ListState
//! [`ListEngine::reduce`]: crate::engine::ListEngine::reduce

use std::hash::Hash;

use crate::selection::Selection;

/// A transition request.
#[derive(Clone, Debug)]
pub enum Action<T, K: Eq + Hash> {
    /// Replace the selection outright.
    SetSelectedKeys(Selection<K>),
    /// Add keys to an explicit selection.
    AddKeysToSelection(Vec<K>),
    /// Remove keys from the selection, expanding `All` first.
    RemoveKeysFromSelection(Vec<K>),
    /// Replace the filter text outright.
    SetFilterText(String),
    /// Insert values before the clamped position.
    Insert { index: isize, values: Vec<T> },
    /// Insert values before the item with `key`.
    InsertBefore { key: K, values: Vec<T> },
    /// Insert values after the item with `key`.
    InsertAfter { key: K, values: Vec<T> },
    /// Insert values at the front.
    Prepend(Vec<T>),
    /// Insert values at the back.
    Append(Vec<T>),
    /// Remove every item whose key is listed.
    Remove(Vec<K>),
    /// Remove every selected item.
    RemoveSelectedItems,
    /// Swap the item with `key` and the item at `to_index`.
    Move { key: K, to_index: usize },
    /// Move the items with `keys` in front of the item with `key`.
    MoveBefore { key: K, keys: Vec<K> },
    /// Move the items with `keys` behind the item with `key`.
    MoveAfter { key: K, keys: Vec<K> },
    /// Replace the item with `key`.
    Update { key: K, value: T },
}

impl<T, K: Eq + Hash> Action<T, K> {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        return match self {
            Action::SetSelectedKeys(_) => "set_selected_keys",
            Action::AddKeysToSelection(_) => "add_keys_to_selection",
            Action::RemoveKeysFromSelection(_) => "remove_keys_from_selection",
            Action::SetFilterText(_) => "set_filter_text",
            Action::Insert { .. } => "insert",
            Action::InsertBefore { .. } => "insert_before",
            Action::InsertAfter { .. } => "insert_after",
            Action::Prepend(_) => "prepend",
            Action::Append(_) => "append",
            Action::Remove(_) => "remove",
            Action::RemoveSelectedItems => "remove_selected_items",
            Action::Move { .. } => "move",
            Action::MoveBefore { .. } => "move_before",
            Action::MoveAfter { .. } => "move_after",
            Action::Update { .. } => "update",
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names() {
        let action: Action<i32, i32> = Action::Move { key: 1, to_index: 0 };
        assert_eq!(action.name(), "move");
        let action: Action<i32, i32> = Action::RemoveSelectedItems;
        assert_eq!(action.name(), "remove_selected_items");
    }
}
