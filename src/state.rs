// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! The list state triple and its initial configuration.
//!
//! A [`ListState`] is an immutable snapshot of (items, selection, filter
//! text). Each part lives behind its own `Rc`, so a transition that only
//! touches one part shares the other two with the previous snapshot.

use std::hash::Hash;
use std::rc::Rc;

use crate::selection::Selection;

/// The authoritative item sequence.
///
/// The outer `Rc` identifies the sequence, the inner ones identify items.
pub type Items<T> = Rc<Vec<Rc<T>>>;

/// Initial selection and filter text for a new list.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(
    default,
    bound(
        serialize = "K: serde::Serialize + Clone + Eq + Hash",
        deserialize = "K: serde::Deserialize<'de> + Eq + Hash",
    ),
))]
pub struct ListOptions<K: Eq + Hash> {
    pub initial_selection: Selection<K>,
    pub initial_filter_text: String,
}

impl<K: Eq + Hash> Default for ListOptions<K> {
    fn default() -> Self {
        return ListOptions {
            initial_selection: Selection::empty(),
            initial_filter_text: String::new(),
        };
    }
}

impl<K: Eq + Hash> ListOptions<K> {
    /// Start from an empty selection and empty filter text.
    pub fn new() -> ListOptions<K> {
        return Self::default();
    }

    pub fn with_selection(mut self, selection: Selection<K>) -> ListOptions<K> {
        self.initial_selection = selection;
        return self;
    }

    pub fn with_filter_text(mut self, text: impl Into<String>) -> ListOptions<K> {
        self.initial_filter_text = text.into();
        return self;
    }
}

/// One snapshot of a list.
pub struct ListState<T, K: Eq + Hash> {
    items: Items<T>,
    selection: Rc<Selection<K>>,
    filter_text: Rc<str>,
}

impl<T, K: Eq + Hash> ListState<T, K> {
    /// Build a snapshot from its parts.
    pub fn new(items: Vec<T>, options: ListOptions<K>) -> Rc<ListState<T, K>> {
        let items = items.into_iter().map(Rc::new).collect::<Vec<_>>();
        return Self::from_parts(
            Rc::new(items),
            Rc::new(options.initial_selection),
            Rc::from(options.initial_filter_text),
        );
    }

    pub(crate) fn from_parts(
        items: Items<T>,
        selection: Rc<Selection<K>>,
        filter_text: Rc<str>,
    ) -> Rc<ListState<T, K>> {
        return Rc::new(ListState {
            items,
            selection,
            filter_text,
        });
    }

    /// The authoritative, unfiltered items.
    #[inline]
    pub fn items(&self) -> &Items<T> {
        return &self.items;
    }

    #[inline]
    pub fn selection(&self) -> &Rc<Selection<K>> {
        return &self.selection;
    }

    #[inline]
    pub fn filter_text(&self) -> &str {
        return &self.filter_text;
    }

    #[inline]
    pub(crate) fn filter_text_rc(&self) -> &Rc<str> {
        return &self.filter_text;
    }

    /// Number of items in the authoritative sequence.
    #[inline]
    pub fn len(&self) -> usize {
        return self.items.len();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        return self.items.is_empty();
    }

    /// A snapshot with new items, sharing selection and filter text.
    pub(crate) fn with_items(&self, items: Items<T>) -> Rc<ListState<T, K>> {
        return Self::from_parts(items, Rc::clone(&self.selection), Rc::clone(&self.filter_text));
    }

    /// A snapshot with a new selection, sharing items and filter text.
    pub(crate) fn with_selection(&self, selection: Rc<Selection<K>>) -> Rc<ListState<T, K>> {
        return Self::from_parts(Rc::clone(&self.items), selection, Rc::clone(&self.filter_text));
    }

    /// A snapshot with new filter text, sharing items and selection.
    pub(crate) fn with_filter_text(&self, filter_text: Rc<str>) -> Rc<ListState<T, K>> {
        return Self::from_parts(Rc::clone(&self.items), Rc::clone(&self.selection), filter_text);
    }
}

impl<T: std::fmt::Debug, K: Eq + Hash + std::fmt::Debug> std::fmt::Debug for ListState<T, K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return f
            .debug_struct("ListState")
            .field("items", &self.items)
            .field("selection", &self.selection)
            .field("filter_text", &self.filter_text)
            .finish();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_wraps_items() {
        let state: Rc<ListState<i32, i32>> = ListState::new(vec![1, 2, 3], ListOptions::new());
        assert_eq!(state.len(), 3);
        assert!(!state.is_empty());
        assert_eq!(*state.items()[1], 2);
        assert!(state.selection().is_empty());
        assert_eq!(state.filter_text(), "");
    }

    #[test]
    fn options_are_applied() {
        let options = ListOptions::new()
            .with_selection(Selection::keys([2]))
            .with_filter_text("tw");
        let state = ListState::new(vec![1, 2, 3], options);
        assert!(state.selection().contains(&2));
        assert_eq!(state.filter_text(), "tw");
    }

    #[test]
    fn with_items_shares_the_rest() {
        let state: Rc<ListState<i32, i32>> = ListState::new(vec![1], ListOptions::new());
        let next = state.with_items(Rc::new(vec![]));
        assert!(Rc::ptr_eq(next.selection(), state.selection()));
        assert!(Rc::ptr_eq(next.filter_text_rc(), state.filter_text_rc()));
        assert!(!Rc::ptr_eq(next.items(), state.items()));
    }

    #[test]
    fn with_selection_shares_the_rest() {
        let state: Rc<ListState<i32, i32>> = ListState::new(vec![1], ListOptions::new());
        let next = state.with_selection(Rc::new(Selection::All));
        assert!(Rc::ptr_eq(next.items(), state.items()));
        assert!(next.selection().is_all());
    }
}
