// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! The keyed list engine.
//!
//! [`ListEngine`] holds what stays fixed over the lifetime of a list (the
//! key function, the optional filter predicate) plus two caches (the keyed
//! index and the filtered view). It does not hold the state itself: every
//! action takes the current `Rc<ListState>` and returns the next one.
//!
//! Transitions never modify the input snapshot. When an action has nothing
//! to do (unknown key, empty argument list, nothing would change) the input
//! `Rc` is returned as is, so "did anything change?" is `Rc::ptr_eq`.
//!
//! Key resolution always runs against the authoritative items, never the
//! filtered view.

use std::cell::RefCell;
use std::hash::Hash;
use std::rc::Rc;

use rustc_hash::FxHashMap;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::action::Action;
use crate::error::ListError;
use crate::error::Result;
use crate::index::KeyedIndex;
use crate::key::KeyFn;
use crate::key::Keyed;
use crate::primitives;
use crate::selection::Selection;
use crate::state::Items;
use crate::state::ListOptions;
use crate::state::ListState;
use crate::view::FilterFn;
use crate::view::FilterView;

type State<T, K> = Rc<ListState<T, K>>;

/// Pure transitions over [`ListState`] snapshots.
pub struct ListEngine<T, K: Eq + Hash> {
    get_key: KeyFn<T, K>,
    filter: Option<FilterFn<T>>,
    index: RefCell<KeyedIndex<T, K>>,
    view: RefCell<FilterView<T>>,
}

impl<T, K> ListEngine<T, K>
where
    T: Keyed<K> + 'static,
    K: Eq + Hash + Clone + 'static,
{
    /// An engine for items that know their own key.
    pub fn keyed() -> ListEngine<T, K> {
        return Self::from_key_fn(crate::key::keyed());
    }
}

impl<T, K: Eq + Hash + Clone> ListEngine<T, K> {
    /// An engine keyed by `get_key`.
    pub fn new<F>(get_key: F) -> ListEngine<T, K>
    where
        F: Fn(&T) -> K + 'static,
    {
        return Self::from_key_fn(Rc::new(get_key));
    }

    pub fn from_key_fn(get_key: KeyFn<T, K>) -> ListEngine<T, K> {
        return ListEngine {
            get_key,
            filter: None,
            index: RefCell::new(KeyedIndex::new()),
            view: RefCell::new(FilterView::new()),
        };
    }

    /// Install the predicate used to derive the filtered view.
    pub fn with_filter<F>(mut self, filter: F) -> ListEngine<T, K>
    where
        F: Fn(&T, &str) -> bool + 'static,
    {
        self.filter = Some(Rc::new(filter));
        self.view = RefCell::new(FilterView::new());
        return self;
    }

    #[inline]
    pub fn has_filter(&self) -> bool {
        return self.filter.is_some();
    }

    /// Derive the key of `item`.
    #[inline]
    pub fn key_of(&self, item: &T) -> K {
        return (self.get_key)(item);
    }

    /// Create the first snapshot of a list.
    ///
    /// Duplicate keys are accepted; lookups then resolve to the last item
    /// carrying the key. Use [`ListEngine::try_initial_state`] to reject them.
    pub fn initial_state(&self, items: Vec<T>, options: ListOptions<K>) -> State<T, K> {
        return ListState::new(items, options);
    }

    /// Like [`ListEngine::initial_state`], but fails on duplicate keys.
    pub fn try_initial_state(&self, items: Vec<T>, options: ListOptions<K>) -> Result<State<T, K>> {
        let state = ListState::new(items, options);
        self.validate(state.items())?;
        return Ok(state);
    }

    /// Check that every item derives a distinct key.
    pub fn validate(&self, items: &[Rc<T>]) -> Result<()> {
        let mut seen: FxHashMap<K, usize> = FxHashMap::default();
        seen.reserve(items.len());
        for (position, item) in items.iter().enumerate() {
            if let Some(first) = seen.insert(self.key_of(item), position) {
                return Err(ListError::duplicate_key(first, position));
            }
        }
        return Ok(());
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Position of the item with `key` in the authoritative items.
    pub fn index_of(&self, state: &ListState<T, K>, key: &K) -> Option<usize> {
        return self.index.borrow_mut().position(state.items(), &*self.get_key, key);
    }

    /// The item with `key`.
    pub fn item(&self, state: &ListState<T, K>, key: &K) -> Option<Rc<T>> {
        return self.index.borrow_mut().item(state.items(), &*self.get_key, key);
    }

    /// Is the item with `key` selected?
    ///
    /// Under `All` this holds for every key present in the items.
    pub fn is_selected(&self, state: &ListState<T, K>, key: &K) -> bool {
        return match &**state.selection() {
            Selection::All => self.index_of(state, key).is_some(),
            Selection::Keys(keys) => keys.contains(key),
        };
    }

    /// The selected items, in list order.
    pub fn selected_items(&self, state: &ListState<T, K>) -> Vec<Rc<T>> {
        return match &**state.selection() {
            Selection::All => state.items().to_vec(),
            Selection::Keys(keys) => state
                .items()
                .iter()
                .filter(|item| keys.contains(&self.key_of(item)))
                .cloned()
                .collect(),
        };
    }

    /// The externally visible items.
    ///
    /// Without a filter predicate this is the authoritative sequence itself.
    pub fn view(&self, state: &ListState<T, K>) -> Items<T> {
        let Some(filter) = &self.filter else {
            return Rc::clone(state.items());
        };
        return self.view.borrow_mut().get(state.items(), state.filter_text_rc(), &**filter);
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Apply `action` to `state`.
    pub fn reduce(&self, state: &State<T, K>, action: Action<T, K>) -> State<T, K> {
        tracing::trace!(target: "keyed_list::engine", action = action.name(), items = state.len(), "dispatching action");
        return match action {
            Action::SetSelectedKeys(selection) => self.set_selected_keys(state, selection),
            Action::AddKeysToSelection(keys) => self.add_keys_to_selection(state, keys),
            Action::RemoveKeysFromSelection(keys) => self.remove_keys_from_selection(state, keys),
            Action::SetFilterText(text) => self.set_filter_text(state, text),
            Action::Insert { index, values } => self.insert(state, index, values),
            Action::InsertBefore { key, values } => self.insert_before(state, &key, values),
            Action::InsertAfter { key, values } => self.insert_after(state, &key, values),
            Action::Prepend(values) => self.prepend(state, values),
            Action::Append(values) => self.append(state, values),
            Action::Remove(keys) => self.remove(state, keys),
            Action::RemoveSelectedItems => self.remove_selected_items(state),
            Action::Move { key, to_index } => self.move_item(state, &key, to_index),
            Action::MoveBefore { key, keys } => self.move_before(state, &key, keys),
            Action::MoveAfter { key, keys } => self.move_after(state, &key, keys),
            Action::Update { key, value } => self.update(state, &key, value),
        };
    }

    /// Replace the selection. Keys are not checked against the items.
    pub fn set_selected_keys(&self, state: &State<T, K>, selection: Selection<K>) -> State<T, K> {
        return state.with_selection(Rc::new(selection));
    }

    pub fn select_all(&self, state: &State<T, K>) -> State<T, K> {
        return self.set_selected_keys(state, Selection::All);
    }

    pub fn clear_selection(&self, state: &State<T, K>) -> State<T, K> {
        return self.set_selected_keys(state, Selection::empty());
    }

    /// Add `keys` to an explicit selection. `All` already covers them.
    pub fn add_keys_to_selection<I>(&self, state: &State<T, K>, keys: I) -> State<T, K>
    where
        I: IntoIterator<Item = K>,
    {
        let Some(current) = state.selection().as_keys() else {
            return self.unchanged(state, "add_keys_to_selection", "selection is all");
        };
        let added: Vec<K> = keys.into_iter().filter(|key| !current.contains(key)).collect();
        if added.is_empty() {
            return self.unchanged(state, "add_keys_to_selection", "no new keys");
        }

        let mut next = current.clone();
        next.extend(added);
        return state.with_selection(Rc::new(Selection::Keys(next)));
    }

    /// Remove `keys` from the selection.
    ///
    /// `All` is first expanded to the keys of the current items.
    pub fn remove_keys_from_selection<I>(&self, state: &State<T, K>, keys: I) -> State<T, K>
    where
        I: IntoIterator<Item = K>,
    {
        let doomed: FxHashSet<K> = keys.into_iter().collect();
        if doomed.is_empty() {
            return self.unchanged(state, "remove_keys_from_selection", "empty key list");
        }

        let next: FxHashSet<K> = match &**state.selection() {
            Selection::All => state
                .items()
                .iter()
                .map(|item| self.key_of(item))
                .filter(|key| !doomed.contains(key))
                .collect(),
            Selection::Keys(current) => {
                if !current.iter().any(|key| doomed.contains(key)) {
                    return self.unchanged(state, "remove_keys_from_selection", "no listed key is selected");
                }
                without(current, &doomed)
            }
        };
        return state.with_selection(Rc::new(Selection::Keys(next)));
    }

    pub fn set_filter_text(&self, state: &State<T, K>, text: impl Into<String>) -> State<T, K> {
        return state.with_filter_text(Rc::from(text.into()));
    }

    /// Insert `values` before the clamped `index`.
    pub fn insert<I>(&self, state: &State<T, K>, index: isize, values: I) -> State<T, K>
    where
        I: IntoIterator<Item = T>,
    {
        let values: Vec<Rc<T>> = values.into_iter().map(Rc::new).collect();
        if values.is_empty() {
            return self.unchanged(state, "insert", "no values");
        }
        let items = primitives::insert(state.items(), index, values);
        return state.with_items(items);
    }

    /// Insert `values` before the item with `key`.
    ///
    /// On an empty list the values go to position 0 whatever the key.
    pub fn insert_before<I>(&self, state: &State<T, K>, key: &K, values: I) -> State<T, K>
    where
        I: IntoIterator<Item = T>,
    {
        return self.insert_at_key(state, key, values, 0, "insert_before");
    }

    /// Insert `values` after the item with `key`.
    ///
    /// On an empty list the values go to position 0 whatever the key.
    pub fn insert_after<I>(&self, state: &State<T, K>, key: &K, values: I) -> State<T, K>
    where
        I: IntoIterator<Item = T>,
    {
        return self.insert_at_key(state, key, values, 1, "insert_after");
    }

    fn insert_at_key<I>(&self, state: &State<T, K>, key: &K, values: I, offset: usize, action: &'static str) -> State<T, K>
    where
        I: IntoIterator<Item = T>,
    {
        let at = if state.is_empty() {
            0
        } else {
            match self.index_of(state, key) {
                Some(position) => position + offset,
                None => return self.unchanged(state, action, "unknown key"),
            }
        };
        return self.insert(state, at as isize, values);
    }

    pub fn prepend<I>(&self, state: &State<T, K>, values: I) -> State<T, K>
    where
        I: IntoIterator<Item = T>,
    {
        return self.insert(state, 0, values);
    }

    pub fn append<I>(&self, state: &State<T, K>, values: I) -> State<T, K>
    where
        I: IntoIterator<Item = T>,
    {
        return self.insert(state, state.len() as isize, values);
    }

    /// Remove every item whose key is in `keys`.
    ///
    /// The keys also leave an explicit selection. `All` survives unless the
    /// list ends up empty, in which case the selection becomes the empty set.
    pub fn remove<I>(&self, state: &State<T, K>, keys: I) -> State<T, K>
    where
        I: IntoIterator<Item = K>,
    {
        let doomed: FxHashSet<K> = keys.into_iter().collect();
        if doomed.is_empty() {
            return self.unchanged(state, "remove", "empty key list");
        }

        let kept: Vec<Rc<T>> = state
            .items()
            .iter()
            .filter(|item| !doomed.contains(&self.key_of(item)))
            .cloned()
            .collect();
        let items = if kept.len() == state.len() {
            Rc::clone(state.items())
        } else {
            Rc::new(kept)
        };

        let selection = if items.is_empty() {
            emptied(state.selection())
        } else {
            match &**state.selection() {
                Selection::All => Rc::clone(state.selection()),
                Selection::Keys(current) if current.iter().any(|key| doomed.contains(key)) => {
                    Rc::new(Selection::Keys(without(current, &doomed)))
                }
                Selection::Keys(_) => Rc::clone(state.selection()),
            }
        };

        return self.replace(state, items, selection, "remove");
    }

    /// Remove every selected item and clear the selection.
    pub fn remove_selected_items(&self, state: &State<T, K>) -> State<T, K> {
        let items = match &**state.selection() {
            Selection::All if state.is_empty() => Rc::clone(state.items()),
            Selection::All => Rc::new(Vec::new()),
            Selection::Keys(selected) if selected.is_empty() => {
                return self.unchanged(state, "remove_selected_items", "nothing selected");
            }
            Selection::Keys(selected) => {
                let kept: Vec<Rc<T>> = state
                    .items()
                    .iter()
                    .filter(|item| !selected.contains(&self.key_of(item)))
                    .cloned()
                    .collect();
                if kept.len() == state.len() {
                    Rc::clone(state.items())
                } else {
                    Rc::new(kept)
                }
            }
        };
        return self.replace(state, items, Rc::new(Selection::empty()), "remove_selected_items");
    }

    /// Swap the item with `key` and the item at `to_index`.
    ///
    /// This exchanges exactly two positions; it does not shift anything in
    /// between. See [`ListEngine::move_before`] for block relocation.
    pub fn move_item(&self, state: &State<T, K>, key: &K, to_index: usize) -> State<T, K> {
        let Some(from) = self.index_of(state, key) else {
            return self.unchanged(state, "move", "unknown key");
        };
        if to_index >= state.len() {
            return self.unchanged(state, "move", "target out of range");
        }
        if to_index == from {
            return self.unchanged(state, "move", "already in place");
        }

        let mut items = state.items().to_vec();
        items.swap(from, to_index);
        return state.with_items(Rc::new(items));
    }

    /// Move the items with `keys` to just before the item with `key`,
    /// keeping their current relative order.
    pub fn move_before<I>(&self, state: &State<T, K>, key: &K, keys: I) -> State<T, K>
    where
        I: IntoIterator<Item = K>,
    {
        return self.move_to_key(state, key, keys, 0, "move_before");
    }

    /// Move the items with `keys` to just after the item with `key`,
    /// keeping their current relative order.
    pub fn move_after<I>(&self, state: &State<T, K>, key: &K, keys: I) -> State<T, K>
    where
        I: IntoIterator<Item = K>,
    {
        return self.move_to_key(state, key, keys, 1, "move_after");
    }

    fn move_to_key<I>(&self, state: &State<T, K>, key: &K, keys: I, offset: usize, action: &'static str) -> State<T, K>
    where
        I: IntoIterator<Item = K>,
    {
        let Some(anchor) = self.index_of(state, key) else {
            return self.unchanged(state, action, "unknown key");
        };
        let sources = self.scan_positions(state, keys);
        let items = primitives::move_items(state.items(), (anchor + offset) as isize, &sources);
        if Rc::ptr_eq(&items, state.items()) {
            return self.unchanged(state, action, "no listed key is present");
        }
        return state.with_items(items);
    }

    /// Positions of `keys` found by scanning the current items directly.
    ///
    /// Unknown keys are left out.
    fn scan_positions<I>(&self, state: &ListState<T, K>, keys: I) -> SmallVec<[isize; 8]>
    where
        I: IntoIterator<Item = K>,
    {
        let wanted: FxHashSet<K> = keys.into_iter().collect();
        if wanted.is_empty() {
            return SmallVec::new();
        }
        return state
            .items()
            .iter()
            .enumerate()
            .filter(|(_, item)| wanted.contains(&self.key_of(item)))
            .map(|(position, _)| position as isize)
            .collect();
    }

    /// Replace the item with `key` by `value`.
    pub fn update(&self, state: &State<T, K>, key: &K, value: T) -> State<T, K> {
        return self.update_with(state, key, |_| value);
    }

    /// Replace the item with `key` by `f(old item)`.
    pub fn update_with<F>(&self, state: &State<T, K>, key: &K, f: F) -> State<T, K>
    where
        F: FnOnce(&T) -> T,
    {
        let Some(at) = self.index_of(state, key) else {
            return self.unchanged(state, "update", "unknown key");
        };

        let mut items = state.items().to_vec();
        items[at] = Rc::new(f(&items[at]));
        return state.with_items(Rc::new(items));
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn unchanged(&self, state: &State<T, K>, action: &'static str, reason: &'static str) -> State<T, K> {
        tracing::trace!(target: "keyed_list::engine", action, reason, "no-op transition");
        return Rc::clone(state);
    }

    /// Assemble the next snapshot, or hand back `state` if neither part moved.
    fn replace(
        &self,
        state: &State<T, K>,
        items: Items<T>,
        selection: Rc<Selection<K>>,
        action: &'static str,
    ) -> State<T, K> {
        if Rc::ptr_eq(&items, state.items()) && Rc::ptr_eq(&selection, state.selection()) {
            return self.unchanged(state, action, "nothing changed");
        }
        return ListState::from_parts(items, selection, Rc::clone(state.filter_text_rc()));
    }
}

/// The selection to use once the list is empty.
fn emptied<K: Eq + Hash>(selection: &Rc<Selection<K>>) -> Rc<Selection<K>> {
    if selection.is_empty() {
        return Rc::clone(selection);
    }
    return Rc::new(Selection::empty());
}

fn without<K: Eq + Hash + Clone>(keys: &FxHashSet<K>, doomed: &FxHashSet<K>) -> FxHashSet<K> {
    return keys.iter().filter(|key| !doomed.contains(*key)).cloned().collect();
}
