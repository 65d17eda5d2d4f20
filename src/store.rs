// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! A minimal host for a list.
//!
//! [`ListStore`] owns the current snapshot, feeds actions through the
//! engine one at a time, and tells observers about every snapshot that
//! actually changed. A no-op transition (same `Rc` back) notifies nobody.
//!
//! Dispatch takes `&mut self`, so each action sees the snapshot produced by
//! the one before it.

use std::hash::Hash;
use std::rc::Rc;

use crate::action::Action;
use crate::engine::ListEngine;
use crate::error::Result;
use crate::state::Items;
use crate::state::ListOptions;
use crate::state::ListState;

/// Handle returned by [`ListStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer<T, K> = Box<dyn FnMut(&Rc<ListState<T, K>>)>;

/// Holds the current snapshot of a list and its observers.
pub struct ListStore<T, K: Eq + Hash> {
    engine: ListEngine<T, K>,
    state: Rc<ListState<T, K>>,
    observers: Vec<(SubscriptionId, Observer<T, K>)>,
    next_id: u64,
}

impl<T, K: Eq + Hash + Clone> ListStore<T, K> {
    /// Create a store. Duplicate keys are accepted.
    pub fn new(engine: ListEngine<T, K>, items: Vec<T>, options: ListOptions<K>) -> ListStore<T, K> {
        let state = engine.initial_state(items, options);
        return Self::from_state(engine, state);
    }

    /// Create a store, rejecting duplicate keys.
    pub fn try_new(engine: ListEngine<T, K>, items: Vec<T>, options: ListOptions<K>) -> Result<ListStore<T, K>> {
        let state = engine.try_initial_state(items, options)?;
        return Ok(Self::from_state(engine, state));
    }

    /// Create a store around an existing snapshot.
    pub fn from_state(engine: ListEngine<T, K>, state: Rc<ListState<T, K>>) -> ListStore<T, K> {
        return ListStore {
            engine,
            state,
            observers: Vec::new(),
            next_id: 0,
        };
    }

    #[inline]
    pub fn engine(&self) -> &ListEngine<T, K> {
        return &self.engine;
    }

    /// The current snapshot.
    #[inline]
    pub fn state(&self) -> &Rc<ListState<T, K>> {
        return &self.state;
    }

    /// The filtered view of the current snapshot.
    pub fn view(&self) -> Items<T> {
        return self.engine.view(&self.state);
    }

    pub fn item(&self, key: &K) -> Option<Rc<T>> {
        return self.engine.item(&self.state, key);
    }

    pub fn index_of(&self, key: &K) -> Option<usize> {
        return self.engine.index_of(&self.state, key);
    }

    pub fn selected_items(&self) -> Vec<Rc<T>> {
        return self.engine.selected_items(&self.state);
    }

    /// Apply `action`, returning whether the snapshot changed.
    pub fn dispatch(&mut self, action: Action<T, K>) -> bool {
        let next = self.engine.reduce(&self.state, action);
        return self.commit(next);
    }

    /// Replace the item with `key` by `f(old item)`.
    pub fn update_with<F>(&mut self, key: &K, f: F) -> bool
    where
        F: FnOnce(&T) -> T,
    {
        let next = self.engine.update_with(&self.state, key, f);
        return self.commit(next);
    }

    /// Call `observer` with every changed snapshot from now on.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&Rc<ListState<T, K>>) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        return id;
    }

    /// Stop notifying an observer. Returns false if it was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(other, _)| *other != id);
        return self.observers.len() != before;
    }

    fn commit(&mut self, next: Rc<ListState<T, K>>) -> bool {
        if Rc::ptr_eq(&next, &self.state) {
            return false;
        }

        self.state = next;
        tracing::debug!(target: "keyed_list::store", observers = self.observers.len(), items = self.state.len(), "notifying observers");
        for (_, observer) in self.observers.iter_mut() {
            observer(&self.state);
        }
        return true;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn store(values: &[u32]) -> ListStore<u32, u32> {
        return ListStore::new(ListEngine::new(|n: &u32| *n), values.to_vec(), ListOptions::new());
    }

    #[test]
    fn dispatch_reports_change() {
        let mut store = store(&[1, 2]);
        assert!(store.dispatch(Action::Append(vec![3])));
        assert!(!store.dispatch(Action::Remove(vec![42])));
        assert_eq!(store.state().len(), 3);
    }

    #[test]
    fn observers_see_changes_only() {
        let mut store = store(&[1]);
        let calls = Rc::new(Cell::new(0));
        let seen = Rc::clone(&calls);
        store.subscribe(move |_| seen.set(seen.get() + 1));

        store.dispatch(Action::Append(vec![2]));
        store.dispatch(Action::Update { key: 9, value: 9 });
        store.dispatch(Action::Remove(vec![1]));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let mut store = store(&[1]);
        let calls = Rc::new(Cell::new(0));
        let seen = Rc::clone(&calls);
        let id = store.subscribe(move |_| seen.set(seen.get() + 1));

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.dispatch(Action::Append(vec![2]));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn observer_receives_new_state() {
        let mut store = store(&[1]);
        let last = Rc::new(Cell::new(0usize));
        let seen = Rc::clone(&last);
        store.subscribe(move |state| seen.set(state.len()));
        store.dispatch(Action::Prepend(vec![0]));
        assert_eq!(last.get(), 2);
    }

    #[test]
    fn try_new_rejects_duplicates() {
        let result = ListStore::try_new(ListEngine::new(|n: &u32| *n % 2), vec![1, 3], ListOptions::new());
        assert!(result.is_err());
    }

    #[test]
    fn update_with_through_store() {
        let mut store = ListStore::new(
            ListEngine::new(|pair: &(u32, &'static str)| pair.0),
            vec![(1, "one"), (2, "two")],
            ListOptions::new(),
        );
        assert!(store.update_with(&2, |pair| (pair.0, "TWO")));
        assert_eq!(store.item(&2).map(|pair| pair.1), Some("TWO"));
        assert_eq!(store.index_of(&2), Some(1));
    }
}
