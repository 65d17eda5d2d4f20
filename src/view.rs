// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! The filtered view of a list.
//!
//! The view is derived from the authoritative items and the filter text and
//! never flows back into them. [`FilterView`] caches the last derivation and
//! recomputes it only when the items sequence or the filter text changes.

use std::rc::Rc;

use crate::state::Items;

/// A filter predicate over an item and the current filter text.
///
/// Returns `true` if the item should be visible.
pub type FilterFn<T> = Rc<dyn Fn(&T, &str) -> bool>;

/// Apply `filter` to `items`.
///
/// If every item passes, `items` itself is returned.
pub fn filter_items<T>(items: &Items<T>, text: &str, filter: &dyn Fn(&T, &str) -> bool) -> Items<T> {
    let visible: Vec<Rc<T>> = items.iter().filter(|item| filter(item, text)).cloned().collect();
    if visible.len() == items.len() {
        return Rc::clone(items);
    }
    return Rc::new(visible);
}

/// Cached filtered view.
pub struct FilterView<T> {
    /// Items and filter text the cached view was derived from.
    source: Option<(Items<T>, Rc<str>)>,
    view: Option<Items<T>>,
}

impl<T> Default for FilterView<T> {
    fn default() -> Self {
        return Self::new();
    }
}

impl<T> FilterView<T> {
    pub fn new() -> FilterView<T> {
        return FilterView { source: None, view: None };
    }

    fn is_current(&self, items: &Items<T>, text: &Rc<str>) -> bool {
        return match &self.source {
            Some((cached_items, cached_text)) => {
                Rc::ptr_eq(cached_items, items) && (Rc::ptr_eq(cached_text, text) || cached_text == text)
            }
            None => false,
        };
    }

    /// The view of `items` under `text`, recomputed only if either changed.
    pub fn get(&mut self, items: &Items<T>, text: &Rc<str>, filter: &dyn Fn(&T, &str) -> bool) -> Items<T> {
        if let (true, Some(view)) = (self.is_current(items, text), &self.view) {
            return Rc::clone(view);
        }

        let view = filter_items(items, text, filter);
        tracing::debug!(target: "keyed_list::view", items = items.len(), visible = view.len(), "recomputed filtered view");
        self.source = Some((Rc::clone(items), Rc::clone(text)));
        self.view = Some(Rc::clone(&view));
        return view;
    }
}
