// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Keyed List - ordered, uniquely-keyed list state with selection tracking.
//!
//! Items are addressed by a key derived from each item rather than by
//! position. Every edit produces a fresh [`ListState`] snapshot that shares
//! untouched items with the previous one, and an edit with nothing to do
//! hands back the previous snapshot itself, so change detection is a pointer
//! comparison.
//!
//! # Quick Start
//!
//! ```
//! use std::rc::Rc;
//! use keyed_list::engine::ListEngine;
//! use keyed_list::selection::Selection;
//! use keyed_list::state::ListOptions;
//!
//! let engine = ListEngine::<&str, &str>::new(|name| *name);
//! let state = engine.initial_state(
//!     vec!["David", "Sam", "Julia"],
//!     ListOptions::new().with_selection(Selection::keys(["Sam", "Julia"])),
//! );
//!
//! let next = engine.remove(&state, ["Sam"]);
//! assert_eq!(next.items().iter().map(|n| **n).collect::<Vec<_>>(), vec!["David", "Julia"]);
//! assert_eq!(**next.selection(), Selection::keys(["Julia"]));
//!
//! // Unknown keys leave the snapshot untouched.
//! assert!(Rc::ptr_eq(&engine.update(&next, &"Nobody", "Eve"), &next));
//! ```

pub mod action;
pub mod engine;
pub mod error;
pub mod index;
pub mod key;
pub mod primitives;
pub mod selection;
pub mod state;
pub mod store;
pub mod view;

pub use action::Action;
pub use engine::ListEngine;
pub use error::ListError;
pub use selection::Selection;
pub use state::Items;
pub use state::ListOptions;
pub use state::ListState;
pub use store::ListStore;
