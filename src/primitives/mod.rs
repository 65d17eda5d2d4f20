// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Positional editing primitives over shared sequences.
//!
//! Both primitives take a sequence behind an `Rc` and hand back a sequence
//! behind an `Rc`. When nothing would change (no values to insert, no valid
//! positions to move) the input `Rc` itself is returned, so callers can
//! detect "no change" with `Rc::ptr_eq` instead of comparing contents.
//!
//! Elements are cloned exactly once into the new sequence. With `T = Rc<_>`
//! this means every untouched element keeps its identity.
//!
//! Out-of-range positions never panic:
//! - Target positions are clamped into `[0, len]`.
//! - Source positions outside `[0, len)` are dropped.

mod insert;
mod relocate;

pub use insert::insert;
pub use relocate::move_items;

/// Clamp a possibly negative position into `[0, len]`.
#[inline]
pub fn clamp_index(index: isize, len: usize) -> usize {
    if index < 0 {
        return 0;
    }
    return (index as usize).min(len);
}
