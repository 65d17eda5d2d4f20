// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

use std::rc::Rc;

use super::clamp_index;

/// Splice `values` into `seq` before the clamped `index`.
///
/// Returns `seq` itself when `values` is empty. Otherwise builds the new
/// sequence in a single pass: the prefix, the inserted block in the order
/// given, then the suffix.
///
/// ```
/// use std::rc::Rc;
/// use keyed_list::primitives::insert;
///
/// let seq = Rc::new(vec![0, 1, 2]);
/// assert_eq!(*insert(&seq, -1, vec![9]), vec![9, 0, 1, 2]);
/// assert_eq!(*insert(&seq, 3, vec![9]), vec![0, 1, 2, 9]);
/// assert!(Rc::ptr_eq(&insert(&seq, 1, vec![]), &seq));
/// ```
pub fn insert<T: Clone>(seq: &Rc<Vec<T>>, index: isize, values: Vec<T>) -> Rc<Vec<T>> {
    if values.is_empty() {
        return Rc::clone(seq);
    }

    let at = clamp_index(index, seq.len());
    let mut out = Vec::with_capacity(seq.len() + values.len());
    out.extend_from_slice(&seq[..at]);
    out.extend(values);
    out.extend_from_slice(&seq[at..]);
    return Rc::new(out);
}
