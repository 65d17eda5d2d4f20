// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

use std::rc::Rc;

use smallvec::SmallVec;

use super::clamp_index;

/// Relocate the elements at `sources` so they sit as one contiguous block
/// in front of `target`.
///
/// Source positions outside `[0, len)` are ignored, duplicates collapse, and
/// the remaining positions are sorted. The moved block therefore keeps the
/// original relative order of its elements no matter how `sources` was
/// ordered. `target` is clamped into `[0, len]`.
///
/// The output is streamed in three passes:
/// 1. unmoved elements before `target`
/// 2. the moved elements, by ascending source position
/// 3. unmoved elements from `target` on
///
/// Returns `seq` itself when it is empty or no source position survives
/// validation. Runs in O(n + m log m).
///
/// ```
/// use std::rc::Rc;
/// use keyed_list::primitives::move_items;
///
/// let seq = Rc::new((0..=10).collect::<Vec<_>>());
/// let moved = move_items(&seq, 5, &[3, 6, 9, 0]);
/// assert_eq!(*moved, vec![1, 2, 4, 0, 3, 6, 9, 5, 7, 8, 10]);
/// ```
pub fn move_items<T: Clone>(seq: &Rc<Vec<T>>, target: isize, sources: &[isize]) -> Rc<Vec<T>> {
    let len = seq.len();
    if len == 0 {
        return Rc::clone(seq);
    }

    let mut moved: SmallVec<[usize; 8]> = sources
        .iter()
        .filter(|&&p| p >= 0 && (p as usize) < len)
        .map(|&p| p as usize)
        .collect();
    if moved.is_empty() {
        return Rc::clone(seq);
    }
    moved.sort_unstable();
    moved.dedup();

    let target = clamp_index(target, len);
    let mut out = Vec::with_capacity(len);

    // `next` walks the sorted moved positions alongside the sequence.
    let mut next = 0;
    for (i, item) in seq[..target].iter().enumerate() {
        if next < moved.len() && moved[next] == i {
            next += 1;
            continue;
        }
        out.push(item.clone());
    }

    for &p in &moved {
        out.push(seq[p].clone());
    }

    for (i, item) in seq.iter().enumerate().skip(target) {
        if next < moved.len() && moved[next] == i {
            next += 1;
            continue;
        }
        out.push(item.clone());
    }

    debug_assert_eq!(out.len(), len);
    return Rc::new(out);
}
