// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Deriving keys from items.
//!
//! Items are addressed by a key rather than by position. The key either
//! comes from the item itself through [`Keyed`], or from a caller-supplied
//! closure stored as a [`KeyFn`]. Either way the derivation must be pure:
//! the same item always yields the same key.

use std::rc::Rc;

/// Items that know their own key.
pub trait Keyed<K> {
    /// The key identifying this item within a list.
    fn key(&self) -> K;
}

/// A shared key derivation function.
pub type KeyFn<T, K> = Rc<dyn Fn(&T) -> K>;

/// Wrap a closure as a [`KeyFn`].
pub fn key_fn<T, K, F>(f: F) -> KeyFn<T, K>
where
    F: Fn(&T) -> K + 'static,
{
    return Rc::new(f);
}

/// The [`KeyFn`] that defers to [`Keyed::key`].
pub fn keyed<T, K>() -> KeyFn<T, K>
where
    T: Keyed<K> + 'static,
    K: 'static,
{
    return Rc::new(|item: &T| item.key());
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Person {
        name: &'static str,
    }

    impl Keyed<&'static str> for Person {
        fn key(&self) -> &'static str {
            return self.name;
        }
    }

    #[test]
    fn closure_key() {
        let by_len = key_fn(|s: &String| s.len());
        assert_eq!(by_len(&"hello".to_string()), 5);
    }

    #[test]
    fn keyed_trait_key() {
        let by_name = keyed::<Person, &'static str>();
        assert_eq!(by_name(&Person { name: "Julia" }), "Julia");
    }

    #[test]
    fn key_fn_is_shareable() {
        let first = key_fn(|n: &i32| n * 2);
        let second = Rc::clone(&first);
        assert_eq!(first(&3), second(&3));
    }
}
