// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Selection tracking.
//!
//! A selection is either the [`Selection::All`] sentinel, which covers every
//! item in the list including items added later, or an explicit set of keys.
//! Explicit sets are not validated against the items: they may name keys
//! that are not (or are no longer) present.

use std::hash::Hash;

use rustc_hash::FxHashSet;

/// The keys considered selected.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(
    from = "repr::SelectionRepr<K>",
    into = "repr::SelectionRepr<K>",
    bound(
        serialize = "K: serde::Serialize + Clone + Eq + Hash",
        deserialize = "K: serde::Deserialize<'de> + Eq + Hash",
    ),
))]
pub enum Selection<K: Eq + Hash> {
    /// Every item, present and future.
    All,
    /// An explicit set of keys.
    Keys(FxHashSet<K>),
}

impl<K: Eq + Hash> Default for Selection<K> {
    fn default() -> Self {
        return Self::empty();
    }
}

impl<K: Eq + Hash> FromIterator<K> for Selection<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        return Selection::Keys(iter.into_iter().collect());
    }
}

impl<K: Eq + Hash> Selection<K> {
    /// The empty explicit selection.
    pub fn empty() -> Selection<K> {
        return Selection::Keys(FxHashSet::default());
    }

    /// An explicit selection of the given keys.
    pub fn keys<I: IntoIterator<Item = K>>(keys: I) -> Selection<K> {
        return keys.into_iter().collect();
    }

    /// Is this the `All` sentinel?
    #[inline]
    pub fn is_all(&self) -> bool {
        return matches!(self, Selection::All);
    }

    /// Is this the empty explicit set?
    ///
    /// `All` is never considered empty, even over an empty list.
    #[inline]
    pub fn is_empty(&self) -> bool {
        return match self {
            Selection::All => false,
            Selection::Keys(keys) => keys.is_empty(),
        };
    }

    /// Does the selection name `key`?
    ///
    /// `All` contains every key. Whether the key belongs to an item in the
    /// list is up to the caller to check.
    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        return match self {
            Selection::All => true,
            Selection::Keys(keys) => keys.contains(key),
        };
    }

    /// The explicit key set, or `None` for `All`.
    pub fn as_keys(&self) -> Option<&FxHashSet<K>> {
        return match self {
            Selection::All => None,
            Selection::Keys(keys) => Some(keys),
        };
    }
}

#[cfg(feature = "serde")]
mod repr {
    use std::hash::Hash;

    use super::Selection;

    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum AllTag {
        All,
    }

    /// `All` goes over the wire as the string `"all"`, explicit sets as a
    /// plain sequence of keys.
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(untagged)]
    pub enum SelectionRepr<K> {
        All(AllTag),
        Keys(Vec<K>),
    }

    impl<K: Eq + Hash> From<SelectionRepr<K>> for Selection<K> {
        fn from(repr: SelectionRepr<K>) -> Self {
            return match repr {
                SelectionRepr::All(_) => Selection::All,
                SelectionRepr::Keys(keys) => Selection::keys(keys),
            };
        }
    }

    impl<K: Eq + Hash> From<Selection<K>> for SelectionRepr<K> {
        fn from(selection: Selection<K>) -> Self {
            return match selection {
                Selection::All => SelectionRepr::All(AllTag::All),
                Selection::Keys(keys) => SelectionRepr::Keys(keys.into_iter().collect()),
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty_explicit() {
        let selection: Selection<u32> = Selection::default();
        assert!(selection.is_empty());
        assert!(!selection.is_all());
        assert_eq!(selection, Selection::empty());
    }

    #[test]
    fn all_contains_anything() {
        let selection: Selection<&str> = Selection::All;
        assert!(selection.contains(&"anything"));
        assert!(!selection.is_empty());
        assert!(selection.as_keys().is_none());
    }

    #[test]
    fn explicit_contains_members_only() {
        let selection = Selection::keys(["Sam", "Julia"]);
        assert!(selection.contains(&"Sam"));
        assert!(!selection.contains(&"David"));
        assert_eq!(selection.as_keys().map(|k| k.len()), Some(2));
    }

    #[test]
    fn collect_dedups() {
        let selection: Selection<i32> = [1, 1, 2].into_iter().collect();
        assert_eq!(selection, Selection::keys([2, 1]));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_all_is_a_string() {
        let json = serde_json::to_string(&Selection::<String>::All).unwrap();
        assert_eq!(json, "\"all\"");
        let back: Selection<String> = serde_json::from_str(&json).unwrap();
        assert!(back.is_all());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_keys_are_a_sequence() {
        let back: Selection<String> = serde_json::from_str("[\"a\",\"b\"]").unwrap();
        assert_eq!(back, Selection::keys(["a".to_string(), "b".to_string()]));
        let json = serde_json::to_string(&Selection::keys([7u32])).unwrap();
        assert_eq!(json, "[7]");
    }
}
