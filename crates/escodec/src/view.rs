//! Read-only publication of shared escape tables.
//!
//! A scheme builds its entity [`Trie`] once at construction time and then
//! shares it with every concurrent encode/decode call. [`ReadOnlyTrie`] is
//! the publication vehicle: it holds the frozen trie behind an `Arc`, and
//! because no mutating method exists on the type, "mutate a published
//! table" is unrepresentable rather than a runtime failure.

use std::sync::Arc;

use crate::{cursor::PushbackCursor, trie::Trie};

/// The read half of the trie contract.
///
/// Implemented by [`Trie`] itself and by [`ReadOnlyTrie`], so code that only
/// queries a table can accept either.
pub trait TrieView<T> {
    /// Returns the value stored under exactly `key`, if any.
    fn get(&self, key: &str) -> Option<&T>;

    /// Returns `true` if `key` is stored.
    fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns `true` if any stored entry holds `value`.
    fn contains_value(&self, value: &T) -> bool
    where
        T: PartialEq;

    /// Number of entries stored.
    fn len(&self) -> usize;

    /// Returns `true` if no entries are stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Character length of the longest stored key, or 0 when empty.
    fn max_key_length(&self) -> usize;

    /// Returns the entry whose key is the longest prefix of `input`.
    fn longest_match(&self, input: &str) -> Option<(&str, &T)>;
}

impl<T> TrieView<T> for Trie<T> {
    fn get(&self, key: &str) -> Option<&T> {
        Trie::get(self, key)
    }

    fn contains_value(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        Trie::contains_value(self, value)
    }

    fn len(&self) -> usize {
        Trie::len(self)
    }

    fn max_key_length(&self) -> usize {
        Trie::max_key_length(self)
    }

    fn longest_match(&self, input: &str) -> Option<(&str, &T)> {
        Trie::longest_match(self, input)
    }
}

/// A cheaply clonable, immutable handle to a published [`Trie`].
///
/// All reads delegate to the underlying trie; clones share it. There is no
/// way to mutate the table through this type.
#[derive(Debug, Clone)]
pub struct ReadOnlyTrie<T> {
    inner: Arc<Trie<T>>,
}

impl<T> ReadOnlyTrie<T> {
    /// Wraps an already-shared trie.
    #[must_use]
    pub fn new(inner: Arc<Trie<T>>) -> Self {
        Self { inner }
    }

    /// Cursor-driven longest match; see [`Trie::longest_match_at`].
    pub fn longest_match_at<'t>(
        &'t self,
        input: &mut PushbackCursor<'_>,
    ) -> Option<(&'t str, &'t T)> {
        self.inner.longest_match_at(input)
    }
}

impl<T> TrieView<T> for ReadOnlyTrie<T> {
    fn get(&self, key: &str) -> Option<&T> {
        self.inner.get(key)
    }

    fn contains_value(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.inner.contains_value(value)
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn max_key_length(&self) -> usize {
        self.inner.max_key_length()
    }

    fn longest_match(&self, input: &str) -> Option<(&str, &T)> {
        self.inner.longest_match(input)
    }
}

impl<T> Trie<T> {
    /// Freezes the trie into a shared read-only handle.
    ///
    /// This is the populate-once, publish-once step: after freezing there is
    /// no path back to a mutable table, so concurrent readers never race a
    /// writer.
    #[must_use]
    pub fn into_shared(self) -> ReadOnlyTrie<T> {
        ReadOnlyTrie::new(Arc::new(self))
    }
}

#[cfg(test)]
mod tests {
    use super::TrieView;
    use crate::trie::Trie;

    #[test]
    fn reads_delegate_to_the_underlying_trie() {
        let mut trie = Trie::new();
        trie.insert("k", "v");
        trie.insert("key", "w");
        let view = trie.into_shared();

        assert_eq!(view.get("k"), Some(&"v"));
        assert!(view.contains_key("key"));
        assert!(view.contains_value(&"w"));
        assert_eq!(view.len(), 2);
        assert!(!view.is_empty());
        assert_eq!(view.max_key_length(), 3);
        assert_eq!(view.longest_match("keys"), Some(("key", &"w")));
    }

    #[test]
    fn clones_share_one_table() {
        let mut trie = Trie::new();
        trie.insert("lt;", '<');
        let view = trie.into_shared();
        let other = view.clone();
        assert_eq!(view.get("lt;"), other.get("lt;"));
        assert_eq!(other.len(), 1);
    }

    #[test]
    fn view_is_usable_through_the_trait_object() {
        let mut trie = Trie::new();
        trie.insert("gt;", '>');
        let view = trie.into_shared();
        let dyn_view: &dyn TrieView<char> = &view;
        assert_eq!(dyn_view.longest_match("gt;x"), Some(("gt;", &'>')));
    }

    #[test]
    fn shared_across_threads() {
        let mut trie = Trie::new();
        for (key, value) in [("amp;", '&'), ("lt;", '<'), ("gt;", '>')] {
            trie.insert(key, value);
        }
        let view = trie.into_shared();

        std::thread::scope(|scope| {
            for _ in 0..4 {
                let view = view.clone();
                scope.spawn(move || {
                    assert_eq!(view.longest_match("amp;x"), Some(("amp;", &'&')));
                    assert_eq!(view.get("lt;"), Some(&'<'));
                });
            }
        });
    }
}
