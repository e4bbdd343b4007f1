//! A character-keyed prefix tree for variable-length escape sequences.
//!
//! Escape tables map sequences such as `lt;` or `amp;` to the characters
//! they denote, and decoding has to pick the *longest* table key that
//! prefixes the remaining input — `amp;` must not win over a longer entity
//! that also begins with `amp`. [`Trie`] resolves that with a single walk
//! whose cost is proportional to the length of the actual match, not to the
//! longest key in the table.

use std::collections::BTreeMap;

use crate::cursor::PushbackCursor;

#[derive(Debug, Clone)]
struct Entry<T> {
    key: Box<str>,
    value: T,
}

#[derive(Debug, Clone)]
struct Node<T> {
    children: BTreeMap<char, Node<T>>,
    entry: Option<Entry<T>>,
}

impl<T> Default for Node<T> {
    fn default() -> Self {
        Self {
            children: BTreeMap::new(),
            entry: None,
        }
    }
}

impl<T> Node<T> {
    fn contains_value(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        if self.entry.as_ref().is_some_and(|e| e.value == *value) {
            return true;
        }
        self.children.values().any(|c| c.contains_value(value))
    }

    /// Char-count depth of the deepest stored key under this node.
    fn max_entry_depth(&self, depth: usize) -> usize {
        let mut best = if self.entry.is_some() { depth } else { 0 };
        for child in self.children.values() {
            best = best.max(child.max_entry_depth(depth + 1));
        }
        best
    }
}

/// A prefix tree mapping string keys to values of type `T`.
///
/// Keys are unique; inserting an existing key replaces its value and returns
/// the previous one. Key lengths are measured in characters throughout, to
/// match the character-at-a-time cursor used during decoding.
///
/// # Examples
///
/// ```
/// use escodec::Trie;
///
/// let mut trie = Trie::new();
/// trie.insert("a", 1);
/// trie.insert("ab", 2);
/// trie.insert("abc", 3);
///
/// assert_eq!(trie.longest_match("abcd"), Some(("abc", &3)));
/// assert_eq!(trie.longest_match("abx"), Some(("ab", &2)));
/// assert_eq!(trie.longest_match("x"), None);
/// ```
#[derive(Debug, Clone)]
pub struct Trie<T> {
    root: Node<T>,
    len: usize,
    max_key_len: usize,
}

impl<T> Default for Trie<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Trie<T> {
    /// Creates an empty trie.
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: Node::default(),
            len: 0,
            max_key_len: 0,
        }
    }

    /// Inserts `key` with `value`, returning the previous value if the key
    /// was already present.
    pub fn insert(&mut self, key: &str, value: T) -> Option<T> {
        let mut node = &mut self.root;
        for c in key.chars() {
            node = node.children.entry(c).or_default();
        }
        let previous = node.entry.replace(Entry {
            key: key.into(),
            value,
        });
        match previous {
            Some(entry) => Some(entry.value),
            None => {
                self.len += 1;
                self.max_key_len = self.max_key_len.max(key.chars().count());
                None
            }
        }
    }

    /// Removes `key`, returning its value if it was present.
    ///
    /// Branches left empty by the removal are pruned, and the cached maximum
    /// key length is refreshed if the removed key was the longest.
    pub fn remove(&mut self, key: &str) -> Option<T> {
        let removed = remove_under(&mut self.root, &mut key.chars())?;
        self.len -= 1;
        if key.chars().count() == self.max_key_len {
            self.max_key_len = self.root.max_entry_depth(0);
        }
        Some(removed)
    }

    /// Returns the value stored under exactly `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&T> {
        let mut node = &self.root;
        for c in key.chars() {
            node = node.children.get(&c)?;
        }
        node.entry.as_ref().map(|e| &e.value)
    }

    /// Returns `true` if `key` is stored in the trie.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns `true` if any stored entry holds `value`.
    #[must_use]
    pub fn contains_value(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.root.contains_value(value)
    }

    /// Number of entries stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the trie holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Character length of the longest key currently stored, or 0 when
    /// empty. Consumers use this to bound how far ahead a match attempt can
    /// possibly need to look.
    #[must_use]
    pub fn max_key_length(&self) -> usize {
        self.max_key_len
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.root = Node::default();
        self.len = 0;
        self.max_key_len = 0;
    }

    /// Returns the entry whose key is the longest prefix of `input`, or
    /// `None` if no stored key prefixes it.
    #[must_use]
    pub fn longest_match(&self, input: &str) -> Option<(&str, &T)> {
        let mut node = &self.root;
        let mut best = node.entry.as_ref();
        for c in input.chars() {
            let Some(child) = node.children.get(&c) else {
                break;
            };
            node = child;
            if node.entry.is_some() {
                best = node.entry.as_ref();
            }
        }
        best.map(|e| (&*e.key, &e.value))
    }

    /// Cursor-driven longest match, for use inside decode hooks.
    ///
    /// On a match, the cursor is left positioned immediately after the
    /// matched key and the entry is returned. On no match, the cursor is
    /// restored to exactly the position it had on entry. Either way no
    /// character outside the matched key is consumed.
    pub fn longest_match_at<'t>(&'t self, input: &mut PushbackCursor<'_>) -> Option<(&'t str, &'t T)> {
        let start = input.mark();
        let mut node = &self.root;
        let mut best = node.entry.as_ref();
        let mut best_depth = 0;
        let mut depth = 0;
        while let Some(c) = input.peek() {
            let Some(child) = node.children.get(&c) else {
                break;
            };
            // peek returned Some, so next cannot fail
            let _ = input.next();
            depth += 1;
            node = child;
            if node.entry.is_some() {
                best = node.entry.as_ref();
                best_depth = depth;
            }
        }
        input.reset(start);
        let entry = best?;
        // Re-consume exactly the matched key; these characters were just
        // walked, so next cannot fail.
        for _ in 0..best_depth {
            let _ = input.next();
        }
        Some((&*entry.key, &entry.value))
    }
}

fn remove_under<T>(node: &mut Node<T>, key: &mut std::str::Chars<'_>) -> Option<T> {
    match key.next() {
        None => node.entry.take().map(|e| e.value),
        Some(c) => {
            let child = node.children.get_mut(&c)?;
            let removed = remove_under(child, key)?;
            if child.entry.is_none() && child.children.is_empty() {
                node.children.remove(&c);
            }
            Some(removed)
        }
    }
}
