//! Persistent fuzzy trie index.
//!
//! [`FuzzyIndex`] maps string keys to values through a trie keyed by
//! alphabet units. The structure is persistent: [`FuzzyIndex::add`] and
//! [`FuzzyIndex::remove`] return new indexes that share all unchanged
//! subtrees with the original through `Arc`, so readers can keep
//! traversing an old root while writers publish new ones — no locks
//! anywhere.
//!
//! The point of the trie is [`FuzzyIndex::retrieve`]: compile one
//! Levenshtein automaton from the query, then walk the trie and the
//! automaton together. Subtrees the automaton blocks are never visited,
//! and automaton states are shared across every key under a common
//! prefix, which is what makes this faster than a pairwise distance scan.

mod iter;
mod retrieve;

pub use iter::Pairs;
pub use retrieve::Retrieve;

use crate::alphabet::Symbol;
use crate::automaton::Automaton;
use std::collections::BTreeMap;
use std::sync::Arc;

/// One trie node: an optional stored value plus an ordered child map.
///
/// Invariant: a node with no value and no children never appears as a
/// child — removal prunes such nodes from their parents.
#[derive(Debug)]
pub(crate) struct TrieNode<C: Symbol, V> {
    pub(crate) value: Option<V>,
    pub(crate) children: BTreeMap<C, Arc<TrieNode<C, V>>>,
}

impl<C: Symbol, V> TrieNode<C, V> {
    fn empty() -> Self {
        TrieNode {
            value: None,
            children: BTreeMap::new(),
        }
    }

    fn is_empty(&self) -> bool {
        self.value.is_none() && self.children.is_empty()
    }
}

/// A persistent trie mapping string keys to values, searchable by edit
/// distance.
///
/// At most one value is stored per key; [`FuzzyIndex::add`] replaces.
/// Emission order of the traversal and retrieval iterators follows
/// pre-order over the child maps — deterministic, but not otherwise
/// specified.
///
/// # Example
///
/// ```rust
/// use fuzztrie::index::ByteIndex;
///
/// let index: ByteIndex<u32> = ByteIndex::new()
///     .add("hello", 1)
///     .add("help", 2)
///     .add("halt", 3);
///
/// let near: Vec<u32> = index.retrieve_list("help", 1);
/// assert!(near.contains(&2));
/// assert!(!near.contains(&3));
/// ```
#[derive(Debug, Clone)]
pub struct FuzzyIndex<C: Symbol, V> {
    root: Arc<TrieNode<C, V>>,
    len: usize,
}

/// Byte-level index, the default instantiation.
pub type ByteIndex<V> = FuzzyIndex<u8, V>;

/// Character-level index for Unicode-correct distances.
pub type CharIndex<V> = FuzzyIndex<char, V>;

impl<C: Symbol, V: Clone> FuzzyIndex<C, V> {
    /// Create an empty index.
    pub fn new() -> Self {
        FuzzyIndex {
            root: Arc::new(TrieNode::empty()),
            len: 0,
        }
    }

    /// Whether the index holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of keys in the index.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Return a new index with `value` stored at `key`, replacing any
    /// existing value. The receiver is untouched; unchanged subtrees are
    /// shared between the two indexes.
    pub fn add(&self, key: &str, value: V) -> Self {
        let units = C::from_str(key);
        let (root, inserted) = Self::with_added(&self.root, &units, value);
        FuzzyIndex {
            root: Arc::new(root),
            len: self.len + usize::from(inserted),
        }
    }

    /// Return a new index without `key`. Removing an absent key returns an
    /// equivalent index. Nodes left with no value and no children are
    /// pruned from their parents.
    pub fn remove(&self, key: &str) -> Self {
        let units = C::from_str(key);
        match Self::with_removed(&self.root, &units) {
            None => self.clone(),
            Some(root) => FuzzyIndex {
                root: Arc::new(root.unwrap_or_else(TrieNode::empty)),
                len: self.len - 1,
            },
        }
    }

    /// Exact lookup.
    pub fn get(&self, key: &str) -> Option<&V> {
        let mut node = self.root.as_ref();
        for unit in C::iter_str(key) {
            node = node.children.get(&unit)?;
        }
        node.value.as_ref()
    }

    /// Whether `key` has a stored value.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Build an index by folding [`FuzzyIndex::add`] over `pairs`.
    /// Later pairs win on duplicate keys.
    pub fn from_pairs<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
    {
        pairs
            .into_iter()
            .fold(Self::new(), |index, (key, value)| {
                index.add(key.as_ref(), value)
            })
    }

    /// Lazy pre-order traversal of all `(key, value)` pairs.
    pub fn pairs(&self) -> Pairs<'_, C, V> {
        Pairs::new(&self.root)
    }

    /// Collect all `(key, value)` pairs.
    pub fn to_list(&self) -> Vec<(String, V)> {
        self.pairs().collect()
    }

    /// Fold over all pairs in traversal order.
    pub fn fold<A, F>(&self, init: A, mut f: F) -> A
    where
        F: FnMut(A, &str, &V) -> A,
    {
        let mut path = Vec::new();
        Self::fold_node(&self.root, &mut path, init, &mut f)
    }

    /// Visit every pair in traversal order.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&str, &V),
    {
        self.fold((), |(), key, value| f(key, value));
    }

    /// Lazily yield every value whose key is within `max_distance` edits
    /// of `query`.
    ///
    /// Compiles one automaton for the query, then co-traverses it with the
    /// trie; subtrees with no matching continuation are pruned without
    /// being visited, and nothing beyond what the next element needs is
    /// explored.
    pub fn retrieve(&self, query: &str, max_distance: usize) -> Retrieve<'_, C, V> {
        Retrieve::new(&self.root, Automaton::from_pattern(query, max_distance))
    }

    /// Collect [`FuzzyIndex::retrieve`] into a vector.
    pub fn retrieve_list(&self, query: &str, max_distance: usize) -> Vec<V> {
        self.retrieve(query, max_distance).collect()
    }

    /// Path-copy insertion. Returns the replacement node and whether the
    /// key was new.
    fn with_added(node: &TrieNode<C, V>, key: &[C], value: V) -> (TrieNode<C, V>, bool) {
        match key.split_first() {
            None => (
                TrieNode {
                    value: Some(value),
                    children: node.children.clone(),
                },
                node.value.is_none(),
            ),
            Some((&label, rest)) => {
                let (child, inserted) = match node.children.get(&label) {
                    Some(child) => Self::with_added(child, rest, value),
                    None => Self::with_added(&TrieNode::empty(), rest, value),
                };
                let mut children = node.children.clone();
                children.insert(label, Arc::new(child));
                (
                    TrieNode {
                        value: node.value.clone(),
                        children,
                    },
                    inserted,
                )
            }
        }
    }

    /// Path-copy removal. `None` means the key was absent; `Some(None)`
    /// means the replacement node became empty and must be pruned.
    fn with_removed(node: &TrieNode<C, V>, key: &[C]) -> Option<Option<TrieNode<C, V>>> {
        match key.split_first() {
            None => {
                node.value.as_ref()?;
                let pruned = TrieNode {
                    value: None,
                    children: node.children.clone(),
                };
                Some((!pruned.is_empty()).then_some(pruned))
            }
            Some((&label, rest)) => {
                let child = node.children.get(&label)?;
                let replacement = Self::with_removed(child, rest)?;
                let mut children = node.children.clone();
                match replacement {
                    Some(child) => {
                        children.insert(label, Arc::new(child));
                    }
                    None => {
                        children.remove(&label);
                    }
                }
                let node = TrieNode {
                    value: node.value.clone(),
                    children,
                };
                Some((!node.is_empty()).then_some(node))
            }
        }
    }

    fn fold_node<A, F>(node: &TrieNode<C, V>, path: &mut Vec<C>, acc: A, f: &mut F) -> A
    where
        F: FnMut(A, &str, &V) -> A,
    {
        let mut acc = acc;
        if let Some(value) = &node.value {
            acc = f(acc, &C::to_text(path), value);
        }
        for (&label, child) in &node.children {
            path.push(label);
            acc = Self::fold_node(child, path, acc, f);
            path.pop();
        }
        acc
    }
}

impl<C: Symbol, V: Clone> Default for FuzzyIndex<C, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Symbol, V: Clone, K: AsRef<str>> FromIterator<(K, V)> for FuzzyIndex<C, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(pairs: I) -> Self {
        Self::from_pairs(pairs)
    }
}
