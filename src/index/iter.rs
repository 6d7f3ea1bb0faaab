//! Lazy traversal of the trie.

use super::TrieNode;
use crate::alphabet::Symbol;
use std::collections::btree_map;
use std::sync::Arc;

/// Lazy pre-order iterator over `(key, value)` pairs.
///
/// Holds a stack of child iterators, one per level of the current path.
/// Each pull descends to the next value-bearing node; nothing past it is
/// visited until the following pull.
pub struct Pairs<'a, C: Symbol, V> {
    stack: Vec<btree_map::Iter<'a, C, Arc<TrieNode<C, V>>>>,
    path: Vec<C>,
    /// Root value, handed out on the first pull.
    root_value: Option<&'a V>,
}

impl<'a, C: Symbol, V> Pairs<'a, C, V> {
    pub(crate) fn new(root: &'a TrieNode<C, V>) -> Self {
        Pairs {
            stack: vec![root.children.iter()],
            path: Vec::new(),
            root_value: root.value.as_ref(),
        }
    }
}

impl<'a, C: Symbol, V: Clone> Iterator for Pairs<'a, C, V> {
    type Item = (String, V);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(value) = self.root_value.take() {
            return Some((String::new(), value.clone()));
        }

        loop {
            let level = self.stack.last_mut()?;
            match level.next() {
                Some((&label, child)) => {
                    self.path.push(label);
                    self.stack.push(child.children.iter());
                    if let Some(value) = &child.value {
                        return Some((C::to_text(&self.path), value.clone()));
                    }
                }
                None => {
                    self.stack.pop();
                    self.path.pop();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::index::ByteIndex;

    #[test]
    fn test_pairs_is_lazy_and_ordered() {
        let index: ByteIndex<u32> =
            ByteIndex::from_pairs(vec![("bee", 2), ("ant", 1), ("cow", 3)]);

        let mut pairs = index.pairs();
        assert_eq!(pairs.next(), Some(("ant".to_string(), 1)));
        assert_eq!(pairs.next(), Some(("bee".to_string(), 2)));
        assert_eq!(pairs.next(), Some(("cow".to_string(), 3)));
        assert_eq!(pairs.next(), None);
    }

    #[test]
    fn test_pairs_nested_keys() {
        let index: ByteIndex<u32> = ByteIndex::from_pairs(vec![("a", 1), ("ab", 2), ("abc", 3)]);
        let keys: Vec<String> = index.pairs().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["a", "ab", "abc"]);
    }

    #[test]
    fn test_pairs_empty_key_first() {
        let index: ByteIndex<u32> = ByteIndex::from_pairs(vec![("b", 1), ("", 0)]);
        let first = index.pairs().next().unwrap();
        assert_eq!(first, (String::new(), 0));
    }
}
