//! Prefix tree over find-strings with longest-match lookup.
//!
//! The trie is an arena of nodes addressed by index. Each node keeps its
//! outgoing edges as a `(char, node index)` array sorted by label, and a list
//! of the values whose key ends there. Values inserted under the same key
//! accumulate in insertion order.

/// A node in the pattern trie.
#[derive(Debug, Clone)]
struct TrieNode<T> {
    /// Outgoing edges sorted by label: (character, child node index).
    edges: Vec<(char, usize)>,
    /// Values whose key ends at this node. Non-empty marks a terminal node.
    values: Vec<T>,
}

impl<T> TrieNode<T> {
    fn new() -> Self {
        TrieNode {
            edges: Vec::new(),
            values: Vec::new(),
        }
    }

    fn child(&self, label: char) -> Option<usize> {
        self.edges
            .binary_search_by_key(&label, |(l, _)| *l)
            .ok()
            .map(|pos| self.edges[pos].1)
    }
}

/// An ordered multi-map from strings to values, searchable by longest prefix.
#[derive(Debug, Clone)]
pub struct PatternTrie<T> {
    nodes: Vec<TrieNode<T>>,
    len: usize,
}

impl<T> Default for PatternTrie<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PatternTrie<T> {
    /// Creates a trie holding only the root node.
    #[must_use]
    pub fn new() -> Self {
        PatternTrie {
            nodes: vec![TrieNode::new()],
            len: 0,
        }
    }

    /// Registers `value` under `key`, after any values already there.
    ///
    /// Returns `false` and stores nothing when `key` is empty.
    pub fn insert(&mut self, key: &str, value: T) -> bool {
        if key.is_empty() {
            return false;
        }

        let mut node_idx = 0;
        for label in key.chars() {
            node_idx = match self.nodes[node_idx]
                .edges
                .binary_search_by_key(&label, |(l, _)| *l)
            {
                Ok(pos) => self.nodes[node_idx].edges[pos].1,
                Err(pos) => {
                    let new_idx = self.nodes.len();
                    self.nodes.push(TrieNode::new());
                    self.nodes[node_idx].edges.insert(pos, (label, new_idx));
                    new_idx
                }
            };
        }

        self.nodes[node_idx].values.push(value);
        self.len += 1;
        true
    }

    /// Finds the longest key that is a prefix of `input[start..]`.
    ///
    /// Returns the key length in characters and the values stored under it,
    /// or `None` if no key prefixes the remaining input. Shorter keys passed
    /// on the way are not reported.
    #[must_use]
    pub fn match_longest(&self, input: &[char], start: usize) -> Option<(usize, &[T])> {
        let mut node_idx = 0;
        let mut best = None;

        for (offset, &label) in input.get(start..)?.iter().enumerate() {
            let Some(next) = self.nodes[node_idx].child(label) else {
                break;
            };
            node_idx = next;
            let values = &self.nodes[node_idx].values;
            if !values.is_empty() {
                best = Some((offset + 1, values.as_slice()));
            }
        }

        best
    }

    /// Returns the values stored under exactly `key`.
    #[cfg(test)]
    pub(crate) fn get(&self, key: &str) -> &[T] {
        let mut node_idx = 0;
        for label in key.chars() {
            match self.nodes[node_idx].child(label) {
                Some(next) => node_idx = next,
                None => return &[],
            }
        }
        if node_idx == 0 {
            return &[];
        }
        &self.nodes[node_idx].values
    }

    /// Number of values stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no values are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes, including the root.
    #[cfg(test)]
    pub(crate) fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
