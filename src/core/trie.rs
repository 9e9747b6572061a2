//! Prefix trie over the dictionary
//!
//! Nodes live in a flat arena and refer to their children by index. Every
//! prefix of every inserted word is exactly one node; lookups never create
//! nodes.

use super::occurrence::Rank;
use rustc_hash::FxHashMap;

/// Minimum word length accepted into the trie
pub const MIN_WORD_LEN: usize = 3;

/// Handle to a trie node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone, Default)]
struct Node {
    children: FxHashMap<u8, usize>,
    is_word: bool,
    rank: Rank,
}

/// Character-keyed prefix tree with optional per-word rank
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<Node>,
    word_count: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    /// Create an empty trie holding only the root
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
            word_count: 0,
        }
    }

    /// Build an unranked trie from a word list
    ///
    /// Words are lowercased; words shorter than three characters are skipped.
    ///
    /// # Examples
    /// ```
    /// use word_hunt::core::Trie;
    ///
    /// let trie = Trie::from_words(["cat", "cats", "at"]);
    /// assert!(trie.contains("cats"));
    /// assert!(!trie.contains("ca"));
    /// assert!(!trie.contains("at"));
    /// assert_eq!(trie.len(), 2);
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        for word in words {
            trie.insert(word.as_ref(), Rank::UNRANKED);
        }
        trie
    }

    /// Build a ranked trie from a word list presented in rank order
    ///
    /// Each word's rank is its position in the sequence. A word presented
    /// twice keeps the rank of its last position.
    pub fn from_ranked<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        for (position, word) in words.into_iter().enumerate() {
            trie.insert(word.as_ref(), Rank::new(position));
        }
        trie
    }

    /// Insert a word with the given rank, creating missing nodes
    ///
    /// Returns `false` (and changes nothing) for words shorter than three characters.
    pub fn insert(&mut self, word: &str, rank: Rank) -> bool {
        if word.chars().count() < MIN_WORD_LEN {
            return false;
        }

        let mut node_idx = 0;
        for byte in word.bytes().map(|b| b.to_ascii_lowercase()) {
            node_idx = if let Some(&child) = self.nodes[node_idx].children.get(&byte) {
                child
            } else {
                let new_idx = self.nodes.len();
                self.nodes.push(Node::default());
                self.nodes[node_idx].children.insert(byte, new_idx);
                new_idx
            };
        }

        let node = &mut self.nodes[node_idx];
        if !node.is_word {
            node.is_word = true;
            self.word_count += 1;
        }
        node.rank = rank;
        true
    }

    /// The root node (the empty prefix)
    #[inline]
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Follow the edge labelled `letter` from `node`
    #[inline]
    #[must_use]
    pub fn child(&self, node: NodeId, letter: u8) -> Option<NodeId> {
        self.nodes[node.0].children.get(&letter).copied().map(NodeId)
    }

    /// Whether `node` completes a dictionary word
    #[inline]
    #[must_use]
    pub fn is_word(&self, node: NodeId) -> bool {
        self.nodes[node.0].is_word
    }

    /// Rank stored on `node` (`UNRANKED` for non-words and unranked words)
    #[inline]
    #[must_use]
    pub fn rank(&self, node: NodeId) -> Rank {
        self.nodes[node.0].rank
    }

    /// Walk a whole prefix from the root
    #[must_use]
    pub fn find(&self, prefix: &str) -> Option<NodeId> {
        prefix
            .bytes()
            .try_fold(self.root(), |node, byte| self.child(node, byte.to_ascii_lowercase()))
    }

    /// Whether `word` was inserted as a complete word
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.find(word).is_some_and(|node| self.is_word(node))
    }

    /// Whether any inserted word starts with `prefix`
    #[must_use]
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.find(prefix).is_some()
    }

    /// Rank of a complete word, `None` if it is not in the trie
    #[must_use]
    pub fn rank_of(&self, word: &str) -> Option<Rank> {
        self.find(word)
            .filter(|&node| self.is_word(node))
            .map(|node| self.rank(node))
    }

    /// Number of distinct complete words
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.word_count
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Number of nodes, root included
    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
