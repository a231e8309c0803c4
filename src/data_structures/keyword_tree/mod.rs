// Copyright (c) 2025 Keywordtree Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Keyword Tree Implementation
//!
//! A trie over generic tokens that stores keyword sequences and scans text
//! for every occurrence of every stored keyword.
//!
//! # Features
//!
//! - Tokens are generic: characters, words, bytes or any `Eq + Hash + Clone` type
//! - Idempotent insertion; the keyword count never double-counts
//! - Lazy, restartable search reporting all matches, overlapping ones included
//! - Read-only queries through `&self`, so a built tree can be shared across threads
//!
//! # Example
//!
//! ```
//! use keywordtree::KeywordTree;
//!
//! let mut tree: KeywordTree<char> = KeywordTree::new();
//! tree.insert(['c', 'a', 't']).unwrap();
//! tree.insert("category".chars().collect::<Vec<_>>()).unwrap();
//!
//! let text: Vec<char> = "the category".chars().collect();
//! let found: Vec<(usize, String)> = tree
//!     .search(&text)
//!     .map(|m| (m.start, m.keyword.iter().collect()))
//!     .collect();
//!
//! assert_eq!(
//!     found,
//!     vec![(4, "cat".to_string()), (4, "category".to_string())]
//! );
//! ```
//!
//! # Matching policy
//!
//! Every stored keyword whose full token sequence appears contiguously in the
//! text is reported, at every start position. Matches are ordered by start
//! position and then by length. Searching costs at most
//! `O(text length × longest keyword)` token comparisons.

mod error;
mod node;
mod options;
mod search;
mod stats;

#[cfg(test)]
mod tests;

use std::hash::Hash;
use std::sync::Arc;

use tracing::{debug, trace, warn};

pub use error::{InvalidKeywordError, KeywordResult};
pub use options::{Tokenization, TreeOptions, DEFAULT_MAX_DEPTH};
pub use search::{Match, Matches};
pub use stats::TreeStats;

use node::Node;

/// A trie of keywords made of tokens of type `T`.
///
/// Key features:
/// * Nodes are created lazily as keywords are inserted
/// * Each terminal node keeps the keyword it completes, for reporting
/// * Removal prunes branches that no longer lead to a keyword
#[derive(Debug, Clone)]
pub struct KeywordTree<T = char> {
    /// The root node of the tree
    root: Node<T>,

    /// Number of distinct stored keywords
    len: usize,

    /// Configuration options
    options: TreeOptions,
}

impl<T> KeywordTree<T>
where
    T: Eq + Hash + Clone,
{
    /// Creates a new empty `KeywordTree` with default options.
    pub fn new() -> Self {
        Self::with_options(TreeOptions::default())
    }

    /// Creates a new empty `KeywordTree` with the specified options.
    pub fn with_options(options: TreeOptions) -> Self {
        Self {
            root: Node::new(),
            len: 0,
            options,
        }
    }

    /// Returns the options this tree was built with.
    pub fn options(&self) -> &TreeOptions {
        &self.options
    }

    /// Inserts a keyword into the tree.
    ///
    /// # Arguments
    ///
    /// * `keyword` - The token sequence to store.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The keyword was new.
    /// * `Ok(false)` - The keyword was already stored; nothing changed.
    /// * `Err(InvalidKeywordError)` - The keyword is empty or longer than `max_depth`.
    pub fn insert<K>(&mut self, keyword: K) -> KeywordResult<bool>
    where
        K: AsRef<[T]>,
    {
        self.insert_shared(keyword.as_ref())
            .map(|stored| stored.is_some())
    }

    /// Inserts a keyword and hands back the stored copy when it was new.
    pub(crate) fn insert_shared(&mut self, keyword: &[T]) -> KeywordResult<Option<Arc<[T]>>> {
        if keyword.is_empty() {
            return Err(InvalidKeywordError::Empty);
        }

        if keyword.len() > self.options.max_depth {
            return Err(InvalidKeywordError::TooLong {
                length: keyword.len(),
                max_depth: self.options.max_depth,
            });
        }

        let mut node = &mut self.root;
        for token in keyword {
            node = node.children.entry(token.clone()).or_default();
        }

        if node.is_terminal() {
            trace!(length = keyword.len(), "keyword already stored");
            return Ok(None);
        }

        let stored: Arc<[T]> = Arc::from(keyword);
        node.keyword = Some(Arc::clone(&stored));
        self.len += 1;

        debug!(length = keyword.len(), total = self.len, "keyword inserted");
        Ok(Some(stored))
    }

    /// Checks whether exactly this keyword is stored.
    pub fn contains<K>(&self, keyword: K) -> bool
    where
        K: AsRef<[T]>,
    {
        let keyword = keyword.as_ref();
        !keyword.is_empty() && self.find_node(keyword).is_some_and(Node::is_terminal)
    }

    /// Returns a lazy iterator over every keyword occurrence in `text`.
    ///
    /// The tree is only read, so any number of searches may run at once.
    /// An empty text yields nothing.
    pub fn search<'k, 't>(&'k self, text: &'t [T]) -> Matches<'k, 't, T> {
        trace!(text_len = text.len(), keywords = self.len, "search started");
        Matches::new(&self.root, text)
    }

    /// Removes a keyword from the tree.
    ///
    /// # Returns
    ///
    /// `true` if the keyword was stored and has been removed, `false` otherwise.
    pub fn remove<K>(&mut self, keyword: K) -> bool
    where
        K: AsRef<[T]>,
    {
        let keyword = keyword.as_ref();
        if keyword.is_empty() || keyword.len() > self.options.max_depth {
            return false;
        }

        let removed = Self::remove_recursive(&mut self.root, keyword);
        if removed {
            self.len -= 1;
            debug!(length = keyword.len(), total = self.len, "keyword removed");
        }
        removed
    }

    /// Depth-first removal; recursion depth is bounded by `max_depth`.
    fn remove_recursive(node: &mut Node<T>, rest: &[T]) -> bool {
        let Some((token, tail)) = rest.split_first() else {
            return node.keyword.take().is_some();
        };

        let Some(child) = node.children.get_mut(token) else {
            return false;
        };

        let removed = Self::remove_recursive(child, tail);
        if removed && child.is_prunable() {
            node.children.remove(token);
        }
        removed
    }

    /// Finds all stored keywords that start with `prefix`.
    ///
    /// An empty prefix returns every keyword. Order is unspecified.
    pub fn find_by_prefix<P>(&self, prefix: P) -> Vec<Arc<[T]>>
    where
        P: AsRef<[T]>,
    {
        let Some(start) = self.find_node(prefix.as_ref()) else {
            return Vec::new();
        };

        let mut found = Vec::new();
        let mut stack = vec![start];
        while let Some(node) = stack.pop() {
            if let Some(keyword) = &node.keyword {
                found.push(Arc::clone(keyword));
            }
            stack.extend(node.children.values());
        }
        found
    }

    /// Returns every stored keyword, in no particular order.
    ///
    /// Inserting the result into a fresh tree gives one that answers every
    /// `contains` and `search` exactly like this one.
    pub fn keywords(&self) -> Vec<Arc<[T]>> {
        let everything: &[T] = &[];
        self.find_by_prefix(everything)
    }

    /// Number of distinct stored keywords (not nodes).
    pub fn len(&self) -> usize {
        self.len
    }

    /// Alias of [`len`](Self::len).
    pub fn size(&self) -> usize {
        self.len
    }

    /// Checks whether the tree stores no keywords.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every keyword.
    pub fn clear(&mut self) {
        self.root = Node::new();
        self.len = 0;
        debug!("keyword tree cleared");
    }

    /// Collects node count, depth and an estimate of heap usage.
    ///
    /// This walks the entire tree, so it's an O(n) operation.
    pub fn stats(&self) -> TreeStats {
        TreeStats::collect(&self.root)
    }

    fn find_node(&self, path: &[T]) -> Option<&Node<T>> {
        path.iter()
            .try_fold(&self.root, |node, token| node.children.get(token))
    }

    /// Inserts each keyword, logging and skipping the ones that are invalid.
    fn insert_all<I>(&mut self, keywords: I)
    where
        I: IntoIterator,
        I::Item: AsRef<[T]>,
    {
        for keyword in keywords {
            if let Err(e) = self.insert(keyword) {
                warn!(error = %e, "skipping invalid keyword");
            }
        }
    }
}

impl<T> Default for KeywordTree<T>
where
    T: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K> FromIterator<K> for KeywordTree<T>
where
    T: Eq + Hash + Clone,
    K: AsRef<[T]>,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.insert_all(iter);
        tree
    }
}

impl<T, K> Extend<K> for KeywordTree<T>
where
    T: Eq + Hash + Clone,
    K: AsRef<[T]>,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        self.insert_all(iter);
    }
}
