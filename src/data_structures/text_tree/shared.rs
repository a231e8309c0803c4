// Copyright (c) 2025 Keywordtree Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Thread-safe handle to a text keyword tree.
//!
//! Writers take an exclusive lock, so insertions and removals are serialized;
//! any number of searches run concurrently under the shared lock.

use std::sync::Arc;

use parking_lot::RwLock;

use super::{TextKeywordTree, TextMatch};
use crate::data_structures::keyword_tree::{KeywordResult, TreeOptions};
use crate::data_structures::tokenizer::{CharTokenizer, Tokenizer};

/// A cloneable, lock-protected [`TextKeywordTree`].
///
/// Clones share the same tree.
#[derive(Debug)]
pub struct SharedKeywordTree<Tk: Tokenizer = CharTokenizer> {
    inner: Arc<RwLock<TextKeywordTree<Tk>>>,
}

impl<Tk: Tokenizer> SharedKeywordTree<Tk> {
    /// Wraps an existing tree.
    pub fn new(tree: TextKeywordTree<Tk>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(tree)),
        }
    }

    /// Creates an empty shared tree built from `options`.
    pub fn with_options(options: TreeOptions) -> Self {
        Self::new(TextKeywordTree::with_options(options))
    }

    /// Inserts a keyword under the write lock.
    pub fn insert(&self, keyword: &str) -> KeywordResult<bool> {
        self.inner.write().insert(keyword)
    }

    /// Removes a keyword under the write lock.
    pub fn remove(&self, keyword: &str) -> bool {
        self.inner.write().remove(keyword)
    }

    /// Checks for a keyword under the read lock.
    pub fn contains(&self, keyword: &str) -> bool {
        self.inner.read().contains(keyword)
    }

    /// Searches `text` under the read lock.
    pub fn search(&self, text: &str) -> Vec<TextMatch> {
        self.inner.read().search(text)
    }

    /// Number of distinct stored keywords.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Checks whether no keywords are stored.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Returns every stored keyword as inserted.
    pub fn keywords(&self) -> Vec<Arc<str>> {
        self.inner.read().keywords()
    }

    /// Runs `f` with shared access to the tree.
    ///
    /// Writers are blocked until `f` returns.
    pub fn with_read<R>(&self, f: impl FnOnce(&TextKeywordTree<Tk>) -> R) -> R {
        f(&self.inner.read())
    }
}

impl<Tk: Tokenizer> Clone for SharedKeywordTree<Tk> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<Tk: Tokenizer + Default> Default for SharedKeywordTree<Tk> {
    fn default() -> Self {
        Self::new(TextKeywordTree::default())
    }
}

impl<Tk: Tokenizer> From<TextKeywordTree<Tk>> for SharedKeywordTree<Tk> {
    fn from(tree: TextKeywordTree<Tk>) -> Self {
        Self::new(tree)
    }
}
