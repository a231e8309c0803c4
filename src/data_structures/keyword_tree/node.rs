// Copyright (c) 2025 Keywordtree Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the Keyword Tree.
//!
//! Each node owns its children directly, so the tree is a plain ownership
//! hierarchy rooted at [`KeywordTree`](super::KeywordTree).

use std::sync::Arc;

use fnv::FnvHashMap;

/// A node in the Keyword Tree.
///
/// Each node represents one token of a keyword path. Terminal nodes carry the
/// complete keyword that ends there.
#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    /// Map of tokens to child nodes
    pub(crate) children: FnvHashMap<T, Node<T>>,

    /// The stored keyword, present only on terminal nodes
    pub(crate) keyword: Option<Arc<[T]>>,
}

impl<T> Node<T> {
    /// Creates a new empty node.
    pub(crate) fn new() -> Self {
        Self {
            children: FnvHashMap::default(),
            keyword: None,
        }
    }

    pub(crate) fn is_terminal(&self) -> bool {
        self.keyword.is_some()
    }

    /// A node that ends no keyword and leads nowhere can be dropped from its parent.
    pub(crate) fn is_prunable(&self) -> bool {
        !self.is_terminal() && self.children.is_empty()
    }
}

impl<T> Default for Node<T> {
    fn default() -> Self {
        Self::new()
    }
}
