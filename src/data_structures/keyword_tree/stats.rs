// Copyright (c) 2025 Keywordtree Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Size and shape statistics for a Keyword Tree.

use std::mem::size_of;

use super::node::Node;

/// Summary of a tree's shape and approximate memory footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TreeStats {
    /// Number of distinct stored keywords
    pub keywords: usize,

    /// Number of nodes, including the root
    pub nodes: usize,

    /// Length of the longest path from the root, in tokens
    pub max_depth: usize,

    /// Estimated heap usage in bytes (node tables plus stored keywords)
    pub approx_heap_bytes: usize,
}

impl TreeStats {
    /// Walks the tree rooted at `root` without recursion.
    pub(crate) fn collect<T>(root: &Node<T>) -> Self {
        let mut stats = Self::default();
        let mut stack = vec![(root, 0usize)];

        while let Some((node, depth)) = stack.pop() {
            stats.nodes += 1;
            stats.max_depth = stats.max_depth.max(depth);
            stats.approx_heap_bytes += Self::node_heap_bytes(node);

            if node.is_terminal() {
                stats.keywords += 1;
            }

            stack.extend(node.children.values().map(|child| (child, depth + 1)));
        }

        stats
    }

    fn node_heap_bytes<T>(node: &Node<T>) -> usize {
        // One control byte per bucket plus the (token, child) pair
        let table = node.children.capacity() * (1 + size_of::<T>() + size_of::<Node<T>>());

        // Arc header is two reference counts
        let keyword = node
            .keyword
            .as_ref()
            .map_or(0, |keyword| 2 * size_of::<usize>() + keyword.len() * size_of::<T>());

        table + keyword
    }
}
