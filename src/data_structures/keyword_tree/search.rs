// Copyright (c) 2025 Keywordtree Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lazy keyword search over a token sequence.
//!
//! The scan tries every start position in turn and walks the tree along the
//! text from there. Every terminal node reached on the way is reported, so
//! overlapping keywords and keywords that prefix one another all show up.

use std::hash::Hash;
use std::iter::FusedIterator;

use super::node::Node;

/// An occurrence of a stored keyword in searched text.
#[derive(Debug, PartialEq, Eq)]
pub struct Match<'k, T> {
    /// Token index in the text where the keyword begins
    pub start: usize,

    /// The stored keyword
    pub keyword: &'k [T],
}

impl<'k, T> Match<'k, T> {
    /// Creates a new match result.
    pub fn new(start: usize, keyword: &'k [T]) -> Self {
        Self { start, keyword }
    }

    /// Token index one past the last matched token.
    pub fn end(&self) -> usize {
        self.start + self.keyword.len()
    }
}

impl<T> Clone for Match<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Match<'_, T> {}

/// Iterator over keyword matches in a text.
///
/// Matches come out ordered by start position, then by keyword length.
/// Cloning an iterator that has not been advanced restarts the scan.
#[derive(Debug)]
pub struct Matches<'k, 't, T> {
    /// Root of the tree being searched
    root: &'k Node<T>,

    /// The text being searched
    text: &'t [T],

    /// Start position currently being extended
    start: usize,

    /// Node reached by walking `text[start..offset]`
    node: &'k Node<T>,

    /// Next text position to feed into the walk
    offset: usize,
}

impl<'k, 't, T> Matches<'k, 't, T> {
    pub(crate) fn new(root: &'k Node<T>, text: &'t [T]) -> Self {
        Self {
            root,
            text,
            start: 0,
            node: root,
            offset: 0,
        }
    }
}

impl<T> Clone for Matches<'_, '_, T> {
    fn clone(&self) -> Self {
        Self {
            root: self.root,
            text: self.text,
            start: self.start,
            node: self.node,
            offset: self.offset,
        }
    }
}

impl<'k, T: Eq + Hash> Iterator for Matches<'k, '_, T> {
    type Item = Match<'k, T>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.start < self.text.len() {
            while let Some(token) = self.text.get(self.offset) {
                let Some(child) = self.node.children.get(token) else {
                    break;
                };
                self.node = child;
                self.offset += 1;

                if let Some(keyword) = &child.keyword {
                    return Some(Match::new(self.start, keyword));
                }
            }

            // Dead end: restart the walk one position further along
            self.start += 1;
            self.offset = self.start;
            self.node = self.root;
        }

        None
    }
}

impl<T: Eq + Hash> FusedIterator for Matches<'_, '_, T> {}
