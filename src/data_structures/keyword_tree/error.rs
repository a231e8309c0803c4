// Copyright (c) 2025 Keywordtree Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Keyword Tree.
//!
//! Insertion is the only fallible operation; lookups and searches over
//! malformed input simply find nothing.

/// Errors returned when a keyword cannot be stored in the tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidKeywordError {
    /// The keyword has no tokens.
    #[error("Empty keyword not allowed")]
    Empty,

    /// The keyword has more tokens than the tree allows.
    #[error("Keyword of {length} tokens exceeds maximum trie depth of {max_depth}")]
    TooLong {
        /// Number of tokens in the rejected keyword.
        length: usize,
        /// The maximum allowed depth.
        max_depth: usize,
    },
}

/// Result type for Keyword Tree operations.
pub type KeywordResult<T> = Result<T, InvalidKeywordError>;
