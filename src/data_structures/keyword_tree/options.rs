// Copyright (c) 2025 Keywordtree Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Options for the Keyword Tree.

use serde::{Deserialize, Serialize};

/// Default maximum keyword length, in tokens.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// How text is split into tokens before it reaches the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tokenization {
    /// One token per Unicode scalar value.
    #[default]
    Character,

    /// One token per word; punctuation and whitespace separate words.
    Word,
}

/// Configuration options for a Keyword Tree.
///
/// `max_depth` applies to every tree. `case_sensitive` and `tokenization`
/// only matter to trees built over text, where a tokenizer is involved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeOptions {
    /// Whether keywords and text are compared case-sensitively
    pub case_sensitive: bool,

    /// Maximum keyword length in tokens (bounds recursion during removal)
    pub max_depth: usize,

    /// Tokenization applied to keywords and searched text
    pub tokenization: Tokenization,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            max_depth: DEFAULT_MAX_DEPTH,
            tokenization: Tokenization::Character,
        }
    }
}

impl TreeOptions {
    /// Creates options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether matching should be case-sensitive.
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Sets the maximum keyword length in tokens.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets the tokenization used by text trees.
    pub fn with_tokenization(mut self, tokenization: Tokenization) -> Self {
        self.tokenization = tokenization;
        self
    }
}
