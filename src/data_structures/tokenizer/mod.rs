// Copyright (c) 2025 Keywordtree Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Tokenizers that turn text into keyword tree tokens.
//!
//! Every token remembers the byte range it came from, so matches found on
//! tokens can be mapped back onto the original text even when case folding
//! changed the token itself.
//!
//! # Example
//!
//! ```
//! use keywordtree::{Tokenizer, WordTokenizer};
//!
//! let tokens = WordTokenizer::new(false).tokenize("Hello, World!");
//! let words: Vec<&str> = tokens.iter().map(|t| t.value.as_str()).collect();
//!
//! assert_eq!(words, vec!["hello", "world"]);
//! assert_eq!(tokens[1].span, 7..12);
//! ```

use std::fmt::Debug;
use std::hash::Hash;
use std::ops::Range;

use crate::data_structures::keyword_tree::TreeOptions;

/// A token together with its byte span in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<V> {
    /// The (possibly case-folded) token value
    pub value: V,

    /// Byte range of the token in the source text
    pub span: Range<usize>,
}

/// Splits text into tokens for a keyword tree.
pub trait Tokenizer {
    /// The token type stored in the tree.
    type Token: Eq + Hash + Clone + Debug;

    /// Builds the tokenizer described by `options`.
    fn from_options(options: &TreeOptions) -> Self
    where
        Self: Sized;

    /// Whether tokens keep the case of the source text.
    fn case_sensitive(&self) -> bool;

    /// Splits `text` into tokens, in order.
    fn tokenize(&self, text: &str) -> Vec<Token<Self::Token>>;
}

/// One token per `char`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharTokenizer {
    case_sensitive: bool,
}

impl CharTokenizer {
    /// Creates a character tokenizer.
    pub fn new(case_sensitive: bool) -> Self {
        Self { case_sensitive }
    }

    /// Folds a character to lowercase while keeping it a single token.
    ///
    /// Characters whose lowercase form expands (e.g. `İ`) keep only the first
    /// scalar of the expansion.
    fn fold(c: char) -> char {
        c.to_lowercase().next().unwrap_or(c)
    }
}

impl Default for CharTokenizer {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Tokenizer for CharTokenizer {
    type Token = char;

    fn from_options(options: &TreeOptions) -> Self {
        Self::new(options.case_sensitive)
    }

    fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    fn tokenize(&self, text: &str) -> Vec<Token<char>> {
        text.char_indices()
            .map(|(offset, c)| Token {
                value: if self.case_sensitive { c } else { Self::fold(c) },
                span: offset..offset + c.len_utf8(),
            })
            .collect()
    }
}

/// One token per word.
///
/// Words are maximal runs of alphanumeric characters, `_` and `'`. Anything
/// else separates words and is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordTokenizer {
    case_sensitive: bool,
}

impl WordTokenizer {
    /// Creates a word tokenizer.
    pub fn new(case_sensitive: bool) -> Self {
        Self { case_sensitive }
    }

    fn is_word_char(c: char) -> bool {
        c.is_alphanumeric() || c == '_' || c == '\''
    }

    fn token(&self, text: &str, span: Range<usize>) -> Token<String> {
        let word = &text[span.clone()];
        let value = if self.case_sensitive {
            word.to_string()
        } else {
            word.to_lowercase()
        };
        Token { value, span }
    }
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Tokenizer for WordTokenizer {
    type Token = String;

    fn from_options(options: &TreeOptions) -> Self {
        Self::new(options.case_sensitive)
    }

    fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    fn tokenize(&self, text: &str) -> Vec<Token<String>> {
        let mut tokens = Vec::new();
        let mut word_start = None;

        for (offset, c) in text.char_indices() {
            match (Self::is_word_char(c), word_start) {
                (true, None) => word_start = Some(offset),
                (false, Some(start)) => {
                    tokens.push(self.token(text, start..offset));
                    word_start = None;
                }
                _ => {}
            }
        }

        if let Some(start) = word_start {
            tokens.push(self.token(text, start..text.len()));
        }

        tokens
    }
}
