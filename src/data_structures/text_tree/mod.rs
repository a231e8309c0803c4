// Copyright (c) 2025 Keywordtree Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Keyword trees over plain text.
//!
//! [`TextKeywordTree`] pairs a [`Tokenizer`] with a [`KeywordTree`] so keywords
//! and search text can be given as `&str`. Matches report the token index,
//! the byte span in the searched text and the keyword as it was inserted.
//!
//! # Example
//!
//! ```
//! use keywordtree::{TextKeywordTree, TreeOptions, WordTokenizer};
//!
//! let options = TreeOptions::new().with_case_sensitive(false);
//! let mut tree = TextKeywordTree::<WordTokenizer>::with_options(options);
//! tree.insert("New York").unwrap();
//!
//! let text = "I love new york.";
//! let matches = tree.search(text);
//!
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].start, 2);
//! assert_eq!(&text[matches[0].span.clone()], "new york");
//! assert_eq!(&*matches[0].keyword, "New York");
//! ```

mod configured;
mod shared;

use std::ops::Range;
use std::sync::Arc;

use fnv::FnvHashMap;
use tracing::trace;

use crate::data_structures::keyword_tree::{KeywordResult, KeywordTree, TreeOptions, TreeStats};
use crate::data_structures::tokenizer::{CharTokenizer, Tokenizer, WordTokenizer};

pub use configured::ConfiguredKeywordTree;
pub use shared::SharedKeywordTree;

/// An occurrence of a stored keyword in searched text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextMatch {
    /// Token index where the keyword begins
    pub start: usize,

    /// Byte range of the occurrence in the searched text
    pub span: Range<usize>,

    /// The keyword exactly as it was inserted
    pub keyword: Arc<str>,
}

/// A keyword tree that tokenizes its keywords and search text.
#[derive(Debug, Clone)]
pub struct TextKeywordTree<Tk: Tokenizer = CharTokenizer> {
    /// The tree over tokens
    tree: KeywordTree<Tk::Token>,

    /// Original spelling of each stored keyword, keyed by its tokens
    originals: FnvHashMap<Arc<[Tk::Token]>, Arc<str>>,

    /// Tokenizer applied to keywords and search text
    tokenizer: Tk,
}

impl TextKeywordTree<CharTokenizer> {
    /// Creates a case-sensitive tree over characters.
    pub fn chars() -> Self {
        Self::with_options(TreeOptions::default())
    }
}

impl TextKeywordTree<WordTokenizer> {
    /// Creates a case-sensitive tree over words.
    pub fn words() -> Self {
        Self::with_options(TreeOptions::default())
    }
}

impl<Tk: Tokenizer> TextKeywordTree<Tk> {
    /// Creates a tree whose tokenizer is built from `options`.
    pub fn with_options(options: TreeOptions) -> Self {
        let tokenizer = Tk::from_options(&options);
        Self::with_tokenizer(tokenizer, options)
    }

    /// Creates a tree around an already configured tokenizer.
    ///
    /// The tokenizer decides case handling; `options.case_sensitive` is
    /// overwritten with its setting so [`options`](Self::options) stays truthful.
    pub fn with_tokenizer(tokenizer: Tk, options: TreeOptions) -> Self {
        let options = options.with_case_sensitive(tokenizer.case_sensitive());
        Self {
            tree: KeywordTree::with_options(options),
            originals: FnvHashMap::default(),
            tokenizer,
        }
    }

    /// Inserts a keyword.
    ///
    /// The first spelling inserted is the one reported by searches; inserting a
    /// keyword that tokenizes the same way (e.g. differing only in case on a
    /// case-insensitive tree) changes nothing and returns `Ok(false)`.
    ///
    /// # Errors
    ///
    /// `InvalidKeywordError::Empty` if the keyword yields no tokens, and
    /// `InvalidKeywordError::TooLong` if it yields more than `max_depth`.
    pub fn insert(&mut self, keyword: &str) -> KeywordResult<bool> {
        let tokens = self.token_values(keyword);

        match self.tree.insert_shared(&tokens)? {
            Some(stored) => {
                self.originals.insert(stored, Arc::from(keyword));
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Checks whether a keyword tokenizing like `keyword` is stored.
    pub fn contains(&self, keyword: &str) -> bool {
        self.tree.contains(self.token_values(keyword))
    }

    /// Finds every keyword occurrence in `text`.
    ///
    /// Matches are ordered by start token, then by keyword length.
    pub fn search(&self, text: &str) -> Vec<TextMatch> {
        let (values, spans): (Vec<_>, Vec<_>) = self
            .tokenizer
            .tokenize(text)
            .into_iter()
            .map(|token| (token.value, token.span))
            .unzip();

        let matches: Vec<TextMatch> = self
            .tree
            .search(&values)
            .map(|m| TextMatch {
                start: m.start,
                span: spans[m.start].start..spans[m.end() - 1].end,
                keyword: self.original(m.keyword),
            })
            .collect();

        trace!(tokens = values.len(), matches = matches.len(), "text search finished");
        matches
    }

    /// Removes a keyword, returning whether it was stored.
    pub fn remove(&mut self, keyword: &str) -> bool {
        let tokens = self.token_values(keyword);
        let removed = self.tree.remove(&tokens);
        if removed {
            self.originals.remove(tokens.as_slice());
        }
        removed
    }

    /// Finds stored keywords whose tokens start with the tokens of `prefix`.
    ///
    /// Prefixes are matched token by token, so on a word tree `"new"` finds
    /// `"new york"` but `"ne"` does not.
    pub fn find_by_prefix(&self, prefix: &str) -> Vec<Arc<str>> {
        self.tree
            .find_by_prefix(self.token_values(prefix))
            .iter()
            .map(|tokens| self.original(tokens))
            .collect()
    }

    /// Returns every stored keyword as inserted, in no particular order.
    pub fn keywords(&self) -> Vec<Arc<str>> {
        self.originals.values().cloned().collect()
    }

    /// Number of distinct stored keywords.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Checks whether no keywords are stored.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Removes every keyword.
    pub fn clear(&mut self) {
        self.tree.clear();
        self.originals.clear();
    }

    /// Shape and memory statistics of the underlying tree.
    pub fn stats(&self) -> TreeStats {
        self.tree.stats()
    }

    /// Returns the options this tree was built with.
    pub fn options(&self) -> &TreeOptions {
        self.tree.options()
    }

    /// The tokenizer applied to keywords and text.
    pub fn tokenizer(&self) -> &Tk {
        &self.tokenizer
    }

    /// The underlying token tree.
    pub fn as_tree(&self) -> &KeywordTree<Tk::Token> {
        &self.tree
    }

    fn token_values(&self, text: &str) -> Vec<Tk::Token> {
        self.tokenizer
            .tokenize(text)
            .into_iter()
            .map(|token| token.value)
            .collect()
    }

    /// Every stored token sequence has an original spelling.
    fn original(&self, tokens: &[Tk::Token]) -> Arc<str> {
        self.originals
            .get(tokens)
            .cloned()
            .unwrap_or_else(|| Arc::from(""))
    }
}

impl<Tk: Tokenizer + Default> Default for TextKeywordTree<Tk> {
    fn default() -> Self {
        Self::with_tokenizer(Tk::default(), TreeOptions::default())
    }
}

impl<Tk: Tokenizer, S: AsRef<str>> Extend<S> for TextKeywordTree<Tk> {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for keyword in iter {
            if let Err(e) = self.insert(keyword.as_ref()) {
                tracing::warn!(keyword = keyword.as_ref(), error = %e, "skipping invalid keyword");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structures::keyword_tree::InvalidKeywordError;

    fn rendered(matches: &[TextMatch]) -> Vec<(usize, &str)> {
        matches.iter().map(|m| (m.start, &*m.keyword)).collect()
    }

    #[test]
    fn test_char_tree_search() {
        let mut tree = TextKeywordTree::chars();
        tree.insert("cat").unwrap();
        tree.insert("category").unwrap();

        let matches = tree.search("the category");
        assert_eq!(rendered(&matches), vec![(4, "cat"), (4, "category")]);
        assert_eq!(matches[0].span, 4..7);
        assert_eq!(matches[1].span, 4..12);
    }

    #[test]
    fn test_overlapping_matches() {
        let mut tree = TextKeywordTree::chars();
        tree.extend(["ab", "bc"]);

        assert_eq!(rendered(&tree.search("xabcx")), vec![(1, "ab"), (2, "bc")]);
    }

    #[test]
    fn test_char_spans_are_byte_ranges() {
        let mut tree = TextKeywordTree::chars();
        tree.insert("é!").unwrap();

        let text = "caffè! é!";
        let matches = tree.search(text);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].start, 7);
        assert_eq!(&text[matches[0].span.clone()], "é!");
    }

    #[test]
    fn test_case_insensitive_keeps_original_spelling() {
        let options = TreeOptions::new().with_case_sensitive(false);
        let mut tree = TextKeywordTree::<CharTokenizer>::with_options(options);

        assert!(tree.insert("Rust").unwrap());
        assert!(!tree.insert("RUST").unwrap());
        assert_eq!(tree.len(), 1);
        assert!(tree.contains("rust"));

        let text = "rUsT and RUST";
        let matches = tree.search(text);
        assert_eq!(rendered(&matches), vec![(0, "Rust"), (9, "Rust")]);
        assert_eq!(&text[matches[1].span.clone()], "RUST");
    }

    #[test]
    fn test_case_sensitive_by_default() {
        let mut tree = TextKeywordTree::chars();
        tree.insert("Rust").unwrap();

        assert!(!tree.contains("rust"));
        assert!(tree.search("rust").is_empty());
    }

    #[test]
    fn test_word_tree() {
        let mut tree = TextKeywordTree::words();
        tree.extend(["new york", "new york city", "york"]);

        let text = "I love new   york city!";
        let matches = tree.search(text);
        assert_eq!(
            rendered(&matches),
            vec![(2, "new york"), (2, "new york city"), (3, "york")]
        );
        assert_eq!(&text[matches[1].span.clone()], "new   york city");

        // Word trees never match inside words
        assert!(tree.search("newyork yorkshire").is_empty());
    }

    #[test]
    fn test_insert_rejects_keywords_without_tokens() {
        let mut words = TextKeywordTree::words();
        assert_eq!(words.insert(" ,, "), Err(InvalidKeywordError::Empty));

        let mut chars = TextKeywordTree::chars();
        assert_eq!(chars.insert(""), Err(InvalidKeywordError::Empty));

        let options = TreeOptions::new().with_max_depth(2);
        let mut short = TextKeywordTree::<CharTokenizer>::with_options(options);
        assert_eq!(
            short.insert("abc"),
            Err(InvalidKeywordError::TooLong {
                length: 3,
                max_depth: 2
            })
        );
        assert!(short.is_empty());
    }

    #[test]
    fn test_remove_and_prefix() {
        let mut tree = TextKeywordTree::words();
        tree.extend(["new york", "new jersey", "boston"]);

        let mut prefixed: Vec<String> = tree
            .find_by_prefix("new")
            .iter()
            .map(|k| k.to_string())
            .collect();
        prefixed.sort();
        assert_eq!(prefixed, vec!["new jersey", "new york"]);
        assert!(tree.find_by_prefix("ne").is_empty());

        assert!(tree.remove("new york"));
        assert!(!tree.remove("new york"));
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.keywords().len(), 2);
        assert!(tree.search("new york").is_empty());
    }

    #[test]
    fn test_clear_and_defaults() {
        let mut tree: TextKeywordTree<WordTokenizer> = TextKeywordTree::default();
        tree.insert("alpha").unwrap();
        tree.clear();

        assert!(tree.is_empty());
        assert!(tree.keywords().is_empty());
        assert!(tree.tokenizer().case_sensitive());
        assert_eq!(tree.options(), &TreeOptions::default());
        assert_eq!(tree.as_tree().stats().nodes, 1);
    }

    #[test]
    fn test_tokenizer_decides_case_sensitivity() {
        let mut tree =
            TextKeywordTree::with_tokenizer(CharTokenizer::new(false), TreeOptions::default());
        tree.insert("Rust").unwrap();

        assert!(!tree.options().case_sensitive);
        assert!(!tree.as_tree().options().case_sensitive);
        assert_eq!(tree.search("RUST").len(), 1);
    }

    #[test]
    fn test_empty_text() {
        let mut tree = TextKeywordTree::chars();
        tree.insert("a").unwrap();

        assert!(tree.search("").is_empty());
    }
}
