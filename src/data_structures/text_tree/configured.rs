// Copyright (c) 2025 Keywordtree Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! A text tree whose tokenization is picked at runtime.

use std::sync::Arc;

use super::{TextKeywordTree, TextMatch};
use crate::config::global_config;
use crate::data_structures::keyword_tree::{KeywordResult, Tokenization, TreeOptions, TreeStats};
use crate::data_structures::tokenizer::{CharTokenizer, WordTokenizer};

/// A character or word tree chosen from [`TreeOptions::tokenization`].
///
/// Useful when the tokenization comes from a configuration file rather than
/// from the type system.
#[derive(Debug, Clone)]
pub enum ConfiguredKeywordTree {
    /// Tree over characters
    Characters(TextKeywordTree<CharTokenizer>),

    /// Tree over words
    Words(TextKeywordTree<WordTokenizer>),
}

/// Forwards a method call to whichever tree is inside.
macro_rules! dispatch {
    ($self:expr, $tree:ident => $call:expr) => {
        match $self {
            ConfiguredKeywordTree::Characters($tree) => $call,
            ConfiguredKeywordTree::Words($tree) => $call,
        }
    };
}

impl ConfiguredKeywordTree {
    /// Builds an empty tree as described by `options`.
    pub fn from_options(options: TreeOptions) -> Self {
        match options.tokenization {
            Tokenization::Character => Self::Characters(TextKeywordTree::with_options(options)),
            Tokenization::Word => Self::Words(TextKeywordTree::with_options(options)),
        }
    }

    /// Builds an empty tree from the global configuration, or from default
    /// options if none has been installed.
    pub fn from_global_config() -> Self {
        let options = global_config()
            .map(|config| config.tree.clone())
            .unwrap_or_default();
        Self::from_options(options)
    }

    /// Tokenization in use.
    pub fn tokenization(&self) -> Tokenization {
        match self {
            Self::Characters(_) => Tokenization::Character,
            Self::Words(_) => Tokenization::Word,
        }
    }

    /// See [`TextKeywordTree::insert`].
    pub fn insert(&mut self, keyword: &str) -> KeywordResult<bool> {
        dispatch!(self, tree => tree.insert(keyword))
    }

    /// See [`TextKeywordTree::contains`].
    pub fn contains(&self, keyword: &str) -> bool {
        dispatch!(self, tree => tree.contains(keyword))
    }

    /// See [`TextKeywordTree::search`].
    pub fn search(&self, text: &str) -> Vec<TextMatch> {
        dispatch!(self, tree => tree.search(text))
    }

    /// See [`TextKeywordTree::remove`].
    pub fn remove(&mut self, keyword: &str) -> bool {
        dispatch!(self, tree => tree.remove(keyword))
    }

    /// See [`TextKeywordTree::find_by_prefix`].
    pub fn find_by_prefix(&self, prefix: &str) -> Vec<Arc<str>> {
        dispatch!(self, tree => tree.find_by_prefix(prefix))
    }

    /// See [`TextKeywordTree::keywords`].
    pub fn keywords(&self) -> Vec<Arc<str>> {
        dispatch!(self, tree => tree.keywords())
    }

    /// Number of distinct stored keywords.
    pub fn len(&self) -> usize {
        dispatch!(self, tree => tree.len())
    }

    /// Checks whether no keywords are stored.
    pub fn is_empty(&self) -> bool {
        dispatch!(self, tree => tree.is_empty())
    }

    /// Removes every keyword.
    pub fn clear(&mut self) {
        dispatch!(self, tree => tree.clear())
    }

    /// See [`TextKeywordTree::stats`].
    pub fn stats(&self) -> TreeStats {
        dispatch!(self, tree => tree.stats())
    }

    /// Options the tree was built with.
    pub fn options(&self) -> &TreeOptions {
        dispatch!(self, tree => tree.options())
    }
}

impl Default for ConfiguredKeywordTree {
    fn default() -> Self {
        Self::from_options(TreeOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_options_picks_tokenization() {
        let chars = ConfiguredKeywordTree::from_options(TreeOptions::default());
        assert_eq!(chars.tokenization(), Tokenization::Character);

        let words = ConfiguredKeywordTree::from_options(
            TreeOptions::new().with_tokenization(Tokenization::Word),
        );
        assert_eq!(words.tokenization(), Tokenization::Word);
    }

    #[test]
    fn test_delegation() {
        let options = TreeOptions::new()
            .with_tokenization(Tokenization::Word)
            .with_case_sensitive(false);
        let mut tree = ConfiguredKeywordTree::from_options(options.clone());

        assert!(tree.insert("Big Apple").unwrap());
        assert!(!tree.insert("big apple").unwrap());
        assert!(tree.contains("BIG APPLE"));
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.options(), &options);

        let matches = tree.search("the big apple shines");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].start, 1);
        assert_eq!(&*matches[0].keyword, "Big Apple");

        assert_eq!(tree.find_by_prefix("big").len(), 1);
        assert_eq!(tree.keywords().len(), 1);
        assert!(tree.stats().nodes > 1);

        assert!(tree.remove("big apple"));
        assert!(tree.is_empty());

        tree.insert("pear").unwrap();
        tree.clear();
        assert!(tree.is_empty());
    }

    #[test]
    fn test_char_mode_matches_inside_words() {
        let mut tree = ConfiguredKeywordTree::default();
        tree.insert("app").unwrap();

        assert_eq!(tree.search("pineapple").len(), 1);
    }
}
