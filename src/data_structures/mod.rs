//! Data structures for keyword search.
//!
//! - [`keyword_tree`]: the generic token trie and its lazy search
//! - [`tokenizer`]: character and word tokenizers for text
//! - [`text_tree`]: string front ends built from the two above

pub mod keyword_tree;
pub mod text_tree;
pub mod tokenizer;

// Re-export common data structures
pub use keyword_tree::{
    InvalidKeywordError, KeywordResult, KeywordTree, Match, Matches, Tokenization, TreeOptions,
    TreeStats,
};
pub use text_tree::{ConfiguredKeywordTree, SharedKeywordTree, TextKeywordTree, TextMatch};
pub use tokenizer::{CharTokenizer, Token, Tokenizer, WordTokenizer};
