//! keywordtree: a data structure for keyword searches.
//!
//! Keywords are stored in a trie over tokens (characters, words or any
//! hashable type) and text is scanned for every occurrence of every stored
//! keyword, overlapping occurrences and keywords that prefix one another
//! included.
//!
//! # Example
//!
//! ```
//! use keywordtree::TextKeywordTree;
//!
//! let mut tree = TextKeywordTree::chars();
//! tree.insert("ab").unwrap();
//! tree.insert("bc").unwrap();
//!
//! let found: Vec<(usize, String)> = tree
//!     .search("xabcx")
//!     .into_iter()
//!     .map(|m| (m.start, m.keyword.to_string()))
//!     .collect();
//!
//! assert_eq!(found, vec![(1, "ab".to_string()), (2, "bc".to_string())]);
//! ```
//!
//! # Layout
//!
//! - [`data_structures`]: the tree, tokenizers and text front ends
//! - [`config`]: file and environment configuration
//! - [`error`]: crate-level error type
//! - [`logging`]: optional `tracing` subscriber setup

pub mod config;
pub mod data_structures;
pub mod error;
pub mod logging;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

use std::path::Path;

pub use data_structures::{
    CharTokenizer, ConfiguredKeywordTree, InvalidKeywordError, KeywordResult, KeywordTree, Match,
    Matches, SharedKeywordTree, TextKeywordTree, TextMatch, Token, Tokenization, Tokenizer,
    TreeOptions, TreeStats, WordTokenizer,
};
pub use error::{KeywordTreeError, KeywordTreeResult};

/// Version information for keywordtree.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function.
///
/// Loads configuration from `config_path` (if any) and `KEYWORDTREE__*`
/// environment variables, installs the logging subscriber and publishes the
/// configuration for [`ConfiguredKeywordTree::from_global_config`].
pub fn init(config_path: Option<&Path>) -> KeywordTreeResult<()> {
    let loader = crate::config::ConfigLoader::new(config_path, crate::config::ENV_PREFIX);
    let loaded = loader.load()?;

    logging::init_logging(&loaded.log)?;
    crate::config::init_global_config(loaded);

    tracing::info!(version = VERSION, "keywordtree initialized");
    Ok(())
}
