//! Error module for keywordtree.
//!
//! Each data structure defines its own error next to it; this module gathers
//! them into one crate-level error for callers that mix configuration, I/O
//! and tree operations.

use thiserror::Error;

use crate::data_structures::keyword_tree::InvalidKeywordError;

pub mod config;

/// Result type alias used throughout keywordtree.
pub type KeywordTreeResult<T> = Result<T, KeywordTreeError>;

/// Core error enum for keywordtree.
#[derive(Error, Debug)]
pub enum KeywordTreeError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// A keyword was rejected by a tree.
    #[error("Invalid keyword: {0}")]
    InvalidKeyword(#[from] InvalidKeywordError),

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}
