//! Test modules for keywordtree.
//!
//! This module contains crate-level testing infrastructure:
//! - Configuration loading and validation tests
//! - Error conversion and display tests
//! - Shared proptest strategies and fixtures

pub mod config_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{
    keyword_set_strategy, sentence_strategy, small_alphabet_text_strategy, TestFixture,
};
