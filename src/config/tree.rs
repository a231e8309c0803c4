//! Tree configuration module.
//!
//! Validation rules for [`TreeOptions`] when they come from a configuration
//! source rather than from code.

use super::{ConfigResult, Validate};
use crate::data_structures::keyword_tree::TreeOptions;
use crate::error::config::ConfigError;

/// Largest `max_depth` a configuration may request.
///
/// Removal recurses once per token, so the depth limit doubles as a stack bound.
pub const MAX_CONFIGURED_DEPTH: usize = 4096;

impl Validate for TreeOptions {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_depth == 0 || self.max_depth > MAX_CONFIGURED_DEPTH {
            return Err(ConfigError::ValueOutOfRange {
                key: "tree.max_depth".to_string(),
                message: format!("must be between 1 and {MAX_CONFIGURED_DEPTH}"),
            });
        }

        Ok(())
    }
}
