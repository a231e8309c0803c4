//! Tests for the configuration module.
//!
//! This module contains tests for configuration loading, validation, and usage.

use crate::config::{
    global_config, init_global_config, write_default_config, ConfigLoader, KeywordTreeConfig,
    LogConfig, Validate,
};
use crate::data_structures::keyword_tree::{Tokenization, TreeOptions, DEFAULT_MAX_DEPTH};
use crate::data_structures::text_tree::ConfiguredKeywordTree;
use crate::error::config::ConfigError;
use crate::tests::TestFixture;

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = KeywordTreeConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.tree.max_depth, DEFAULT_MAX_DEPTH);
    assert!(config.tree.case_sensitive);
}

/// Test that configuration validation catches invalid values.
#[test]
fn test_config_validation() {
    let mut config = KeywordTreeConfig::default();

    config.tree.max_depth = 0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange { .. })
    ));

    config.tree.max_depth = 1_000_000;
    assert!(config.validate().is_err());

    config.tree.max_depth = 64;
    config.log.level = "loud".to_string();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError(_))
    ));

    config.log.level = "debug".to_string();
    assert!(config.validate().is_ok());
}

/// Test loading configuration from a file.
#[test]
fn test_load_config_from_file() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .write_file(
            "config_file_test.toml",
            r#"
    [tree]
    case_sensitive = false
    tokenization = "word"

    [log]
    level = "warn"
    "#,
        )
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_FILE");
    let config = loader.load().unwrap();

    assert!(!config.tree.case_sensitive);
    assert_eq!(config.tree.tokenization, Tokenization::Word);
    assert_eq!(config.log.level, "warn");

    // Other values should be defaults
    assert_eq!(config.tree.max_depth, DEFAULT_MAX_DEPTH);
    assert!(config.log.source_location);
}

/// Test loading a JSON configuration file.
#[test]
fn test_load_json_config() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .write_file("config.json", r#"{ "tree": { "max_depth": 32 } }"#)
        .unwrap();

    let config = ConfigLoader::new(Some(&config_path), "TEST_JSON")
        .load()
        .unwrap();
    assert_eq!(config.tree.max_depth, 32);
}

/// Test loading configuration with environment variable overrides.
#[test]
fn test_env_var_override() {
    let mut fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .write_file(
            "config_env_test.toml",
            r#"
    [tree]
    max_depth = 16
    "#,
        )
        .unwrap();

    fixture.set_env("TEST_ENV__TREE__MAX_DEPTH", "512");
    fixture.set_env("TEST_ENV__LOG__LEVEL", "error");

    let loader = ConfigLoader::new(Some(&config_path), "TEST_ENV");
    let config = loader.load().unwrap();

    // Environment variables take precedence over the file
    assert_eq!(config.tree.max_depth, 512);
    assert_eq!(config.log.level, "error");
}

/// Test that a missing file is reported as such.
#[test]
fn test_missing_config_file() {
    let fixture = TestFixture::new().unwrap();
    let missing = fixture.temp_dir.path().join("absent.toml");

    let loader = ConfigLoader::new(Some(&missing), "TEST_MISSING");
    assert!(matches!(loader.load(), Err(ConfigError::FileNotFound(_))));
}

/// Test that loading an invalid configuration file returns an error.
#[test]
fn test_load_invalid_config() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .write_file(
            "invalid.toml",
            r#"
    [tree
    max_depth = sixteen"
    "#,
        )
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_INVALID");
    assert!(matches!(loader.load(), Err(ConfigError::ParseError(_))));
}

/// Test that an out-of-range value in a file fails validation.
#[test]
fn test_load_rejects_invalid_values() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .write_file("zero_depth.toml", "[tree]\nmax_depth = 0\n")
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_ZERO");
    assert!(loader.load().is_err());
}

/// Test that unsupported extensions are rejected.
#[test]
fn test_unsupported_extension() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture.write_file("config.ini", "max_depth=3").unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_INI");
    assert!(matches!(loader.load(), Err(ConfigError::ParseError(_))));
}

/// Test that the written default configuration loads back unchanged.
#[test]
fn test_write_default_config_round_trip() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture.temp_dir.path().join("nested/dir/keywordtree.toml");

    write_default_config(&config_path).unwrap();
    assert!(config_path.exists());

    let loaded = ConfigLoader::new(Some(&config_path), "TEST_ROUND_TRIP")
        .load()
        .unwrap();
    assert_eq!(loaded, KeywordTreeConfig::default());
}

/// Test that validation fails for each section on its own.
#[test]
fn test_specific_validation_rules() {
    let options = TreeOptions::new().with_max_depth(0);
    assert!(options.validate().is_err());

    let log_config = LogConfig {
        level: "verbose".to_string(),
        ..LogConfig::default()
    };
    assert!(log_config.validate().is_err());
}

/// Test that the installed global configuration picks the tokenization.
///
/// The global cell is set once per process, so this is the only test that
/// installs it.
#[test]
fn test_global_config_selects_tokenization() {
    let mut config = KeywordTreeConfig::default();
    config.tree.tokenization = Tokenization::Word;
    config.tree.case_sensitive = false;
    init_global_config(config);

    let installed = global_config().unwrap();
    assert_eq!(installed.tree.tokenization, Tokenization::Word);

    let mut tree = ConfiguredKeywordTree::from_global_config();
    assert_eq!(tree.tokenization(), Tokenization::Word);
    assert!(!tree.options().case_sensitive);

    tree.insert("New York").unwrap();
    assert_eq!(tree.search("new york, NEW YORK").len(), 2);
}
