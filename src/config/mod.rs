//! Configuration module for langprofile
//!
//! This module handles:
//! - Project-level configuration (langprofile.toml)
//! - Language and order validation shared with CLI overrides

mod project_config;

pub use project_config::{
    load_config_file, load_project_config, normalize_orders, parse_languages, CleaningConfig,
    ProjectConfig, CONFIG_FILE_NAME, EXAMPLE_CONFIG,
};
