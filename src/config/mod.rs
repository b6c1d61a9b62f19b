//! Configuration module for Cageside
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files. All settings have defaults pointing at the production endpoints, so
//! a configuration file is only needed to override them (tests point the
//! scraper at a local mock server this way).
//!
//! # Example
//!
//! ```no_run
//! use cageside::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Athlete pages under: {}", config.endpoints.athlete_base_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, EndpointsConfig, HttpConfig};

// Re-export parser functions
pub use parser::load_config;

// Re-export validation for callers that build a Config in code
pub use validation::validate;
