//! Platform-independent core of SpendSense and MoCard.
//!
//! - [`storage`]: the persistent record store and its key-value backends
//! - [`domain`]: validation, formatting, themes, card rendering and export
//! - [`config`]: optional YAML configuration

pub mod config;
pub mod domain;
pub mod storage;

pub use config::{load_config, load_config_or_default, parse_config, ConfigError};
