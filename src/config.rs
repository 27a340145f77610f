//! Configuration file parsing and validation

pub mod police_toml;

pub use police_toml::{CONFIG_FILE_NAME, Config, FilesConfig, RulesConfig, default_exclude};
