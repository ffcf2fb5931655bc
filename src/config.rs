//! Settings for the `propkb` binary.
//!
//! Sources, later ones overriding earlier: built-in defaults, an optional
//! settings file (`propkb.toml` in the working directory unless another path
//! is given), then environment variables prefixed with `PROPKB_`, such as
//! `PROPKB_OUTPUT=json`.

use ::config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::Result;

pub const DEFAULT_SETTINGS_FILE: &str = "propkb";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Output {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Used when `RUST_LOG` is not set.
    pub log_filter: String,
    pub output: Output,
    /// Print the clauses held after each script.
    pub show_clauses: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self { log_filter: "warn".into(), output: Output::Text, show_clauses: false }
    }
}

impl Settings {
    /// Loads settings from `path`, or from the default file when it exists.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let file = match path {
            Some(path) => File::with_name(path).required(true),
            None => File::with_name(DEFAULT_SETTINGS_FILE).required(false),
        };
        let settings = Config::builder()
            .add_source(file)
            .add_source(Environment::with_prefix("PROPKB"))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}
