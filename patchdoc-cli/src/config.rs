use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::logger::Logging;

//
// Output configuration
//

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Output {
    /// Pretty print JSON output
    pub pretty: bool,
}

//
// Global settings
//
use config::{
    builder::{ConfigBuilder, DefaultState},
    Config, ConfigError, Environment,
};

#[derive(Default, Debug, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    pub logging: Logging,
    pub output: Output,
}

impl Settings {
    pub(crate) fn init_logger(&self) {
        self.logging.init()
    }

    /// Configure so environement will be as CONF_KEY__VALUE
    fn build(settings: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let s = settings
            .add_source(
                Environment::with_prefix("conf")
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true),
            )
            .build()?;

        s.try_deserialize()
    }

    /// Create from default and environment variables
    pub fn new() -> Result<Self, ConfigError> {
        Self::build(Config::builder())
    }

    /// Load configuration from file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        Self::build(Config::builder().add_source(config::File::from(path)))
    }
}
