/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::Operation;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub controller: ControllerConfig,
    pub output: OutputConfig,
    pub scenario: ScenarioConfig,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ControllerConfig {
    pub initial_floor: i32,
    pub ground_floor: i32,
}

impl Default for ControllerConfig {
    fn default() -> ControllerConfig {
        ControllerConfig {
            initial_floor: 1,
            ground_floor: 1,
        }
    }
}

#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct ScenarioConfig {
    pub steps: Vec<Operation>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let controller = &self.controller;
        if controller.initial_floor < controller.ground_floor {
            return Err(ConfigError::Invalid(format!(
                "initial_floor {} is below ground_floor {}",
                controller.initial_floor, controller.ground_floor
            )));
        }
        Ok(())
    }
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn parse_config(config_str: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(config_str)?;
    config.validate()?;
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let config_str = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_config(&config_str)
}
