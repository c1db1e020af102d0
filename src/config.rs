//! Configuration file parsing and validation

pub mod settings;

pub use settings::{
    CONFIG_ENV_VAR, Config, ConfigError, Interactivity, OutputSettings, SpinnerSettings,
};
