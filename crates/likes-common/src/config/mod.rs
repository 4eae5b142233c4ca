//! Configuration structs

mod app_config;

pub use app_config::{
    ApiConfig, AppSettings, ConfigError, Environment, InFlightPolicy, LikesConfig, UiConfig,
};
