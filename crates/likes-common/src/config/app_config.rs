//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file if present).

use likes_core::{is_class_token, DomainError, IconStyle};
use std::env;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct LikesConfig {
    pub app: AppSettings,
    pub api: ApiConfig,
    pub ui: UiConfig,
}

/// General application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub name: String,
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Backend API configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub token: Option<String>,
    pub timeout_secs: u64,
}

impl ApiConfig {
    /// Config pointing at a base URL with defaults for everything else
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout_secs: default_timeout_secs(),
        }
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// What to do with a click on an icon whose toggle request is still pending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InFlightPolicy {
    /// Send another request; responses toggle the icon in whatever order they arrive
    #[default]
    Overlap,
    /// Drop the click without sending a request
    SkipWhilePending,
}

impl InFlightPolicy {
    fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "overlap" => Some(Self::Overlap),
            "skip" | "skip_while_pending" => Some(Self::SkipWhilePending),
            _ => None,
        }
    }
}

/// Message list binding configuration
#[derive(Debug, Clone)]
pub struct UiConfig {
    pub container_id: String,
    pub icon_class: String,
    pub message_id_attr: String,
    pub outline_class: String,
    pub filled_class: String,
    pub in_flight: InFlightPolicy,
}

impl UiConfig {
    /// Build the icon style from the configured classes
    pub fn icon_style(&self) -> Result<IconStyle, DomainError> {
        IconStyle::new(self.outline_class.clone(), self.filled_class.clone())
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            container_id: default_container_id(),
            icon_class: default_icon_class(),
            message_id_attr: default_message_id_attr(),
            outline_class: default_outline_class(),
            filled_class: default_filled_class(),
            in_flight: InFlightPolicy::default(),
        }
    }
}

// Default value functions
fn default_app_name() -> String {
    "likes".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_container_id() -> String {
    "messages".to_string()
}

fn default_icon_class() -> String {
    "fa-heart".to_string()
}

fn default_message_id_attr() -> String {
    "data-msg-id".to_string()
}

fn default_outline_class() -> String {
    IconStyle::DEFAULT_OUTLINE.to_string()
}

fn default_filled_class() -> String {
    IconStyle::DEFAULT_FILLED.to_string()
}

impl LikesConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing or invalid
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration through a variable lookup function
    pub fn from_vars<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            app: AppSettings {
                name: var("APP_NAME").unwrap_or_else(default_app_name),
                env: match var("APP_ENV") {
                    Some(s) => match s.to_lowercase().as_str() {
                        "production" => Environment::Production,
                        "staging" => Environment::Staging,
                        "development" => Environment::Development,
                        _ => return Err(ConfigError::InvalidValue("APP_ENV", s)),
                    },
                    None => Environment::default(),
                },
            },
            api: ApiConfig {
                base_url: var("LIKES_API_BASE_URL")
                    .filter(|s| !s.trim().is_empty())
                    .ok_or(ConfigError::MissingVar("LIKES_API_BASE_URL"))?,
                token: var("LIKES_API_TOKEN").filter(|s| !s.is_empty()),
                timeout_secs: match var("LIKES_API_TIMEOUT_SECS") {
                    Some(s) => match s.trim().parse::<u64>() {
                        Ok(secs) if secs > 0 => secs,
                        _ => return Err(ConfigError::InvalidValue("LIKES_API_TIMEOUT_SECS", s)),
                    },
                    None => default_timeout_secs(),
                },
            },
            ui: UiConfig {
                container_id: token(&var, "LIKES_CONTAINER_ID", default_container_id)?,
                icon_class: token(&var, "LIKES_ICON_CLASS", default_icon_class)?,
                message_id_attr: token(&var, "LIKES_MESSAGE_ID_ATTR", default_message_id_attr)?,
                outline_class: token(&var, "LIKES_OUTLINE_CLASS", default_outline_class)?,
                filled_class: token(&var, "LIKES_FILLED_CLASS", default_filled_class)?,
                in_flight: match var("LIKES_IN_FLIGHT") {
                    Some(s) => InFlightPolicy::parse(&s)
                        .ok_or(ConfigError::InvalidValue("LIKES_IN_FLIGHT", s))?,
                    None => InFlightPolicy::default(),
                },
            },
        };

        // Both classes are single tokens by now, so only a clash is left
        config
            .ui
            .icon_style()
            .map_err(|e| ConfigError::InvalidValue("LIKES_FILLED_CLASS", e.to_string()))?;

        Ok(config)
    }
}

/// Read a variable that must hold a single class or attribute token
fn token<F>(var: &F, key: &'static str, default: fn() -> String) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match var(key) {
        Some(s) if is_class_token(&s) => Ok(s),
        Some(s) => Err(ConfigError::InvalidValue(key, s)),
        None => Ok(default()),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
