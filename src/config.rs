// src/config.rs
use crate::domain::slug::services::{
    DEFAULT_MAX_ATTEMPTS, DEFAULT_SUFFIX_CHARSET, DEFAULT_SUFFIX_LENGTH, SlugPolicy,
};
use std::env;
use thiserror::Error;

pub const DEFAULT_MAX_LENGTH: usize = 75;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlugConfig {
    max_length: usize,
    suffix_length: usize,
    max_attempts: u32,
    suffix_charset: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl Default for SlugConfig {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            suffix_length: DEFAULT_SUFFIX_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            suffix_charset: DEFAULT_SUFFIX_CHARSET.to_string(),
        }
    }
}

fn parse_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse::<T>().ok())
}

impl SlugConfig {
    /// Build configuration from environment variables, falling back to the
    /// defaults for anything unset or unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        Self::new(
            parse_env("SLUG_MAX_LENGTH").unwrap_or(defaults.max_length),
            parse_env("SLUG_SUFFIX_LENGTH").unwrap_or(defaults.suffix_length),
            parse_env("SLUG_MAX_ATTEMPTS").unwrap_or(defaults.max_attempts),
            env::var("SLUG_SUFFIX_CHARSET").unwrap_or(defaults.suffix_charset),
        )
    }

    pub fn new(
        max_length: usize,
        suffix_length: usize,
        max_attempts: u32,
        suffix_charset: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            max_length,
            suffix_length,
            max_attempts,
            suffix_charset: suffix_charset.into(),
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        // max length must leave room for at least one base character
        if self.max_length <= self.suffix_length + 1 {
            return Err(ConfigError::Invalid(format!(
                "SLUG_MAX_LENGTH ({}) must exceed SLUG_SUFFIX_LENGTH + 1 ({})",
                self.max_length,
                self.suffix_length + 1
            )));
        }
        self.policy().map(|_| ())
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn suffix_length(&self) -> usize {
        self.suffix_length
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn suffix_charset(&self) -> &str {
        &self.suffix_charset
    }

    pub fn policy(&self) -> Result<SlugPolicy, ConfigError> {
        SlugPolicy::new(
            self.suffix_length,
            self.max_attempts,
            self.suffix_charset.clone(),
        )
        .map_err(|err| ConfigError::Invalid(err.to_string()))
    }
}
