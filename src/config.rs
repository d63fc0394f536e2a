//! Environment configuration for the bundled binaries.

use std::time::Duration;
use thiserror::Error;

pub const CAPACITY_ENV: &str = "STREAMRING_CAPACITY";
pub const SECONDS_ENV: &str = "STREAMRING_SECONDS";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}={value:?} is not a valid number")]
    NotANumber { var: &'static str, value: String },

    #[error("{var}={value} is below the minimum of {min}")]
    TooSmall {
        var: &'static str,
        value: usize,
        min: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    /// Bytes of backing storage handed to the ring, reserved slot included.
    pub capacity: usize,
    pub duration: Duration,
}

impl RunConfig {
    pub fn from_env(default_capacity: usize, default_seconds: u64) -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok(), default_capacity, default_seconds)
    }

    fn from_lookup<F>(
        lookup: F,
        default_capacity: usize,
        default_seconds: u64,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let capacity = parse_or(&lookup, CAPACITY_ENV, default_capacity)?;
        if capacity < 2 {
            return Err(ConfigError::TooSmall {
                var: CAPACITY_ENV,
                value: capacity,
                min: 2,
            });
        }

        let seconds = parse_or(&lookup, SECONDS_ENV, default_seconds as usize)?;

        Ok(Self {
            capacity,
            duration: Duration::from_secs(seconds as u64),
        })
    }
}

fn parse_or<F>(lookup: &F, var: &'static str, default: usize) -> Result<usize, ConfigError>
where
    F: Fn(&'static str) -> Option<String>,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::NotANumber { var, value }),
    }
}
