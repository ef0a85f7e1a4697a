//! Engine settings: board geometry limits, join codes and event buffering.

use std::env;
use std::str::FromStr;

use crate::error::AppError;

/// Smallest board side. Anything narrower has no interior to cascade through.
pub const MIN_BOARD_DIM: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Board width used when a game is created without one.
    pub default_width: usize,
    /// Board height used when a game is created without one.
    pub default_height: usize,
    pub max_board_dim: usize,
    pub join_code_length: usize,
    /// Generated codes tried before giving up with `CODE_GENERATION_EXHAUSTED`.
    pub join_code_attempts: usize,
    /// Buffered events per broadcast subscriber.
    pub event_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_width: 6,
            default_height: 9,
            max_board_dim: 32,
            join_code_length: 8,
            join_code_attempts: 10,
            event_capacity: 256,
        }
    }
}

impl EngineConfig {
    /// Read overrides from `DOTS_*` environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from an arbitrary variable source; unset names keep their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let defaults = Self::default();
        let config = Self {
            default_width: positive(&lookup, "DOTS_BOARD_WIDTH", defaults.default_width)?,
            default_height: positive(&lookup, "DOTS_BOARD_HEIGHT", defaults.default_height)?,
            max_board_dim: positive(&lookup, "DOTS_MAX_BOARD_DIM", defaults.max_board_dim)?,
            join_code_length: positive(
                &lookup,
                "DOTS_JOIN_CODE_LENGTH",
                defaults.join_code_length,
            )?,
            join_code_attempts: positive(
                &lookup,
                "DOTS_JOIN_CODE_ATTEMPTS",
                defaults.join_code_attempts,
            )?,
            event_capacity: positive(&lookup, "DOTS_EVENT_CAPACITY", defaults.event_capacity)?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.max_board_dim < MIN_BOARD_DIM {
            return Err(AppError::config(format!(
                "DOTS_MAX_BOARD_DIM must be at least {MIN_BOARD_DIM}, got {}",
                self.max_board_dim
            )));
        }
        for (name, value) in [
            ("DOTS_BOARD_WIDTH", self.default_width),
            ("DOTS_BOARD_HEIGHT", self.default_height),
        ] {
            if !self.dimension_allowed(value) {
                return Err(AppError::config(format!(
                    "{name} must lie in [{MIN_BOARD_DIM}, {}], got {value}",
                    self.max_board_dim
                )));
            }
        }
        Ok(())
    }

    pub fn dimension_allowed(&self, value: usize) -> bool {
        (MIN_BOARD_DIM..=self.max_board_dim).contains(&value)
    }
}

fn positive<T>(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: T) -> Result<T, AppError>
where
    T: FromStr + PartialEq + Default,
{
    let Some(raw) = lookup(name) else {
        return Ok(default);
    };
    let value = raw
        .trim()
        .parse::<T>()
        .map_err(|_| AppError::config(format!("{name} must be a positive integer, got '{raw}'")))?;
    if value == T::default() {
        return Err(AppError::config(format!("{name} must be greater than zero")));
    }
    Ok(value)
}
