//! Engine configuration.
//!
//! Defaults match the classic board: 400 ms ticks, 20 px cells, spawning two
//! rows above the visible area. The tick interval and cell size can be
//! overridden from the environment:
//!
//! - `BLOCKFALL_TICK_MS`: gravity tick interval in milliseconds
//! - `BLOCKFALL_CELL_SIZE`: cell size in pixels (rendering scale only)

use std::env;
use std::time::Duration;

use tracing::warn;

use crate::cell::Point;
use crate::error::ConfigError;
use crate::types::{DEFAULT_CELL_SIZE, DEFAULT_TICK_MS, SPAWN_COLUMN, SPAWN_ROW};

pub const TICK_MS_VAR: &str = "BLOCKFALL_TICK_MS";
pub const CELL_SIZE_VAR: &str = "BLOCKFALL_CELL_SIZE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub tick_interval: Duration,
    pub cell_size: i32,
    /// Grid column of the spawn anchor cell
    pub spawn_column: i32,
    /// Grid row of the spawn anchor cell
    pub spawn_row: i32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(DEFAULT_TICK_MS),
            cell_size: DEFAULT_CELL_SIZE,
            spawn_column: SPAWN_COLUMN,
            spawn_row: SPAWN_ROW,
        }
    }
}

impl EngineConfig {
    /// Read overrides from the environment, falling back to the defaults
    /// when a variable is malformed.
    pub fn from_env() -> Self {
        Self::try_from_env().unwrap_or_else(|err| {
            warn!(%err, "ignoring engine configuration from environment");
            Self::default()
        })
    }

    pub fn try_from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Build from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(ms) = parse_positive(TICK_MS_VAR, lookup(TICK_MS_VAR))? {
            config.tick_interval = Duration::from_millis(ms as u64);
        }
        if let Some(size) = parse_positive(CELL_SIZE_VAR, lookup(CELL_SIZE_VAR))? {
            config.cell_size = i32::try_from(size).map_err(|_| ConfigError::NotANumber {
                var: CELL_SIZE_VAR,
                value: size.to_string(),
            })?;
        }
        Ok(config)
    }

    pub fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    pub fn with_cell_size(mut self, cell_size: i32) -> Self {
        self.cell_size = cell_size;
        self
    }

    pub fn with_spawn(mut self, row: i32, column: i32) -> Self {
        self.spawn_row = row;
        self.spawn_column = column;
        self
    }

    /// Top-left pixel corner of the spawn anchor cell
    pub fn spawn_origin(&self) -> Point {
        Point::new(
            self.spawn_column * self.cell_size,
            (self.spawn_row + 1) * self.cell_size,
        )
    }
}

fn parse_positive(var: &'static str, raw: Option<String>) -> Result<Option<i64>, ConfigError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    let value: i64 = raw.parse().map_err(|_| ConfigError::NotANumber {
        var,
        value: raw.to_string(),
    })?;
    if value <= 0 {
        return Err(ConfigError::NotPositive { var, value });
    }
    Ok(Some(value))
}
