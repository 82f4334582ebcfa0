use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};
use crate::grid::{BoundaryPolicy, GridGeometry, DEFAULT_CELL_SIZE, DEFAULT_COLUMNS, DEFAULT_ROWS};

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

/// Rules and dimensions fixed for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Leaving the grid ends the round instead of wrapping.
    pub wall: bool,
    /// Running into the body ends the round.
    pub body: bool,
    /// Every apple raises the tick rate by `speed_step`.
    pub speed: bool,
    /// Initial snake length.
    pub size: usize,
    pub columns: i32,
    pub rows: i32,
    pub cell_size: i32,
    /// Ticks per second at the start of the first round.
    pub tick_rate: u32,
    pub speed_step: u32,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            wall: false,
            body: false,
            speed: false,
            size: 1,
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            cell_size: DEFAULT_CELL_SIZE,
            tick_rate: 10,
            speed_step: 1,
            seed: None,
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.size == 0 {
            return Err("size must be greater than 0".to_string());
        }
        if self.columns < 2 || self.rows < 2 {
            return Err("grid must be at least 2x2".to_string());
        }
        if self.columns > 100 || self.rows > 100 {
            return Err("grid must not exceed 100x100".to_string());
        }
        if self.cell_size < 1 || self.cell_size > 100 {
            return Err("cell_size must be between 1 and 100".to_string());
        }
        if self.tick_rate < 1 || self.tick_rate > 60 {
            return Err("tick_rate must be between 1 and 60".to_string());
        }
        if self.speed_step < 1 || self.speed_step > 10 {
            return Err("speed_step must be between 1 and 10".to_string());
        }
        Ok(())
    }
}

impl GameConfig {
    pub fn from_yaml_str(content: &str, path: &str) -> GameResult<Self> {
        let config: GameConfig = serde_yaml_ng::from_str(content)
            .map_err(|source| GameError::ConfigParse { path: path.to_string(), source })?;
        Ok(config)
    }

    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> GameResult<Self> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let content = fs::read_to_string(path)
            .map_err(|source| GameError::ConfigIo { path: display.clone(), source })?;
        Self::from_yaml_str(&content, &display)
    }

    pub fn checked(self) -> GameResult<Self> {
        self.validate().map_err(GameError::InvalidConfig)?;
        Ok(self)
    }

    pub fn grid(&self) -> GridGeometry {
        GridGeometry::new(self.cell_size, self.columns, self.rows)
    }

    pub fn boundary_policy(&self) -> BoundaryPolicy {
        if self.wall {
            BoundaryPolicy::Wall
        } else {
            BoundaryPolicy::Wrap
        }
    }
}
