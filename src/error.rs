use thiserror::Error;

/// Everything the simulation core can refuse to do.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("snake must have at least one segment")]
    EmptySnake,
    #[error("snake has {points} segments but {colors} colors")]
    MismatchedColors { points: usize, colors: usize },
    #[error("a spiral snake holds at most {max} segments, {requested} requested")]
    SpiralTooLong { requested: usize, max: usize },
    #[error("no free cell left for an apple")]
    GridFull,
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("failed to read config file {path}: {source}")]
    ConfigIo {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: serde_yaml_ng::Error,
    },
}

impl GameError {
    /// Exhaustion ends a round; every other variant is a caller mistake.
    pub fn is_exhaustion(&self) -> bool {
        matches!(self, GameError::GridFull)
    }
}

pub type GameResult<T> = Result<T, GameError>;
