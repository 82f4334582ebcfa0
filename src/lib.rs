//! Grid simulation core of a snake arcade game: the segment chain, apple
//! placement, the spiral initializer and the per-tick session controller.

pub mod apple;
pub mod color;
pub mod config;
pub mod error;
pub mod grid;
pub mod session;
pub mod snake;
pub mod spawner;
pub mod spiral;

pub use apple::Apple;
pub use color::Color;
pub use config::{GameConfig, Validate};
pub use error::{GameError, GameResult};
pub use grid::{BoundaryPolicy, Direction, GridGeometry, Point};
pub use session::{EndReason, InputSignal, Session, SessionState, TickOutcome};
pub use snake::Snake;
