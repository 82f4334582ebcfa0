use std::time::Duration;

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::apple::Apple;
use crate::color::{palette, Color};
use crate::config::GameConfig;
use crate::error::GameResult;
use crate::grid::{BoundaryPolicy, Direction, GridGeometry};
use crate::snake::Snake;
use crate::spawner::Spawner;
use crate::spiral::spiral_snake;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionState {
    Playing,
    GameOver,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EndReason {
    WallCollision,
    SelfCollision,
    GridFull,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Waiting for a start signal; nothing was simulated.
    Idle,
    Advanced { ate: bool },
    Ended(EndReason),
}

/// One snapshot of the input device, taken between ticks.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct InputSignal {
    pub direction: Option<Direction>,
    pub start: bool,
    pub quit: bool,
}

/// Drives one round after another: owns the snake, the apple and the
/// pending direction, and advances them one tick at a time.
pub struct Session {
    config: GameConfig,
    grid: GridGeometry,
    palette: Vec<Color>,
    spawner: Spawner,
    rng: StdRng,
    snake: Snake,
    apple: Apple,
    pending: Direction,
    state: SessionState,
    end_reason: Option<EndReason>,
    tick_rate: u32,
}

impl Session {
    /// Builds the first round up front so configuration errors surface
    /// here. The session starts in `GameOver`, waiting for `start`.
    pub fn new(config: GameConfig) -> GameResult<Self> {
        let config = config.checked()?;
        let grid = config.grid();
        let palette = palette();
        let spawner = Spawner::new(grid, palette.clone());
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let snake = spiral_snake(grid, config.size, &palette, &mut rng)?;
        let apple = spawner.spawn(&snake, &mut rng)?;

        info!(
            "grid {}x{} cells of {} px, {}x{} px",
            grid.columns(),
            grid.rows(),
            grid.cell_size(),
            grid.width_px(),
            grid.height_px()
        );
        info!("wall={}, body={}, speed={}, size={}", config.wall, config.body, config.speed, config.size);

        let tick_rate = config.tick_rate;
        Ok(Session {
            config,
            grid,
            palette,
            spawner,
            rng,
            snake,
            apple,
            pending: Direction::None,
            state: SessionState::GameOver,
            end_reason: None,
            tick_rate,
        })
    }

    pub fn grid(&self) -> GridGeometry {
        self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn apple(&self) -> &Apple {
        &self.apple
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == SessionState::Playing
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending
    }

    pub fn tick_rate(&self) -> u32 {
        self.tick_rate
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.tick_rate.max(1)))
    }

    /// Replaces the snake and apple with fresh ones and resumes play. On
    /// failure the session stays over and keeps the previous round.
    pub fn start(&mut self) -> GameResult<()> {
        info!("start");
        let snake = spiral_snake(self.grid, self.config.size, &self.palette, &mut self.rng)?;
        let apple = self.spawner.spawn(&snake, &mut self.rng)?;

        self.snake = snake;
        self.apple = apple;
        self.pending = Direction::None;
        self.state = SessionState::Playing;
        self.end_reason = None;
        Ok(())
    }

    /// The latest key wins; it stays pending until another one arrives.
    pub fn set_pending_direction(&mut self, direction: Direction) {
        info!("set direction: {:?}", direction);
        self.pending = direction;
    }

    /// Quit is left to the caller.
    pub fn apply_input(&mut self, input: InputSignal) -> GameResult<()> {
        if input.start {
            self.start()?;
        }
        if let Some(direction) = input.direction {
            self.set_pending_direction(direction);
        }
        Ok(())
    }

    pub fn tick(&mut self) -> TickOutcome {
        if self.state == SessionState::GameOver {
            return TickOutcome::Idle;
        }

        self.snake.set_direction(self.pending);

        if self.config.boundary_policy() == BoundaryPolicy::Wall && self.snake.collide_wall() {
            info!("collide wall");
            return self.end(EndReason::WallCollision);
        }

        if self.config.body && self.snake.collide_itself() {
            info!("collide itself");
            return self.end(EndReason::SelfCollision);
        }

        let ate = self.snake.eat(&self.apple);
        if ate {
            info!("eat apple");
            info!("snake size: {}", self.snake.size());

            match self.spawner.spawn(&self.snake, &mut self.rng) {
                Ok(apple) => self.apple = apple,
                Err(err) => {
                    warn!("{}", err);
                    return self.end(EndReason::GridFull);
                }
            }

            if self.config.speed {
                self.tick_rate = self.tick_rate.saturating_add(self.config.speed_step);
                info!("increase game speed: {}", self.tick_rate);
            }
        }

        self.snake.move_step();
        debug!("head at ({}, {})", self.snake.head().x, self.snake.head().y);

        TickOutcome::Advanced { ate }
    }

    fn end(&mut self, reason: EndReason) -> TickOutcome {
        self.state = SessionState::GameOver;
        self.end_reason = Some(reason);
        TickOutcome::Ended(reason)
    }

    #[cfg(test)]
    pub(crate) fn set_snake(&mut self, snake: Snake) {
        self.snake = snake;
    }

    #[cfg(test)]
    pub(crate) fn set_apple(&mut self, apple: Apple) {
        self.apple = apple;
    }
}
