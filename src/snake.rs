use std::collections::HashSet;

use crate::apple::Apple;
use crate::color::Color;
use crate::error::{GameError, GameResult};
use crate::grid::{Direction, GridGeometry, Point};

/// An ordered chain of segments, head first, with one color per segment.
///
/// `size` is the length the chain is trimmed to after every move, so eating
/// an apple grows the snake by one cell on the following move.
#[derive(Clone, Debug)]
pub struct Snake {
    points: Vec<Point>,
    colors: Vec<Color>,
    size: usize,
    direction: Direction,
    grid: GridGeometry,
}

impl Snake {
    pub fn new(points: Vec<Point>, colors: Vec<Color>, grid: GridGeometry) -> GameResult<Self> {
        if points.is_empty() {
            return Err(GameError::EmptySnake);
        }
        if points.len() != colors.len() {
            return Err(GameError::MismatchedColors { points: points.len(), colors: colors.len() });
        }

        let size = points.len();
        Ok(Snake { points, colors, size, direction: Direction::None, grid })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Segments paired with their colors, head first.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Color)> + '_ {
        self.points.iter().copied().zip(self.colors.iter().copied())
    }

    pub fn head(&self) -> Point {
        self.points[0]
    }

    pub fn current_move(&self) -> Point {
        self.direction.delta()
    }

    pub fn set_direction(&mut self, direction: Direction) {
        if direction == Direction::None || self.is_reverse_move(direction) {
            return;
        }

        self.direction = direction;
    }

    /// Whether the head would leave the grid on the next move.
    pub fn collide_wall(&self) -> bool {
        self.grid.is_outside(self.head() + self.current_move())
    }

    pub fn collide_itself(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.points.len());
        !self.points.iter().all(|p| seen.insert(*p))
    }

    pub fn move_step(&mut self) {
        let delta = self.current_move();
        if delta == Point::ZERO {
            return;
        }

        let new_head = self.step_from(self.head(), delta);
        self.points.insert(0, new_head);
        self.points.truncate(self.size);
    }

    /// Grows by one if the head sits on the apple. The apple's color goes to
    /// the tail of the color list, not to the cell the next move adds.
    pub fn eat(&mut self, apple: &Apple) -> bool {
        if self.head() != apple.position {
            return false;
        }

        self.size += 1;
        self.colors.push(apple.color);
        true
    }

    fn is_reverse_move(&self, direction: Direction) -> bool {
        if self.points.len() == 1 {
            return false;
        }

        self.step_from(self.head(), direction.delta()) == self.points[1]
    }

    fn step_from(&self, point: Point, delta: Point) -> Point {
        self.grid.wrap(point + delta)
    }

    #[cfg(test)]
    pub(crate) fn push_point(&mut self, point: Point) {
        self.points.push(point);
    }
}
