use std::collections::HashSet;

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::apple::Apple;
use crate::color::{random_color, Color};
use crate::error::{GameError, GameResult};
use crate::grid::{GridGeometry, Point};
use crate::snake::Snake;

/// Places apples on cells the snake does not occupy.
pub struct Spawner {
    grid: GridGeometry,
    palette: Vec<Color>,
}

impl Spawner {
    pub fn new(grid: GridGeometry, palette: Vec<Color>) -> Self {
        Spawner { grid, palette }
    }

    pub fn free_cells(&self, snake: &Snake) -> Vec<Point> {
        let occupied: HashSet<Point> = snake.points().iter().copied().collect();
        self.grid.cells().filter(|cell| !occupied.contains(cell)).collect()
    }

    pub fn spawn<R: Rng + ?Sized>(&self, snake: &Snake, rng: &mut R) -> GameResult<Apple> {
        let choices = self.free_cells(snake);
        let position = *choices.choose(rng).ok_or(GameError::GridFull)?;
        let apple = Apple::new(position, random_color(&self.palette, rng));

        debug!("apple at ({}, {}), {} free cells", position.x, position.y, choices.len());
        Ok(apple)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{palette, HEAD_COLOR};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn snake_on(grid: GridGeometry, points: Vec<Point>) -> Snake {
        let colors = vec![HEAD_COLOR; points.len()];
        Snake::new(points, colors, grid).unwrap()
    }

    #[test]
    fn test_spawn_avoids_snake() {
        let grid = GridGeometry::new(20, 3, 3);
        let points: Vec<Point> = grid.cells().filter(|c| *c != Point::new(2, 1)).collect();
        let snake = snake_on(grid, points);
        let spawner = Spawner::new(grid, palette());
        let mut rng = StdRng::seed_from_u64(1);

        let apple = spawner.spawn(&snake, &mut rng).unwrap();
        assert_eq!(apple.position, Point::new(2, 1));
        assert!(palette().contains(&apple.color));
    }

    #[test]
    fn test_spawn_on_full_grid_fails() {
        let grid = GridGeometry::default();
        let snake = snake_on(grid, grid.cells().collect());
        assert_eq!(snake.points().len(), 400);

        let spawner = Spawner::new(grid, palette());
        let mut rng = StdRng::seed_from_u64(1);
        let res = spawner.spawn(&snake, &mut rng);
        assert!(matches!(res, Err(GameError::GridFull)));
    }

    #[test]
    fn test_spawn_is_reproducible_with_seed() {
        let grid = GridGeometry::default();
        let snake = snake_on(grid, vec![Point::new(10, 10)]);
        let spawner = Spawner::new(grid, palette());

        let a = spawner.spawn(&snake, &mut StdRng::seed_from_u64(99)).unwrap();
        let b = spawner.spawn(&snake, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(a, b);
        assert!(grid.contains(a.position));
        assert_ne!(a.position, Point::new(10, 10));
    }

    #[test]
    fn test_free_cells_ignores_off_grid_segments() {
        let grid = GridGeometry::new(20, 2, 2);
        let snake = snake_on(grid, vec![Point::new(0, 0), Point::new(-1, 0)]);
        let spawner = Spawner::new(grid, palette());
        assert_eq!(spawner.free_cells(&snake).len(), 3);
    }
}
