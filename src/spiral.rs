use rand::Rng;

use crate::color::{random_color, Color, HEAD_COLOR};
use crate::error::{GameError, GameResult};
use crate::grid::{Direction, GridGeometry, Point};
use crate::snake::Snake;

const TURNS: [Direction; 4] = [Direction::Right, Direction::Down, Direction::Left, Direction::Up];

// Runs of 2, 2, 4, 4, ... up to (but excluding) this length.
const RUN_LIMIT: usize = 100;

/// Largest snake the spiral pattern can lay out.
pub fn max_spiral_len() -> usize {
    run_lengths().sum()
}

fn run_lengths() -> impl Iterator<Item = usize> {
    (2..RUN_LIMIT).step_by(2).flat_map(|run| std::iter::repeat(run).take(2))
}

/// Lays a snake of `size` segments out as a spiral whose tail sits at the
/// grid center, so the chain never overlaps itself.
pub fn spiral_snake<R: Rng + ?Sized>(
    grid: GridGeometry,
    size: usize,
    palette: &[Color],
    rng: &mut R,
) -> GameResult<Snake> {
    let max = max_spiral_len();
    if size == 0 {
        return Err(GameError::EmptySnake);
    }
    if size > max {
        return Err(GameError::SpiralTooLong { requested: size, max });
    }

    let mut points = Vec::with_capacity(size);
    points.push(grid.center());

    'outer: for (run, dir) in run_lengths().zip(TURNS.iter().cycle()) {
        for _ in 0..run {
            if points.len() >= size {
                break 'outer;
            }
            let last = points[points.len() - 1];
            points.push(last + dir.delta());
        }
    }

    points.reverse();

    let mut colors = Vec::with_capacity(size);
    colors.push(HEAD_COLOR);
    colors.extend((1..size).map(|_| random_color(palette, rng)));

    Snake::new(points, colors, grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::palette;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn build(size: usize) -> GameResult<Snake> {
        spiral_snake(GridGeometry::default(), size, &palette(), &mut StdRng::seed_from_u64(3))
    }

    #[test]
    fn test_max_len() {
        assert_eq!(max_spiral_len(), 4900);
        assert!(build(4900).is_ok());
    }

    #[test]
    fn test_size_one_is_center() {
        let snake = build(1).unwrap();
        assert_eq!(snake.points(), &[Point::new(10, 10)]);
        assert_eq!(snake.colors(), &[HEAD_COLOR]);
    }

    #[test]
    fn test_spiral_shape() {
        let snake = build(6).unwrap();
        let expected = [(11, 12), (12, 12), (12, 11), (12, 10), (11, 10), (10, 10)];
        let expected: Vec<Point> = expected.iter().map(|&(x, y)| Point::new(x, y)).collect();
        assert_eq!(snake.points(), expected.as_slice());
    }

    #[test]
    fn test_spiral_never_overlaps() {
        for size in [2, 17, 64, 161].iter() {
            let snake = build(*size).unwrap();
            assert_eq!(snake.points().len(), *size);
            assert_eq!(snake.size(), *size);
            assert!(!snake.collide_itself());
        }
    }

    #[test]
    fn test_head_color_fixed() {
        let colors = palette();
        let snake = build(30).unwrap();
        assert_eq!(snake.colors().len(), 30);
        assert_eq!(snake.colors()[0], HEAD_COLOR);
        assert!(snake.colors()[1..].iter().all(|c| colors.contains(c)));
    }

    #[test]
    fn test_too_long_is_config_error() {
        let res = build(4901);
        assert!(matches!(res, Err(GameError::SpiralTooLong { requested: 4901, max: 4900 })));
    }

    #[test]
    fn test_zero_rejected() {
        assert!(matches!(build(0), Err(GameError::EmptySnake)));
    }
}
