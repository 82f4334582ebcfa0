use std::ops::Add;

pub const DEFAULT_CELL_SIZE: i32 = 20;
pub const DEFAULT_COLUMNS: i32 = 20;
pub const DEFAULT_ROWS: i32 = 20;

/// A cell position in grid units. Moving produces a new value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    pub fn with_x(self, x: i32) -> Self {
        Point { x, ..self }
    }

    pub fn with_y(self, y: i32) -> Self {
        Point { y, ..self }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    None,
    Up,
    Down,
    Left,
    Right,
}

// Indexed by `Direction as usize`.
const DELTAS: [Point; 5] = [
    Point::new(0, 0),
    Point::new(0, -1),
    Point::new(0, 1),
    Point::new(-1, 0),
    Point::new(1, 0),
];

impl Direction {
    pub const MOVING: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub fn delta(self) -> Point {
        DELTAS[self as usize]
    }
}

/// How the head is treated when a move would leave the grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BoundaryPolicy {
    /// Coordinates are brought around to the opposite edge.
    Wrap,
    /// Leaving the grid ends the round.
    Wall,
}

/// Immutable grid dimensions shared by every component of one session.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GridGeometry {
    cell_size: i32,
    columns: i32,
    rows: i32,
}

impl Default for GridGeometry {
    fn default() -> Self {
        GridGeometry::new(DEFAULT_CELL_SIZE, DEFAULT_COLUMNS, DEFAULT_ROWS)
    }
}

impl GridGeometry {
    pub const fn new(cell_size: i32, columns: i32, rows: i32) -> Self {
        GridGeometry { cell_size, columns, rows }
    }

    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    pub fn columns(&self) -> i32 {
        self.columns
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn cell_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    pub fn width_px(&self) -> i32 {
        self.columns * self.cell_size
    }

    pub fn height_px(&self) -> i32 {
        self.rows * self.cell_size
    }

    pub fn center(&self) -> Point {
        Point::new(self.columns / 2, self.rows / 2)
    }

    /// Top-left pixel corner of a cell.
    pub fn to_pixels(&self, point: Point) -> (i32, i32) {
        (point.x * self.cell_size, point.y * self.cell_size)
    }

    pub fn contains(&self, point: Point) -> bool {
        !self.is_outside(point)
    }

    pub fn is_outside(&self, point: Point) -> bool {
        point.x < 0 || point.x >= self.columns || point.y < 0 || point.y >= self.rows
    }

    /// Snaps an out-of-range coordinate to the opposite edge.
    pub fn wrap(&self, point: Point) -> Point {
        let mut point = point;

        if point.x < 0 {
            point = point.with_x(self.columns - 1);
        } else if point.x >= self.columns {
            point = point.with_x(0);
        }

        if point.y < 0 {
            point = point.with_y(self.rows - 1);
        } else if point.y >= self.rows {
            point = point.with_y(0);
        }

        point
    }

    /// Every cell of the grid, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Point> {
        let (columns, rows) = (self.columns, self.rows);
        (0..rows).flat_map(move |y| (0..columns).map(move |x| Point::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_is_only_zero_delta() {
        assert_eq!(Direction::None.delta(), Point::ZERO);
        for dir in Direction::MOVING.iter() {
            assert_ne!(dir.delta(), Point::ZERO);
        }
    }

    #[test]
    fn test_default_direction_is_none() {
        assert_eq!(Direction::default(), Direction::None);
    }

    #[test]
    fn test_deltas_match_directions() {
        assert_eq!(Direction::Up.delta(), Point::new(0, -1));
        assert_eq!(Direction::Down.delta(), Point::new(0, 1));
        assert_eq!(Direction::Left.delta(), Point::new(-1, 0));
        assert_eq!(Direction::Right.delta(), Point::new(1, 0));
    }

    #[test]
    fn test_wrap_brings_to_opposite_edge() {
        let grid = GridGeometry::default();
        assert_eq!(grid.wrap(Point::new(-1, 0)), Point::new(19, 0));
        assert_eq!(grid.wrap(Point::new(20, 5)), Point::new(0, 5));
        assert_eq!(grid.wrap(Point::new(3, -1)), Point::new(3, 19));
        assert_eq!(grid.wrap(Point::new(3, 20)), Point::new(3, 0));
        assert_eq!(grid.wrap(Point::new(7, 8)), Point::new(7, 8));
    }

    #[test]
    fn test_pixel_conversion() {
        let grid = GridGeometry::default();
        assert_eq!(grid.width_px(), 400);
        assert_eq!(grid.height_px(), 400);
        assert_eq!(grid.to_pixels(Point::new(0, 19)), (0, 380));
        assert_eq!(grid.to_pixels(Point::new(1, 0)), (20, 0));
    }

    #[test]
    fn test_cells_cover_grid_once() {
        let grid = GridGeometry::new(10, 4, 3);
        let cells: Vec<Point> = grid.cells().collect();
        assert_eq!(cells.len(), 12);
        assert_eq!(grid.cell_count(), 12);
        assert!(cells.iter().all(|c| grid.contains(*c)));
        let unique: std::collections::HashSet<_> = cells.iter().collect();
        assert_eq!(unique.len(), 12);
    }

    #[test]
    fn test_is_outside() {
        let grid = GridGeometry::default();
        assert!(grid.is_outside(Point::new(-1, 0)));
        assert!(grid.is_outside(Point::new(0, 20)));
        assert!(!grid.is_outside(Point::new(19, 19)));
    }
}
