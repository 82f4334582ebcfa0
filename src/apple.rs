use crate::color::Color;
use crate::grid::Point;

/// Food item. Replaced wholesale whenever it is eaten.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Apple {
    pub position: Point,
    pub color: Color,
}

impl Apple {
    pub fn new(position: Point, color: Color) -> Self {
        Apple { position, color }
    }
}
