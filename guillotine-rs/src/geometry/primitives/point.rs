use crate::Coord;

/// Geometric primitive representing a point
#[derive(Debug, Clone, PartialEq, Eq, Hash, Copy)]
pub struct Point(pub Coord, pub Coord);

impl Point {
    pub fn x(&self) -> Coord {
        self.0
    }

    pub fn y(&self) -> Coord {
        self.1
    }
}

impl From<(Coord, Coord)> for Point {
    fn from((x, y): (Coord, Coord)) -> Self {
        Point(x, y)
    }
}

impl From<Point> for (Coord, Coord) {
    fn from(p: Point) -> Self {
        (p.0, p.1)
    }
}
