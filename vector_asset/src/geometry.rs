///
/// A point (or a size, when used as part of a `Rect`)
///
#[derive(Clone, Copy, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32
}

///
/// A rectangle described by its origin and its size
///
/// The size is stored as a `Point` with `x` as the width and `y` as the height
///
#[derive(Clone, Copy, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size:   Point
}

impl Point {
    ///
    /// Creates a new point
    ///
    #[inline]
    pub fn new(x: f32, y: f32) -> Point {
        Point { x, y }
    }
}

impl Rect {
    ///
    /// Creates a rectangle from an origin and a width and height
    ///
    #[inline]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Rect {
        Rect {
            origin: Point::new(x, y),
            size:   Point::new(width, height)
        }
    }

    #[inline] pub fn width(&self) -> f32 { self.size.x }
    #[inline] pub fn height(&self) -> f32 { self.size.y }
}

impl From<(f32, f32)> for Point {
    #[inline]
    fn from((x, y): (f32, f32)) -> Point {
        Point::new(x, y)
    }
}

impl From<Point> for (f32, f32) {
    #[inline]
    fn from(point: Point) -> (f32, f32) {
        (point.x, point.y)
    }
}
