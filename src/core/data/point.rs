/// A pixel position. `x` is the column and `y` the row; the origin sits at
/// the top-left corner of the image.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}
