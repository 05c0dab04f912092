/// A pixel position, origin top-left, row-major.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}
