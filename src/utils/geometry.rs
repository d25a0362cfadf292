use std::fmt;

/// A canvas coordinate in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }
}

/// Renders as `x, y`, the way the game logs `lastX, lastY`
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}, {}", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_as_comma_pair() {
        assert_eq!(Point::new(100, 100).to_string(), "100, 100");
        assert_eq!(Point::default().to_string(), "0, 0");
    }
}
