use std::ops::{Add, Mul, Sub};

/// A position in logical screen pixels (y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Translate by `dx`, `dy`.
    pub fn offset(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl Add<Size> for Point {
    type Output = Point;

    fn add(self, rhs: Size) -> Point {
        self.offset(rhs.width, rhs.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for Size {
    type Output = Size;

    fn add(self, rhs: Size) -> Size {
        Size::new(self.width + rhs.width, self.height + rhs.height)
    }
}

impl Sub for Size {
    type Output = Size;

    fn sub(self, rhs: Size) -> Size {
        Size::new(self.width - rhs.width, self.height - rhs.height)
    }
}

impl Mul<f32> for Size {
    type Output = Size;

    fn mul(self, rhs: f32) -> Size {
        Size::new(self.width * rhs, self.height * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_offset() {
        let p = Point::new(10.0, 20.0).offset(-5.0, 2.5);
        assert_eq!(p, Point::new(5.0, 22.5));
    }

    #[test]
    fn test_point_size_arithmetic() {
        let p = Point::new(10.0, 10.0);
        assert_eq!(p + Size::new(4.0, 6.0), Point::new(14.0, 16.0));
    }

    #[test]
    fn test_size_arithmetic() {
        let a = Size::new(50.0, 10.0);
        let b = Size::new(20.0, 10.0);
        assert_eq!(a + b, Size::new(70.0, 20.0));
        assert_eq!(a - b, Size::new(30.0, 0.0));
        assert_eq!(a * 0.5, Size::new(25.0, 5.0));
    }
}
