use serde::{Deserialize, Serialize};

/// Integer 2D vector used for both positions and velocities.
///
/// The field is centred on the origin; the central body and the field
/// boundary are squares, so radial distance is measured with the max-norm
/// (see [`Vector::radial_distance`]).
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::Add,
    derive_more::Sub,
    derive_more::AddAssign,
    derive_more::SubAssign,
    derive_more::Mul,
)]
#[display("({x}, {y})")]
pub struct Vector {
    pub x: i64,
    pub y: i64,
}

impl Vector {
    pub const ZERO: Self = Self::new(0, 0);

    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Distance from the origin under the max-norm.
    #[must_use]
    pub const fn radial_distance(self) -> i64 {
        let x = self.x.abs();
        let y = self.y.abs();
        if x > y { x } else { y }
    }

    /// Max-norm distance between two points.
    #[must_use]
    pub fn distance_to(self, other: Self) -> i64 {
        (other - self).radial_distance()
    }

    /// Sum of absolute component differences.
    #[must_use]
    pub const fn manhattan_distance(self, other: Self) -> i64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Component-wise sign, each component in `{-1, 0, 1}`.
    #[must_use]
    pub const fn signum(self) -> Self {
        Self::new(self.x.signum(), self.y.signum())
    }

    /// Returns `true` if the absolute value of `x` is strictly greater than that of `y`.
    #[must_use]
    pub const fn is_x_major(self) -> bool {
        self.x.abs() > self.y.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radial_distance_is_max_norm() {
        assert_eq!(Vector::new(3, -7).radial_distance(), 7);
        assert_eq!(Vector::new(-20, 5).radial_distance(), 20);
        assert_eq!(Vector::ZERO.radial_distance(), 0);
    }

    #[test]
    fn test_arithmetic() {
        let mut p = Vector::new(1, 2);
        p += Vector::new(3, -4);
        assert_eq!(p, Vector::new(4, -2));
        assert_eq!(p * 3_i64, Vector::new(12, -6));
        assert_eq!(p - Vector::new(4, -2), Vector::ZERO);
    }

    #[test]
    fn test_manhattan_and_signum() {
        let a = Vector::new(2, -3);
        let b = Vector::new(-1, 1);
        assert_eq!(a.manhattan_distance(b), 7);
        assert_eq!(a.signum(), Vector::new(1, -1));
        assert_eq!(Vector::ZERO.signum(), Vector::ZERO);
    }
}
