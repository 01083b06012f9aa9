use serde::{Deserialize, Serialize};

use crate::{InvalidThrustError, core::vector::Vector};

/// A unit-bounded thrust command.
///
/// Each component lies in `{-1, 0, 1}`. The vector names the exhaust
/// direction: applying thrust `(dx, dy)` changes the ship's velocity by
/// `(-dx, -dy)` (see [`ThrustVector::acceleration`]).
///
/// Serialized as a two-element array `[dx, dy]`; out-of-range components are
/// rejected on deserialization.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(try_from = "(i64, i64)", into = "(i64, i64)")]
#[display("({dx}, {dy})")]
pub struct ThrustVector {
    dx: i8,
    dy: i8,
}

impl ThrustVector {
    pub const ZERO: Self = Self { dx: 0, dy: 0 };

    /// Number of distinct thrust vectors (3 values per axis).
    pub const LEN: usize = 9;

    /// Every thrust vector, ordered by [`Self::index`].
    pub const ALL: [Self; Self::LEN] = [
        Self { dx: -1, dy: -1 },
        Self { dx: -1, dy: 0 },
        Self { dx: -1, dy: 1 },
        Self { dx: 0, dy: -1 },
        Self { dx: 0, dy: 0 },
        Self { dx: 0, dy: 1 },
        Self { dx: 1, dy: -1 },
        Self { dx: 1, dy: 0 },
        Self { dx: 1, dy: 1 },
    ];

    pub fn new(dx: i64, dy: i64) -> Result<Self, InvalidThrustError> {
        match (Self::component(dx), Self::component(dy)) {
            (Some(dx), Some(dy)) => Ok(Self { dx, dy }),
            _ => Err(InvalidThrustError { dx, dy }),
        }
    }

    /// Builds a thrust vector from arbitrary components by clamping each one
    /// into `{-1, 0, 1}`.
    #[must_use]
    pub fn clamped(dx: i64, dy: i64) -> Self {
        Self::from_signs(Vector::new(dx, dy))
    }

    /// Builds a thrust vector from the component signs of `v`.
    #[must_use]
    pub fn from_signs(v: Vector) -> Self {
        let v = v.signum();
        Self {
            dx: Self::component(v.x).unwrap_or_default(),
            dy: Self::component(v.y).unwrap_or_default(),
        }
    }

    fn component(value: i64) -> Option<i8> {
        match value {
            -1 => Some(-1),
            0 => Some(0),
            1 => Some(1),
            _ => None,
        }
    }

    #[must_use]
    pub fn dx(self) -> i64 {
        i64::from(self.dx)
    }

    #[must_use]
    pub fn dy(self) -> i64 {
        i64::from(self.dy)
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.dx == 0 && self.dy == 0
    }

    /// Fuel consumed by this thrust: its Chebyshev magnitude.
    #[must_use]
    pub fn fuel_cost(self) -> u32 {
        u32::from(self.dx.unsigned_abs().max(self.dy.unsigned_abs()))
    }

    /// Velocity change produced by this thrust.
    #[must_use]
    pub fn acceleration(self) -> Vector {
        Vector::new(-self.dx(), -self.dy())
    }

    /// Dense index in `0..Self::LEN`, used for frequency tables.
    #[must_use]
    pub fn index(self) -> usize {
        usize::from((self.dx + 1).unsigned_abs()) * 3 + usize::from((self.dy + 1).unsigned_abs())
    }
}

impl TryFrom<(i64, i64)> for ThrustVector {
    type Error = InvalidThrustError;

    fn try_from((dx, dy): (i64, i64)) -> Result<Self, Self::Error> {
        Self::new(dx, dy)
    }
}

impl From<ThrustVector> for (i64, i64) {
    fn from(value: ThrustVector) -> Self {
        (value.dx(), value.dy())
    }
}
