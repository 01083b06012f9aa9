use crate::core::Vector;

/// Extremes of a free-fall trajectory.
///
/// Free fall is straight-line drift: the position advances by the velocity
/// every tick. Along such a line the max-norm distance from the origin is
/// convex in time, so once it starts growing it never shrinks again. The
/// projection exploits this to stop early, and the farthest distance is always
/// reached at one of the two ends of the horizon.
///
/// # Example
///
/// ```
/// use orbiter_engine::{OrbitProjection, Vector};
///
/// let projection = OrbitProjection::project(Vector::new(30, 0), Vector::new(-4, 1), 20);
/// assert!(projection.closest() <= 30);
/// assert!(projection.closest() <= projection.farthest());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrbitProjection {
    closest: i64,
    farthest: i64,
}

impl OrbitProjection {
    /// Projects `horizon` ticks of free fall from `position` with `velocity`.
    #[must_use]
    pub fn project(position: Vector, velocity: Vector, horizon: u32) -> Self {
        let start = position.radial_distance();
        let end = (position + velocity * i64::from(horizon)).radial_distance();

        let mut closest = start;
        let mut previous = start;
        let mut current = position;
        for _ in 0..horizon {
            current += velocity;
            let distance = current.radial_distance();
            if distance > previous {
                break;
            }
            closest = closest.min(distance);
            previous = distance;
        }

        Self {
            closest,
            farthest: start.max(end),
        }
    }

    /// Smallest distance from the origin reached within the horizon.
    #[must_use]
    pub const fn closest(&self) -> i64 {
        self.closest
    }

    /// Largest distance from the origin reached within the horizon.
    #[must_use]
    pub const fn farthest(&self) -> i64 {
        self.farthest
    }
}

/// The region a ship must stay in: outside the death radius of the central
/// body and inside the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boundary {
    pub death_radius: i64,
    pub field_radius: i64,
}

impl Boundary {
    #[must_use]
    pub const fn new(death_radius: i64, field_radius: i64) -> Self {
        Self {
            death_radius,
            field_radius,
        }
    }

    /// Returns `true` if `position` lies strictly outside the death radius and
    /// within the field.
    #[must_use]
    pub const fn contains(&self, position: Vector) -> bool {
        let distance = position.radial_distance();
        distance > self.death_radius && distance <= self.field_radius
    }

    /// Returns `true` if the projected trajectory touches the death radius.
    #[must_use]
    pub const fn is_falling(&self, projection: &OrbitProjection) -> bool {
        projection.closest() <= self.death_radius
    }

    /// Returns `true` if the projected trajectory leaves the field.
    #[must_use]
    pub const fn is_escaping(&self, projection: &OrbitProjection) -> bool {
        projection.farthest() > self.field_radius
    }

    /// Number of ticks a free-falling ship survives within the horizon.
    ///
    /// Returns `horizon` if the ship stays inside the boundary for the whole
    /// horizon, and `t - 1` if it first leaves it at tick `t`. A ship already
    /// outside the boundary survives zero ticks.
    #[must_use]
    pub fn survival_ticks(&self, position: Vector, velocity: Vector, horizon: u32) -> u32 {
        if !self.contains(position) {
            return 0;
        }
        let mut current = position;
        for tick in 1..=horizon {
            current += velocity;
            if !self.contains(current) {
                return tick - 1;
            }
        }
        horizon
    }
}
