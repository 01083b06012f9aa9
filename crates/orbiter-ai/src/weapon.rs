//! Laser damage model.
//!
//! Damage grows linearly with power and is reduced by a falloff that depends
//! on the offset between shooter and target:
//!
//! - **Distance**: a quarter of the max-norm distance
//! - **Misalignment**: lasers are focused along the axes and diagonals; the
//!   falloff grows with the distance from the nearest of those lines
//!
//! Targets beyond [`LASER_RANGE`] take no damage.

use orbiter_engine::{
    Vector,
    rules::{LASER_DAMAGE_PER_POWER, LASER_RANGE},
};

/// Damage dealt to a target at `offset` from the shooter with `power`.
///
/// Monotonic non-decreasing in `power`; zero for zero power and for targets
/// out of range.
#[must_use]
pub fn damage(offset: Vector, power: u32) -> u32 {
    let distance = offset.radial_distance();
    if distance > LASER_RANGE {
        return 0;
    }
    let minor = offset.x.abs().min(offset.y.abs());
    let misalignment = minor.min(distance - minor);
    let falloff = distance / 4 + misalignment;
    let raw = i64::from(power) * LASER_DAMAGE_PER_POWER - falloff;
    u32::try_from(raw.max(0)).unwrap_or(u32::MAX)
}

/// Smallest power up to `max_power` whose damage at `offset` reaches
/// `energy_to_destroy`.
///
/// Searches downwards from `max_power` until the damage would fall short.
/// Returns `None` if even `max_power` does not destroy the target.
#[must_use]
pub fn min_power_to_destroy(offset: Vector, energy_to_destroy: u32, max_power: u32) -> Option<u32> {
    if damage(offset, max_power) < energy_to_destroy {
        return None;
    }
    let mut power = max_power;
    while power > 0 && damage(offset, power - 1) >= energy_to_destroy {
        power -= 1;
    }
    Some(power)
}
