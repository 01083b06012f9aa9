//! Sub-policy for armed ships down to their last life.
//!
//! A single-life ship cannot afford to explore: losing it ends its
//! contribution for good. Instead of the general boundary rules it searches
//! for the thrust that buys the most projected survival per unit of fuel, and
//! it spends laser power by economics: a guaranteed kill at minimum power
//! first, otherwise the shot with the best damage per unit of power.

use orbiter_engine::{Boundary, Ship, ThrustVector, Vector};

use crate::{config::PolicyConfig, target_selector::EnemyForecast, weapon};

/// Returns `true` if `ship` runs the specialist sub-policy.
#[must_use]
pub fn is_specialist(ship: &Ship) -> bool {
    ship.resources.laser > 0 && ship.resources.lives == 1
}

/// Why a [`ShotPlan`] was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotKind {
    /// The target is destroyed by this shot.
    Kill,
    /// The target survives; the shot maximizes damage per unit of power.
    Efficient,
}

/// A planned laser shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotPlan {
    pub target: Vector,
    pub power: u32,
    pub kind: ShotKind,
}

/// Searches thrust options that extend projected survival.
///
/// Only acts when free fall would leave the boundary within
/// `safety_window` ticks (or within the horizon, if shorter). Candidates form
/// the 5x5 grid around `(0, 0)`; each is clamped to a legal thrust and costs
/// `min(max(|dx|, |dy|), 1)` fuel. The candidate with the largest survival
/// gain per fuel is chosen, and only if its gain is strictly positive.
#[must_use]
pub fn shape_orbit(
    ship: &Ship,
    boundary: &Boundary,
    horizon: u32,
    safety_window: u32,
) -> ThrustVector {
    let base = boundary.survival_ticks(ship.position, ship.velocity, horizon);
    if base >= safety_window.min(horizon) {
        return ThrustVector::ZERO;
    }

    let fuel = i64::from(ship.resources.fuel);
    let mut best: Option<(ThrustVector, i64, i64)> = None;
    for dx in -2_i64..=2 {
        for dy in -2_i64..=2 {
            let cost = dx.abs().max(dy.abs()).min(1);
            if cost == 0 || cost > fuel {
                continue;
            }
            let thrust = ThrustVector::clamped(dx, dy);
            let velocity = ship.velocity + thrust.acceleration();
            let survival = boundary.survival_ticks(ship.position, velocity, horizon);
            let gain = i64::from(survival) - i64::from(base);
            if gain <= 0 {
                continue;
            }
            // gain / cost > best_gain / best_cost
            if best.is_none_or(|(_, best_gain, best_cost)| gain * best_cost > best_gain * cost) {
                best = Some((thrust, gain, cost));
            }
        }
    }

    match best {
        Some((thrust, gain, _)) => {
            tracing::debug!(ship = %ship.id, %thrust, base, gain, "orbit shaping");
            thrust
        }
        None => ThrustVector::ZERO,
    }
}

/// Power ceilings for a ship that already committed to `thrust`.
///
/// Both ceilings burn fuel left after the thrust as extra heat headroom at
/// `fuel_heat_exchange`. The low ceiling keeps `emergency_fuel` in reserve;
/// the high ceiling spends the reserve too.
fn power_ceilings(ship: &Ship, thrust: ThrustVector, config: &PolicyConfig) -> (u32, u32) {
    let resources = &ship.resources;
    let headroom = resources.heat_headroom(thrust);
    let fuel_left = resources.fuel.saturating_sub(thrust.fuel_cost());
    let ceiling = |fuel: u32| {
        resources
            .laser
            .min(headroom.saturating_add(fuel.saturating_mul(config.fuel_heat_exchange)))
    };
    (
        ceiling(fuel_left.saturating_sub(config.emergency_fuel)),
        ceiling(fuel_left),
    )
}

/// Chooses a laser shot from the ship's post-thrust position.
///
/// Any affordable kill beats every non-lethal shot; among kills the cheapest
/// wins. Without a kill, the shot with the best damage-per-power ratio at
/// either power ceiling is taken. Ties keep the first candidate found.
#[must_use]
pub fn plan_shot(
    ship: &Ship,
    thrust: ThrustVector,
    enemies: &[EnemyForecast<'_>],
    config: &PolicyConfig,
) -> Option<ShotPlan> {
    let (low, high) = power_ceilings(ship, thrust, config);
    let origin = ship.next_position(thrust);

    let mut cheapest_kill: Option<ShotPlan> = None;
    let mut most_efficient: Option<(f64, ShotPlan)> = None;
    for enemy in enemies {
        let offset = enemy.offset_from(origin);
        let energy = enemy.ship().energy_to_destroy();
        if let Some(power) = weapon::min_power_to_destroy(offset, energy, high) {
            if power > 0 && cheapest_kill.is_none_or(|kill| power < kill.power) {
                cheapest_kill = Some(ShotPlan {
                    target: enemy.next_position(),
                    power,
                    kind: ShotKind::Kill,
                });
            }
            continue;
        }

        for power in [low, high] {
            let damage = weapon::damage(offset, power);
            if power == 0 || damage == 0 {
                continue;
            }
            let efficiency = f64::from(damage) / f64::from(power);
            if most_efficient.is_none_or(|(best, _)| efficiency > best) {
                let shot = ShotPlan {
                    target: enemy.next_position(),
                    power,
                    kind: ShotKind::Efficient,
                };
                most_efficient = Some((efficiency, shot));
            }
        }
    }

    cheapest_kill.or(most_efficient.map(|(_, shot)| shot))
}
