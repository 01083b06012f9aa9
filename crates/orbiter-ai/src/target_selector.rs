use orbiter_engine::{Ship, ThrustVector, Vector};

use crate::{tracking::TrackingTable, weapon};

/// Where an enemy ship is expected to be next tick.
///
/// Computed once per tick per enemy so that target selection for every owned
/// ship reuses the same predictions.
#[derive(Debug, Clone, Copy)]
pub struct EnemyForecast<'a> {
    ship: &'a Ship,
    thrust: ThrustVector,
    next_position: Vector,
}

impl<'a> EnemyForecast<'a> {
    #[must_use]
    pub fn new(ship: &'a Ship, thrust: ThrustVector) -> Self {
        Self {
            ship,
            thrust,
            next_position: ship.next_position(thrust),
        }
    }

    /// Forecasts `ship` using the thrust predicted by `tracking`.
    #[must_use]
    pub fn from_tracking(ship: &'a Ship, tracking: &TrackingTable) -> Self {
        Self::new(ship, tracking.predict(ship))
    }

    #[must_use]
    pub fn ship(&self) -> &'a Ship {
        self.ship
    }

    #[must_use]
    pub fn thrust(&self) -> ThrustVector {
        self.thrust
    }

    #[must_use]
    pub fn next_position(&self) -> Vector {
        self.next_position
    }

    /// Offset from `origin` to the predicted position.
    #[must_use]
    pub fn offset_from(&self, origin: Vector) -> Vector {
        self.next_position - origin
    }
}

/// Picks the enemy to shoot from `origin` with `power`.
///
/// Among enemies that would take non-zero damage at their predicted
/// position, maximizes damage plus the enemy's fuel. Ties keep the first
/// candidate found.
#[must_use]
pub fn select_weapon_target<'f, 'a>(
    origin: Vector,
    power: u32,
    enemies: &'f [EnemyForecast<'a>],
) -> Option<&'f EnemyForecast<'a>> {
    let mut best_score = 0;
    let mut best = None;
    for enemy in enemies {
        let damage = weapon::damage(enemy.offset_from(origin), power);
        if damage == 0 {
            continue;
        }
        let score = u64::from(damage) + u64::from(enemy.ship().resources.fuel);
        if score > best_score {
            best_score = score;
            best = Some(enemy);
        }
    }
    best
}

/// Picks the enemy whose predicted position is closest to `origin`.
///
/// Returns the enemy together with its max-norm distance. Ties keep the first
/// candidate found.
#[must_use]
pub fn select_collision_target<'f, 'a>(
    origin: Vector,
    enemies: &'f [EnemyForecast<'a>],
) -> Option<(&'f EnemyForecast<'a>, i64)> {
    let mut best: Option<(&EnemyForecast<'a>, i64)> = None;
    for enemy in enemies {
        let distance = origin.distance_to(enemy.next_position());
        if best.is_none_or(|(_, best_distance)| distance < best_distance) {
            best = Some((enemy, distance));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use orbiter_engine::{Role, ShipId, ShipResources};

    use super::*;

    fn enemy(id: u32, position: Vector, fuel: u32) -> Ship {
        Ship {
            id: ShipId(id),
            owner: Role::Defender,
            position,
            velocity: Vector::new(0, 1),
            resources: ShipResources {
                fuel,
                laser: 0,
                heat: 0,
                max_heat: 64,
                regen: 8,
                lives: 1,
            },
            recent_thrusts: Vec::new(),
        }
    }

    #[test]
    fn test_forecast_applies_predicted_thrust() {
        let ship = enemy(1, Vector::new(40, 0), 10);
        let forecast = EnemyForecast::new(&ship, ThrustVector::new(1, 0).unwrap());
        assert_eq!(forecast.next_position(), Vector::new(39, 1));
        assert_eq!(forecast.offset_from(Vector::new(30, 1)), Vector::new(9, 0));
    }

    #[test]
    fn test_weapon_target_prefers_damage_plus_fuel() {
        let near_poor = enemy(1, Vector::new(8, -1), 0);
        let far_rich = enemy(2, Vector::new(40, -1), 200);
        let out_of_range = enemy(3, Vector::new(200, -1), 10_000);
        let forecasts: Vec<_> = [&near_poor, &far_rich, &out_of_range]
            .into_iter()
            .map(|ship| EnemyForecast::new(ship, ThrustVector::ZERO))
            .collect();

        let target = select_weapon_target(Vector::ZERO, 20, &forecasts).unwrap();
        assert_eq!(target.ship().id, ShipId(2));
    }

    #[test]
    fn test_weapon_target_requires_damage() {
        let ship = enemy(1, Vector::new(8, -1), 50);
        let forecasts = [EnemyForecast::new(&ship, ThrustVector::ZERO)];
        assert!(select_weapon_target(Vector::ZERO, 0, &forecasts).is_none());
        assert!(select_weapon_target(Vector::ZERO, 5, &forecasts).is_some());
    }

    #[test]
    fn test_weapon_target_ties_keep_first() {
        let a = enemy(1, Vector::new(10, -1), 5);
        let b = enemy(2, Vector::new(-10, -1), 5);
        let forecasts = [
            EnemyForecast::new(&a, ThrustVector::ZERO),
            EnemyForecast::new(&b, ThrustVector::ZERO),
        ];
        let target = select_weapon_target(Vector::ZERO, 10, &forecasts).unwrap();
        assert_eq!(target.ship().id, ShipId(1));
    }

    #[test]
    fn test_collision_target_is_nearest_predicted() {
        let a = enemy(1, Vector::new(10, -1), 5);
        let b = enemy(2, Vector::new(-4, -1), 5);
        let forecasts = [
            EnemyForecast::new(&a, ThrustVector::ZERO),
            EnemyForecast::new(&b, ThrustVector::ZERO),
        ];
        let (target, distance) = select_collision_target(Vector::ZERO, &forecasts).unwrap();
        assert_eq!(target.ship().id, ShipId(2));
        assert_eq!(distance, 4);
        assert!(select_collision_target(Vector::ZERO, &[]).is_none());
    }
}
