use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{
    SnapshotError,
    core::{Role, Ship},
};

/// Everything one side can see at the start of a tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    /// The side this snapshot was delivered to.
    pub me: Role,
    /// Radius of the playable field under the max-norm.
    pub field_radius: i64,
    /// All currently visible ships, friendly and hostile.
    pub ships: Vec<Ship>,
}

impl WorldSnapshot {
    /// Checks the invariants the decision engine relies on.
    ///
    /// The engine itself assumes a validated snapshot; callers parsing
    /// external input run this first.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        if self.field_radius <= 0 {
            return Err(SnapshotError::NonPositiveFieldRadius(self.field_radius));
        }
        let mut seen = BTreeSet::new();
        for ship in &self.ships {
            if !seen.insert(ship.id) {
                return Err(SnapshotError::DuplicateShipId(ship.id));
            }
            let resources = &ship.resources;
            if resources.heat > resources.max_heat {
                return Err(SnapshotError::HeatAboveMax {
                    ship: ship.id,
                    heat: resources.heat,
                    max_heat: resources.max_heat,
                });
            }
            if ship.recent_thrusts.len() > 1 {
                return Err(SnapshotError::TooManyThrusts {
                    ship: ship.id,
                    count: ship.recent_thrusts.len(),
                });
            }
        }
        Ok(())
    }

    /// Ships owned by the receiving side, in snapshot order.
    pub fn own_ships(&self) -> impl Iterator<Item = &Ship> + '_ {
        self.ships.iter().filter(|ship| ship.owner == self.me)
    }

    /// Ships owned by the other side, in snapshot order.
    pub fn enemy_ships(&self) -> impl Iterator<Item = &Ship> + '_ {
        self.ships.iter().filter(|ship| ship.owner != self.me)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ShipId, ShipResources, ThrustVector, Vector};

    fn ship(id: u32, owner: Role) -> Ship {
        Ship {
            id: ShipId(id),
            owner,
            position: Vector::new(50, 0),
            velocity: Vector::ZERO,
            resources: ShipResources {
                fuel: 10,
                laser: 0,
                heat: 0,
                max_heat: 64,
                regen: 1,
                lives: 1,
            },
            recent_thrusts: Vec::new(),
        }
    }

    #[test]
    fn test_partition_by_owner() {
        let snapshot = WorldSnapshot {
            me: Role::Defender,
            field_radius: 128,
            ships: vec![
                ship(1, Role::Attacker),
                ship(2, Role::Defender),
                ship(3, Role::Defender),
            ],
        };
        let own: Vec<_> = snapshot.own_ships().map(|s| s.id).collect();
        let enemy: Vec<_> = snapshot.enemy_ships().map(|s| s.id).collect();
        assert_eq!(own, vec![ShipId(2), ShipId(3)]);
        assert_eq!(enemy, vec![ShipId(1)]);
        assert_eq!(snapshot.validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let snapshot = WorldSnapshot {
            me: Role::Attacker,
            field_radius: 128,
            ships: vec![ship(1, Role::Attacker), ship(1, Role::Defender)],
        };
        assert_eq!(
            snapshot.validate(),
            Err(SnapshotError::DuplicateShipId(ShipId(1)))
        );
    }

    #[test]
    fn test_validate_rejects_overheated_ship() {
        let mut hot = ship(5, Role::Attacker);
        hot.resources.heat = 65;
        let snapshot = WorldSnapshot {
            me: Role::Attacker,
            field_radius: 128,
            ships: vec![hot],
        };
        assert!(matches!(
            snapshot.validate(),
            Err(SnapshotError::HeatAboveMax { heat: 65, .. })
        ));
    }

    #[test]
    fn test_validate_allows_one_thrust_per_tick() {
        let thrust = ThrustVector::new(1, 0).unwrap();
        let mut busy = ship(2, Role::Defender);
        busy.recent_thrusts = vec![thrust];
        let mut snapshot = WorldSnapshot {
            me: Role::Attacker,
            field_radius: 128,
            ships: vec![busy],
        };
        assert_eq!(snapshot.validate(), Ok(()));

        snapshot.ships[0].recent_thrusts.push(thrust);
        assert_eq!(
            snapshot.validate(),
            Err(SnapshotError::TooManyThrusts {
                ship: ShipId(2),
                count: 2,
            })
        );
    }

    #[test]
    fn test_validate_rejects_empty_field() {
        let snapshot = WorldSnapshot {
            me: Role::Attacker,
            field_radius: 0,
            ships: Vec::new(),
        };
        assert_eq!(
            snapshot.validate(),
            Err(SnapshotError::NonPositiveFieldRadius(0))
        );
    }
}
