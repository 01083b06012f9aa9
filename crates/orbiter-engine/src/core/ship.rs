use serde::{Deserialize, Serialize};

use crate::{
    core::{thrust::ThrustVector, vector::Vector},
    engine::rules::THRUST_HEAT,
};

/// Unique identifier of a ship within a match.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(transparent)]
#[display("{_0}")]
pub struct ShipId(pub u32);

/// The two sides of a match.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Attacker,
    Defender,
}

impl Role {
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Attacker => Self::Defender,
            Self::Defender => Self::Attacker,
        }
    }
}

/// Consumable state of a ship.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipResources {
    pub fuel: u32,
    pub laser: u32,
    pub heat: u32,
    pub max_heat: u32,
    pub regen: u32,
    pub lives: u32,
}

impl ShipResources {
    /// Damage the ship can absorb before it is eliminated.
    ///
    /// Incoming damage first fills the remaining heat headroom; the overflow
    /// drains fuel, laser, regen and lives.
    #[must_use]
    pub fn energy_to_destroy(&self) -> u32 {
        self.max_heat
            .saturating_sub(self.heat)
            .saturating_add(self.fuel)
            .saturating_add(self.laser)
            .saturating_add(self.regen)
            .saturating_add(self.lives)
    }

    /// Heat this ship can still take on during the coming tick after paying
    /// for `thrust`.
    ///
    /// Regeneration is applied within the tick, so it counts towards the
    /// headroom.
    #[must_use]
    pub fn heat_headroom(&self, thrust: ThrustVector) -> u32 {
        let thrust_heat = if thrust.is_zero() { 0 } else { THRUST_HEAT };
        self.max_heat
            .saturating_add(self.regen)
            .saturating_sub(self.heat.saturating_add(thrust_heat))
    }

    /// Returns `true` if firing `thrust` keeps heat within `max_heat`.
    #[must_use]
    pub fn can_absorb_thrust_heat(&self, thrust: ThrustVector) -> bool {
        thrust.is_zero() || self.heat.saturating_add(THRUST_HEAT) <= self.max_heat
    }

    /// Laser power affordable this tick after paying for `thrust`.
    #[must_use]
    pub fn affordable_laser_power(&self, thrust: ThrustVector) -> u32 {
        self.laser.min(self.heat_headroom(thrust))
    }
}

/// A visible ship as delivered by the snapshot parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ship {
    pub id: ShipId,
    pub owner: Role,
    pub position: Vector,
    pub velocity: Vector,
    #[serde(flatten)]
    pub resources: ShipResources,
    /// Thrust this ship chose on the previous tick; empty if it coasted.
    ///
    /// A ship thrusts at most once per tick, so a validated snapshot holds
    /// at most one entry here.
    #[serde(default)]
    pub recent_thrusts: Vec<ThrustVector>,
}

impl Ship {
    /// Position after one tick of drift with `thrust` applied.
    #[must_use]
    pub fn next_position(&self, thrust: ThrustVector) -> Vector {
        self.position + self.velocity + thrust.acceleration()
    }

    #[must_use]
    pub fn energy_to_destroy(&self) -> u32 {
        self.resources.energy_to_destroy()
    }

    #[must_use]
    pub fn has_fuel(&self) -> bool {
        self.resources.fuel > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resources() -> ShipResources {
        ShipResources {
            fuel: 100,
            laser: 16,
            heat: 20,
            max_heat: 64,
            regen: 16,
            lives: 3,
        }
    }

    #[test]
    fn test_energy_to_destroy() {
        assert_eq!(resources().energy_to_destroy(), 44 + 100 + 16 + 16 + 3);
    }

    #[test]
    fn test_heat_headroom_counts_thrust_only_when_nonzero() {
        let r = resources();
        assert_eq!(r.heat_headroom(ThrustVector::ZERO), 64 + 16 - 20);
        let thrust = ThrustVector::new(1, 0).unwrap();
        assert_eq!(r.heat_headroom(thrust), 64 + 16 - 20 - THRUST_HEAT);
    }

    #[test]
    fn test_heat_headroom_saturates() {
        let r = ShipResources {
            heat: 64,
            regen: 0,
            ..resources()
        };
        assert_eq!(r.heat_headroom(ThrustVector::new(0, 1).unwrap()), 0);
        assert!(!r.can_absorb_thrust_heat(ThrustVector::new(0, 1).unwrap()));
        assert!(r.can_absorb_thrust_heat(ThrustVector::ZERO));
    }

    #[test]
    fn test_heat_arithmetic_near_u32_max() {
        let r = ShipResources {
            heat: u32::MAX,
            max_heat: u32::MAX,
            regen: 1,
            ..resources()
        };
        let thrust = ThrustVector::new(1, 1).unwrap();
        assert_eq!(r.heat_headroom(ThrustVector::ZERO), 1);
        assert_eq!(r.heat_headroom(thrust), 0);
        assert!(!r.can_absorb_thrust_heat(thrust));
        assert_eq!(r.affordable_laser_power(thrust), 0);
    }

    #[test]
    fn test_next_position_applies_acceleration() {
        let ship = Ship {
            id: ShipId(1),
            owner: Role::Attacker,
            position: Vector::new(10, 0),
            velocity: Vector::new(0, 3),
            resources: resources(),
            recent_thrusts: Vec::new(),
        };
        let thrust = ThrustVector::new(1, 0).unwrap();
        assert_eq!(ship.next_position(thrust), Vector::new(9, 3));
        assert_eq!(ship.next_position(ThrustVector::ZERO), Vector::new(10, 3));
    }

    #[test]
    fn test_ship_json_shape() {
        let json = r#"{
            "id": 7, "owner": "defender",
            "position": {"x": -30, "y": 12}, "velocity": {"x": 1, "y": 0},
            "fuel": 50, "laser": 0, "heat": 0, "max_heat": 64, "regen": 8, "lives": 4,
            "recent_thrusts": [[0, 1]]
        }"#;
        let ship: Ship = serde_json::from_str(json).unwrap();
        assert_eq!(ship.id, ShipId(7));
        assert!(ship.owner.is_defender());
        assert_eq!(ship.resources.lives, 4);
        assert_eq!(ship.recent_thrusts, vec![ThrustVector::new(0, 1).unwrap()]);
    }
}
