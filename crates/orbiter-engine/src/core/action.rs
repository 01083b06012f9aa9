use serde::{Deserialize, Serialize};

use crate::{
    ActionError,
    core::{ship::ShipId, thrust::ThrustVector, vector::Vector},
};

/// A command issued for one ship for one tick.
///
/// [`Action::SelfDestruct`] is terminal: when it is issued for a ship it is
/// the only action issued for that ship in that tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::IsVariant)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Thrust {
        ship: ShipId,
        thrust: ThrustVector,
    },
    FireLaser {
        ship: ShipId,
        target: Vector,
        power: u32,
    },
    Duplicate {
        ship: ShipId,
    },
    SelfDestruct {
        ship: ShipId,
    },
}

impl Action {
    #[must_use]
    pub const fn thrust(ship: ShipId, thrust: ThrustVector) -> Self {
        Self::Thrust { ship, thrust }
    }

    /// Creates a laser shot, rejecting zero power.
    pub const fn fire_laser(ship: ShipId, target: Vector, power: u32) -> Result<Self, ActionError> {
        if power == 0 {
            return Err(ActionError::ZeroPower);
        }
        Ok(Self::FireLaser {
            ship,
            target,
            power,
        })
    }

    #[must_use]
    pub const fn duplicate(ship: ShipId) -> Self {
        Self::Duplicate { ship }
    }

    #[must_use]
    pub const fn self_destruct(ship: ShipId) -> Self {
        Self::SelfDestruct { ship }
    }

    /// The ship this action is issued for.
    #[must_use]
    pub const fn ship(&self) -> ShipId {
        match *self {
            Self::Thrust { ship, .. }
            | Self::FireLaser { ship, .. }
            | Self::Duplicate { ship }
            | Self::SelfDestruct { ship } => ship,
        }
    }
}
