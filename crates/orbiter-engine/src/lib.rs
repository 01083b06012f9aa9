pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("thrust component out of range: ({dx}, {dy})")]
pub struct InvalidThrustError {
    pub dx: i64,
    pub dy: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ActionError {
    #[display("laser power must be positive")]
    ZeroPower,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SnapshotError {
    #[display("field radius must be positive, got {_0}")]
    NonPositiveFieldRadius(#[error(not(source))] i64),
    #[display("ship id {_0} appears more than once")]
    DuplicateShipId(#[error(not(source))] ShipId),
    #[display("ship {ship} has heat {heat} above its max heat {max_heat}")]
    HeatAboveMax { ship: ShipId, heat: u32, max_heat: u32 },
    #[display("ship {ship} reports {count} thrusts for a single tick")]
    TooManyThrusts { ship: ShipId, count: usize },
}
