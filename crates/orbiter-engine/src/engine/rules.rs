//! Numeric rules of the simulation.

/// Heat generated by any non-zero thrust.
pub const THRUST_HEAT: u32 = 8;

/// Budget units per point of laser capacity at join time.
pub const LASER_COST: u32 = 4;

/// Budget units per point of heat regeneration at join time.
pub const REGEN_COST: u32 = 12;

/// Budget units per life at join time.
pub const LIVES_COST: u32 = 2;

/// Join budgets strictly above this value belong to the attacking side.
pub const ATTACKER_BUDGET_CUTOFF: u32 = 490;

/// Max-norm distance beyond which a laser does no damage.
pub const LASER_RANGE: i64 = 64;

/// Damage produced per unit of laser power at zero falloff.
pub const LASER_DAMAGE_PER_POWER: i64 = 3;
