use serde::{Deserialize, Serialize};

/// Tunables of [`DecisionPolicy`](crate::DecisionPolicy).
///
/// Every field has a default, so a configuration file only needs to list the
/// values it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PolicyConfig {
    /// Radius around the origin that destroys any ship touching it.
    pub death_radius: i64,
    /// Tick after which the match is over; the projection horizon at tick `t`
    /// is `match_length - t`.
    pub match_length: u32,
    /// Whether ships may fire lasers.
    pub fire_lasers: bool,
    /// Whether ships with spare lives duplicate.
    pub duplicate: bool,
    /// Combined position and velocity Manhattan distance below which two
    /// friendly ships count as glued together.
    pub crowding_distance: i64,
    /// Post-thrust distance to the nearest enemy below which a ship may
    /// self-destruct.
    pub self_destruct_distance: i64,
    /// Self-destruction is only considered after this tick.
    pub min_self_destruct_tick: u32,
    /// Number of observations each thrust predictor remembers.
    pub predictor_window: usize,
    /// Consecutive ticks of absence after which a ship is forgotten.
    pub eviction_ticks: u32,
    /// Single-life ships shape their orbit when projected survival is below
    /// this many ticks.
    pub safety_window: u32,
    /// Fuel a single-life ship keeps in reserve at its low laser power
    /// ceiling; only the high ceiling burns it.
    pub emergency_fuel: u32,
    /// Heat headroom gained per unit of fuel burnt.
    pub fuel_heat_exchange: u32,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            death_radius: 24,
            match_length: 265,
            fire_lasers: true,
            duplicate: true,
            crowding_distance: 2,
            self_destruct_distance: 6,
            min_self_destruct_tick: 7,
            predictor_window: 8,
            eviction_ticks: 8,
            safety_window: 16,
            emergency_fuel: 8,
            fuel_heat_exchange: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    #[display("death radius must not be negative, got {_0}")]
    NegativeDeathRadius(#[error(not(source))] i64),
    #[display("predictor window must be at least 1")]
    EmptyPredictorWindow,
    #[display("crowding distance must be at least 1, got {_0}")]
    CrowdingDistanceTooSmall(#[error(not(source))] i64),
    #[display("self-destruct distance must not be negative, got {_0}")]
    NegativeSelfDestructDistance(#[error(not(source))] i64),
}

impl PolicyConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.death_radius < 0 {
            return Err(ConfigError::NegativeDeathRadius(self.death_radius));
        }
        if self.predictor_window == 0 {
            return Err(ConfigError::EmptyPredictorWindow);
        }
        if self.crowding_distance < 1 {
            return Err(ConfigError::CrowdingDistanceTooSmall(
                self.crowding_distance,
            ));
        }
        if self.self_destruct_distance < 0 {
            return Err(ConfigError::NegativeSelfDestructDistance(
                self.self_destruct_distance,
            ));
        }
        Ok(())
    }

    /// Projection horizon at `tick`.
    #[must_use]
    pub fn horizon(&self, tick: u32) -> u32 {
        self.match_length.saturating_sub(tick)
    }
}
