//! Decision engine for the orbital combat game.
//!
//! Given a [`WorldSnapshot`](orbiter_engine::WorldSnapshot) per tick, the
//! engine decides the actions of every ship owned by its side.
//!
//! # Architecture
//!
//! ```text
//! DecisionPolicy (per tick, per owned ship)
//!     ↓ uses
//! TrackingTable ── ThrustPredictor (enemy behaviour)
//! TargetSelector ── weapon (damage model)
//! specialist (single-life armed ships)
//!     ↓ uses
//! orbiter_engine (vectors, orbits, rules)
//! ```
//!
//! - [`policy`] - The per-tick [`DecisionPolicy`]
//! - [`thrust_predictor`] - Mode of recent thrusts for one ship
//! - [`tracking`] - Predictors for every ship seen this match
//! - [`target_selector`] - Enemy forecasts and target picking
//! - [`weapon`] - Laser damage and kill-power search
//! - [`specialist`] - Orbit shaping and shot economics for last-life ships
//! - [`join`] - Resource split at match start
//! - [`config`] - Policy tunables
//!
//! # Example
//!
//! ```rust
//! use orbiter_ai::DecisionPolicy;
//! use orbiter_engine::{Action, Role, Ship, ShipId, ShipResources, Vector, WorldSnapshot};
//! use rand::SeedableRng as _;
//!
//! let ship = Ship {
//!     id: ShipId(0),
//!     owner: Role::Defender,
//!     position: Vector::new(60, 0),
//!     velocity: Vector::new(0, 5),
//!     resources: ShipResources {
//!         fuel: 100,
//!         laser: 0,
//!         heat: 0,
//!         max_heat: 64,
//!         regen: 8,
//!         lives: 1,
//!     },
//!     recent_thrusts: vec![],
//! };
//! let snapshot = WorldSnapshot {
//!     me: Role::Defender,
//!     field_radius: 128,
//!     ships: vec![ship],
//! };
//!
//! let mut policy = DecisionPolicy::default();
//! let mut rng = rand_pcg::Pcg32::seed_from_u64(0);
//! let actions = policy.decide(&snapshot, &mut rng);
//! assert!(actions.iter().any(Action::is_thrust));
//! ```

pub use self::{
    config::{ConfigError, PolicyConfig},
    join::JoinConfiguration,
    policy::{DecisionPolicy, ShipPlan, assess_power},
    target_selector::{EnemyForecast, select_collision_target, select_weapon_target},
    thrust_predictor::ThrustPredictor,
    tracking::TrackingTable,
};

pub mod config;
pub mod join;
pub mod policy;
pub mod specialist;
pub mod target_selector;
pub mod thrust_predictor;
pub mod tracking;
pub mod weapon;
