//! Rules and physics of the orbital arena.
//!
//! - [`rules`] - Numeric constants (heat, join-time costs, laser range)
//! - [`OrbitProjection`] / [`Boundary`] - Free-fall trajectory projection and
//!   the survivable region around the central body
//! - [`WorldSnapshot`] - What one side sees at the start of a tick
//!
//! The arena is centred on the origin. A square central body of radius
//! `death_radius` kills any ship that touches it, and ships drifting beyond
//! `field_radius` are lost. Distances use the max-norm throughout.

pub use self::{orbit::*, snapshot::*};

mod orbit;
pub mod rules;
mod snapshot;
