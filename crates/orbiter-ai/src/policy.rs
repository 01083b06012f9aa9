//! Per-tick decision making for every owned ship.
//!
//! [`DecisionPolicy::decide`] runs once per tick:
//!
//! 1. **Track** - Feed every visible ship into the [`TrackingTable`]
//! 2. **Forecast** - Predict each enemy's next thrust and position once
//! 3. **Plan** - Build a [`ShipPlan`] for each owned ship, in snapshot order
//!
//! Each owned ship follows one of two paths. Armed ships on their last life
//! run the [`specialist`](crate::specialist) sub-policy. All other ships take
//! the general path:
//!
//! - boundary check (fall into the central body, else escape the field)
//! - duplication while lives remain and the orbit is safe
//! - crowding avoidance against friendly ships glued to this one
//! - fuel and heat caps on the chosen thrust
//! - the thrust action itself, always emitted
//! - laser fire at the best target
//!
//! Finally, both paths go through the terminal check: a ship close enough to
//! an enemy, late enough in the match and on a side with enough ships
//! replaces its whole plan with a single self-destruct.

use arrayvec::ArrayVec;
use orbiter_engine::{
    Action, Boundary, OrbitProjection, Role, Ship, ThrustVector, Vector, WorldSnapshot,
};
use rand::Rng;

use crate::{
    config::PolicyConfig,
    specialist,
    target_selector::{self, EnemyForecast},
    tracking::TrackingTable,
    weapon,
};

/// Actions planned for one ship in one tick.
pub type ShipPlan = ArrayVec<Action, 3>;

/// Decision engine for one side of one match.
///
/// Owns the per-match tracking table and the tick counter, so a fresh
/// instance is needed for every match.
#[derive(Debug, Clone)]
pub struct DecisionPolicy {
    config: PolicyConfig,
    tracking: TrackingTable,
    tick: u32,
}

impl Default for DecisionPolicy {
    fn default() -> Self {
        Self::new(PolicyConfig::default())
    }
}

/// Everything shared by the ships planned within one tick.
#[derive(Debug)]
struct TickContext<'a> {
    me: Role,
    tick: u32,
    horizon: u32,
    boundary: Boundary,
    own: Vec<&'a Ship>,
    enemies: Vec<EnemyForecast<'a>>,
}

impl DecisionPolicy {
    #[must_use]
    pub fn new(config: PolicyConfig) -> Self {
        let tracking = TrackingTable::new(config.predictor_window, config.eviction_ticks);
        Self {
            config,
            tracking,
            tick: 0,
        }
    }

    #[must_use]
    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Number of ticks decided so far.
    #[must_use]
    pub fn tick(&self) -> u32 {
        self.tick
    }

    #[must_use]
    pub fn tracking(&self) -> &TrackingTable {
        &self.tracking
    }

    /// Decides the actions of every owned ship for the next tick.
    ///
    /// Total for any validated snapshot: a tick without owned ships yields an
    /// empty list. `rng` is only drawn from for crowding avoidance, so a
    /// seeded generator makes decisions reproducible.
    pub fn decide<R>(&mut self, snapshot: &WorldSnapshot, rng: &mut R) -> Vec<Action>
    where
        R: Rng + ?Sized,
    {
        self.tick += 1;
        let tick = self.tick;
        self.tracking.observe(&snapshot.ships, tick);

        let ctx = TickContext {
            me: snapshot.me,
            tick,
            horizon: self.config.horizon(tick),
            boundary: Boundary::new(self.config.death_radius, snapshot.field_radius),
            own: snapshot.own_ships().collect(),
            enemies: snapshot
                .enemy_ships()
                .map(|ship| EnemyForecast::from_tracking(ship, &self.tracking))
                .collect(),
        };

        let mut actions = Vec::with_capacity(ctx.own.len() * 3);
        for ship in &ctx.own {
            actions.extend(self.plan_ship(&ctx, ship, rng));
        }

        tracing::debug!(
            tick,
            own = ctx.own.len(),
            enemies = ctx.enemies.len(),
            actions = actions.len(),
            "tick decided"
        );
        actions
    }

    fn plan_ship<R>(&self, ctx: &TickContext<'_>, ship: &Ship, rng: &mut R) -> ShipPlan
    where
        R: Rng + ?Sized,
    {
        let (thrust, mut plan) = if specialist::is_specialist(ship) {
            self.plan_specialist(ctx, ship)
        } else {
            self.plan_general(ctx, ship, rng)
        };

        if self.should_self_destruct(ctx, ship, thrust) {
            plan.clear();
            plan.push(Action::self_destruct(ship.id));
        }
        plan
    }

    fn plan_general<R>(
        &self,
        ctx: &TickContext<'_>,
        ship: &Ship,
        rng: &mut R,
    ) -> (ThrustVector, ShipPlan)
    where
        R: Rng + ?Sized,
    {
        let mut plan = ShipPlan::new();
        let mut may_duplicate = self.config.duplicate;
        let mut thrust = ThrustVector::ZERO;

        let projection = OrbitProjection::project(ship.position, ship.velocity, ctx.horizon);
        if ctx.boundary.is_falling(&projection) {
            may_duplicate = false;
            if ship.has_fuel() {
                thrust = boundary_thrust(ship.position);
                tracing::debug!(ship = %ship.id, closest = projection.closest(), %thrust, "raising orbit");
            }
        } else if ctx.boundary.is_escaping(&projection) {
            // Drift is a straight line, so a ship that touches the body does
            // so before it can leave the field.
            may_duplicate = false;
            if ship.has_fuel() {
                thrust = escape_thrust(ship.velocity);
                tracing::debug!(ship = %ship.id, farthest = projection.farthest(), %thrust, "braking");
            }
        }

        if may_duplicate && ship.resources.lives > 1 {
            tracing::debug!(
                ship = %ship.id,
                lives = ship.resources.lives,
                age = self.tracking.age(ship.id, ctx.tick),
                "duplicating"
            );
            plan.push(Action::duplicate(ship.id));
        }

        if ship.has_fuel()
            && crowding_neighbour(ship, &ctx.own, self.config.crowding_distance).is_some()
        {
            let perturbed = perturb(thrust, rng);
            tracing::debug!(ship = %ship.id, from = %thrust, to = %perturbed, "breaking up crowd");
            thrust = perturbed;
        }

        let thrust = affordable_thrust(ship, thrust);
        plan.push(Action::thrust(ship.id, thrust));

        if let Some(fire) = self.plan_laser(ctx, ship, thrust) {
            plan.push(fire);
        }
        (thrust, plan)
    }

    fn plan_specialist(&self, ctx: &TickContext<'_>, ship: &Ship) -> (ThrustVector, ShipPlan) {
        let mut plan = ShipPlan::new();

        let thrust = if ship.has_fuel() {
            specialist::shape_orbit(ship, &ctx.boundary, ctx.horizon, self.config.safety_window)
        } else {
            ThrustVector::ZERO
        };
        let thrust = affordable_thrust(ship, thrust);
        plan.push(Action::thrust(ship.id, thrust));

        if self.config.fire_lasers
            && let Some(shot) = specialist::plan_shot(ship, thrust, &ctx.enemies, &self.config)
            && let Ok(fire) = Action::fire_laser(ship.id, shot.target, shot.power)
        {
            tracing::debug!(ship = %ship.id, target = %shot.target, power = shot.power, kind = ?shot.kind, "specialist firing");
            plan.push(fire);
        }
        (thrust, plan)
    }

    fn plan_laser(&self, ctx: &TickContext<'_>, ship: &Ship, thrust: ThrustVector) -> Option<Action> {
        if !self.config.fire_lasers || ship.resources.laser == 0 {
            return None;
        }
        let origin = ship.next_position(thrust);
        let power = ship.resources.affordable_laser_power(thrust);
        let target = target_selector::select_weapon_target(origin, power, &ctx.enemies)?;
        let power = assess_power(ship, thrust, target);
        let fire = Action::fire_laser(ship.id, target.next_position(), power).ok()?;
        tracing::debug!(ship = %ship.id, target = %target.ship().id, power, "firing");
        Some(fire)
    }

    fn should_self_destruct(&self, ctx: &TickContext<'_>, ship: &Ship, thrust: ThrustVector) -> bool {
        if ctx.tick <= self.config.min_self_destruct_tick {
            return false;
        }
        let own = ctx.own.len();
        let enemies = ctx.enemies.len();
        let favourable = match ctx.me {
            Role::Attacker => own >= enemies,
            Role::Defender => own > enemies,
        };
        if !favourable {
            return false;
        }
        let origin = ship.next_position(thrust);
        let Some((target, distance)) = target_selector::select_collision_target(origin, &ctx.enemies)
        else {
            return false;
        };
        if distance >= self.config.self_destruct_distance {
            return false;
        }
        tracing::debug!(ship = %ship.id, target = %target.ship().id, distance, own, enemies, "self-destructing");
        true
    }
}

/// Laser power worth spending on `target` after committing to `thrust`.
///
/// Capped by laser capacity and heat headroom; zero when even that power
/// would do no damage at the target's predicted position.
#[must_use]
pub fn assess_power(ship: &Ship, thrust: ThrustVector, target: &EnemyForecast<'_>) -> u32 {
    let power = ship.resources.affordable_laser_power(thrust);
    let origin = ship.next_position(thrust);
    if weapon::damage(target.offset_from(origin), power) > 0 {
        power
    } else {
        0
    }
}

/// Thrust that lifts a ship away from the central body.
///
/// Pushes outward along the dominant position axis with a sideways kick that
/// turns the fall into an orbit.
fn boundary_thrust(position: Vector) -> ThrustVector {
    let Vector { x, y } = position.signum();
    if position.is_x_major() {
        ThrustVector::clamped(-x, -x)
    } else {
        ThrustVector::clamped(y, -y)
    }
}

/// Thrust that slows a ship heading out of the field.
fn escape_thrust(velocity: Vector) -> ThrustVector {
    ThrustVector::from_signs(velocity)
}

/// Nearest friendly ship glued to `ship`: closer than `max_distance` over
/// position and velocity combined, and moving with the same velocity.
fn crowding_neighbour<'a>(ship: &Ship, own: &[&'a Ship], max_distance: i64) -> Option<&'a Ship> {
    let mut nearest: Option<(&'a Ship, i64)> = None;
    for &other in own {
        if other.id == ship.id {
            continue;
        }
        let distance = ship.position.manhattan_distance(other.position)
            + ship.velocity.manhattan_distance(other.velocity);
        if nearest.is_none_or(|(_, best)| distance < best) {
            nearest = Some((other, distance));
        }
    }
    nearest
        .filter(|(other, distance)| *distance < max_distance && other.velocity == ship.velocity)
        .map(|(other, _)| other)
}

/// Updates one thrust axis with a random draw.
///
/// When the draw equals the current value the two are added (and later
/// clamped); otherwise the draw replaces the current value.
fn perturb_axis(current: i64, draw: i64) -> i64 {
    if draw == current {
        current + draw
    } else {
        draw
    }
}

fn perturb<R>(thrust: ThrustVector, rng: &mut R) -> ThrustVector
where
    R: Rng + ?Sized,
{
    let dx = rng.random_range(-1..=1);
    let dy = rng.random_range(-1..=1);
    ThrustVector::clamped(perturb_axis(thrust.dx(), dx), perturb_axis(thrust.dy(), dy))
}

/// Drops thrust the ship cannot pay for in fuel or heat.
fn affordable_thrust(ship: &Ship, thrust: ThrustVector) -> ThrustVector {
    if thrust.fuel_cost() > ship.resources.fuel
        || !ship.resources.can_absorb_thrust_heat(thrust)
    {
        ThrustVector::ZERO
    } else {
        thrust
    }
}

#[cfg(test)]
mod tests {
    use orbiter_engine::{ShipId, ShipResources};
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;

    fn t(dx: i64, dy: i64) -> ThrustVector {
        ThrustVector::new(dx, dy).unwrap()
    }

    fn ship(id: u32, owner: Role, position: Vector, velocity: Vector) -> Ship {
        Ship {
            id: ShipId(id),
            owner,
            position,
            velocity,
            resources: ShipResources {
                fuel: 100,
                laser: 0,
                heat: 0,
                max_heat: 64,
                regen: 8,
                lives: 4,
            },
            recent_thrusts: Vec::new(),
        }
    }

    #[test]
    fn test_boundary_thrust_pushes_outward() {
        // x-major: exhaust inward on x, sideways kick on y.
        assert_eq!(boundary_thrust(Vector::new(20, 3)), t(-1, -1));
        assert_eq!(boundary_thrust(Vector::new(-20, 3)), t(1, 1));
        // y-major (and ties).
        assert_eq!(boundary_thrust(Vector::new(3, 20)), t(1, -1));
        assert_eq!(boundary_thrust(Vector::new(5, -5)), t(-1, 1));
        for position in [Vector::new(20, 3), Vector::new(3, -20), Vector::new(-9, 9)] {
            let thrust = boundary_thrust(position);
            let velocity = thrust.acceleration();
            let major = if position.is_x_major() {
                position.x.signum() * velocity.x
            } else {
                position.y.signum() * velocity.y
            };
            assert_eq!(major, 1, "{position}");
        }
    }

    #[test]
    fn test_escape_thrust_opposes_velocity() {
        let thrust = escape_thrust(Vector::new(5, -2));
        assert_eq!(thrust, t(1, -1));
        assert_eq!(thrust.acceleration(), Vector::new(-1, 1));
        assert_eq!(escape_thrust(Vector::ZERO), ThrustVector::ZERO);
    }

    #[test]
    fn test_perturb_axis_is_asymmetric() {
        // A differing draw replaces the axis.
        assert_eq!(perturb_axis(0, 1), 1);
        assert_eq!(perturb_axis(1, -1), -1);
        assert_eq!(perturb_axis(-1, 0), 0);
        // A matching draw is added, so a non-zero axis doubles before clamping
        // and a zero axis stays zero.
        assert_eq!(perturb_axis(1, 1), 2);
        assert_eq!(perturb_axis(-1, -1), -2);
        assert_eq!(perturb_axis(0, 0), 0);
    }

    #[test]
    fn test_perturb_yields_the_draws() {
        // After clamping, both branches of the axis rule land on the draw.
        for seed in 0..32 {
            for current in ThrustVector::ALL {
                let mut rng = Pcg32::seed_from_u64(seed);
                let mut replay = Pcg32::seed_from_u64(seed);
                let dx: i64 = replay.random_range(-1..=1);
                let dy: i64 = replay.random_range(-1..=1);
                assert_eq!(perturb(current, &mut rng), t(dx, dy));
            }
        }
    }

    #[test]
    fn test_crowding_neighbour() {
        let a = ship(1, Role::Attacker, Vector::new(50, 0), Vector::new(0, 3));
        let glued = ship(2, Role::Attacker, Vector::new(50, 1), Vector::new(0, 3));
        let drifting = ship(3, Role::Attacker, Vector::new(50, 0), Vector::new(1, 3));
        let far = ship(4, Role::Attacker, Vector::new(-50, 0), Vector::new(0, 3));

        let own = [&a, &glued, &far];
        assert_eq!(crowding_neighbour(&a, &own, 2).map(|s| s.id), Some(ShipId(2)));
        assert!(crowding_neighbour(&a, &own, 1).is_none());

        // Nearest is within range but moves differently.
        let own = [&a, &drifting, &far];
        assert!(crowding_neighbour(&a, &own, 2).is_none());

        let own = [&a];
        assert!(crowding_neighbour(&a, &own, 2).is_none());
    }

    #[test]
    fn test_affordable_thrust() {
        let mut s = ship(1, Role::Attacker, Vector::new(50, 0), Vector::ZERO);
        assert_eq!(affordable_thrust(&s, t(1, 0)), t(1, 0));
        s.resources.heat = 60;
        assert_eq!(affordable_thrust(&s, t(1, 0)), ThrustVector::ZERO);
        s.resources.heat = 0;
        s.resources.fuel = 0;
        assert_eq!(affordable_thrust(&s, t(1, 0)), ThrustVector::ZERO);
        assert_eq!(affordable_thrust(&s, ThrustVector::ZERO), ThrustVector::ZERO);
    }

    #[test]
    fn test_assess_power() {
        let mut shooter = ship(1, Role::Attacker, Vector::new(50, 0), Vector::ZERO);
        shooter.resources.laser = 30;
        shooter.resources.heat = 50;
        let near = ship(2, Role::Defender, Vector::new(60, 0), Vector::ZERO);
        let far = ship(3, Role::Defender, Vector::new(-50, 0), Vector::ZERO);
        let near = EnemyForecast::new(&near, ThrustVector::ZERO);
        let far = EnemyForecast::new(&far, ThrustVector::ZERO);

        // Headroom 64 + 8 - 50 = 22 is below laser capacity.
        assert_eq!(assess_power(&shooter, ThrustVector::ZERO, &near), 22);
        // Thrust heat eats into the headroom.
        assert_eq!(assess_power(&shooter, t(0, 1), &near), 14);
        // Out of range.
        assert_eq!(assess_power(&shooter, ThrustVector::ZERO, &far), 0);
    }

    #[test]
    fn test_empty_snapshot_yields_no_actions() {
        let mut policy = DecisionPolicy::default();
        let snapshot = WorldSnapshot {
            me: Role::Attacker,
            field_radius: 128,
            ships: vec![ship(9, Role::Defender, Vector::new(60, 0), Vector::ZERO)],
        };
        let mut rng = Pcg32::seed_from_u64(0);
        assert!(policy.decide(&snapshot, &mut rng).is_empty());
        assert_eq!(policy.tick(), 1);
        assert!(policy.tracking().contains(ShipId(9)));
    }

    #[test]
    fn test_dry_ship_emits_zero_thrust() {
        let mut policy = DecisionPolicy::new(PolicyConfig {
            duplicate: false,
            ..PolicyConfig::default()
        });
        let mut dry = ship(1, Role::Defender, Vector::new(20, 0), Vector::new(-1, 0));
        dry.resources.fuel = 0;
        let snapshot = WorldSnapshot {
            me: Role::Defender,
            field_radius: 128,
            ships: vec![dry],
        };
        let mut rng = Pcg32::seed_from_u64(0);
        let actions = policy.decide(&snapshot, &mut rng);
        assert_eq!(actions, vec![Action::thrust(ShipId(1), ThrustVector::ZERO)]);
    }
}
