use std::collections::BTreeMap;

use orbiter_engine::{Ship, ShipId, ThrustVector};

use crate::thrust_predictor::ThrustPredictor;

#[derive(Debug, Clone)]
struct TrackedShip {
    predictor: ThrustPredictor,
    first_seen: u32,
    last_seen: u32,
}

/// Per-match memory about every ship ever observed.
///
/// Holds a [`ThrustPredictor`] and the tick of first sighting for each ship
/// id. Entries for ships missing from the snapshot for more than
/// `eviction_ticks` consecutive ticks are dropped, so the table stays bounded
/// by the number of ships alive in the recent past.
#[derive(Debug, Clone)]
pub struct TrackingTable {
    ships: BTreeMap<ShipId, TrackedShip>,
    predictor_window: usize,
    eviction_ticks: u32,
}

impl TrackingTable {
    #[must_use]
    pub fn new(predictor_window: usize, eviction_ticks: u32) -> Self {
        Self {
            ships: BTreeMap::new(),
            predictor_window,
            eviction_ticks,
        }
    }

    /// Ingests the ships visible at `tick` and evicts stale entries.
    pub fn observe<'a, I>(&mut self, ships: I, tick: u32)
    where
        I: IntoIterator<Item = &'a Ship>,
    {
        for ship in ships {
            let window = self.predictor_window;
            let entry = self.ships.entry(ship.id).or_insert_with(|| TrackedShip {
                predictor: ThrustPredictor::new(window),
                first_seen: tick,
                last_seen: tick,
            });
            entry.predictor.observe(&ship.recent_thrusts);
            entry.last_seen = tick;
        }

        let eviction_ticks = self.eviction_ticks;
        self.ships.retain(|id, tracked| {
            let keep = tick.saturating_sub(tracked.last_seen) <= eviction_ticks;
            if !keep {
                tracing::trace!(ship = %id, last_seen = tracked.last_seen, "evicting ship");
            }
            keep
        });
    }

    /// Predicted next thrust of `ship`, `(0, 0)` if it has never been observed.
    #[must_use]
    pub fn predict(&self, ship: &Ship) -> ThrustVector {
        self.ships
            .get(&ship.id)
            .map_or(ThrustVector::ZERO, |tracked| {
                tracked.predictor.predict(ship.resources.fuel)
            })
    }

    /// Tick at which `id` was first observed.
    #[must_use]
    pub fn first_seen(&self, id: ShipId) -> Option<u32> {
        self.ships.get(&id).map(|tracked| tracked.first_seen)
    }

    /// Number of ticks since `id` was first observed.
    #[must_use]
    pub fn age(&self, id: ShipId, tick: u32) -> Option<u32> {
        self.first_seen(id)
            .map(|first_seen| tick.saturating_sub(first_seen))
    }

    #[must_use]
    pub fn contains(&self, id: ShipId) -> bool {
        self.ships.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ships.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }
}
