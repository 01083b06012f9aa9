use std::collections::VecDeque;

use orbiter_engine::ThrustVector;

/// Online frequency model of one ship's thrust choices.
///
/// Keeps the most recent `window` observations and predicts their mode.
/// Opponents mostly run repetitive orbit-maintenance loops, so the most
/// frequent recent thrust is a better guess than assuming no thrust at all.
///
/// # Example
///
/// ```
/// use orbiter_ai::ThrustPredictor;
/// use orbiter_engine::ThrustVector;
///
/// let right = ThrustVector::new(1, 0).unwrap();
/// let mut predictor = ThrustPredictor::new(8);
/// predictor.add(right);
/// predictor.add(right);
/// predictor.add(ThrustVector::new(0, -1).unwrap());
///
/// assert_eq!(predictor.predict(10), right);
/// // A ship without fuel cannot thrust.
/// assert_eq!(predictor.predict(0), ThrustVector::ZERO);
/// ```
#[derive(Debug, Clone)]
pub struct ThrustPredictor {
    history: VecDeque<ThrustVector>,
    window: usize,
}

impl ThrustPredictor {
    /// Creates an empty predictor remembering at most `window` observations.
    #[must_use]
    pub fn new(window: usize) -> Self {
        Self {
            history: VecDeque::with_capacity(window),
            window,
        }
    }

    /// Appends one observed thrust, forgetting the oldest beyond the window.
    pub fn add(&mut self, thrust: ThrustVector) {
        if self.window == 0 {
            return;
        }
        if self.history.len() == self.window {
            self.history.pop_front();
        }
        self.history.push_back(thrust);
    }

    /// Records what a ship did during one tick.
    ///
    /// A tick without any observed thrust counts as coasting, i.e. `(0, 0)`.
    pub fn observe(&mut self, thrusts: &[ThrustVector]) {
        if thrusts.is_empty() {
            self.add(ThrustVector::ZERO);
        }
        for &thrust in thrusts {
            self.add(thrust);
        }
    }

    /// Observations currently in the window, oldest first.
    pub fn history(&self) -> impl Iterator<Item = ThrustVector> + '_ {
        self.history.iter().copied()
    }

    /// Most frequent thrust in the window.
    ///
    /// Ties go to the vector observed most recently. Returns `None` for an
    /// empty history.
    #[must_use]
    pub fn most_frequent(&self) -> Option<ThrustVector> {
        let mut counts = [0_usize; ThrustVector::LEN];
        let mut last_seen = [0_usize; ThrustVector::LEN];
        for (i, thrust) in self.history.iter().enumerate() {
            counts[thrust.index()] += 1;
            last_seen[thrust.index()] = i;
        }
        ThrustVector::ALL
            .into_iter()
            .filter(|thrust| counts[thrust.index()] > 0)
            .max_by_key(|thrust| (counts[thrust.index()], last_seen[thrust.index()]))
    }

    /// Predicted next thrust of a ship holding `fuel`.
    ///
    /// Falls back to `(0, 0)` when nothing has been observed yet or when the
    /// ship has no fuel left to thrust with.
    #[must_use]
    pub fn predict(&self, fuel: u32) -> ThrustVector {
        if fuel == 0 {
            return ThrustVector::ZERO;
        }
        self.most_frequent().unwrap_or(ThrustVector::ZERO)
    }
}
