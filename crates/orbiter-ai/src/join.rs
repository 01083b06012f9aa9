use orbiter_engine::{
    Role,
    rules::{ATTACKER_BUDGET_CUTOFF, LASER_COST, LIVES_COST, REGEN_COST},
};
use serde::{Deserialize, Serialize};

/// Resource split chosen once at match start.
///
/// Satisfies `fuel + LASER_COST * laser + REGEN_COST * regen + LIVES_COST *
/// lives == budget` for the budget it was built from.
///
/// # Example
///
/// ```
/// use orbiter_ai::JoinConfiguration;
/// use orbiter_engine::Role;
///
/// let join = JoinConfiguration::from_budget(512);
/// assert_eq!(join.role, Role::Attacker);
/// assert_eq!((join.fuel, join.laser, join.regen, join.lives), (132, 64, 10, 2));
/// assert_eq!(join.total_cost(), 512);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinConfiguration {
    /// Side implied by the budget.
    pub role: Role,
    pub fuel: u32,
    pub laser: u32,
    pub regen: u32,
    pub lives: u32,
}

#[derive(Debug, Clone, Copy)]
struct Loadout {
    laser: u32,
    regen: u32,
    lives: u32,
}

impl Loadout {
    /// Heavy weapons, few lives.
    const ATTACKER: Self = Self {
        laser: 64,
        regen: 10,
        lives: 2,
    };

    /// Moderate weapons, many lives.
    const DEFENDER: Self = Self {
        laser: 16,
        regen: 16,
        lives: 32,
    };

    const fn for_role(role: Role) -> Self {
        match role {
            Role::Attacker => Self::ATTACKER,
            Role::Defender => Self::DEFENDER,
        }
    }
}

impl JoinConfiguration {
    /// Role implied by a join budget.
    #[must_use]
    pub const fn role_for_budget(budget: u32) -> Role {
        if budget > ATTACKER_BUDGET_CUTOFF {
            Role::Attacker
        } else {
            Role::Defender
        }
    }

    /// Splits `budget` according to the loadout of the implied role.
    ///
    /// Lives, regen and laser are funded in that order, each capped by the
    /// loadout; fuel takes the exact remainder. Budgets too small for the full
    /// loadout therefore shrink it instead of producing negative fuel.
    #[must_use]
    pub fn from_budget(budget: u32) -> Self {
        let role = Self::role_for_budget(budget);
        let loadout = Loadout::for_role(role);

        let mut remaining = budget;
        let mut buy = |wanted: u32, unit_cost: u32| {
            let bought = wanted.min(remaining / unit_cost);
            remaining -= bought * unit_cost;
            bought
        };
        let lives = buy(loadout.lives, LIVES_COST);
        let regen = buy(loadout.regen, REGEN_COST);
        let laser = buy(loadout.laser, LASER_COST);

        Self {
            role,
            fuel: remaining,
            laser,
            regen,
            lives,
        }
    }

    /// Budget spent by this configuration.
    #[must_use]
    pub fn total_cost(&self) -> u64 {
        u64::from(self.fuel)
            + u64::from(LASER_COST) * u64::from(self.laser)
            + u64::from(REGEN_COST) * u64::from(self.regen)
            + u64::from(LIVES_COST) * u64::from(self.lives)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defender_loadout() {
        let join = JoinConfiguration::from_budget(448);
        assert_eq!(join.role, Role::Defender);
        assert_eq!(
            (join.fuel, join.laser, join.regen, join.lives),
            (128, 16, 16, 32)
        );
    }

    #[test]
    fn test_cutoff_is_exclusive() {
        assert_eq!(JoinConfiguration::role_for_budget(490), Role::Defender);
        assert_eq!(JoinConfiguration::role_for_budget(491), Role::Attacker);
    }

    #[test]
    fn test_conservation_for_every_budget() {
        for budget in 0..=2048 {
            let join = JoinConfiguration::from_budget(budget);
            assert_eq!(join.total_cost(), u64::from(budget), "budget {budget}");
        }
        let join = JoinConfiguration::from_budget(u32::MAX);
        assert_eq!(join.total_cost(), u64::from(u32::MAX));
    }

    #[test]
    fn test_small_budget_shrinks_loadout() {
        let join = JoinConfiguration::from_budget(30);
        assert_eq!(join.lives, 15);
        assert_eq!((join.regen, join.laser, join.fuel), (0, 0, 0));

        let join = JoinConfiguration::from_budget(0);
        assert_eq!(join.total_cost(), 0);
        assert_eq!(join.lives, 0);
    }
}
