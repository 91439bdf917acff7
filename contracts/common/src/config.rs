use soroban_sdk::{contracttype, Env};

use crate::errors::GeyserError;
use crate::storage::DataKey;

/// Start bonus applied to a fresh deposit, in percent.
pub const DEFAULT_START_BONUS_PCT: u32 = 50;
/// Seconds until a deposit earns the full bonus (one day).
pub const DEFAULT_BONUS_PERIOD_SECS: u64 = 86_400;
/// Upper bound on reward schedules; reconciliation walks all of them.
pub const MAX_UNLOCK_SCHEDULES: u32 = 100;
/// Upper bound on accounts with an open stake. Sharing rewards reads one
/// deposit queue per active staker, and a transaction may touch at most 100
/// ledger entries.
pub const MAX_STAKERS: u32 = 48;
/// Upper bound on open deposits per account.
pub const MAX_DEPOSITS_PER_ACCOUNT: u32 = 16;
/// Smallest accepted deposit until the admin sets another.
pub const DEFAULT_MIN_STAKE: i128 = 1;

/// Bonus factors are expressed in millionths so percent steps stay exact.
pub const BONUS_PRECISION: u64 = 1_000_000;

/// Early-withdrawal bonus parameters.
///
/// A deposit staked for `t` seconds weighs
/// `start + (100% - start) * min(1, t / period)` of its amount when rewards
/// are shared out.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BonusConfig {
    pub start_bonus_pct: u32,
    pub bonus_period_secs: u64,
}

impl Default for BonusConfig {
    fn default() -> Self {
        Self {
            start_bonus_pct: DEFAULT_START_BONUS_PCT,
            bonus_period_secs: DEFAULT_BONUS_PERIOD_SECS,
        }
    }
}

impl BonusConfig {
    pub fn new(start_bonus_pct: u32, bonus_period_secs: u64) -> Result<Self, GeyserError> {
        if start_bonus_pct > 100 {
            return Err(GeyserError::InvalidConfig);
        }
        Ok(Self {
            start_bonus_pct,
            bonus_period_secs,
        })
    }

    /// Bonus factor in millionths for a deposit that has been staked for
    /// `staked_secs`. Non-decreasing in `staked_secs`, saturating at
    /// [`BONUS_PRECISION`] once the bonus period has elapsed.
    pub fn factor(&self, staked_secs: u64) -> u64 {
        let start = self.start_bonus_pct as u64 * (BONUS_PRECISION / 100);
        if self.bonus_period_secs == 0 || staked_secs >= self.bonus_period_secs {
            return BONUS_PRECISION;
        }
        let ramp = (BONUS_PRECISION - start) as u128 * staked_secs as u128
            / self.bonus_period_secs as u128;
        start + ramp as u64
    }
}

pub fn load(env: &Env) -> BonusConfig {
    env.storage()
        .instance()
        .get(&DataKey::BonusConfig)
        .unwrap_or_default()
}

pub fn store(env: &Env, config: &BonusConfig) {
    env.storage().instance().set(&DataKey::BonusConfig, config);
}

pub fn min_stake(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::MinStake)
        .unwrap_or(DEFAULT_MIN_STAKE)
}

pub fn store_min_stake(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::MinStake, &amount);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_documented_values() {
        let cfg = BonusConfig::default();
        assert_eq!(cfg.start_bonus_pct, 50);
        assert_eq!(cfg.bonus_period_secs, 86_400);
    }

    #[test]
    fn factor_ramps_linearly_from_start_bonus() {
        let cfg = BonusConfig::default();
        assert_eq!(cfg.factor(0), 500_000);
        assert_eq!(cfg.factor(43_200), 750_000);
        assert_eq!(cfg.factor(86_400), BONUS_PRECISION);
        assert_eq!(cfg.factor(10 * 86_400), BONUS_PRECISION);
    }

    #[test]
    fn zero_period_means_full_bonus_immediately() {
        let cfg = BonusConfig::new(20, 0).unwrap();
        assert_eq!(cfg.factor(0), BONUS_PRECISION);
    }

    #[test]
    fn start_bonus_above_hundred_is_rejected() {
        assert_eq!(BonusConfig::new(101, 10), Err(GeyserError::InvalidConfig));
        assert!(BonusConfig::new(100, 10).is_ok());
    }
}
