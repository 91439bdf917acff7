//! Reward schedule ledger.
//!
//! Every `lock_reward_tokens` call appends one [`RewardSchedule`]. Schedules
//! release linearly and are never removed; a fully released schedule simply
//! stops contributing. Reconciliation moves whatever has been released since
//! the last pass from the locked pool to the unlocked pool and advances each
//! schedule's watermark so the same units are never counted twice.

use soroban_sdk::{contracttype, log, Env, Vec};

use crate::errors::GeyserError;
use crate::storage::{self, DataKey};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardSchedule {
    pub locked_amount: i128,
    pub unlocked_amount: i128,
    pub start_time: u64,
    pub duration_secs: u64,
}

impl RewardSchedule {
    pub fn new(locked_amount: i128, start_time: u64, duration_secs: u64) -> Self {
        Self {
            locked_amount,
            unlocked_amount: 0,
            start_time,
            duration_secs,
        }
    }

    pub fn end_time(&self) -> u64 {
        self.start_time.saturating_add(self.duration_secs)
    }

    /// Cumulative amount released by `now`: `locked * min(1, elapsed / duration)`,
    /// rounded down.
    pub fn unlocked_at(&self, now: u64) -> i128 {
        let elapsed = now.saturating_sub(self.start_time);
        if self.duration_secs == 0 || elapsed >= self.duration_secs {
            return self.locked_amount;
        }
        // floor(L * e / d) == (L / d) * e + floor((L % d) * e / d), without the
        // intermediate L * e product.
        let duration = self.duration_secs as i128;
        let elapsed = elapsed as i128;
        let whole = (self.locked_amount / duration).saturating_mul(elapsed);
        let part = (self.locked_amount % duration).saturating_mul(elapsed) / duration;
        whole.saturating_add(part)
    }

    /// Units released since the watermark was last advanced.
    pub fn pending_at(&self, now: u64) -> i128 {
        (self.unlocked_at(now) - self.unlocked_amount).max(0)
    }

    pub fn still_locked(&self) -> i128 {
        self.locked_amount - self.unlocked_amount
    }
}

// ── Storage ──────────────────────────────────────────────────────────────────

pub fn load_all(env: &Env) -> Vec<RewardSchedule> {
    let key = DataKey::Schedules;
    let schedules: Option<Vec<RewardSchedule>> = env.storage().persistent().get(&key);
    match schedules {
        Some(s) => {
            storage::extend_persistent_ttl(env, &key);
            s
        }
        None => Vec::new(env),
    }
}

fn store_all(env: &Env, schedules: &Vec<RewardSchedule>) {
    let key = DataKey::Schedules;
    env.storage().persistent().set(&key, schedules);
    storage::extend_persistent_ttl(env, &key);
}

pub fn last_accounting(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::LastAccounting)
        .unwrap_or(0)
}

pub fn count(env: &Env) -> u32 {
    load_all(env).len()
}

pub fn get(env: &Env, index: u32) -> Result<RewardSchedule, GeyserError> {
    load_all(env)
        .get(index)
        .ok_or(GeyserError::ScheduleNotFound)
}

/// Appends a schedule and books its amount as locked. Returns its index.
pub fn append(env: &Env, schedule: RewardSchedule) -> Result<u32, GeyserError> {
    let mut schedules = load_all(env);
    if schedules.len() >= crate::config::MAX_UNLOCK_SCHEDULES {
        return Err(GeyserError::ScheduleLimitReached);
    }

    let total_locked = storage::get_i128(env, &DataKey::TotalLocked)
        .checked_add(schedule.locked_amount)
        .ok_or(GeyserError::ArithmeticOverflow)?;

    let index = schedules.len();
    schedules.push_back(schedule);
    store_all(env, &schedules);
    storage::set_i128(env, &DataKey::TotalLocked, total_locked);

    Ok(index)
}

// ── Reconciliation ───────────────────────────────────────────────────────────

/// Sum of units every schedule would release between its watermark and `now`.
pub fn pending_unlock(env: &Env, now: u64) -> i128 {
    let mut pending: i128 = 0;
    for schedule in load_all(env).iter() {
        pending = pending.saturating_add(schedule.pending_at(now));
    }
    pending
}

/// Advances every schedule's watermark to `now` and moves the released units
/// from the locked pool into the unlocked pool. Returns the amount moved.
///
/// Calling this again with the same `now` moves nothing.
pub fn reconcile(env: &Env, now: u64) -> Result<i128, GeyserError> {
    let mut schedules = load_all(env);
    let mut released: i128 = 0;

    for i in 0..schedules.len() {
        let Some(mut schedule) = schedules.get(i) else {
            continue;
        };
        let delta = schedule.pending_at(now);
        if delta == 0 {
            continue;
        }
        schedule.unlocked_amount += delta;
        released = released
            .checked_add(delta)
            .ok_or(GeyserError::ArithmeticOverflow)?;
        schedules.set(i, schedule);
    }

    env.storage().instance().set(&DataKey::LastAccounting, &now);

    if released == 0 {
        return Ok(0);
    }

    store_all(env, &schedules);

    let locked = storage::get_i128(env, &DataKey::TotalLocked) - released;
    let unlocked = storage::get_i128(env, &DataKey::TotalUnlocked)
        .checked_add(released)
        .ok_or(GeyserError::ArithmeticOverflow)?;
    storage::set_i128(env, &DataKey::TotalLocked, locked);
    storage::set_i128(env, &DataKey::TotalUnlocked, unlocked);

    log!(env, "reconciled unlock schedules", released, locked, unlocked);
    Ok(released)
}
