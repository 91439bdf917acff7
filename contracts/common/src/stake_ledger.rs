//! Per-account stake deposits.
//!
//! Each account owns a FIFO queue of deposits. Unstaking consumes the oldest
//! deposits first; a partially consumed deposit keeps its original timestamp so
//! its bonus clock keeps running for the remainder.

use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::config::{BonusConfig, MAX_DEPOSITS_PER_ACCOUNT, MAX_STAKERS};
use crate::errors::GeyserError;
use crate::storage::{self, DataKey};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakeDeposit {
    pub amount: i128,
    pub timestamp: u64,
}

impl StakeDeposit {
    /// Bonus-weighted size of `amount` units of this deposit at `now`, in
    /// amount × millionths.
    pub fn weight_of(
        &self,
        amount: i128,
        now: u64,
        config: &BonusConfig,
    ) -> Result<i128, GeyserError> {
        let factor = config.factor(now.saturating_sub(self.timestamp));
        amount
            .checked_mul(factor as i128)
            .ok_or(GeyserError::ArithmeticOverflow)
    }
}

/// Result of consuming deposits for an unstake.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Withdrawal {
    pub remaining: Vec<StakeDeposit>,
    pub weighted_amount: i128,
}

/// Pops `amount` units off the front of `deposits`, summing the bonus weight of
/// every consumed slice. The caller guarantees `amount` is covered.
pub fn consume_fifo(
    deposits: Vec<StakeDeposit>,
    amount: i128,
    now: u64,
    config: &BonusConfig,
) -> Result<Withdrawal, GeyserError> {
    let mut remaining = deposits;
    let mut outstanding = amount;
    let mut weighted_amount: i128 = 0;

    while outstanding > 0 {
        let Some(mut oldest) = remaining.pop_front() else {
            return Err(GeyserError::InsufficientStake);
        };
        let taken = outstanding.min(oldest.amount);
        let weight = oldest.weight_of(taken, now, config)?;
        weighted_amount = weighted_amount
            .checked_add(weight)
            .ok_or(GeyserError::ArithmeticOverflow)?;
        outstanding -= taken;

        if taken < oldest.amount {
            oldest.amount -= taken;
            remaining.push_front(oldest);
        }
    }

    Ok(Withdrawal {
        remaining,
        weighted_amount,
    })
}

pub fn weight_of_all(
    deposits: &Vec<StakeDeposit>,
    now: u64,
    config: &BonusConfig,
) -> Result<i128, GeyserError> {
    let mut total: i128 = 0;
    for deposit in deposits.iter() {
        let weight = deposit.weight_of(deposit.amount, now, config)?;
        total = total
            .checked_add(weight)
            .ok_or(GeyserError::ArithmeticOverflow)?;
    }
    Ok(total)
}

// ── Storage ──────────────────────────────────────────────────────────────────

pub fn deposits(env: &Env, account: &Address) -> Vec<StakeDeposit> {
    let key = DataKey::Deposits(account.clone());
    let stored: Option<Vec<StakeDeposit>> = env.storage().persistent().get(&key);
    match stored {
        Some(d) => {
            storage::extend_persistent_ttl(env, &key);
            d
        }
        None => Vec::new(env),
    }
}

fn store_deposits(env: &Env, account: &Address, deposits: &Vec<StakeDeposit>) {
    let key = DataKey::Deposits(account.clone());
    if deposits.is_empty() {
        env.storage().persistent().remove(&key);
        return;
    }
    env.storage().persistent().set(&key, deposits);
    storage::extend_persistent_ttl(env, &key);
}

pub fn stakers(env: &Env) -> Vec<Address> {
    let key = DataKey::Stakers;
    let stored: Option<Vec<Address>> = env.storage().persistent().get(&key);
    match stored {
        Some(s) => {
            storage::extend_persistent_ttl(env, &key);
            s
        }
        None => Vec::new(env),
    }
}

fn store_stakers(env: &Env, stakers: &Vec<Address>) {
    let key = DataKey::Stakers;
    if stakers.is_empty() {
        env.storage().persistent().remove(&key);
        return;
    }
    env.storage().persistent().set(&key, stakers);
    storage::extend_persistent_ttl(env, &key);
}

pub fn staked_for(env: &Env, account: &Address) -> i128 {
    storage::get_persistent_i128(env, &DataKey::StakedFor(account.clone()))
}

pub fn total_staked(env: &Env) -> i128 {
    storage::get_i128(env, &DataKey::TotalStaked)
}

/// Records a new deposit for `account` and returns its new staked total.
///
/// Bounded by [`MAX_DEPOSITS_PER_ACCOUNT`] open deposits per account and
/// [`MAX_STAKERS`] accounts with an open stake, which keeps
/// [`total_weight`] within a single transaction's footprint.
pub fn deposit(env: &Env, account: &Address, amount: i128, now: u64) -> Result<i128, GeyserError> {
    let new_account_total = staked_for(env, account)
        .checked_add(amount)
        .ok_or(GeyserError::ArithmeticOverflow)?;
    let new_total = total_staked(env)
        .checked_add(amount)
        .ok_or(GeyserError::ArithmeticOverflow)?;

    let mut queue = deposits(env, account);
    if queue.len() >= MAX_DEPOSITS_PER_ACCOUNT {
        return Err(GeyserError::DepositLimitReached);
    }
    if queue.is_empty() {
        let mut all = stakers(env);
        if !all.contains(account) {
            if all.len() >= MAX_STAKERS {
                return Err(GeyserError::StakerLimitReached);
            }
            all.push_back(account.clone());
            store_stakers(env, &all);
        }
    }
    queue.push_back(StakeDeposit {
        amount,
        timestamp: now,
    });
    store_deposits(env, account, &queue);

    storage::set_persistent_i128(env, &DataKey::StakedFor(account.clone()), new_account_total);
    storage::set_i128(env, &DataKey::TotalStaked, new_total);
    Ok(new_account_total)
}

/// Bonus-weighted stake of every account at `now`.
pub fn total_weight(env: &Env, now: u64, config: &BonusConfig) -> Result<i128, GeyserError> {
    let mut total: i128 = 0;
    for account in stakers(env).iter() {
        let weight = weight_of_all(&deposits(env, &account), now, config)?;
        total = total
            .checked_add(weight)
            .ok_or(GeyserError::ArithmeticOverflow)?;
    }
    Ok(total)
}

/// Bonus-weighted stake of a single account at `now`.
pub fn account_weight(
    env: &Env,
    account: &Address,
    now: u64,
    config: &BonusConfig,
) -> Result<i128, GeyserError> {
    weight_of_all(&deposits(env, account), now, config)
}

/// Removes `amount` from `account` oldest-first. Returns the account's new
/// staked total and the bonus weight of the withdrawn units.
pub fn withdraw(
    env: &Env,
    account: &Address,
    amount: i128,
    now: u64,
    config: &BonusConfig,
) -> Result<(i128, i128), GeyserError> {
    let staked = staked_for(env, account);
    if amount > staked {
        return Err(GeyserError::InsufficientStake);
    }

    let withdrawal = consume_fifo(deposits(env, account), amount, now, config)?;
    store_deposits(env, account, &withdrawal.remaining);

    let new_account_total = staked - amount;
    storage::set_persistent_i128(env, &DataKey::StakedFor(account.clone()), new_account_total);
    storage::set_i128(env, &DataKey::TotalStaked, total_staked(env) - amount);

    if new_account_total == 0 {
        let mut all = stakers(env);
        if let Some(pos) = all.first_index_of(account) {
            all.remove(pos);
            store_stakers(env, &all);
        }
    }

    Ok((new_account_total, withdrawal.weighted_amount))
}
