//! Reward accounting engine.
//!
//! Every state-changing entry point reads the ledger clock once, reconciles
//! the reward schedules up to that instant, and only then touches stakes or
//! pays out. The unlocked pool is shared among stakers by bonus-weighted stake:
//! an account that unstakes receives
//! `total_unlocked * weight(unstaked) / weight(all active deposits)`.

use soroban_sdk::{contracttype, log, Address, Env, I256};

use crate::config::{self, BonusConfig};
use crate::errors::GeyserError;
use crate::events;
use crate::roles;
use crate::schedule::{self, RewardSchedule};
use crate::stake_ledger;
use crate::storage::{self, DataKey};
use crate::token;

/// Reconciled view of the pools from one account's perspective.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccountingSnapshot {
    pub total_locked: i128,
    pub total_unlocked: i128,
    pub staked_for: i128,
    pub total_staked: i128,
    /// Reward the account would receive by unstaking everything right now.
    pub redeemable_rewards: i128,
    pub timestamp: u64,
}

// ── Lifecycle ───────────────────────────────────────────────────────────────

pub fn initialize(
    env: &Env,
    staking_token: Address,
    reward_token: Address,
    admin: Address,
) -> Result<(), GeyserError> {
    if storage::is_initialized(env) {
        return Err(GeyserError::AlreadyInitialized);
    }
    admin.require_auth();

    let now = env.ledger().timestamp();
    let instance = env.storage().instance();
    instance.set(&DataKey::Initialized, &true);
    instance.set(&DataKey::StakingToken, &staking_token);
    instance.set(&DataKey::RewardToken, &reward_token);
    instance.set(&DataKey::LastAccounting, &now);
    config::store(env, &BonusConfig::default());
    // Totals start at zero; absent keys read as 0.

    roles::bootstrap_admin(env, &admin);
    storage::extend_instance_ttl(env);

    events::publish_initialized(env, admin, staking_token, reward_token);
    Ok(())
}

pub fn set_bonus_config(
    env: &Env,
    caller: &Address,
    start_bonus_pct: u32,
    bonus_period_secs: u64,
) -> Result<(), GeyserError> {
    storage::require_initialized(env)?;
    caller.require_auth();
    roles::require_admin(env, caller)?;

    let cfg = BonusConfig::new(start_bonus_pct, bonus_period_secs)?;
    config::store(env, &cfg);

    events::publish_bonus_config_set(env, start_bonus_pct, bonus_period_secs);
    Ok(())
}

/// Sets the smallest deposit `stake`/`stake_for` accept. Admin only.
pub fn set_min_stake(env: &Env, caller: &Address, amount: i128) -> Result<(), GeyserError> {
    storage::require_initialized(env)?;
    caller.require_auth();
    roles::require_admin(env, caller)?;
    if amount <= 0 {
        return Err(GeyserError::InvalidAmount);
    }

    config::store_min_stake(env, amount);

    events::publish_min_stake_set(env, amount);
    Ok(())
}

// ── Reward schedules ────────────────────────────────────────────────────────

/// Locks `amount` reward tokens from `minter` for linear release over
/// `duration_secs`. Returns the new schedule's index.
pub fn lock_reward_tokens(
    env: &Env,
    minter: &Address,
    amount: i128,
    duration_secs: u64,
) -> Result<u32, GeyserError> {
    storage::require_initialized(env)?;
    minter.require_auth();
    roles::require_minter(env, minter)?;

    if amount <= 0 {
        return Err(GeyserError::InvalidAmount);
    }
    if duration_secs == 0 {
        return Err(GeyserError::InvalidDuration);
    }

    let now = env.ledger().timestamp();
    schedule::reconcile(env, now)?;

    let index = schedule::append(env, RewardSchedule::new(amount, now, duration_secs))?;

    let reward_token = storage::get_address(env, &DataKey::RewardToken)?;
    token::pull(env, &reward_token, minter, amount)?;

    storage::extend_instance_ttl(env);
    events::publish_tokens_locked(
        env,
        minter.clone(),
        index,
        amount,
        duration_secs,
        storage::get_i128(env, &DataKey::TotalLocked),
    );
    Ok(index)
}

/// Persists reconciliation up to the current ledger time.
pub fn update_totals(env: &Env) -> Result<(), GeyserError> {
    storage::require_initialized(env)?;
    schedule::reconcile(env, env.ledger().timestamp())?;
    storage::extend_instance_ttl(env);
    Ok(())
}

pub fn update_accounting(env: &Env, account: &Address) -> Result<AccountingSnapshot, GeyserError> {
    storage::require_initialized(env)?;
    let now = env.ledger().timestamp();
    schedule::reconcile(env, now)?;
    storage::extend_instance_ttl(env);

    let cfg = config::load(env);
    let total_unlocked = storage::get_i128(env, &DataKey::TotalUnlocked);
    let weight = stake_ledger::account_weight(env, account, now, &cfg)?;
    let total_weight = stake_ledger::total_weight(env, now, &cfg)?;

    Ok(AccountingSnapshot {
        total_locked: storage::get_i128(env, &DataKey::TotalLocked),
        total_unlocked,
        staked_for: stake_ledger::staked_for(env, account),
        total_staked: stake_ledger::total_staked(env),
        redeemable_rewards: reward_share(env, total_unlocked, weight, total_weight)?,
        timestamp: now,
    })
}

// ── Staking ─────────────────────────────────────────────────────────────────

fn require_positive(amount: i128) -> Result<(), GeyserError> {
    if amount == 0 {
        return Err(GeyserError::ZeroAmount);
    }
    if amount < 0 {
        return Err(GeyserError::InvalidAmount);
    }
    Ok(())
}

/// Pulls `amount` staking tokens from `payer` and credits a new deposit to
/// `beneficiary`.
pub fn stake(
    env: &Env,
    payer: &Address,
    beneficiary: &Address,
    amount: i128,
) -> Result<(), GeyserError> {
    storage::require_initialized(env)?;
    payer.require_auth();
    require_positive(amount)?;
    if amount < config::min_stake(env) {
        return Err(GeyserError::BelowMinimumStake);
    }

    let now = env.ledger().timestamp();
    schedule::reconcile(env, now)?;

    let new_total = stake_ledger::deposit(env, beneficiary, amount, now)?;

    let staking_token = storage::get_address(env, &DataKey::StakingToken)?;
    token::pull(env, &staking_token, payer, amount)?;

    storage::extend_instance_ttl(env);
    events::publish_staked(env, beneficiary.clone(), amount, new_total);
    Ok(())
}

/// Withdraws `amount` of `user`'s stake oldest-first and pays out the
/// principal together with the user's bonus-weighted share of the unlocked
/// pool. Returns the reward paid.
pub fn unstake(env: &Env, user: &Address, amount: i128) -> Result<i128, GeyserError> {
    storage::require_initialized(env)?;
    user.require_auth();
    require_positive(amount)?;

    let now = env.ledger().timestamp();
    schedule::reconcile(env, now)?;

    let cfg = config::load(env);
    let total_weight = stake_ledger::total_weight(env, now, &cfg)?;
    let (new_total, weight) = stake_ledger::withdraw(env, user, amount, now, &cfg)?;

    let pool = storage::get_i128(env, &DataKey::TotalUnlocked);
    let reward = reward_share(env, pool, weight, total_weight)?;
    storage::set_i128(env, &DataKey::TotalUnlocked, pool - reward);
    let distributed = storage::get_i128(env, &DataKey::TotalDistributed)
        .checked_add(reward)
        .ok_or(GeyserError::ArithmeticOverflow)?;
    storage::set_i128(env, &DataKey::TotalDistributed, distributed);

    let staking_token = storage::get_address(env, &DataKey::StakingToken)?;
    let reward_token = storage::get_address(env, &DataKey::RewardToken)?;
    token::push(env, &staking_token, user, amount)?;
    token::push(env, &reward_token, user, reward)?;

    log!(env, "unstake payout", user.clone(), amount, reward);

    storage::extend_instance_ttl(env);
    events::publish_unstaked(env, user.clone(), amount, new_total);
    events::publish_tokens_claimed(env, user.clone(), reward);
    Ok(reward)
}

/// `pool * weight / total_weight`, computed in 256 bits.
fn reward_share(env: &Env, pool: i128, weight: i128, total_weight: i128) -> Result<i128, GeyserError> {
    if pool <= 0 || weight <= 0 || total_weight <= 0 {
        return Ok(0);
    }
    if weight >= total_weight {
        return Ok(pool);
    }
    I256::from_i128(env, pool)
        .mul(&I256::from_i128(env, weight))
        .div(&I256::from_i128(env, total_weight))
        .to_i128()
        .ok_or(GeyserError::ArithmeticOverflow)
}

// ── Views ───────────────────────────────────────────────────────────────────

pub fn total_staked(env: &Env) -> i128 {
    stake_ledger::total_staked(env)
}

pub fn total_staked_for(env: &Env, account: &Address) -> i128 {
    stake_ledger::staked_for(env, account)
}

/// Locked pool as it would read after reconciling to the current time.
pub fn total_locked(env: &Env) -> i128 {
    let pending = schedule::pending_unlock(env, env.ledger().timestamp());
    storage::get_i128(env, &DataKey::TotalLocked) - pending
}

/// Unlocked pool as it would read after reconciling to the current time.
pub fn total_unlocked(env: &Env) -> i128 {
    let pending = schedule::pending_unlock(env, env.ledger().timestamp());
    storage::get_i128(env, &DataKey::TotalUnlocked).saturating_add(pending)
}

pub fn total_distributed(env: &Env) -> i128 {
    storage::get_i128(env, &DataKey::TotalDistributed)
}

pub fn staking_token(env: &Env) -> Result<Address, GeyserError> {
    storage::get_address(env, &DataKey::StakingToken)
}

pub fn reward_token(env: &Env) -> Result<Address, GeyserError> {
    storage::get_address(env, &DataKey::RewardToken)
}

pub fn bonus_config(env: &Env) -> BonusConfig {
    config::load(env)
}

pub fn min_stake(env: &Env) -> i128 {
    config::min_stake(env)
}
