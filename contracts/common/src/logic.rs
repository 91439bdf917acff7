//! Stable Geyser interface and the table of linked implementations.
//!
//! Each deployed implementation contract reports a `logic_version`. The proxy
//! resolves that number through [`dispatch`] and runs the matching
//! [`GeyserLogic`] against its own storage, so the accumulated state stays in
//! the proxy while the behaviour is swapped.
//!
//! A new version implements the trait, overrides whatever changed, and only
//! ever adds storage keys (see [`crate::storage::DataKey`]).

use soroban_sdk::{Address, Env, String};

use crate::accounting::{self, AccountingSnapshot};
use crate::config::BonusConfig;
use crate::errors::GeyserError;
use crate::events;
use crate::roles;
use crate::schedule::{self, RewardSchedule};
use crate::storage::{self, DataKey};

pub trait GeyserLogic {
    /// Version number; also the storage layout this logic writes.
    fn version(&self) -> u32;

    // ── lifecycle ──

    fn initialize(
        &self,
        env: &Env,
        staking_token: Address,
        reward_token: Address,
        admin: Address,
    ) -> Result<(), GeyserError> {
        accounting::initialize(env, staking_token, reward_token, admin)
    }

    fn set_bonus_config(
        &self,
        env: &Env,
        caller: Address,
        start_bonus_pct: u32,
        bonus_period_secs: u64,
    ) -> Result<(), GeyserError> {
        accounting::set_bonus_config(env, &caller, start_bonus_pct, bonus_period_secs)
    }

    fn bonus_config(&self, env: &Env) -> BonusConfig {
        accounting::bonus_config(env)
    }

    fn set_min_stake(&self, env: &Env, caller: Address, amount: i128) -> Result<(), GeyserError> {
        accounting::set_min_stake(env, &caller, amount)
    }

    fn min_stake(&self, env: &Env) -> i128 {
        accounting::min_stake(env)
    }

    // ── roles ──

    fn set_admin(&self, env: &Env, caller: Address, new_admin: Address) -> Result<(), GeyserError> {
        storage::require_initialized(env)?;
        roles::set_admin(env, &caller, &new_admin)
    }

    fn renounce_admin(&self, env: &Env, caller: Address) -> Result<(), GeyserError> {
        storage::require_initialized(env)?;
        roles::renounce_admin(env, &caller)
    }

    fn add_minter_role(&self, env: &Env, caller: Address, account: Address) -> Result<(), GeyserError> {
        storage::require_initialized(env)?;
        roles::add_minter(env, &caller, &account)
    }

    fn remove_minter_role(
        &self,
        env: &Env,
        caller: Address,
        account: Address,
    ) -> Result<(), GeyserError> {
        storage::require_initialized(env)?;
        roles::remove_minter(env, &caller, &account)
    }

    fn renounce_minter(&self, env: &Env, caller: Address) -> Result<(), GeyserError> {
        storage::require_initialized(env)?;
        roles::renounce_minter(env, &caller)
    }

    fn has_admin_role(&self, env: &Env, account: Address) -> bool {
        roles::has_admin_role(env, &account)
    }

    fn has_minter_role(&self, env: &Env, account: Address) -> bool {
        roles::has_minter_role(env, &account)
    }

    // ── rewards ──

    fn lock_reward_tokens(
        &self,
        env: &Env,
        minter: Address,
        amount: i128,
        duration_secs: u64,
    ) -> Result<u32, GeyserError> {
        accounting::lock_reward_tokens(env, &minter, amount, duration_secs)
    }

    fn update_totals(&self, env: &Env) -> Result<(), GeyserError> {
        accounting::update_totals(env)
    }

    fn update_accounting(&self, env: &Env, account: Address) -> Result<AccountingSnapshot, GeyserError> {
        accounting::update_accounting(env, &account)
    }

    fn unlock_schedule_count(&self, env: &Env) -> u32 {
        schedule::count(env)
    }

    fn get_unlock_schedule(&self, env: &Env, index: u32) -> Result<RewardSchedule, GeyserError> {
        schedule::get(env, index)
    }

    // ── staking ──

    fn stake(&self, env: &Env, user: Address, amount: i128) -> Result<(), GeyserError> {
        accounting::stake(env, &user, &user, amount)
    }

    fn stake_for(
        &self,
        env: &Env,
        payer: Address,
        beneficiary: Address,
        amount: i128,
    ) -> Result<(), GeyserError> {
        accounting::stake(env, &payer, &beneficiary, amount)
    }

    fn unstake(&self, env: &Env, user: Address, amount: i128) -> Result<i128, GeyserError> {
        accounting::unstake(env, &user, amount)
    }

    // ── views ──

    fn total_staked(&self, env: &Env) -> i128 {
        accounting::total_staked(env)
    }

    fn total_staked_for(&self, env: &Env, account: Address) -> i128 {
        accounting::total_staked_for(env, &account)
    }

    fn total_locked(&self, env: &Env) -> i128 {
        accounting::total_locked(env)
    }

    fn total_unlocked(&self, env: &Env) -> i128 {
        accounting::total_unlocked(env)
    }

    fn total_distributed(&self, env: &Env) -> i128 {
        accounting::total_distributed(env)
    }

    fn staking_token(&self, env: &Env) -> Result<Address, GeyserError> {
        accounting::staking_token(env)
    }

    fn reward_token(&self, env: &Env) -> Result<Address, GeyserError> {
        accounting::reward_token(env)
    }

    // ── added in v2 ──

    fn set_version(&self, _env: &Env, _caller: Address, _label: String) -> Result<(), GeyserError> {
        Err(GeyserError::UnsupportedOperation)
    }

    fn get_version(&self, _env: &Env) -> Result<String, GeyserError> {
        Err(GeyserError::UnsupportedOperation)
    }
}

/// First release.
pub struct LogicV1;

impl GeyserLogic for LogicV1 {
    fn version(&self) -> u32 {
        1
    }
}

/// Adds an admin-managed release label stored under `DataKey::VersionLabel`.
pub struct LogicV2;

impl GeyserLogic for LogicV2 {
    fn version(&self) -> u32 {
        2
    }

    fn set_version(&self, env: &Env, caller: Address, label: String) -> Result<(), GeyserError> {
        storage::require_initialized(env)?;
        caller.require_auth();
        roles::require_admin(env, &caller)?;

        env.storage().instance().set(&DataKey::VersionLabel, &label);

        events::publish_version_set(env, label);
        Ok(())
    }

    fn get_version(&self, env: &Env) -> Result<String, GeyserError> {
        storage::require_initialized(env)?;
        Ok(env
            .storage()
            .instance()
            .get(&DataKey::VersionLabel)
            .unwrap_or_else(|| String::from_str(env, "")))
    }
}

pub const LATEST_VERSION: u32 = 2;

/// Resolves a logic version to its linked implementation.
pub fn dispatch(version: u32) -> Result<&'static dyn GeyserLogic, GeyserError> {
    match version {
        1 => Ok(&LogicV1),
        2 => Ok(&LogicV2),
        _ => Err(GeyserError::UnknownImplementation),
    }
}
