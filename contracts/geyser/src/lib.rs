#![no_std]

//! `GeyserApp`: the first Geyser release.
//!
//! Deployed on its own it is a complete staking contract over its own storage.
//! Behind `GeyserProxy` it serves as the implementation the proxy points at:
//! the proxy reads [`GeyserApp::logic_version`] and runs the same linked logic
//! against the proxy's storage.

use common::logic::{GeyserLogic, LogicV1};
use soroban_sdk::{contract, contractimpl, Address, Env};

pub use common::{AccountingSnapshot, BonusConfig, GeyserError, RewardSchedule, Role};

const LOGIC: LogicV1 = LogicV1;

#[contract]
pub struct GeyserApp;

#[contractimpl]
impl GeyserApp {
    /// Logic version the proxy dispatches on.
    pub fn logic_version(_env: Env) -> u32 {
        LOGIC.version()
    }

    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the contract. One-shot.
    ///
    /// * `staking_token` – token users deposit.
    /// * `reward_token`  – token minters lock and stakers earn.
    /// * `admin`         – initial holder of the admin role; must authorize.
    pub fn initialize(
        env: Env,
        staking_token: Address,
        reward_token: Address,
        admin: Address,
    ) -> Result<(), GeyserError> {
        LOGIC.initialize(&env, staking_token, reward_token, admin)
    }

    pub fn set_bonus_config(
        env: Env,
        caller: Address,
        start_bonus_pct: u32,
        bonus_period_secs: u64,
    ) -> Result<(), GeyserError> {
        LOGIC.set_bonus_config(&env, caller, start_bonus_pct, bonus_period_secs)
    }

    pub fn bonus_config(env: Env) -> BonusConfig {
        LOGIC.bonus_config(&env)
    }

    /// Smallest deposit accepted by `stake` / `stake_for`. Admin only.
    pub fn set_min_stake(env: Env, caller: Address, amount: i128) -> Result<(), GeyserError> {
        LOGIC.set_min_stake(&env, caller, amount)
    }

    pub fn min_stake(env: Env) -> i128 {
        LOGIC.min_stake(&env)
    }

    // ── Roles ───────────────────────────────────────────────────────────────

    pub fn set_admin(env: Env, caller: Address, new_admin: Address) -> Result<(), GeyserError> {
        LOGIC.set_admin(&env, caller, new_admin)
    }

    pub fn renounce_admin(env: Env, caller: Address) -> Result<(), GeyserError> {
        LOGIC.renounce_admin(&env, caller)
    }

    pub fn set_minter(env: Env, caller: Address, account: Address) -> Result<(), GeyserError> {
        LOGIC.add_minter_role(&env, caller, account)
    }

    pub fn add_minter_role(env: Env, caller: Address, account: Address) -> Result<(), GeyserError> {
        LOGIC.add_minter_role(&env, caller, account)
    }

    pub fn remove_minter_role(
        env: Env,
        caller: Address,
        account: Address,
    ) -> Result<(), GeyserError> {
        LOGIC.remove_minter_role(&env, caller, account)
    }

    pub fn renounce_minter(env: Env, caller: Address) -> Result<(), GeyserError> {
        LOGIC.renounce_minter(&env, caller)
    }

    pub fn has_admin_role(env: Env, account: Address) -> bool {
        LOGIC.has_admin_role(&env, account)
    }

    pub fn has_minter_role(env: Env, account: Address) -> bool {
        LOGIC.has_minter_role(&env, account)
    }

    // ── Rewards ─────────────────────────────────────────────────────────────

    /// Lock `amount` reward tokens for linear release over `duration_secs`.
    /// The minter must have approved this contract beforehand.
    pub fn lock_reward_tokens(
        env: Env,
        minter: Address,
        amount: i128,
        duration_secs: u64,
    ) -> Result<u32, GeyserError> {
        LOGIC.lock_reward_tokens(&env, minter, amount, duration_secs)
    }

    pub fn update_totals(env: Env) -> Result<(), GeyserError> {
        LOGIC.update_totals(&env)
    }

    pub fn update_accounting(env: Env, account: Address) -> Result<AccountingSnapshot, GeyserError> {
        LOGIC.update_accounting(&env, account)
    }

    pub fn unlock_schedule_count(env: Env) -> u32 {
        LOGIC.unlock_schedule_count(&env)
    }

    pub fn get_unlock_schedule(env: Env, index: u32) -> Result<RewardSchedule, GeyserError> {
        LOGIC.get_unlock_schedule(&env, index)
    }

    // ── Staking ─────────────────────────────────────────────────────────────

    pub fn stake(env: Env, user: Address, amount: i128) -> Result<(), GeyserError> {
        LOGIC.stake(&env, user, amount)
    }

    /// `payer` funds a deposit credited to `beneficiary`.
    pub fn stake_for(
        env: Env,
        payer: Address,
        beneficiary: Address,
        amount: i128,
    ) -> Result<(), GeyserError> {
        LOGIC.stake_for(&env, payer, beneficiary, amount)
    }

    /// Returns the reward paid alongside the principal.
    pub fn unstake(env: Env, user: Address, amount: i128) -> Result<i128, GeyserError> {
        LOGIC.unstake(&env, user, amount)
    }

    // ── Views ───────────────────────────────────────────────────────────────

    pub fn total_staked(env: Env) -> i128 {
        LOGIC.total_staked(&env)
    }

    pub fn total_staked_for(env: Env, account: Address) -> i128 {
        LOGIC.total_staked_for(&env, account)
    }

    pub fn total_locked(env: Env) -> i128 {
        LOGIC.total_locked(&env)
    }

    pub fn total_unlocked(env: Env) -> i128 {
        LOGIC.total_unlocked(&env)
    }

    pub fn total_distributed(env: Env) -> i128 {
        LOGIC.total_distributed(&env)
    }

    pub fn staking_token(env: Env) -> Result<Address, GeyserError> {
        LOGIC.staking_token(&env)
    }

    pub fn reward_token(env: Env) -> Result<Address, GeyserError> {
        LOGIC.reward_token(&env)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────


#[cfg(test)]
mod test_roles;
