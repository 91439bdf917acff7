#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Env, String};

use crate::roles::Role;

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the logic state is bootstrapped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub staking_token: Address,
    pub reward_token: Address,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoleGrantedEvent {
    pub role: Role,
    pub account: Address,
    pub sender: Address,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoleRevokedEvent {
    pub role: Role,
    pub account: Address,
    pub sender: Address,
    pub timestamp: u64,
}

/// Fired when a user deposits stake. `total` is the user's new staked total.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakedEvent {
    pub user: Address,
    pub amount: i128,
    pub total: i128,
    pub timestamp: u64,
}

/// Fired when a user withdraws stake. `total` is the user's remaining stake.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnstakedEvent {
    pub user: Address,
    pub amount: i128,
    pub total: i128,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokensClaimedEvent {
    pub user: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Fired when a minter locks a new reward schedule.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokensLockedEvent {
    pub minter: Address,
    pub schedule_index: u32,
    pub amount: i128,
    pub duration_secs: u64,
    pub total_locked: i128,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BonusConfigSetEvent {
    pub start_bonus_pct: u32,
    pub bonus_period_secs: u64,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MinStakeSetEvent {
    pub amount: i128,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VersionSetEvent {
    pub label: String,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(
    env: &Env,
    admin: Address,
    staking_token: Address,
    reward_token: Address,
) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            admin,
            staking_token,
            reward_token,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_role_granted(env: &Env, role: Role, account: Address, sender: Address) {
    env.events().publish(
        (symbol_short!("ROLE_GRNT"), account.clone()),
        RoleGrantedEvent {
            role,
            account,
            sender,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_role_revoked(env: &Env, role: Role, account: Address, sender: Address) {
    env.events().publish(
        (symbol_short!("ROLE_RVKD"), account.clone()),
        RoleRevokedEvent {
            role,
            account,
            sender,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_staked(env: &Env, user: Address, amount: i128, total: i128) {
    env.events().publish(
        (symbol_short!("STAKED"), user.clone()),
        StakedEvent {
            user,
            amount,
            total,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_unstaked(env: &Env, user: Address, amount: i128, total: i128) {
    env.events().publish(
        (symbol_short!("UNSTAKED"), user.clone()),
        UnstakedEvent {
            user,
            amount,
            total,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_tokens_claimed(env: &Env, user: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("CLAIMED"), user.clone()),
        TokensClaimedEvent {
            user,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_tokens_locked(
    env: &Env,
    minter: Address,
    schedule_index: u32,
    amount: i128,
    duration_secs: u64,
    total_locked: i128,
) {
    env.events().publish(
        (symbol_short!("LOCKED"), minter.clone()),
        TokensLockedEvent {
            minter,
            schedule_index,
            amount,
            duration_secs,
            total_locked,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_bonus_config_set(env: &Env, start_bonus_pct: u32, bonus_period_secs: u64) {
    env.events().publish(
        (symbol_short!("BONUS_SET"),),
        BonusConfigSetEvent {
            start_bonus_pct,
            bonus_period_secs,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_min_stake_set(env: &Env, amount: i128) {
    env.events().publish(
        (symbol_short!("MIN_SET"),),
        MinStakeSetEvent {
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_version_set(env: &Env, label: String) {
    env.events().publish(
        (symbol_short!("VER_SET"),),
        VersionSetEvent {
            label,
            timestamp: env.ledger().timestamp(),
        },
    );
}
