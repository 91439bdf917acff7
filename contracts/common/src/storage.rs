//! Storage layout of the Geyser logic.
//!
//! Keys are matched by variant name, so the layout is append-only: a later
//! implementation may add variants but must never rename, remove or change the
//! value type stored under an existing one. The proxy keeps its own slots under
//! [`PROXY_NAMESPACE`], which no `DataKey` variant may ever use.

use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

use crate::errors::GeyserError;

/// Reserved namespace for proxy slots (`(PROXY_NAMESPACE, slot)` tuple keys).
pub const PROXY_NAMESPACE: Symbol = symbol_short!("PRX_SLOT");

pub const TTL_THRESHOLD: u32 = 5184000;
pub const TTL_EXTEND_TO: u32 = 10368000;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    // ── layout v1 ──
    Initialized,
    StakingToken,
    RewardToken,
    Admin,
    Minter(Address),
    BonusConfig,
    TotalStaked,
    TotalLocked,
    TotalUnlocked,
    TotalDistributed,
    LastAccounting,
    Schedules,
    Stakers,
    StakedFor(Address),
    Deposits(Address),
    MinStake,
    // ── layout v2 ──
    VersionLabel,
}

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Initialized)
}

pub fn require_initialized(env: &Env) -> Result<(), GeyserError> {
    if !is_initialized(env) {
        return Err(GeyserError::NotInitialized);
    }
    Ok(())
}

pub fn get_i128(env: &Env, key: &DataKey) -> i128 {
    env.storage().instance().get(key).unwrap_or(0)
}

pub fn set_i128(env: &Env, key: &DataKey, value: i128) {
    env.storage().instance().set(key, &value);
}

pub fn get_address(env: &Env, key: &DataKey) -> Result<Address, GeyserError> {
    env.storage()
        .instance()
        .get(key)
        .ok_or(GeyserError::NotInitialized)
}

// ── Persistent entries ───────────────────────────────────────────────────────

pub fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub fn get_persistent_i128(env: &Env, key: &DataKey) -> i128 {
    env.storage().persistent().get(key).unwrap_or(0)
}

pub fn set_persistent_i128(env: &Env, key: &DataKey, value: i128) {
    if value == 0 {
        env.storage().persistent().remove(key);
        return;
    }
    env.storage().persistent().set(key, &value);
    extend_persistent_ttl(env, key);
}

pub fn has_flag(env: &Env, key: &DataKey) -> bool {
    let present = env.storage().persistent().has(key);
    if present {
        extend_persistent_ttl(env, key);
    }
    present
}

pub fn set_flag(env: &Env, key: &DataKey, on: bool) {
    if on {
        env.storage().persistent().set(key, &true);
        extend_persistent_ttl(env, key);
    } else {
        env.storage().persistent().remove(key);
    }
}
