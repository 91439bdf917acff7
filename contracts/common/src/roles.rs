use soroban_sdk::{contracttype, Address, Env};

use crate::errors::GeyserError;
use crate::events;
use crate::storage::{self, DataKey};

// ── Role Enum ────────────────────────────────────────────────────────────────

/// Roles held inside the Geyser logic.
///
/// - `Admin`  – exclusive; manages minters, bonus settings and itself.
/// - `Minter` – non-exclusive; may lock new reward schedules.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Role {
    Admin = 1,
    Minter = 2,
}

// ── Queries ──────────────────────────────────────────────────────────────────

pub fn admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Admin)
}

pub fn has_admin_role(env: &Env, account: &Address) -> bool {
    admin(env).map_or(false, |a| a == *account)
}

pub fn has_minter_role(env: &Env, account: &Address) -> bool {
    storage::has_flag(env, &DataKey::Minter(account.clone()))
}

/// Guard: reverts unless `caller` currently holds the admin role.
/// A renounced admin slot rejects everyone.
pub fn require_admin(env: &Env, caller: &Address) -> Result<(), GeyserError> {
    if !has_admin_role(env, caller) {
        return Err(GeyserError::Unauthorized);
    }
    Ok(())
}

pub fn require_minter(env: &Env, caller: &Address) -> Result<(), GeyserError> {
    if !has_minter_role(env, caller) {
        return Err(GeyserError::Unauthorized);
    }
    Ok(())
}

// ── Mutations ────────────────────────────────────────────────────────────────

/// Seeds the admin during initialisation. Callers check one-shot semantics.
pub(crate) fn bootstrap_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
    events::publish_role_granted(env, Role::Admin, admin.clone(), admin.clone());
}

/// Hands the admin role to `new_admin`. Only the current admin may call this.
pub fn set_admin(env: &Env, caller: &Address, new_admin: &Address) -> Result<(), GeyserError> {
    caller.require_auth();
    require_admin(env, caller)?;

    env.storage().instance().set(&DataKey::Admin, new_admin);

    if new_admin != caller {
        events::publish_role_revoked(env, Role::Admin, caller.clone(), caller.clone());
    }
    events::publish_role_granted(env, Role::Admin, new_admin.clone(), caller.clone());
    Ok(())
}

/// Clears the admin slot. Admin-gated operations stay unavailable afterwards.
pub fn renounce_admin(env: &Env, caller: &Address) -> Result<(), GeyserError> {
    caller.require_auth();
    require_admin(env, caller)?;

    env.storage().instance().remove(&DataKey::Admin);

    events::publish_role_revoked(env, Role::Admin, caller.clone(), caller.clone());
    Ok(())
}

/// Grants the minter role. Granting it twice is a silent no-op.
pub fn add_minter(env: &Env, caller: &Address, account: &Address) -> Result<(), GeyserError> {
    caller.require_auth();
    require_admin(env, caller)?;

    let key = DataKey::Minter(account.clone());
    if storage::has_flag(env, &key) {
        return Ok(());
    }
    storage::set_flag(env, &key, true);

    events::publish_role_granted(env, Role::Minter, account.clone(), caller.clone());
    Ok(())
}

/// Admin revokes another account's minter role.
pub fn remove_minter(env: &Env, caller: &Address, account: &Address) -> Result<(), GeyserError> {
    caller.require_auth();
    require_admin(env, caller)?;

    let key = DataKey::Minter(account.clone());
    if !storage::has_flag(env, &key) {
        return Ok(());
    }
    storage::set_flag(env, &key, false);

    events::publish_role_revoked(env, Role::Minter, account.clone(), caller.clone());
    Ok(())
}

/// A minter drops its own role.
pub fn renounce_minter(env: &Env, caller: &Address) -> Result<(), GeyserError> {
    caller.require_auth();
    require_minter(env, caller)?;

    storage::set_flag(env, &DataKey::Minter(caller.clone()), false);

    events::publish_role_revoked(env, Role::Minter, caller.clone(), caller.clone());
    Ok(())
}
