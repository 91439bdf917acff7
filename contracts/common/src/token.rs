//! Thin wrappers over the Soroban token interface that turn a rejected
//! transfer into [`GeyserError::TransferFailed`] instead of a trap.

use soroban_sdk::{token, Address, Env};

use crate::errors::GeyserError;

/// Pulls `amount` from `from` into this contract using a prior allowance.
pub fn pull(env: &Env, token: &Address, from: &Address, amount: i128) -> Result<(), GeyserError> {
    let this = env.current_contract_address();
    match token::Client::new(env, token).try_transfer_from(&this, from, &this, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(GeyserError::TransferFailed),
    }
}

/// Pays `amount` out of this contract's custody.
pub fn push(env: &Env, token: &Address, to: &Address, amount: i128) -> Result<(), GeyserError> {
    if amount == 0 {
        return Ok(());
    }
    let this = env.current_contract_address();
    match token::Client::new(env, token).try_transfer(&this, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(GeyserError::TransferFailed),
    }
}
