//! Shared logic for the Geyser contract suite.
//!
//! This crate holds everything the deployable contracts have in common:
//! - [`GeyserError`], the error enum every entry point returns.
//! - Role registry, reward schedule ledger and stake ledger helpers.
//! - The accounting engine that ties them together.
//! - [`logic::GeyserLogic`], the stable interface the proxy dispatches on.
//!
//! All functions operate on the storage of whichever contract is currently
//! executing. Called from an implementation contract they touch its own
//! storage; called from the proxy they touch the proxy's.

#![no_std]

#[cfg(test)]
extern crate std;

pub mod accounting;
pub mod config;
pub mod errors;
pub mod events;
pub mod logic;
pub mod roles;
pub mod schedule;
pub mod stake_ledger;
pub mod storage;
pub mod token;

pub use accounting::AccountingSnapshot;
pub use config::BonusConfig;
pub use errors::GeyserError;
pub use logic::{dispatch, GeyserLogic, LogicV1, LogicV2};
pub use roles::Role;
pub use schedule::RewardSchedule;
pub use stake_ledger::StakeDeposit;
