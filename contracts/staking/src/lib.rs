#![no_std]

mod accounting;
mod bonding_ledger;
mod contract;
mod controller;
mod errors;
mod events;
mod staking;
mod storage;

pub use bonding_ledger::BondingLedger;
pub use contract::{Staking, StakingClient};
pub use errors::StakingError;
pub use storage::{Config, VaultState};

#[cfg(test)]
mod tests;
