#![no_std]

mod contract;
mod errors;
mod events;
mod queue;
mod storage;

pub use contract::{Withdrawal, WithdrawalClient};
pub use errors::WithdrawalError;
pub use storage::{QueueState, WithdrawalRequest};
