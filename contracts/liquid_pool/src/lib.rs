#![no_std]

mod contract;
mod controller;
mod errors;
mod events;
mod math;
mod pool;
mod storage;

pub use contract::{LiquidUnstakePool, LiquidUnstakePoolClient};
pub use errors::LiquidPoolError;
pub use storage::{Config, PoolInfo, SwapQuote};

#[cfg(test)]
mod tests;
