use soroban_sdk::{contracttype, log, panic_with_error, Address, Env};

use normal::error::ErrorCode;

pub const DEFAULT_MIN_BASE_PROPORTION_BPS: u32 = 5_000;
pub const DEFAULT_TARGET_BASE_PROPORTION_BPS: u32 = 8_000;
pub const DEFAULT_MIN_FEE_BPS: u32 = 7;
pub const DEFAULT_MAX_FEE_BPS: u32 = 500;
pub const DEFAULT_TREASURY_FEE_BPS: u32 = 2_500;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Config,
    State,
}

// ################################################################
//                             Config
// ################################################################

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub staking: Address,
    pub native_token: Address,
    pub treasury: Address,
    /// Swaps and vault borrowing may not push the base reserve below this
    /// share of pool value.
    pub min_base_proportion_bps: u32,
    /// At or above this share of base reserve the swap fee is `min_fee_bps`.
    pub target_base_proportion_bps: u32,
    pub min_fee_bps: u32,
    pub max_fee_bps: u32,
    /// Cut of every swap fee paid to the treasury.
    pub treasury_fee_bps: u32,
}

pub fn save_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_config(env: &Env) -> Config {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .unwrap_or_else(|| {
            log!(env, "Liquid Pool: Config not set");
            panic_with_error!(env, ErrorCode::NotInitialized)
        })
}

// ################################################################
//                             Reserves
// ################################################################

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PoolState {
    pub base_reserve: i128,
    pub share_reserve: i128,
}

pub fn save_state(env: &Env, state: &PoolState) {
    env.storage().instance().set(&DataKey::State, state);
}

pub fn get_state(env: &Env) -> PoolState {
    env.storage()
        .instance()
        .get(&DataKey::State)
        .unwrap_or_default()
}

// ################################################################
//                             Responses
// ################################################################

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolInfo {
    pub base_reserve: i128,
    pub share_reserve: i128,
    pub total_pool_shares: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapQuote {
    pub base_out: i128,
    pub fee_bps: u32,
    pub fee_shares: i128,
    pub treasury_shares: i128,
}
