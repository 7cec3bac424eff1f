use soroban_sdk::{Address, Env};

use normal::types::SharePrice;

use crate::storage::{Config, PoolInfo, SwapQuote};

pub trait LiquidPoolTrait {
    // ################################################################
    //                             ADMIN
    // ################################################################

    fn initialize(env: Env, admin: Address, staking: Address, native_token: Address, treasury: Address);

    #[allow(clippy::too_many_arguments)]
    fn update_config(
        env: Env,
        sender: Address,
        min_base_proportion_bps: Option<u32>,
        target_base_proportion_bps: Option<u32>,
        min_fee_bps: Option<u32>,
        max_fee_bps: Option<u32>,
        treasury_fee_bps: Option<u32>,
        treasury: Option<Address>,
    );

    // ################################################################
    //                        LIQUIDITY PROVIDERS
    // ################################################################

    /// Adds native liquidity and mints pool shares to `receiver`.
    fn deposit_native(env: Env, sender: Address, receiver: Address, amount: i128) -> i128;

    /// Burns pool shares and returns the pro-rata `(base_out, shares_out)`.
    fn withdraw(env: Env, sender: Address, pool_shares: i128) -> (i128, i128);

    // ################################################################
    //                             SWAPS
    // ################################################################

    fn swap_shares_for_base_asset(env: Env, sender: Address, shares_in: i128, min_base_out: i128) -> i128;

    fn quote_swap(env: Env, shares_in: i128) -> SwapQuote;

    // ################################################################
    //                         STAKING VAULT
    // ################################################################

    /// Sends `amount` of the base asset to the vault, which mints `shares`
    /// to the pool in return. Only callable by the vault.
    fn lend_to_vault(env: Env, amount: i128, shares: i128, pool_guard: i128, price: SharePrice);

    /// The vault paid `amount` of the base asset for `shares` taken out of
    /// the pool's inventory. Only callable by the vault.
    fn repay_from_vault(env: Env, amount: i128, shares: i128);

    // ################################################################
    //                             QUERIES
    // ################################################################

    fn query_config(env: Env) -> Config;

    fn query_state(env: Env) -> PoolInfo;

    fn base_reserve(env: Env) -> i128;

    fn share_reserve(env: Env) -> i128;

    /// Base reserve plus the share reserve valued at the vault's price.
    fn total_assets(env: Env) -> i128;

    fn total_supply(env: Env) -> i128;
}
