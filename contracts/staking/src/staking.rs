use normal::{access_control::Role, types::{SharePrice, ValidatorDescriptor}};
use soroban_sdk::{Address, Env, Vec};

use crate::{bonding_ledger::BondingLedger, storage::Config};

pub trait StakingTrait {
    // ################################################################
    //                             ADMIN
    // ################################################################

    #[allow(clippy::too_many_arguments)]
    fn initialize(
        env: Env,
        admin: Address,
        native_token: Address,
        wrapped_native: Address,
        deposit_contract: Address,
        treasury: Address,
        updater: Address,
        activator: Address,
    );

    fn update_liquid_pool(env: Env, sender: Address, liquid_pool: Address);

    fn update_withdrawal(env: Env, sender: Address, withdrawal: Address);

    #[allow(clippy::too_many_arguments)]
    fn update_config(
        env: Env,
        sender: Address,
        min_deposit: Option<i128>,
        bonding_unit: Option<i128>,
        update_balance_timelock: Option<u64>,
        max_balance_delta_bps: Option<u32>,
        rewards_fee_bps: Option<u32>,
        treasury: Option<Address>,
    );

    fn grant_role(env: Env, sender: Address, role: Role, account: Address);

    fn revoke_role(env: Env, sender: Address, role: Role, account: Address);

    fn has_role(env: Env, role: Role, account: Address) -> bool;

    // ################################################################
    //                            WHITELIST
    // ################################################################

    fn toggle_whitelist_enabled(env: Env, sender: Address);

    fn add_to_whitelist(env: Env, sender: Address, accounts: Vec<Address>);

    fn remove_from_whitelist(env: Env, sender: Address, accounts: Vec<Address>);

    fn whitelist_enabled(env: Env) -> bool;

    fn is_whitelisted(env: Env, account: Address) -> bool;

    // ################################################################
    //                              USER
    // ################################################################

    /// Deposits the native asset and mints shares to `receiver`.
    fn deposit_native(env: Env, sender: Address, receiver: Address, amount: i128) -> i128;

    /// Deposits the wrapped native token and mints shares to `receiver`.
    fn deposit(env: Env, sender: Address, amount: i128, receiver: Address) -> i128;

    /// Burns the shares worth `assets` and pays them from the idle balance.
    fn withdraw(env: Env, assets: i128, receiver: Address, owner: Address) -> i128;

    fn redeem(env: Env, shares: i128, receiver: Address, owner: Address) -> i128;

    // ################################################################
    //                            OPERATORS
    // ################################################################

    fn bond_validators(
        env: Env,
        sender: Address,
        validators: Vec<ValidatorDescriptor>,
        amount_from_pool: i128,
        pool_guard: i128,
    );

    fn update_nodes_balance(env: Env, sender: Address, new_total: i128);

    fn request_validator_exits(env: Env, sender: Address, count: u32);

    fn settle_validator_exits(env: Env, sender: Address, count: u32, proceeds: i128);

    /// Called by the withdrawal queue to burn shares for a delayed
    /// withdrawal. Returns the assets owed.
    fn burn_for_withdrawal(env: Env, owner: Address, shares: i128) -> i128;

    // ################################################################
    //                             QUERIES
    // ################################################################

    fn total_assets(env: Env) -> i128;

    fn total_supply(env: Env) -> i128;

    fn share_price(env: Env) -> SharePrice;

    fn convert_to_shares(env: Env, assets: i128) -> i128;

    fn convert_to_assets(env: Env, shares: i128) -> i128;

    fn preview_deposit(env: Env, assets: i128) -> i128;

    fn preview_withdraw(env: Env, assets: i128) -> i128;

    fn preview_redeem(env: Env, shares: i128) -> i128;

    fn max_withdraw(env: Env, owner: Address) -> i128;

    fn max_redeem(env: Env, owner: Address) -> i128;

    fn staking_balance(env: Env) -> i128;

    fn nodes_and_withdrawal_balance(env: Env) -> i128;

    fn estimated_rewards_per_second(env: Env) -> i128;

    fn total_nodes_activated(env: Env) -> u32;

    fn withdrawal_liability(env: Env) -> i128;

    fn query_ledger(env: Env) -> BondingLedger;

    fn query_config(env: Env) -> Config;
}
