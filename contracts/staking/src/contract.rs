use soroban_sdk::{
    contract, contractimpl, contractmeta, log, panic_with_error,
    token::{self, TokenInterface as _},
    Address, Env, String, Vec,
};

use normal::{
    access_control::{AccessControl, Role},
    constants::{INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD},
    error::ErrorCode,
    interfaces::AssetGatewayClient,
    math::safe_unwrap::SafeUnwrap,
    token::{self as ledger, metadata},
    types::{SharePrice, ValidatorDescriptor},
    utils::{is_initialized, set_initialized},
    validate_bps,
};

use crate::{
    accounting,
    bonding_ledger::BondingLedger,
    controller::{bonding, deposit, oracle, settlement, withdraw},
    errors::StakingError,
    events::StakingEvents,
    staking::StakingTrait,
    storage::{
        self, get_bonding_ledger, get_config, get_state, save_bonding_ledger, save_config,
        save_state, Config, VaultState, DEFAULT_BONDING_UNIT, DEFAULT_MAX_BALANCE_DELTA_BPS,
        DEFAULT_MIN_DEPOSIT, DEFAULT_REWARDS_FEE_BPS, DEFAULT_UPDATE_BALANCE_TIMELOCK,
    },
};

contractmeta!(
    key = "Description",
    val = "Liquid staking vault issuing shares on bonded native capital"
);

const TOKEN_NAME: &str = "Normal Staked Native";
const TOKEN_SYMBOL: &str = "nstNATIVE";

#[contract]
pub struct Staking;

fn current_price(env: &Env) -> SharePrice {
    accounting::share_price(env, &get_state(env), &get_bonding_ledger(env)).safe_unwrap(env)
}

#[contractimpl]
impl StakingTrait for Staking {
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
    ) {
        if is_initialized(&env) {
            log!(
                &env,
                "Staking: Initialize: initializing contract twice is not allowed"
            );
            panic_with_error!(&env, ErrorCode::AlreadyInitialized);
        }

        set_initialized(&env);

        let access_control = AccessControl::new(&env);
        access_control.set_role(Role::Admin, &admin);
        access_control.set_role(Role::Updater, &updater);
        access_control.set_role(Role::Activator, &activator);

        save_config(
            &env,
            &Config {
                native_token: native_token.clone(),
                wrapped_native,
                deposit_contract,
                treasury: treasury.clone(),
                liquid_pool: None,
                withdrawal: None,
                min_deposit: DEFAULT_MIN_DEPOSIT,
                bonding_unit: DEFAULT_BONDING_UNIT,
                update_balance_timelock: DEFAULT_UPDATE_BALANCE_TIMELOCK,
                max_balance_delta_bps: DEFAULT_MAX_BALANCE_DELTA_BPS,
                rewards_fee_bps: DEFAULT_REWARDS_FEE_BPS,
            },
        );
        save_state(&env, &VaultState::default());
        save_bonding_ledger(&env, &BondingLedger::default());
        metadata::write_metadata(&env, TOKEN_NAME, TOKEN_SYMBOL);

        StakingEvents::initialize(&env, admin, native_token, treasury);
    }

    fn update_liquid_pool(env: Env, sender: Address, liquid_pool: Address) {
        AccessControl::new(&env).require_admin(&sender);
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let mut config = get_config(&env);
        config.liquid_pool = Some(liquid_pool);
        save_config(&env, &config);

        StakingEvents::update_config(&env, sender);
    }

    fn update_withdrawal(env: Env, sender: Address, withdrawal: Address) {
        AccessControl::new(&env).require_admin(&sender);
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let mut config = get_config(&env);
        config.withdrawal = Some(withdrawal);
        save_config(&env, &config);

        StakingEvents::update_config(&env, sender);
    }

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
    ) {
        AccessControl::new(&env).require_admin(&sender);
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let mut config = get_config(&env);

        if let Some(min_deposit) = min_deposit {
            if min_deposit <= 0 {
                log!(&env, "Staking: Update config: min deposit must be positive");
                panic_with_error!(&env, StakingError::InvalidAmount);
            }
            config.min_deposit = min_deposit;
        }
        if let Some(bonding_unit) = bonding_unit {
            if bonding_unit <= 0 {
                log!(&env, "Staking: Update config: bonding unit must be positive");
                panic_with_error!(&env, StakingError::InvalidAmount);
            }
            config.bonding_unit = bonding_unit;
        }
        if let Some(update_balance_timelock) = update_balance_timelock {
            config.update_balance_timelock = update_balance_timelock;
        }
        if let Some(max_balance_delta_bps) = max_balance_delta_bps {
            validate_bps!(&env, max_balance_delta_bps);
            config.max_balance_delta_bps = max_balance_delta_bps;
        }
        if let Some(rewards_fee_bps) = rewards_fee_bps {
            validate_bps!(&env, rewards_fee_bps);
            config.rewards_fee_bps = rewards_fee_bps;
        }
        if let Some(treasury) = treasury {
            config.treasury = treasury;
        }

        save_config(&env, &config);

        StakingEvents::update_config(&env, sender);
    }

    fn grant_role(env: Env, sender: Address, role: Role, account: Address) {
        AccessControl::new(&env).grant_role(&sender, role, &account);
    }

    fn revoke_role(env: Env, sender: Address, role: Role, account: Address) {
        AccessControl::new(&env).revoke_role(&sender, role, &account);
    }

    fn has_role(env: Env, role: Role, account: Address) -> bool {
        AccessControl::new(&env).has_role(role, &account)
    }

    fn toggle_whitelist_enabled(env: Env, sender: Address) {
        AccessControl::new(&env).require_admin(&sender);
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let mut state = get_state(&env);
        state.whitelist_enabled = !state.whitelist_enabled;
        save_state(&env, &state);

        StakingEvents::whitelist_enabled(&env, sender, state.whitelist_enabled);
    }

    fn add_to_whitelist(env: Env, sender: Address, accounts: Vec<Address>) {
        AccessControl::new(&env).require_admin(&sender);

        for account in accounts.iter() {
            storage::add_to_whitelist(&env, &account);
            StakingEvents::whitelist(&env, account, true);
        }
    }

    fn remove_from_whitelist(env: Env, sender: Address, accounts: Vec<Address>) {
        AccessControl::new(&env).require_admin(&sender);

        for account in accounts.iter() {
            storage::remove_from_whitelist(&env, &account);
            StakingEvents::whitelist(&env, account, false);
        }
    }

    fn whitelist_enabled(env: Env) -> bool {
        get_state(&env).whitelist_enabled
    }

    fn is_whitelisted(env: Env, account: Address) -> bool {
        storage::is_whitelisted(&env, &account)
    }

    fn deposit_native(env: Env, sender: Address, receiver: Address, amount: i128) -> i128 {
        sender.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env);
        deposit::validate_deposit(&env, &config, &sender, amount).safe_unwrap(&env);

        token::Client::new(&env, &config.native_token).transfer(
            &sender,
            &env.current_contract_address(),
            &amount,
        );

        deposit::credit_deposit(&env, &config, &sender, &receiver, amount).safe_unwrap(&env)
    }

    fn deposit(env: Env, sender: Address, amount: i128, receiver: Address) -> i128 {
        sender.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env);
        deposit::validate_deposit(&env, &config, &sender, amount).safe_unwrap(&env);

        let vault = env.current_contract_address();
        token::Client::new(&env, &config.wrapped_native).transfer(&sender, &vault, &amount);
        AssetGatewayClient::new(&env, &config.wrapped_native).unwrap(&vault, &amount);

        deposit::credit_deposit(&env, &config, &sender, &receiver, amount).safe_unwrap(&env)
    }

    fn withdraw(env: Env, assets: i128, receiver: Address, owner: Address) -> i128 {
        owner.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env);
        withdraw::withdraw(&env, &config, assets, &receiver, &owner).safe_unwrap(&env)
    }

    fn redeem(env: Env, shares: i128, receiver: Address, owner: Address) -> i128 {
        owner.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env);
        withdraw::redeem(&env, &config, shares, &receiver, &owner).safe_unwrap(&env)
    }

    fn bond_validators(
        env: Env,
        sender: Address,
        validators: Vec<ValidatorDescriptor>,
        amount_from_pool: i128,
        pool_guard: i128,
    ) {
        AccessControl::new(&env).require_role(Role::Activator, &sender);
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env);
        let count = validators.len();
        let pool_shares =
            bonding::bond_validators(&env, &config, &validators, amount_from_pool, pool_guard)
                .safe_unwrap(&env);

        StakingEvents::bond_validators(&env, sender, count, amount_from_pool, pool_shares);
    }

    fn update_nodes_balance(env: Env, sender: Address, new_total: i128) {
        AccessControl::new(&env).require_role(Role::Updater, &sender);
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env);
        let report = oracle::update_nodes_balance(&env, &config, new_total).safe_unwrap(&env);

        StakingEvents::nodes_balance(
            &env,
            sender,
            report.previous,
            new_total,
            report.fee_shares,
            report.rewards_per_second,
        );
    }

    fn request_validator_exits(env: Env, sender: Address, count: u32) {
        AccessControl::new(&env).require_role(Role::Activator, &sender);
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        settlement::request_validator_exits(&env, count).safe_unwrap(&env);

        StakingEvents::exit_request(&env, sender, count);
    }

    fn settle_validator_exits(env: Env, sender: Address, count: u32, proceeds: i128) {
        AccessControl::new(&env).require_role(Role::Activator, &sender);
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env);
        let outcome = settlement::settle_validator_exits(&env, &config, &sender, count, proceeds)
            .safe_unwrap(&env);

        StakingEvents::exit_settlement(
            &env,
            sender,
            count,
            proceeds,
            outcome.to_queue,
            outcome.to_pool,
            outcome.to_idle,
        );
    }

    fn burn_for_withdrawal(env: Env, owner: Address, shares: i128) -> i128 {
        let config = get_config(&env);
        let Some(queue) = config.withdrawal else {
            log!(&env, "Staking: Burn for withdrawal: withdrawal queue is not set");
            panic_with_error!(&env, StakingError::WithdrawalNotSet);
        };
        queue.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        withdraw::burn_for_withdrawal(&env, &owner, shares).safe_unwrap(&env)
    }

    fn total_assets(env: Env) -> i128 {
        accounting::total_assets(&env, &get_state(&env), &get_bonding_ledger(&env))
            .safe_unwrap(&env)
    }

    fn total_supply(env: Env) -> i128 {
        ledger::read_total_supply(&env)
    }

    fn share_price(env: Env) -> SharePrice {
        current_price(&env)
    }

    fn convert_to_shares(env: Env, assets: i128) -> i128 {
        current_price(&env)
            .convert_to_shares(&env, assets)
            .safe_unwrap(&env)
    }

    fn convert_to_assets(env: Env, shares: i128) -> i128 {
        current_price(&env)
            .convert_to_assets(&env, shares)
            .safe_unwrap(&env)
    }

    fn preview_deposit(env: Env, assets: i128) -> i128 {
        accounting::minting_price(&env, &get_state(&env), &get_bonding_ledger(&env))
            .safe_unwrap(&env)
            .convert_to_shares(&env, assets)
            .safe_unwrap(&env)
    }

    fn preview_withdraw(env: Env, assets: i128) -> i128 {
        current_price(&env)
            .convert_to_shares_ceil(&env, assets)
            .safe_unwrap(&env)
    }

    fn preview_redeem(env: Env, shares: i128) -> i128 {
        Self::convert_to_assets(env, shares)
    }

    fn max_withdraw(env: Env, owner: Address) -> i128 {
        withdraw::max_withdraw(&env, &owner).safe_unwrap(&env)
    }

    fn max_redeem(env: Env, owner: Address) -> i128 {
        withdraw::max_redeem(&env, &owner).safe_unwrap(&env)
    }

    fn staking_balance(env: Env) -> i128 {
        get_state(&env).staking_balance
    }

    fn nodes_and_withdrawal_balance(env: Env) -> i128 {
        get_bonding_ledger(&env).nodes_and_withdrawal_balance
    }

    fn estimated_rewards_per_second(env: Env) -> i128 {
        get_state(&env).estimated_rewards_per_second
    }

    fn total_nodes_activated(env: Env) -> u32 {
        get_bonding_ledger(&env).total_nodes_activated
    }

    fn withdrawal_liability(env: Env) -> i128 {
        get_state(&env).withdrawal_liability
    }

    fn query_ledger(env: Env) -> BondingLedger {
        get_bonding_ledger(&env)
    }

    fn query_config(env: Env) -> Config {
        get_config(&env)
    }
}

#[contractimpl]
impl token::TokenInterface for Staking {
    fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        ledger::read_allowance(&env, from, spender).amount
    }

    fn approve(env: Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32) {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        ledger::approve(&env, from, spender, amount, expiration_ledger);
    }

    fn balance(env: Env, id: Address) -> i128 {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        ledger::read_balance(&env, &id)
    }

    fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        ledger::transfer(&env, from, to, amount);
    }

    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: i128) {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        ledger::transfer_from(&env, spender, from, to, amount);
    }

    fn burn(env: Env, from: Address, amount: i128) {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        ledger::burn_self(&env, from, amount);
    }

    fn burn_from(env: Env, spender: Address, from: Address, amount: i128) {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        ledger::burn_from(&env, spender, from, amount);
    }

    fn decimals(env: Env) -> u32 {
        metadata::read_decimal(&env)
    }

    fn name(env: Env) -> String {
        metadata::read_name(&env)
    }

    fn symbol(env: Env) -> String {
        metadata::read_symbol(&env)
    }
}
