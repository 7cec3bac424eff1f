use soroban_sdk::{
    contract, contractimpl, contractmeta, log, panic_with_error,
    token::{self, TokenInterface as _},
    Address, Env, String,
};
use soroban_token_sdk::TokenUtils;

use normal::{
    access_control::{AccessControl, Role},
    constants::{INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD},
    error::ErrorCode,
    interfaces::StakingVaultClient,
    math::safe_unwrap::SafeUnwrap,
    token::{self as ledger, metadata},
    types::SharePrice,
    utils::{is_initialized, set_initialized},
    validate_bps,
};

use crate::{
    controller::{lending, liquidity, swap},
    errors::LiquidPoolError,
    events::LiquidPoolEvents,
    pool::LiquidPoolTrait,
    storage::{
        get_config, get_state, save_config, save_state, Config, PoolInfo, PoolState, SwapQuote,
        DEFAULT_MAX_FEE_BPS, DEFAULT_MIN_BASE_PROPORTION_BPS, DEFAULT_MIN_FEE_BPS,
        DEFAULT_TARGET_BASE_PROPORTION_BPS, DEFAULT_TREASURY_FEE_BPS,
    },
};

contractmeta!(
    key = "Description",
    val = "Liquidity pool buying staked-vault shares for the native asset"
);

const TOKEN_NAME: &str = "Normal Liquid Unstake Pool";
const TOKEN_SYMBOL: &str = "nLUP";

#[contract]
pub struct LiquidUnstakePool;

fn vault_price(env: &Env, config: &Config) -> SharePrice {
    StakingVaultClient::new(env, &config.staking).share_price()
}

#[contractimpl]
impl LiquidPoolTrait for LiquidUnstakePool {
    fn initialize(env: Env, admin: Address, staking: Address, native_token: Address, treasury: Address) {
        if is_initialized(&env) {
            log!(
                &env,
                "Liquid Pool: Initialize: initializing contract twice is not allowed"
            );
            panic_with_error!(&env, ErrorCode::AlreadyInitialized);
        }

        set_initialized(&env);
        AccessControl::new(&env).set_role(Role::Admin, &admin);

        save_config(
            &env,
            &Config {
                staking: staking.clone(),
                native_token: native_token.clone(),
                treasury,
                min_base_proportion_bps: DEFAULT_MIN_BASE_PROPORTION_BPS,
                target_base_proportion_bps: DEFAULT_TARGET_BASE_PROPORTION_BPS,
                min_fee_bps: DEFAULT_MIN_FEE_BPS,
                max_fee_bps: DEFAULT_MAX_FEE_BPS,
                treasury_fee_bps: DEFAULT_TREASURY_FEE_BPS,
            },
        );
        save_state(&env, &PoolState::default());
        metadata::write_metadata(&env, TOKEN_NAME, TOKEN_SYMBOL);

        LiquidPoolEvents::initialize(&env, admin, staking, native_token);
    }

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
    ) {
        AccessControl::new(&env).require_admin(&sender);
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let mut config = get_config(&env);

        if let Some(min_base_proportion_bps) = min_base_proportion_bps {
            validate_bps!(&env, min_base_proportion_bps);
            config.min_base_proportion_bps = min_base_proportion_bps;
        }
        if let Some(target_base_proportion_bps) = target_base_proportion_bps {
            validate_bps!(&env, target_base_proportion_bps);
            config.target_base_proportion_bps = target_base_proportion_bps;
        }
        if let Some(min_fee_bps) = min_fee_bps {
            validate_bps!(&env, min_fee_bps);
            config.min_fee_bps = min_fee_bps;
        }
        if let Some(max_fee_bps) = max_fee_bps {
            validate_bps!(&env, max_fee_bps);
            config.max_fee_bps = max_fee_bps;
        }
        if let Some(treasury_fee_bps) = treasury_fee_bps {
            validate_bps!(&env, treasury_fee_bps);
            config.treasury_fee_bps = treasury_fee_bps;
        }
        if let Some(treasury) = treasury {
            config.treasury = treasury;
        }

        if config.min_base_proportion_bps >= config.target_base_proportion_bps {
            log!(
                &env,
                "Liquid Pool: Update config: floor {} must be below target {}",
                config.min_base_proportion_bps,
                config.target_base_proportion_bps
            );
            panic_with_error!(&env, LiquidPoolError::InvalidProportions);
        }
        if config.min_fee_bps > config.max_fee_bps {
            log!(
                &env,
                "Liquid Pool: Update config: min fee {} exceeds max fee {}",
                config.min_fee_bps,
                config.max_fee_bps
            );
            panic_with_error!(&env, LiquidPoolError::InvalidFees);
        }

        save_config(&env, &config);

        LiquidPoolEvents::update_config(&env, sender);
    }

    fn deposit_native(env: Env, sender: Address, receiver: Address, amount: i128) -> i128 {
        sender.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env);
        let mut state = get_state(&env);
        let price = vault_price(&env, &config);

        let pool_shares = liquidity::pool_shares_for_deposit(
            &env,
            &state,
            &price,
            ledger::read_total_supply(&env),
            amount,
        )
        .safe_unwrap(&env);

        token::Client::new(&env, &config.native_token).transfer(
            &sender,
            &env.current_contract_address(),
            &amount,
        );

        liquidity::apply_deposit(&env, &mut state, amount).safe_unwrap(&env);
        save_state(&env, &state);
        ledger::mint(&env, &receiver, pool_shares);

        TokenUtils::new(&env)
            .events()
            .mint(env.current_contract_address(), receiver.clone(), pool_shares);
        LiquidPoolEvents::add_liquidity(&env, sender, receiver, amount, pool_shares);

        pool_shares
    }

    fn withdraw(env: Env, sender: Address, pool_shares: i128) -> (i128, i128) {
        sender.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env);
        let mut state = get_state(&env);

        let (base_out, shares_out) = liquidity::withdrawal_amounts(
            &env,
            &state,
            ledger::read_total_supply(&env),
            pool_shares,
        )
        .safe_unwrap(&env);

        ledger::burn(&env, &sender, pool_shares);
        liquidity::apply_withdrawal(&env, &mut state, base_out, shares_out).safe_unwrap(&env);
        save_state(&env, &state);

        let pool = env.current_contract_address();
        if base_out > 0 {
            token::Client::new(&env, &config.native_token).transfer(&pool, &sender, &base_out);
        }
        if shares_out > 0 {
            token::Client::new(&env, &config.staking).transfer(&pool, &sender, &shares_out);
        }

        TokenUtils::new(&env).events().burn(sender.clone(), pool_shares);
        LiquidPoolEvents::remove_liquidity(&env, sender, pool_shares, base_out, shares_out);

        (base_out, shares_out)
    }

    fn swap_shares_for_base_asset(env: Env, sender: Address, shares_in: i128, min_base_out: i128) -> i128 {
        sender.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env);
        let mut state = get_state(&env);
        let price = vault_price(&env, &config);

        let quote = swap::quote_swap(&env, &config, &state, &price, shares_in).safe_unwrap(&env);
        if quote.base_out < min_base_out {
            log!(
                &env,
                "Liquid Pool: Swap: output {} below minimum {}",
                quote.base_out,
                min_base_out
            );
            panic_with_error!(&env, LiquidPoolError::SwapMinOut);
        }

        swap::apply_swap(&env, &mut state, shares_in, &quote).safe_unwrap(&env);
        save_state(&env, &state);

        let pool = env.current_contract_address();
        let vault_shares = token::Client::new(&env, &config.staking);
        vault_shares.transfer(&sender, &pool, &(shares_in - quote.treasury_shares));
        if quote.treasury_shares > 0 {
            vault_shares.transfer(&sender, &config.treasury, &quote.treasury_shares);
        }
        token::Client::new(&env, &config.native_token).transfer(&pool, &sender, &quote.base_out);

        LiquidPoolEvents::swap(
            &env,
            sender,
            shares_in,
            quote.base_out,
            quote.fee_shares,
            quote.treasury_shares,
        );

        quote.base_out
    }

    fn quote_swap(env: Env, shares_in: i128) -> SwapQuote {
        let config = get_config(&env);
        let price = vault_price(&env, &config);
        swap::quote_swap(&env, &config, &get_state(&env), &price, shares_in).safe_unwrap(&env)
    }

    fn lend_to_vault(env: Env, amount: i128, shares: i128, pool_guard: i128, price: SharePrice) {
        let config = get_config(&env);
        config.staking.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let mut state = get_state(&env);
        lending::lend_to_vault(&env, &config, &mut state, amount, shares, pool_guard, &price)
            .safe_unwrap(&env);
        save_state(&env, &state);

        token::Client::new(&env, &config.native_token).transfer(
            &env.current_contract_address(),
            &config.staking,
            &amount,
        );

        LiquidPoolEvents::lend_to_vault(&env, amount, shares);
    }

    fn repay_from_vault(env: Env, amount: i128, shares: i128) {
        let config = get_config(&env);
        config.staking.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let mut state = get_state(&env);
        lending::repay_from_vault(&env, &mut state, amount, shares).safe_unwrap(&env);
        save_state(&env, &state);

        LiquidPoolEvents::repay_from_vault(&env, amount, shares);
    }

    fn query_config(env: Env) -> Config {
        get_config(&env)
    }

    fn query_state(env: Env) -> PoolInfo {
        let state = get_state(&env);
        PoolInfo {
            base_reserve: state.base_reserve,
            share_reserve: state.share_reserve,
            total_pool_shares: ledger::read_total_supply(&env),
        }
    }

    fn base_reserve(env: Env) -> i128 {
        get_state(&env).base_reserve
    }

    fn share_reserve(env: Env) -> i128 {
        get_state(&env).share_reserve
    }

    fn total_assets(env: Env) -> i128 {
        let config = get_config(&env);
        let price = vault_price(&env, &config);
        liquidity::total_pool_value(&env, &get_state(&env), &price).safe_unwrap(&env)
    }

    fn total_supply(env: Env) -> i128 {
        ledger::read_total_supply(&env)
    }
}

#[contractimpl]
impl token::TokenInterface for LiquidUnstakePool {
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

    // Pool shares only leave circulation through `withdraw`.
    fn burn(env: Env, _from: Address, _amount: i128) {
        log!(&env, "Liquid Pool: pool shares are redeemed through withdraw");
        panic_with_error!(&env, ErrorCode::NotAuthorized);
    }

    fn burn_from(env: Env, _spender: Address, _from: Address, _amount: i128) {
        log!(&env, "Liquid Pool: pool shares are redeemed through withdraw");
        panic_with_error!(&env, ErrorCode::NotAuthorized);
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
