use soroban_sdk::{
    contract, contractimpl, contractmeta, log, panic_with_error,
    token::{self, TokenInterface as _},
    Address, Env, String,
};
use soroban_token_sdk::TokenUtils;

use normal::{
    constants::{INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD},
    error::ErrorCode,
    token::{self as ledger, metadata},
    utils::{is_initialized, set_initialized},
};

use crate::{
    errors::WrappedNativeError,
    events::WrappedNativeEvents,
    gateway::AssetGatewayTrait,
    storage::{get_admin, get_native_token, save_admin, save_native_token},
};

contractmeta!(
    key = "Description",
    val = "One-to-one wrapped representation of the native asset"
);

const TOKEN_NAME: &str = "Wrapped Native";
const TOKEN_SYMBOL: &str = "wNATIVE";

#[contract]
pub struct WrappedNative;

fn check_positive_amount(env: &Env, amount: i128) {
    if amount <= 0 {
        log!(env, "Wrapped Native: amount must be positive: {}", amount);
        panic_with_error!(env, WrappedNativeError::AmountMustBePositive);
    }
}

#[contractimpl]
impl AssetGatewayTrait for WrappedNative {
    fn initialize(env: Env, admin: Address, native_token: Address) {
        if is_initialized(&env) {
            log!(
                &env,
                "Wrapped Native: Initialize: initializing contract twice is not allowed"
            );
            panic_with_error!(&env, ErrorCode::AlreadyInitialized);
        }

        set_initialized(&env);
        save_admin(&env, &admin);
        save_native_token(&env, &native_token);
        metadata::write_metadata(&env, TOKEN_NAME, TOKEN_SYMBOL);

        WrappedNativeEvents::initialize(&env, admin, native_token);
    }

    fn wrap(env: Env, from: Address, amount: i128) {
        from.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        check_positive_amount(&env, amount);

        let native = token::Client::new(&env, &get_native_token(&env));
        native.transfer(&from, &env.current_contract_address(), &amount);

        ledger::mint(&env, &from, amount);

        TokenUtils::new(&env)
            .events()
            .mint(env.current_contract_address(), from.clone(), amount);
        WrappedNativeEvents::wrap(&env, from, amount);
    }

    fn unwrap(env: Env, from: Address, amount: i128) {
        from.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        check_positive_amount(&env, amount);

        ledger::burn(&env, &from, amount);

        let native = token::Client::new(&env, &get_native_token(&env));
        native.transfer(&env.current_contract_address(), &from, &amount);

        TokenUtils::new(&env).events().burn(from.clone(), amount);
        WrappedNativeEvents::unwrap(&env, from, amount);
    }

    fn set_admin(env: Env, new_admin: Address) {
        let admin = get_admin(&env);
        admin.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        save_admin(&env, &new_admin);

        TokenUtils::new(&env).events().set_admin(admin, new_admin);
    }

    fn admin(env: Env) -> Address {
        get_admin(&env)
    }

    fn native_token(env: Env) -> Address {
        get_native_token(&env)
    }

    fn total_supply(env: Env) -> i128 {
        ledger::read_total_supply(&env)
    }
}

#[contractimpl]
impl token::TokenInterface for WrappedNative {
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

    // Burning wrapped tokens directly would strand the locked native asset.
    fn burn(env: Env, from: Address, amount: i128) {
        <WrappedNative as AssetGatewayTrait>::unwrap(env, from, amount);
    }

    fn burn_from(env: Env, spender: Address, from: Address, amount: i128) {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        check_positive_amount(&env, amount);

        ledger::burn_from(&env, spender.clone(), from, amount);

        let native = token::Client::new(&env, &get_native_token(&env));
        native.transfer(&env.current_contract_address(), &spender, &amount);
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
