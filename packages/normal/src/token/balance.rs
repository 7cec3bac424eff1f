use soroban_sdk::{contracttype, log, panic_with_error, Address, Env};

use crate::constants::{BALANCE_BUMP_AMOUNT, BALANCE_LIFETIME_THRESHOLD};
use crate::error::ErrorCode;

#[derive(Clone)]
#[contracttype]
pub enum BalanceKey {
    Balance(Address),
    TotalSupply,
}

pub fn read_balance(env: &Env, addr: &Address) -> i128 {
    let key = BalanceKey::Balance(addr.clone());
    if let Some(balance) = env.storage().persistent().get::<BalanceKey, i128>(&key) {
        env.storage()
            .persistent()
            .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
        balance
    } else {
        0
    }
}

fn write_balance(env: &Env, addr: &Address, amount: i128) {
    let key = BalanceKey::Balance(addr.clone());
    env.storage().persistent().set(&key, &amount);
    env.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

pub fn receive_balance(env: &Env, addr: &Address, amount: i128) {
    let balance = read_balance(env, addr);
    let Some(updated) = balance.checked_add(amount) else {
        log!(env, "Token: balance overflow for {}", addr.clone());
        panic_with_error!(env, ErrorCode::MathError);
    };
    write_balance(env, addr, updated);
}

pub fn spend_balance(env: &Env, addr: &Address, amount: i128) {
    let balance = read_balance(env, addr);
    if balance < amount {
        log!(
            env,
            "Token: insufficient balance for {}: {} < {}",
            addr.clone(),
            balance,
            amount
        );
        panic_with_error!(env, ErrorCode::InsufficientBalance);
    }
    write_balance(env, addr, balance - amount);
}

/// Moves `amount` between two holders without any authorization check.
/// Callers are responsible for having authorized the movement.
pub fn move_balance(env: &Env, from: &Address, to: &Address, amount: i128) {
    spend_balance(env, from, amount);
    receive_balance(env, to, amount);
}

pub fn read_total_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get::<BalanceKey, i128>(&BalanceKey::TotalSupply)
        .unwrap_or(0)
}

fn write_total_supply(env: &Env, amount: i128) {
    env.storage()
        .instance()
        .set(&BalanceKey::TotalSupply, &amount);
}

pub fn mint(env: &Env, to: &Address, amount: i128) {
    if amount == 0 {
        return;
    }
    receive_balance(env, to, amount);
    let Some(supply) = read_total_supply(env).checked_add(amount) else {
        log!(env, "Token: total supply overflow");
        panic_with_error!(env, ErrorCode::MathError);
    };
    write_total_supply(env, supply);
}

pub fn burn(env: &Env, from: &Address, amount: i128) {
    if amount == 0 {
        return;
    }
    spend_balance(env, from, amount);
    write_total_supply(env, read_total_supply(env) - amount);
}
