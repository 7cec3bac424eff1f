//! Fungible-token ledger shared by every contract that issues a SEP-41
//! token: vault shares, pool shares and the wrapped native asset.

pub mod allowance;
pub mod balance;
pub mod metadata;

use soroban_sdk::{log, panic_with_error, Address, Env};
use soroban_token_sdk::TokenUtils;

use crate::error::ErrorCode;

pub use allowance::{read_allowance, spend_allowance, write_allowance};
pub use balance::{burn, mint, move_balance, read_balance, read_total_supply};

pub fn check_nonnegative_amount(env: &Env, amount: i128) {
    if amount < 0 {
        log!(env, "Token: negative amount is not allowed: {}", amount);
        panic_with_error!(env, ErrorCode::NegativeAmount);
    }
}

pub fn transfer(env: &Env, from: Address, to: Address, amount: i128) {
    from.require_auth();
    check_nonnegative_amount(env, amount);

    move_balance(env, &from, &to, amount);

    TokenUtils::new(env).events().transfer(from, to, amount);
}

pub fn transfer_from(env: &Env, spender: Address, from: Address, to: Address, amount: i128) {
    spender.require_auth();
    check_nonnegative_amount(env, amount);

    spend_allowance(env, from.clone(), spender, amount);
    move_balance(env, &from, &to, amount);

    TokenUtils::new(env).events().transfer(from, to, amount);
}

pub fn approve(env: &Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32) {
    from.require_auth();
    check_nonnegative_amount(env, amount);

    write_allowance(env, from.clone(), spender.clone(), amount, expiration_ledger);

    TokenUtils::new(env)
        .events()
        .approve(from, spender, amount, expiration_ledger);
}

pub fn burn_self(env: &Env, from: Address, amount: i128) {
    from.require_auth();
    check_nonnegative_amount(env, amount);

    burn(env, &from, amount);

    TokenUtils::new(env).events().burn(from, amount);
}

pub fn burn_from(env: &Env, spender: Address, from: Address, amount: i128) {
    spender.require_auth();
    check_nonnegative_amount(env, amount);

    spend_allowance(env, from.clone(), spender, amount);
    burn(env, &from, amount);

    TokenUtils::new(env).events().burn(from, amount);
}
