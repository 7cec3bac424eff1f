use soroban_sdk::{contracttype, log, panic_with_error, Address, Env};

use crate::error::ErrorCode;

#[derive(Clone)]
#[contracttype]
pub struct AllowanceDataKey {
    pub from: Address,
    pub spender: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllowanceValue {
    pub amount: i128,
    pub expiration_ledger: u32,
}

#[derive(Clone)]
#[contracttype]
pub enum AllowanceKey {
    Allowance(AllowanceDataKey),
}

pub fn read_allowance(env: &Env, from: Address, spender: Address) -> AllowanceValue {
    let key = AllowanceKey::Allowance(AllowanceDataKey { from, spender });
    match env.storage().temporary().get::<_, AllowanceValue>(&key) {
        Some(allowance) if allowance.expiration_ledger < env.ledger().sequence() => {
            AllowanceValue {
                amount: 0,
                expiration_ledger: allowance.expiration_ledger,
            }
        }
        Some(allowance) => allowance,
        None => AllowanceValue {
            amount: 0,
            expiration_ledger: 0,
        },
    }
}

pub fn write_allowance(
    env: &Env,
    from: Address,
    spender: Address,
    amount: i128,
    expiration_ledger: u32,
) {
    let sequence = env.ledger().sequence();
    if amount > 0 && expiration_ledger < sequence {
        log!(
            env,
            "Token: expiration_ledger {} is less than ledger seq {} when amount > 0",
            expiration_ledger,
            sequence
        );
        panic_with_error!(env, ErrorCode::InvalidExpirationLedger);
    }

    let key = AllowanceKey::Allowance(AllowanceDataKey { from, spender });
    env.storage().temporary().set(
        &key,
        &AllowanceValue {
            amount,
            expiration_ledger,
        },
    );

    if amount > 0 {
        let live_for = expiration_ledger - sequence;
        env.storage().temporary().extend_ttl(&key, live_for, live_for);
    }
}

pub fn spend_allowance(env: &Env, from: Address, spender: Address, amount: i128) {
    let allowance = read_allowance(env, from.clone(), spender.clone());
    if allowance.amount < amount {
        log!(
            env,
            "Token: insufficient allowance: {} < {}",
            allowance.amount,
            amount
        );
        panic_with_error!(env, ErrorCode::InsufficientAllowance);
    }
    if amount > 0 {
        write_allowance(
            env,
            from,
            spender,
            allowance.amount - amount,
            allowance.expiration_ledger,
        );
    }
}
