//! Cross-contract clients. Each trait only lists the entry points another
//! contract in the workspace actually calls.

use soroban_sdk::{contractclient, Address, Env};

use crate::types::{SharePrice, ValidatorDescriptor};

#[allow(dead_code)]
#[contractclient(name = "StakingVaultClient")]
pub trait StakingVaultInterface {
    fn share_price(env: Env) -> SharePrice;

    fn burn_for_withdrawal(env: Env, owner: Address, shares: i128) -> i128;
}

#[allow(dead_code)]
#[contractclient(name = "LiquidPoolClient")]
pub trait LiquidPoolInterface {
    fn share_reserve(env: Env) -> i128;

    fn lend_to_vault(env: Env, amount: i128, shares: i128, pool_guard: i128, price: SharePrice);

    fn repay_from_vault(env: Env, amount: i128, shares: i128);
}

#[allow(dead_code)]
#[contractclient(name = "WithdrawalQueueClient")]
pub trait WithdrawalQueueInterface {
    fn pending_shortfall(env: Env) -> i128;

    fn fund(env: Env, amount: i128);
}

#[allow(dead_code)]
#[contractclient(name = "AssetGatewayClient")]
pub trait AssetGatewayInterface {
    fn unwrap(env: Env, from: Address, amount: i128);
}

/// Validator registration contract of the underlying network.
#[allow(dead_code)]
#[contractclient(name = "DepositContractClient")]
pub trait DepositContractInterface {
    fn deposit(env: Env, from: Address, validator: ValidatorDescriptor, amount: i128);
}
