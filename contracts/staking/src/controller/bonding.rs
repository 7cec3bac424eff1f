use normal::{
    interfaces::{DepositContractClient, LiquidPoolClient},
    math::safe_math::SafeMath,
    token::mint,
    types::ValidatorDescriptor,
    validate,
};
use soroban_sdk::{log, token, Env, Vec};
use soroban_token_sdk::TokenUtils;

use crate::{
    accounting::minting_price,
    errors::{StakingError, StakingResult},
    storage::{get_bonding_ledger, get_state, save_bonding_ledger, save_state, Config},
};

/// Bonds one `bonding_unit` per validator, taking `amount_from_pool` from the
/// liquidity pool and the rest from the idle balance.
///
/// The pool is paid in vault shares minted at the pre-bonding price.
pub fn bond_validators(
    env: &Env,
    config: &Config,
    validators: &Vec<ValidatorDescriptor>,
    amount_from_pool: i128,
    pool_guard: i128,
) -> StakingResult<i128> {
    let count = validators.len();
    validate!(
        env,
        count > 0,
        StakingError::EmptyValidatorSet,
        "Staking: Bond: no validators supplied"
    )?;

    let required = config.bonding_unit.safe_mul(count as i128, env)?;
    validate!(
        env,
        amount_from_pool >= 0 && amount_from_pool <= required,
        StakingError::InvalidPoolAmount,
        "Staking: Bond: pool amount {} must be between 0 and {}",
        amount_from_pool,
        required
    )?;

    let mut state = get_state(env);
    let mut ledger = get_bonding_ledger(env);
    let available = state.staking_balance.safe_add(amount_from_pool, env)?;
    validate!(
        env,
        available >= required,
        StakingError::NotEnoughToStake,
        "Staking: Bond: {} available, {} required",
        available,
        required
    )?;

    let vault = env.current_contract_address();
    let mut pool_shares = 0;
    if amount_from_pool > 0 {
        let Some(pool) = &config.liquid_pool else {
            log!(env, "Staking: Bond: liquid pool is not set");
            return Err(StakingError::LiquidPoolNotSet);
        };

        let price = minting_price(env, &state, &ledger)?;
        pool_shares = price.convert_to_shares(env, amount_from_pool)?;

        LiquidPoolClient::new(env, pool).lend_to_vault(
            &amount_from_pool,
            &pool_shares,
            &pool_guard,
            &price,
        );
        mint(env, pool, pool_shares);
        TokenUtils::new(env)
            .events()
            .mint(vault.clone(), pool.clone(), pool_shares);
    }

    state.staking_balance = state
        .staking_balance
        .safe_sub(required.safe_sub(amount_from_pool, env)?, env)?;
    ledger.record_bonding(env, count, required)?;
    save_state(env, &state);
    save_bonding_ledger(env, &ledger);

    let native = token::Client::new(env, &config.native_token);
    let deposit_contract = DepositContractClient::new(env, &config.deposit_contract);
    for validator in validators.iter() {
        native.transfer(&vault, &config.deposit_contract, &config.bonding_unit);
        deposit_contract.deposit(&vault, &validator, &config.bonding_unit);
    }

    Ok(pool_shares)
}
