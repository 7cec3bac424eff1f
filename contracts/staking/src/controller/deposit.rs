use normal::{
    interfaces::LiquidPoolClient,
    math::{safe_math::SafeMath, share_math::mul_div_floor},
    token::{mint, move_balance},
    validate,
};
use soroban_sdk::{token, Address, Env};
use soroban_token_sdk::TokenUtils;

use crate::{
    accounting::minting_price,
    errors::{StakingError, StakingResult},
    events::StakingEvents,
    storage::{get_bonding_ledger, get_state, is_whitelisted, save_state, Config},
};

pub fn validate_deposit(env: &Env, config: &Config, sender: &Address, amount: i128) -> StakingResult {
    let state = get_state(env);
    validate!(
        env,
        !state.whitelist_enabled || is_whitelisted(env, sender),
        StakingError::UserNotWhitelisted,
        "Staking: Deposit: {} is not whitelisted",
        sender.clone()
    )?;
    validate!(
        env,
        amount >= config.min_deposit,
        StakingError::DepositTooLow,
        "Staking: Deposit: {} is below the minimum deposit {}",
        amount,
        config.min_deposit
    )?;
    Ok(())
}

/// Credits `amount` of native asset already held by the vault to `receiver`.
///
/// Shares are priced before the deposit. Any vault shares the liquidity
/// pool holds are bought back first with the matching part of the deposit,
/// so only the remainder mints new shares and becomes idle balance.
pub fn credit_deposit(
    env: &Env,
    config: &Config,
    sender: &Address,
    receiver: &Address,
    amount: i128,
) -> StakingResult<i128> {
    let mut state = get_state(env);
    let ledger = get_bonding_ledger(env);
    let price = minting_price(env, &state, &ledger)?;

    let shares = price.convert_to_shares(env, amount)?;
    validate!(
        env,
        shares > 0,
        StakingError::DepositTooLow,
        "Staking: Deposit: {} buys no shares",
        amount
    )?;

    let mut assets_to_pool = 0;
    let mut shares_from_pool = 0;
    if let Some(pool) = &config.liquid_pool {
        let pool_client = LiquidPoolClient::new(env, pool);
        shares_from_pool = shares.min(pool_client.share_reserve()).max(0);

        if shares_from_pool > 0 {
            assets_to_pool = if shares_from_pool == shares {
                amount
            } else {
                mul_div_floor(env, amount, shares_from_pool, shares)?
            };

            move_balance(env, pool, receiver, shares_from_pool);
            TokenUtils::new(env)
                .events()
                .transfer(pool.clone(), receiver.clone(), shares_from_pool);

            token::Client::new(env, &config.native_token).transfer(
                &env.current_contract_address(),
                pool,
                &assets_to_pool,
            );
            pool_client.repay_from_vault(&assets_to_pool, &shares_from_pool);
        }
    }

    let minted = shares.safe_sub(shares_from_pool, env)?;
    if minted > 0 {
        mint(env, receiver, minted);
        TokenUtils::new(env)
            .events()
            .mint(env.current_contract_address(), receiver.clone(), minted);
    }

    state.staking_balance = state
        .staking_balance
        .safe_add(amount.safe_sub(assets_to_pool, env)?, env)?;
    save_state(env, &state);

    StakingEvents::deposit(
        env,
        sender.clone(),
        receiver.clone(),
        amount,
        shares,
        shares_from_pool,
    );

    Ok(shares)
}
