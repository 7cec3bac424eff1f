use normal::{
    math::safe_math::SafeMath,
    token::{burn, read_balance},
    validate,
};
use soroban_sdk::{token, Address, Env};
use soroban_token_sdk::TokenUtils;

use crate::{
    accounting::share_price,
    errors::{StakingError, StakingResult},
    events::StakingEvents,
    storage::{get_bonding_ledger, get_state, save_state, Config, VaultState},
};

/// Assets `owner` can take out right now. Bonded capital is illiquid, so
/// this is capped by the idle balance.
pub fn max_withdraw(env: &Env, owner: &Address) -> StakingResult<i128> {
    let state = get_state(env);
    let price = share_price(env, &state, &get_bonding_ledger(env))?;
    let owned = price.convert_to_assets(env, read_balance(env, owner))?;
    Ok(owned.min(state.staking_balance))
}

pub fn max_redeem(env: &Env, owner: &Address) -> StakingResult<i128> {
    let state = get_state(env);
    let price = share_price(env, &state, &get_bonding_ledger(env))?;
    if price.is_worthless() {
        return Ok(0);
    }
    let redeemable = price.convert_to_shares(env, state.staking_balance)?;
    Ok(read_balance(env, owner).min(redeemable))
}

/// Burns the shares needed to pay out `assets`, rounding up.
pub fn withdraw(
    env: &Env,
    config: &Config,
    assets: i128,
    receiver: &Address,
    owner: &Address,
) -> StakingResult<i128> {
    validate!(
        env,
        assets >= 0,
        StakingError::InvalidAmount,
        "Staking: Withdraw: negative amount {}",
        assets
    )?;
    if assets == 0 {
        return Ok(0);
    }

    let max = max_withdraw(env, owner)?;
    validate!(
        env,
        assets <= max,
        StakingError::WithdrawMoreThanMax,
        "Staking: Withdraw: {} is more than max {}",
        assets,
        max
    )?;

    let mut state = get_state(env);
    let price = share_price(env, &state, &get_bonding_ledger(env))?;
    let shares = price.convert_to_shares_ceil(env, assets)?;

    pay_out(env, config, &mut state, owner, receiver, assets, shares)?;
    Ok(shares)
}

/// Pays out the assets `shares` are worth, rounding down.
pub fn redeem(
    env: &Env,
    config: &Config,
    shares: i128,
    receiver: &Address,
    owner: &Address,
) -> StakingResult<i128> {
    validate!(
        env,
        shares >= 0,
        StakingError::InvalidAmount,
        "Staking: Redeem: negative amount {}",
        shares
    )?;
    if shares == 0 {
        return Ok(0);
    }

    let max = max_redeem(env, owner)?;
    validate!(
        env,
        shares <= max,
        StakingError::RedeemMoreThanMax,
        "Staking: Redeem: {} is more than max {}",
        shares,
        max
    )?;

    let mut state = get_state(env);
    let price = share_price(env, &state, &get_bonding_ledger(env))?;
    let assets = price.convert_to_assets(env, shares)?;

    pay_out(env, config, &mut state, owner, receiver, assets, shares)?;
    Ok(assets)
}

fn pay_out(
    env: &Env,
    config: &Config,
    state: &mut VaultState,
    owner: &Address,
    receiver: &Address,
    assets: i128,
    shares: i128,
) -> StakingResult {
    burn(env, owner, shares);
    TokenUtils::new(env).events().burn(owner.clone(), shares);

    state.staking_balance = state.staking_balance.safe_sub(assets, env)?;
    save_state(env, state);

    token::Client::new(env, &config.native_token).transfer(
        &env.current_contract_address(),
        receiver,
        &assets,
    );

    StakingEvents::withdraw(env, owner.clone(), receiver.clone(), assets, shares);
    Ok(())
}

/// Burns `shares` for a delayed withdrawal. The assets they are worth stay
/// bonded and become a liability to the withdrawal queue until exit
/// proceeds are settled.
pub fn burn_for_withdrawal(env: &Env, owner: &Address, shares: i128) -> StakingResult<i128> {
    validate!(
        env,
        shares > 0,
        StakingError::InvalidAmount,
        "Staking: Burn for withdrawal: amount must be positive"
    )?;

    let mut state = get_state(env);
    let price = share_price(env, &state, &get_bonding_ledger(env))?;
    let assets = price.convert_to_assets(env, shares)?;

    burn(env, owner, shares);
    TokenUtils::new(env).events().burn(owner.clone(), shares);

    state.withdrawal_liability = state.withdrawal_liability.safe_add(assets, env)?;
    save_state(env, &state);

    StakingEvents::withdrawal_request(env, owner.clone(), shares, assets);
    Ok(assets)
}
