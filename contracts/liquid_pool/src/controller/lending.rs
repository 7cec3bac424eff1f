use normal::{math::safe_math::SafeMath, types::SharePrice, validate};
use soroban_sdk::Env;

use crate::{
    errors::{LiquidPoolError, PoolResult},
    math::meets_min_proportion,
    storage::{Config, PoolState},
};

/// Moves `amount` of base reserve out in exchange for `shares` minted by the
/// vault at `price`.
///
/// `pool_guard` is the smallest base reserve the vault accepts leaving
/// behind; zero disables the check.
pub fn lend_to_vault(
    env: &Env,
    config: &Config,
    state: &mut PoolState,
    amount: i128,
    shares: i128,
    pool_guard: i128,
    price: &SharePrice,
) -> PoolResult {
    validate!(
        env,
        amount > 0 && shares >= 0,
        LiquidPoolError::AmountMustBePositive,
        "Liquid Pool: invalid lend amount {} for {} shares",
        amount,
        shares
    )?;

    let base_after = state.base_reserve.safe_sub(amount, env)?;
    let shares_after = state.share_reserve.safe_add(shares, env)?;
    let total_after = if base_after >= 0 {
        base_after.safe_add(price.convert_to_assets(env, shares_after)?, env)?
    } else {
        0
    };

    validate!(
        env,
        base_after >= 0
            && meets_min_proportion(base_after, total_after, config.min_base_proportion_bps),
        LiquidPoolError::RequestedAmountReachMinProportion,
        "Liquid Pool: lending {} would leave {} of {} as base reserve",
        amount,
        base_after,
        total_after
    )?;
    validate!(
        env,
        pool_guard <= 0 || base_after >= pool_guard,
        LiquidPoolError::PoolGuardNotMet,
        "Liquid Pool: base reserve {} below guard {}",
        base_after,
        pool_guard
    )?;

    state.base_reserve = base_after;
    state.share_reserve = shares_after;
    Ok(())
}

/// The vault bought `shares` out of the inventory for `amount`.
pub fn repay_from_vault(env: &Env, state: &mut PoolState, amount: i128, shares: i128) -> PoolResult {
    validate!(
        env,
        amount >= 0 && shares >= 0,
        LiquidPoolError::AmountMustBePositive,
        "Liquid Pool: invalid repayment {} for {} shares",
        amount,
        shares
    )?;
    validate!(
        env,
        shares <= state.share_reserve,
        LiquidPoolError::InsufficientShareReserve,
        "Liquid Pool: {} shares requested, {} in reserve",
        shares,
        state.share_reserve
    )?;

    state.base_reserve = state.base_reserve.safe_add(amount, env)?;
    state.share_reserve = state.share_reserve.safe_sub(shares, env)?;
    Ok(())
}
