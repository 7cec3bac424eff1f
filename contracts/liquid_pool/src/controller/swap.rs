use normal::{
    constants::BPS_DENOMINATOR, math::safe_math::SafeMath, math::share_math::mul_div_floor,
    types::SharePrice, validate,
};
use soroban_sdk::Env;

use crate::{
    errors::{LiquidPoolError, PoolResult},
    math::{meets_min_proportion, proportion_bps, swap_fee_bps},
    storage::{Config, PoolState, SwapQuote},
};

/// Prices a swap of `shares_in` vault shares for the base asset.
///
/// The fee is read off the curve at the proportion the pool would hold if
/// the trade paid out the gross value. The treasury keeps its cut of the
/// fee in shares, the rest stays in the pool.
pub fn quote_swap(
    env: &Env,
    config: &Config,
    state: &PoolState,
    price: &SharePrice,
    shares_in: i128,
) -> PoolResult<SwapQuote> {
    validate!(
        env,
        shares_in > 0,
        LiquidPoolError::AmountMustBePositive,
        "Liquid Pool: swap amount must be positive"
    )?;

    let gross_out = price.convert_to_assets(env, shares_in)?;
    let base_after_gross = state.base_reserve.safe_sub(gross_out, env)?;
    validate!(
        env,
        base_after_gross >= 0,
        LiquidPoolError::RequestedAmountReachMinProportion,
        "Liquid Pool: not enough base reserve to pay {}",
        gross_out
    )?;

    let share_value_after = price.convert_to_assets(env, state.share_reserve.safe_add(shares_in, env)?)?;
    let proportion = proportion_bps(
        env,
        base_after_gross,
        base_after_gross.safe_add(share_value_after, env)?,
    )?;

    let fee_bps = swap_fee_bps(
        proportion,
        config.min_base_proportion_bps,
        config.target_base_proportion_bps,
        config.min_fee_bps,
        config.max_fee_bps,
    );
    let fee_shares = mul_div_floor(env, shares_in, fee_bps as i128, BPS_DENOMINATOR)?;
    let base_out = price.convert_to_assets(env, shares_in.safe_sub(fee_shares, env)?)?;
    let treasury_shares = mul_div_floor(
        env,
        fee_shares,
        config.treasury_fee_bps as i128,
        BPS_DENOMINATOR,
    )?;

    let base_after = state.base_reserve.safe_sub(base_out, env)?;
    let shares_after = state
        .share_reserve
        .safe_add(shares_in, env)?
        .safe_sub(treasury_shares, env)?;
    let total_after = base_after.safe_add(price.convert_to_assets(env, shares_after)?, env)?;

    validate!(
        env,
        meets_min_proportion(base_after, total_after, config.min_base_proportion_bps),
        LiquidPoolError::RequestedAmountReachMinProportion,
        "Liquid Pool: swap would leave {} of {} as base reserve",
        base_after,
        total_after
    )?;

    Ok(SwapQuote {
        base_out,
        fee_bps,
        fee_shares,
        treasury_shares,
    })
}

/// Applies a quoted swap to the reserves.
pub fn apply_swap(env: &Env, state: &mut PoolState, shares_in: i128, quote: &SwapQuote) -> PoolResult {
    state.base_reserve = state.base_reserve.safe_sub(quote.base_out, env)?;
    state.share_reserve = state
        .share_reserve
        .safe_add(shares_in.safe_sub(quote.treasury_shares, env)?, env)?;
    Ok(())
}
