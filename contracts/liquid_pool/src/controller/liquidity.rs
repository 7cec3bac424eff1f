use normal::{
    math::safe_math::SafeMath, math::share_math::mul_div_floor, types::SharePrice, validate,
};
use soroban_sdk::Env;

use crate::{
    errors::{LiquidPoolError, PoolResult},
    storage::PoolState,
};

/// Pool value: base reserve plus the share reserve at the vault's price.
pub fn total_pool_value(env: &Env, state: &PoolState, price: &SharePrice) -> PoolResult<i128> {
    let share_value = price.convert_to_assets(env, state.share_reserve)?;
    Ok(state.base_reserve.safe_add(share_value, env)?)
}

/// Pool shares minted for a deposit of `amount` base asset. The first
/// depositor receives shares 1:1.
pub fn pool_shares_for_deposit(
    env: &Env,
    state: &PoolState,
    price: &SharePrice,
    total_pool_shares: i128,
    amount: i128,
) -> PoolResult<i128> {
    validate!(
        env,
        amount > 0,
        LiquidPoolError::AmountMustBePositive,
        "Liquid Pool: deposit amount must be positive"
    )?;

    if total_pool_shares == 0 {
        return Ok(amount);
    }

    let total_value = total_pool_value(env, state, price)?;
    Ok(mul_div_floor(env, amount, total_pool_shares, total_value)?)
}

/// Pro-rata `(base_out, shares_out)` for burning `pool_shares`.
pub fn withdrawal_amounts(
    env: &Env,
    state: &PoolState,
    total_pool_shares: i128,
    pool_shares: i128,
) -> PoolResult<(i128, i128)> {
    validate!(
        env,
        pool_shares > 0,
        LiquidPoolError::AmountMustBePositive,
        "Liquid Pool: withdrawal amount must be positive"
    )?;
    validate!(
        env,
        pool_shares <= total_pool_shares,
        LiquidPoolError::InsufficientPoolShares,
        "Liquid Pool: {} pool shares requested, {} outstanding",
        pool_shares,
        total_pool_shares
    )?;

    let base_out = mul_div_floor(env, state.base_reserve, pool_shares, total_pool_shares)?;
    let shares_out = mul_div_floor(env, state.share_reserve, pool_shares, total_pool_shares)?;
    Ok((base_out, shares_out))
}

/// Books a liquidity deposit of `amount` base asset.
pub fn apply_deposit(env: &Env, state: &mut PoolState, amount: i128) -> PoolResult {
    state.base_reserve = state.base_reserve.safe_add(amount, env)?;
    Ok(())
}

/// Books a pro-rata withdrawal out of both reserves.
pub fn apply_withdrawal(
    env: &Env,
    state: &mut PoolState,
    base_out: i128,
    shares_out: i128,
) -> PoolResult {
    state.base_reserve = state.base_reserve.safe_sub(base_out, env)?;
    state.share_reserve = state.share_reserve.safe_sub(shares_out, env)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reserve_overflow_is_a_math_error() {
        let env = Env::default();
        let mut state = PoolState {
            base_reserve: i128::MAX,
            share_reserve: 0,
        };

        assert_eq!(
            apply_deposit(&env, &mut state, 1),
            Err(LiquidPoolError::MathError)
        );
        assert_eq!(
            apply_withdrawal(&env, &mut state, 0, 1),
            Err(LiquidPoolError::MathError)
        );
    }

    #[test]
    fn withdrawal_leaves_the_remainder_in_both_reserves() {
        let env = Env::default();
        let mut state = PoolState {
            base_reserve: 100,
            share_reserve: 40,
        };

        apply_withdrawal(&env, &mut state, 25, 10).unwrap();
        apply_deposit(&env, &mut state, 5).unwrap();

        assert_eq!(
            state,
            PoolState {
                base_reserve: 80,
                share_reserve: 30,
            }
        );
    }
}
