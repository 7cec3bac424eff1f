use soroban_sdk::Env;

use normal::{constants::BPS_DENOMINATOR, error::NormalResult, math::share_math::mul_div_floor};

/// Share of `total` held as `base`, in basis points. An empty pool reports 0.
pub fn proportion_bps(env: &Env, base: i128, total: i128) -> NormalResult<i128> {
    if total <= 0 {
        return Ok(0);
    }
    mul_div_floor(env, base.max(0), BPS_DENOMINATOR, total)
}

/// `true` when `base` is at least `min_bps` of `total`.
pub fn meets_min_proportion(base: i128, total: i128, min_bps: u32) -> bool {
    base.checked_mul(BPS_DENOMINATOR)
        .zip(total.checked_mul(min_bps as i128))
        .map(|(lhs, rhs)| lhs >= rhs)
        .unwrap_or(false)
}

/// Swap fee for a trade that leaves the pool at `proportion_bps` base.
///
/// The fee is `max_fee_bps` at or below the floor, `min_fee_bps` at or
/// above the target, and linear in between.
pub fn swap_fee_bps(
    proportion_bps: i128,
    min_proportion_bps: u32,
    target_proportion_bps: u32,
    min_fee_bps: u32,
    max_fee_bps: u32,
) -> u32 {
    let floor = min_proportion_bps as i128;
    let target = target_proportion_bps as i128;

    if proportion_bps >= target {
        return min_fee_bps;
    }
    if proportion_bps <= floor {
        return max_fee_bps;
    }

    let fee_range = (max_fee_bps - min_fee_bps) as i128;
    let discount = fee_range * (proportion_bps - floor) / (target - floor);
    (max_fee_bps as i128 - discount) as u32
}
