use soroban_sdk::Env;

use crate::error::{ErrorCode, NormalResult};
use crate::math::safe_math::SafeMath;
use crate::types::SharePrice;
use crate::validate;

/// `x * y / denominator`, rounded down.
pub fn mul_div_floor(env: &Env, x: i128, y: i128, denominator: i128) -> NormalResult<i128> {
    validate!(
        env,
        x >= 0 && y >= 0 && denominator > 0,
        ErrorCode::MathError,
        "mul_div_floor operands must be non-negative with a positive denominator"
    )?;

    x.safe_mul(y, env)?.safe_div(denominator, env)
}

/// `x * y / denominator`, rounded up.
pub fn mul_div_ceil(env: &Env, x: i128, y: i128, denominator: i128) -> NormalResult<i128> {
    validate!(
        env,
        x >= 0 && y >= 0 && denominator > 0,
        ErrorCode::MathError,
        "mul_div_ceil operands must be non-negative with a positive denominator"
    )?;

    x.safe_mul(y, env)?.safe_div_ceil(denominator, env)
}

impl SharePrice {
    pub fn new(total_assets: i128, total_supply: i128) -> Self {
        SharePrice {
            total_assets,
            total_supply,
        }
    }

    /// An empty vault converts 1:1.
    pub fn is_genesis(&self) -> bool {
        self.total_supply == 0
    }

    /// Shares are outstanding but nothing backs them.
    pub fn is_worthless(&self) -> bool {
        self.total_supply > 0 && self.total_assets <= 0
    }

    pub fn convert_to_shares(&self, env: &Env, assets: i128) -> NormalResult<i128> {
        if self.is_genesis() {
            return Ok(assets);
        }
        mul_div_floor(env, assets, self.total_supply, self.total_assets)
    }

    pub fn convert_to_shares_ceil(&self, env: &Env, assets: i128) -> NormalResult<i128> {
        if self.is_genesis() {
            return Ok(assets);
        }
        mul_div_ceil(env, assets, self.total_supply, self.total_assets)
    }

    pub fn convert_to_assets(&self, env: &Env, shares: i128) -> NormalResult<i128> {
        if self.is_genesis() {
            return Ok(shares);
        }
        mul_div_floor(env, shares, self.total_assets, self.total_supply)
    }

    pub fn convert_to_assets_ceil(&self, env: &Env, shares: i128) -> NormalResult<i128> {
        if self.is_genesis() {
            return Ok(shares);
        }
        mul_div_ceil(env, shares, self.total_assets, self.total_supply)
    }
}
