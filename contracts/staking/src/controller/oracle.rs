use normal::{
    constants::BPS_DENOMINATOR,
    math::{safe_math::SafeMath, share_math::mul_div_floor},
    token::{mint, read_total_supply},
    validate,
};
use soroban_sdk::Env;
use soroban_token_sdk::TokenUtils;

use crate::{
    accounting::total_assets,
    errors::{StakingError, StakingResult},
    storage::{get_bonding_ledger, get_state, save_bonding_ledger, save_state, Config},
};

pub struct BalanceReport {
    pub previous: i128,
    pub fee_shares: i128,
    pub rewards_per_second: i128,
}

/// Replaces the tracked validator balance with `new_total`.
///
/// The first report may land at any time; later ones wait out the timelock.
/// A gain pays `rewards_fee_bps` of itself to the treasury as freshly
/// minted shares worth exactly that fee at the post-report price.
pub fn update_nodes_balance(env: &Env, config: &Config, new_total: i128) -> StakingResult<BalanceReport> {
    validate!(
        env,
        new_total >= 0,
        StakingError::InvalidAmount,
        "Staking: Update nodes balance: negative balance {}",
        new_total
    )?;

    let now = env.ledger().timestamp();
    let mut state = get_state(env);
    let mut ledger = get_bonding_ledger(env);

    if let Some(last_report_ts) = state.last_report_ts {
        let unlock_ts = last_report_ts.saturating_add(config.update_balance_timelock);
        validate!(
            env,
            now >= unlock_ts,
            StakingError::UpdateBalanceTimestampNotReached,
            "Staking: Update nodes balance: locked until {}",
            unlock_ts
        )?;
    }

    let previous = ledger.nodes_and_withdrawal_balance;
    let max_delta = mul_div_floor(
        env,
        previous,
        config.max_balance_delta_bps as i128,
        BPS_DENOMINATOR,
    )?;
    let delta = new_total.safe_sub(previous, env)?;
    validate!(
        env,
        delta.abs() <= max_delta,
        StakingError::UpdateTooBig,
        "Staking: Update nodes balance: delta {} exceeds max {}",
        delta,
        max_delta
    )?;

    let rewards_per_second = match state.last_report_ts {
        Some(last_report_ts) if delta > 0 && now > last_report_ts => {
            delta.safe_div((now - last_report_ts) as i128, env)?
        }
        _ => 0,
    };

    ledger.record_report(new_total);
    state.last_report_ts = Some(now);
    state.estimated_rewards_per_second = rewards_per_second;

    let mut fee_shares = 0;
    if delta > 0 && config.rewards_fee_bps > 0 {
        let fee_assets = mul_div_floor(env, delta, config.rewards_fee_bps as i128, BPS_DENOMINATOR)?;
        let total_after = total_assets(env, &state, &ledger)?;
        let supply = read_total_supply(env);

        fee_shares = if supply == 0 {
            fee_assets
        } else if total_after > fee_assets {
            mul_div_floor(env, fee_assets, supply, total_after.safe_sub(fee_assets, env)?)?
        } else {
            0
        };

        if fee_shares > 0 {
            mint(env, &config.treasury, fee_shares);
            TokenUtils::new(env).events().mint(
                env.current_contract_address(),
                config.treasury.clone(),
                fee_shares,
            );
        }
    }

    save_state(env, &state);
    save_bonding_ledger(env, &ledger);

    Ok(BalanceReport {
        previous,
        fee_shares,
        rewards_per_second,
    })
}
