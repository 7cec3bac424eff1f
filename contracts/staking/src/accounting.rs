use normal::{math::safe_math::SafeMath, token::read_total_supply, types::SharePrice, validate};
use soroban_sdk::Env;

use crate::{
    bonding_ledger::BondingLedger,
    errors::{StakingError, StakingResult},
    storage::VaultState,
};

/// Rewards accrued since the last balance report at the estimated rate.
pub fn accrued_rewards(env: &Env, state: &VaultState) -> StakingResult<i128> {
    match state.last_report_ts {
        Some(last_report_ts) => {
            let elapsed = env.ledger().timestamp().saturating_sub(last_report_ts) as i128;
            Ok(state.estimated_rewards_per_second.safe_mul(elapsed, env)?)
        }
        None => Ok(0),
    }
}

/// idle + bonded + accrued − owed to the withdrawal queue
pub fn total_assets(env: &Env, state: &VaultState, ledger: &BondingLedger) -> StakingResult<i128> {
    let total = state
        .staking_balance
        .safe_add(ledger.nodes_and_withdrawal_balance, env)?
        .safe_add(accrued_rewards(env, state)?, env)?
        .safe_sub(state.withdrawal_liability, env)?;
    Ok(total.max(0))
}

pub fn share_price(env: &Env, state: &VaultState, ledger: &BondingLedger) -> StakingResult<SharePrice> {
    Ok(SharePrice::new(
        total_assets(env, state, ledger)?,
        read_total_supply(env),
    ))
}

/// Price for minting new shares. Losses that outgrow what holders own
/// leave the queue liability unbacked, and new assets must not cover it.
pub fn minting_price(env: &Env, state: &VaultState, ledger: &BondingLedger) -> StakingResult<SharePrice> {
    let price = share_price(env, state, ledger)?;
    validate!(
        env,
        !price.is_worthless(),
        StakingError::VaultInsolvent,
        "Staking: no assets back {} outstanding shares",
        price.total_supply
    )?;
    Ok(price)
}
