use normal::{
    interfaces::{LiquidPoolClient, WithdrawalQueueClient},
    math::safe_math::SafeMath,
    token::burn,
    validate,
};
use soroban_sdk::{token, Address, Env};
use soroban_token_sdk::TokenUtils;

use crate::{
    accounting::share_price,
    errors::{StakingError, StakingResult},
    storage::{get_bonding_ledger, get_state, save_bonding_ledger, save_state, Config},
};

/// Where settled exit proceeds ended up.
pub struct Settlement {
    pub to_queue: i128,
    pub to_pool: i128,
    pub to_idle: i128,
}

pub fn request_validator_exits(env: &Env, count: u32) -> StakingResult {
    let mut ledger = get_bonding_ledger(env);
    ledger.record_exit_request(env, count)?;
    save_bonding_ledger(env, &ledger);
    Ok(())
}

/// Books `proceeds` returned by `count` exited validators, paid in by `sender`.
///
/// Proceeds first cover what the withdrawal queue is still owed, then buy
/// back vault shares the liquidity pool took when lending for bonding, and
/// whatever is left becomes idle balance.
pub fn settle_validator_exits(
    env: &Env,
    config: &Config,
    sender: &Address,
    count: u32,
    proceeds: i128,
) -> StakingResult<Settlement> {
    validate!(
        env,
        proceeds >= 0,
        StakingError::InvalidAmount,
        "Staking: Settle exits: negative proceeds {}",
        proceeds
    )?;

    let vault = env.current_contract_address();
    let native = token::Client::new(env, &config.native_token);
    let mut state = get_state(env);
    let mut ledger = get_bonding_ledger(env);

    ledger.record_exit_settlement(env, count, proceeds)?;
    if proceeds > 0 {
        native.transfer(sender, &vault, &proceeds);
    }

    let mut remaining = proceeds;

    let mut to_queue = 0;
    if let Some(queue) = &config.withdrawal {
        let queue_client = WithdrawalQueueClient::new(env, queue);
        to_queue = remaining.min(queue_client.pending_shortfall()).max(0);
        if to_queue > 0 {
            native.transfer(&vault, queue, &to_queue);
            queue_client.fund(&to_queue);
            state.withdrawal_liability = state.withdrawal_liability.safe_sub(to_queue, env)?.max(0);
            remaining -= to_queue;
        }
    }

    // what is left is idle until part of it buys back pool inventory
    state.staking_balance = state.staking_balance.safe_add(remaining, env)?;

    let mut to_pool = 0;
    if let Some(pool) = &config.liquid_pool {
        let pool_client = LiquidPoolClient::new(env, pool);
        let inventory = pool_client.share_reserve();
        let price = share_price(env, &state, &ledger)?;
        if remaining > 0 && inventory > 0 && !price.is_worthless() {
            let wanted = price.convert_to_shares(env, remaining)?;
            let shares = wanted.min(inventory);
            to_pool = if shares == wanted {
                remaining
            } else {
                price.convert_to_assets(env, shares)?
            };

            if shares > 0 && to_pool > 0 {
                burn(env, pool, shares);
                TokenUtils::new(env).events().burn(pool.clone(), shares);
                native.transfer(&vault, pool, &to_pool);
                pool_client.repay_from_vault(&to_pool, &shares);
                state.staking_balance = state.staking_balance.safe_sub(to_pool, env)?;
            } else {
                to_pool = 0;
            }
        }
    }

    save_state(env, &state);
    save_bonding_ledger(env, &ledger);

    Ok(Settlement {
        to_queue,
        to_pool,
        to_idle: remaining - to_pool,
    })
}
