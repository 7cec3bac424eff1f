use pretty_assertions::assert_eq;

use super::setup::{contract_error, PoolTest, UNIT};
use crate::{errors::LiquidPoolError, storage::SwapQuote};

#[test]
fn swap_in_a_deep_pool_pays_the_minimum_fee() {
    let test = PoolTest::setup();
    test.liquidity_provider(100 * UNIT);
    let user = test.share_holder(2 * UNIT);

    let base_out = test
        .pool
        .swap_shares_for_base_asset(&user, &(2 * UNIT), &0);

    assert_eq!(base_out, 19_986_000);
    assert_eq!(test.native.balance(&user), 19_986_000);
    assert_eq!(test.staking.balance(&user), 0);
    assert_eq!(test.staking.balance(&test.treasury), 3_500);
    assert_eq!(test.staking.balance(&test.pool.address), 19_996_500);
    assert_eq!(test.pool.share_reserve(), 19_996_500);
    assert_eq!(test.pool.base_reserve(), 100 * UNIT - 19_986_000);
    assert_eq!(test.native.balance(&test.pool.address), 100 * UNIT - 19_986_000);
}

#[test]
fn swap_fee_rises_as_the_pool_drains() {
    let test = PoolTest::setup();
    test.liquidity_provider(10 * UNIT);
    let user = test.share_holder(4 * UNIT);

    let quote = test.pool.quote_swap(&(4 * UNIT));
    assert_eq!(
        quote,
        SwapQuote {
            base_out: 38_656_000,
            fee_bps: 336,
            fee_shares: 1_344_000,
            treasury_shares: 336_000,
        }
    );

    let base_out = test
        .pool
        .swap_shares_for_base_asset(&user, &(4 * UNIT), &quote.base_out);
    assert_eq!(base_out, quote.base_out);
    assert_eq!(test.pool.share_reserve(), 4 * UNIT - 336_000);
    assert_eq!(test.staking.balance(&test.treasury), 336_000);
}

#[test]
fn larger_swaps_never_pay_a_lower_fee() {
    let test = PoolTest::setup();
    test.liquidity_provider(10 * UNIT);
    test.share_holder(5 * UNIT);

    let mut last_fee = 0;
    for amount in [UNIT / 10, UNIT, 2 * UNIT, 3 * UNIT, 4 * UNIT, 45 * UNIT / 10] {
        let fee_bps = test.pool.quote_swap(&amount).fee_bps;
        assert!(fee_bps >= last_fee);
        last_fee = fee_bps;
    }
}

#[test]
fn swap_below_the_floor_fails() {
    let test = PoolTest::setup();
    test.liquidity_provider(10 * UNIT);
    let user = test.share_holder(6 * UNIT);

    assert_eq!(
        test.pool
            .try_swap_shares_for_base_asset(&user, &(6 * UNIT), &0),
        Err(Ok(contract_error(
            LiquidPoolError::RequestedAmountReachMinProportion as u32
        )))
    );
    assert_eq!(test.pool.base_reserve(), 10 * UNIT);
    assert_eq!(test.staking.balance(&user), 6 * UNIT);
}

#[test]
fn swap_respects_the_minimum_output() {
    let test = PoolTest::setup();
    test.liquidity_provider(100 * UNIT);
    let user = test.share_holder(2 * UNIT);

    assert_eq!(
        test.pool
            .try_swap_shares_for_base_asset(&user, &(2 * UNIT), &(2 * UNIT)),
        Err(Ok(contract_error(LiquidPoolError::SwapMinOut as u32)))
    );
    assert_eq!(
        test.pool.try_swap_shares_for_base_asset(&user, &0, &0),
        Err(Ok(contract_error(
            LiquidPoolError::AmountMustBePositive as u32
        )))
    );
}
