use normal::types::SharePrice;
use pretty_assertions::assert_eq;

use super::setup::{contract_error, PoolTest, UNIT};
use crate::errors::LiquidPoolError;

fn par() -> SharePrice {
    SharePrice::new(0, 0)
}

#[test]
fn lending_moves_base_reserve_to_the_vault() {
    let test = PoolTest::setup();
    test.liquidity_provider(10 * UNIT);

    test.pool
        .lend_to_vault(&(4 * UNIT), &(4 * UNIT), &0, &par());

    assert_eq!(test.pool.base_reserve(), 6 * UNIT);
    assert_eq!(test.pool.share_reserve(), 4 * UNIT);
    assert_eq!(test.native.balance(&test.pool.address), 6 * UNIT);
    assert_eq!(test.native.balance(&test.staking.address), 4 * UNIT);

    test.pool.repay_from_vault(&(4 * UNIT), &(4 * UNIT));
    assert_eq!(test.pool.base_reserve(), 10 * UNIT);
    assert_eq!(test.pool.share_reserve(), 0);
}

#[test]
fn lending_stops_at_the_base_floor() {
    let test = PoolTest::setup();
    test.liquidity_provider(10 * UNIT);
    test.pool
        .lend_to_vault(&(4 * UNIT), &(4 * UNIT), &0, &par());

    assert_eq!(
        test.pool
            .try_lend_to_vault(&(2 * UNIT), &(2 * UNIT), &0, &par()),
        Err(Ok(contract_error(
            LiquidPoolError::RequestedAmountReachMinProportion as u32
        )))
    );
    assert_eq!(
        test.pool
            .try_lend_to_vault(&(11 * UNIT), &(11 * UNIT), &0, &par()),
        Err(Ok(contract_error(
            LiquidPoolError::RequestedAmountReachMinProportion as u32
        )))
    );
    assert_eq!(test.pool.base_reserve(), 6 * UNIT);
}

#[test]
fn lending_honors_the_pool_guard() {
    let test = PoolTest::setup();
    test.liquidity_provider(10 * UNIT);

    assert_eq!(
        test.pool
            .try_lend_to_vault(&UNIT, &UNIT, &(10 * UNIT), &par()),
        Err(Ok(contract_error(LiquidPoolError::PoolGuardNotMet as u32)))
    );

    test.pool
        .lend_to_vault(&UNIT, &UNIT, &(9 * UNIT), &par());
    assert_eq!(test.pool.base_reserve(), 9 * UNIT);
}

#[test]
fn repayment_cannot_exceed_the_share_reserve() {
    let test = PoolTest::setup();
    test.liquidity_provider(10 * UNIT);
    test.pool
        .lend_to_vault(&(4 * UNIT), &(4 * UNIT), &0, &par());

    assert_eq!(
        test.pool.try_repay_from_vault(&(5 * UNIT), &(5 * UNIT)),
        Err(Ok(contract_error(
            LiquidPoolError::InsufficientShareReserve as u32
        )))
    );
    assert_eq!(
        test.pool.try_lend_to_vault(&0, &0, &0, &par()),
        Err(Ok(contract_error(
            LiquidPoolError::AmountMustBePositive as u32
        )))
    );
}
