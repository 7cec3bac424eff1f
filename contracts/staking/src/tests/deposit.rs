use pretty_assertions::assert_eq;

use super::setup::{contract_error, StakingTest, UNIT};
use crate::errors::StakingError;

#[test]
fn deposit_below_minimum_fails() {
    let test = StakingTest::setup();
    let user = test.funded_user(UNIT);

    assert_eq!(
        test.staking
            .try_deposit_native(&user, &user, &(UNIT / 100 - 1)),
        Err(Ok(contract_error(StakingError::DepositTooLow as u32)))
    );

    let shares = test.staking.deposit_native(&user, &user, &(UNIT / 100));
    assert_eq!(shares, UNIT / 100);
}

#[test]
fn native_deposits_mint_shares_one_to_one() {
    let test = StakingTest::setup();
    let user = test.funded_user(100 * UNIT);

    test.staking.deposit_native(&user, &user, &(32 * UNIT));
    test.staking.deposit_native(&user, &user, &(951 * UNIT / 100));

    let expected = 4_151 * UNIT / 100;
    assert_eq!(test.staking.balance(&user), expected);
    assert_eq!(test.staking.total_supply(), expected);
    assert_eq!(test.staking.total_assets(), expected);
    assert_eq!(test.staking.staking_balance(), expected);
    assert_eq!(test.native.balance(&test.staking.address), expected);
}

#[test]
fn deposit_can_credit_another_receiver() {
    let test = StakingTest::setup();
    let sender = test.funded_user(10 * UNIT);
    let receiver = test.funded_user(0);

    test.staking.deposit_native(&sender, &receiver, &(10 * UNIT));

    assert_eq!(test.staking.balance(&sender), 0);
    assert_eq!(test.staking.balance(&receiver), 10 * UNIT);
}

#[test]
fn wrapped_deposits_are_unwrapped_into_the_vault() {
    let test = StakingTest::setup();
    let user = test.funded_user(10 * UNIT);
    test.wrapped.wrap(&user, &(10 * UNIT));

    assert_eq!(
        test.staking.try_deposit(&user, &(UNIT / 100 - 1), &user),
        Err(Ok(contract_error(StakingError::DepositTooLow as u32)))
    );

    let shares = test.staking.deposit(&user, &(10 * UNIT), &user);

    assert_eq!(shares, 10 * UNIT);
    assert_eq!(test.staking.balance(&user), 10 * UNIT);
    assert_eq!(test.wrapped.balance(&user), 0);
    assert_eq!(test.wrapped.total_supply(), 0);
    assert_eq!(test.native.balance(&test.staking.address), 10 * UNIT);
    assert_eq!(test.staking.staking_balance(), 10 * UNIT);
}

#[test]
fn deposits_buy_the_pool_share_inventory_first() {
    let test = StakingTest::setup();
    test.liquidity_provider(64 * UNIT);
    test.staker(64 * UNIT);

    // the pool lends half of its reserve and is paid in vault shares
    test.bond(2, 32 * UNIT);
    assert_eq!(test.pool.share_reserve(), 32 * UNIT);
    assert_eq!(test.pool.base_reserve(), 32 * UNIT);
    assert_eq!(test.staking.total_supply(), 96 * UNIT);

    let user = test.funded_user(10 * UNIT);
    let shares = test.staking.deposit_native(&user, &user, &(10 * UNIT));

    assert_eq!(shares, 10 * UNIT);
    assert_eq!(test.staking.balance(&user), 10 * UNIT);
    assert_eq!(test.staking.total_supply(), 96 * UNIT);
    assert_eq!(test.staking.staking_balance(), 32 * UNIT);
    assert_eq!(test.pool.share_reserve(), 22 * UNIT);
    assert_eq!(test.pool.base_reserve(), 42 * UNIT);
    assert_eq!(test.staking.balance(&test.pool.address), 22 * UNIT);
    assert_eq!(test.native.balance(&test.pool.address), 42 * UNIT);
}

#[test]
fn deposit_larger_than_pool_inventory_mints_the_rest() {
    let test = StakingTest::setup();
    test.liquidity_provider(64 * UNIT);
    test.staker(64 * UNIT);
    test.bond(2, 32 * UNIT);

    let user = test.funded_user(40 * UNIT);
    test.staking.deposit_native(&user, &user, &(40 * UNIT));

    assert_eq!(test.staking.balance(&user), 40 * UNIT);
    assert_eq!(test.pool.share_reserve(), 0);
    assert_eq!(test.pool.base_reserve(), 64 * UNIT);
    assert_eq!(test.staking.total_supply(), 104 * UNIT);
    assert_eq!(test.staking.staking_balance(), 40 * UNIT);
    assert_eq!(test.native.balance(&test.staking.address), 40 * UNIT);
    assert_eq!(test.staking.total_assets(), 104 * UNIT);
}
