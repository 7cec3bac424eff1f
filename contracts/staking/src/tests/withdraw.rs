use pretty_assertions::assert_eq;
use soroban_sdk::{testutils::Address as _, Address};

use super::setup::{contract_error, StakingTest, UNIT};
use crate::errors::StakingError;

#[test]
fn withdrawing_from_an_empty_vault() {
    let test = StakingTest::setup();
    let user = Address::generate(&test.env);

    assert_eq!(test.staking.max_withdraw(&user), 0);
    assert_eq!(test.staking.max_redeem(&user), 0);
    assert_eq!(
        test.staking.try_withdraw(&1, &user, &user),
        Err(Ok(contract_error(StakingError::WithdrawMoreThanMax as u32)))
    );
    assert_eq!(
        test.staking.try_redeem(&1, &user, &user),
        Err(Ok(contract_error(StakingError::RedeemMoreThanMax as u32)))
    );
    assert_eq!(test.staking.withdraw(&0, &user, &user), 0);
    assert_eq!(test.staking.redeem(&0, &user, &user), 0);
}

#[test]
fn negative_amounts_are_rejected() {
    let test = StakingTest::setup();
    let user = test.staker(UNIT);

    assert_eq!(
        test.staking.try_withdraw(&-1, &user, &user),
        Err(Ok(contract_error(StakingError::InvalidAmount as u32)))
    );
    assert_eq!(
        test.staking.try_redeem(&-1, &user, &user),
        Err(Ok(contract_error(StakingError::InvalidAmount as u32)))
    );
}

#[test]
fn withdraw_and_redeem_pay_from_idle_balance() {
    let test = StakingTest::setup();
    let user = test.staker(10 * UNIT);
    let receiver = Address::generate(&test.env);

    assert_eq!(test.staking.preview_withdraw(&(4 * UNIT)), 4 * UNIT);
    let burned = test.staking.withdraw(&(4 * UNIT), &receiver, &user);
    assert_eq!(burned, 4 * UNIT);
    assert_eq!(test.native.balance(&receiver), 4 * UNIT);

    assert_eq!(test.staking.preview_redeem(&(6 * UNIT)), 6 * UNIT);
    let paid = test.staking.redeem(&(6 * UNIT), &user, &user);
    assert_eq!(paid, 6 * UNIT);

    assert_eq!(test.native.balance(&user), 6 * UNIT);
    assert_eq!(test.staking.balance(&user), 0);
    assert_eq!(test.staking.total_supply(), 0);
    assert_eq!(test.staking.staking_balance(), 0);
    assert_eq!(test.staking.total_assets(), 0);
}

#[test]
fn withdrawals_are_capped_by_idle_balance() {
    let test = StakingTest::setup();
    let user = test.staker(40 * UNIT);
    test.bond(1, 0);

    assert_eq!(test.staking.max_withdraw(&user), 8 * UNIT);
    assert_eq!(test.staking.max_redeem(&user), 8 * UNIT);
    assert_eq!(
        test.staking.try_withdraw(&(9 * UNIT), &user, &user),
        Err(Ok(contract_error(StakingError::WithdrawMoreThanMax as u32)))
    );

    test.staking.redeem(&(8 * UNIT), &user, &user);
    assert_eq!(test.staking.balance(&user), 32 * UNIT);
    assert_eq!(test.staking.staking_balance(), 0);
    assert_eq!(test.staking.max_withdraw(&user), 0);
}
