use normal::error::ErrorCode;
use pretty_assertions::assert_eq;

use super::setup::{contract_error, PoolTest, UNIT};
use crate::{errors::LiquidPoolError, storage::PoolInfo};

#[test]
#[should_panic(expected = "Error(Contract, #1)")]
fn initialize_twice_fails() {
    let test = PoolTest::setup();

    test.pool.initialize(
        &test.admin,
        &test.staking.address,
        &test.native.address,
        &test.treasury,
    );
}

#[test]
fn first_deposit_mints_pool_shares_one_to_one() {
    let test = PoolTest::setup();
    let provider = test.liquidity_provider(10 * UNIT);

    assert_eq!(test.pool.balance(&provider), 10 * UNIT);
    assert_eq!(
        test.pool.query_state(),
        PoolInfo {
            base_reserve: 10 * UNIT,
            share_reserve: 0,
            total_pool_shares: 10 * UNIT,
        }
    );
    assert_eq!(test.pool.total_assets(), 10 * UNIT);
    assert_eq!(test.pool.symbol(), soroban_sdk::String::from_str(&test.env, "nLUP"));

    assert_eq!(
        test.pool.try_deposit_native(&provider, &provider, &0),
        Err(Ok(contract_error(
            LiquidPoolError::AmountMustBePositive as u32
        )))
    );
}

#[test]
fn withdrawals_are_pro_rata_in_both_reserves() {
    let test = PoolTest::setup();
    let provider = test.liquidity_provider(10 * UNIT);
    let user = test.share_holder(4 * UNIT);
    test.pool
        .swap_shares_for_base_asset(&user, &(4 * UNIT), &0);

    // 61_344_000 base and 39_664_000 vault shares left in the pool
    let (base_out, shares_out) = test.pool.withdraw(&provider, &(5 * UNIT));
    assert_eq!(base_out, 30_672_000);
    assert_eq!(shares_out, 19_832_000);
    assert_eq!(test.native.balance(&provider), 30_672_000);
    assert_eq!(test.staking.balance(&provider), 19_832_000);
    assert_eq!(test.pool.balance(&provider), 5 * UNIT);
    assert_eq!(test.pool.base_reserve(), 30_672_000);
    assert_eq!(test.pool.share_reserve(), 19_832_000);

    assert_eq!(
        test.pool.try_withdraw(&provider, &(6 * UNIT)),
        Err(Ok(contract_error(
            LiquidPoolError::InsufficientPoolShares as u32
        )))
    );
}

#[test]
fn later_deposits_are_priced_on_pool_value() {
    let test = PoolTest::setup();
    test.liquidity_provider(10 * UNIT);
    let user = test.share_holder(4 * UNIT);
    test.pool
        .swap_shares_for_base_asset(&user, &(4 * UNIT), &0);

    // the pool is worth 101_008_000 for 100_000_000 pool shares
    let second = test.liquidity_provider(10 * UNIT);
    assert_eq!(test.pool.balance(&second), 99_002_059);
    assert_eq!(test.pool.total_supply(), 10 * UNIT + 99_002_059);
}

#[test]
fn pool_shares_cannot_be_burned_directly() {
    let test = PoolTest::setup();
    let provider = test.liquidity_provider(UNIT);

    assert_eq!(
        test.pool.try_burn(&provider, &UNIT),
        Err(Ok(contract_error(ErrorCode::NotAuthorized as u32)))
    );
}

#[test]
fn update_config_validates_the_fee_curve() {
    let test = PoolTest::setup();

    assert_eq!(
        test.pool.try_update_config(
            &test.admin,
            &Some(8_000),
            &None,
            &None,
            &None,
            &None,
            &None
        ),
        Err(Ok(contract_error(LiquidPoolError::InvalidProportions as u32)))
    );
    assert_eq!(
        test.pool.try_update_config(
            &test.admin,
            &None,
            &None,
            &Some(600),
            &None,
            &None,
            &None
        ),
        Err(Ok(contract_error(LiquidPoolError::InvalidFees as u32)))
    );
    assert_eq!(
        test.pool.try_update_config(
            &test.treasury,
            &None,
            &None,
            &None,
            &None,
            &None,
            &None
        ),
        Err(Ok(contract_error(ErrorCode::MissingRole as u32)))
    );

    test.pool.update_config(
        &test.admin,
        &Some(4_000),
        &Some(9_000),
        &Some(10),
        &Some(300),
        &Some(0),
        &None,
    );
    let config = test.pool.query_config();
    assert_eq!(config.min_base_proportion_bps, 4_000);
    assert_eq!(config.target_base_proportion_bps, 9_000);
    assert_eq!(config.min_fee_bps, 10);
    assert_eq!(config.max_fee_bps, 300);
    assert_eq!(config.treasury_fee_bps, 0);
}
