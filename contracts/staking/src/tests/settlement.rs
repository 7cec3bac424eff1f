use normal_withdrawal::WithdrawalError;
use pretty_assertions::assert_eq;

use super::setup::{contract_error, StakingTest, UNIT};
use crate::errors::StakingError;

#[test]
fn exits_cannot_exceed_active_validators() {
    let test = StakingTest::setup();
    test.staker(32 * UNIT);
    test.bond(1, 0);

    assert_eq!(
        test.staking.try_request_validator_exits(&test.activator, &2),
        Err(Ok(contract_error(
            StakingError::NotEnoughActiveValidators as u32
        )))
    );
    assert_eq!(
        test.staking.try_request_validator_exits(&test.activator, &0),
        Err(Ok(contract_error(
            StakingError::NotEnoughActiveValidators as u32
        )))
    );
    assert_eq!(
        test.staking
            .try_settle_validator_exits(&test.activator, &1, &(32 * UNIT)),
        Err(Ok(contract_error(
            StakingError::NotEnoughExitingValidators as u32
        )))
    );
}

#[test]
fn proceeds_cannot_exceed_the_bonded_balance() {
    let test = StakingTest::setup();
    test.staker(32 * UNIT);
    test.bond(1, 0);
    test.staking.request_validator_exits(&test.activator, &1);
    test.native_admin.mint(&test.activator, &(33 * UNIT));

    assert_eq!(
        test.staking
            .try_settle_validator_exits(&test.activator, &1, &(33 * UNIT)),
        Err(Ok(contract_error(
            StakingError::ProceedsExceedBondedBalance as u32
        )))
    );
    assert_eq!(test.staking.query_ledger().exiting_validators, 1);
}

#[test]
fn exit_proceeds_fund_the_withdrawal_queue_first() {
    let test = StakingTest::setup();
    let user = test.staker(32 * UNIT);
    test.bond(1, 0);

    let request_id = test.withdrawal.request_withdrawal(&user, &(10 * UNIT));
    assert_eq!(test.staking.withdrawal_liability(), 10 * UNIT);
    assert_eq!(test.staking.total_assets(), 22 * UNIT);
    assert_eq!(test.staking.total_supply(), 22 * UNIT);
    assert_eq!(test.withdrawal.pending_shortfall(), 10 * UNIT);
    assert!(!test.withdrawal.is_claimable(&request_id));
    assert_eq!(
        test.withdrawal.try_claim_withdrawal(&user, &request_id),
        Err(Ok(contract_error(WithdrawalError::RequestNotFunded as u32)))
    );

    test.staking.request_validator_exits(&test.activator, &1);
    test.native_admin.mint(&test.activator, &(32 * UNIT));
    test.staking
        .settle_validator_exits(&test.activator, &1, &(32 * UNIT));

    assert_eq!(test.withdrawal.pending_shortfall(), 0);
    assert_eq!(test.native.balance(&test.withdrawal.address), 10 * UNIT);
    assert_eq!(test.staking.withdrawal_liability(), 0);
    assert_eq!(test.staking.staking_balance(), 22 * UNIT);
    assert_eq!(test.staking.nodes_and_withdrawal_balance(), 0);
    assert_eq!(test.staking.total_assets(), 22 * UNIT);

    let ledger = test.staking.query_ledger();
    assert_eq!(ledger.exiting_validators, 0);
    assert_eq!(ledger.exited_validators, 1);

    assert!(test.withdrawal.is_claimable(&request_id));
    assert_eq!(
        test.withdrawal.claim_withdrawal(&user, &request_id),
        10 * UNIT
    );
    assert_eq!(test.native.balance(&user), 10 * UNIT);
    assert_eq!(test.staking.max_redeem(&user), 22 * UNIT);
}

#[test]
fn losses_beyond_holder_equity_stop_new_deposits() {
    let test = StakingTest::setup();
    let whale = test.staker(32 * UNIT);
    let minnow = test.staker(UNIT / 100);
    test.bond(1, 0);

    test.withdrawal.request_withdrawal(&whale, &(32 * UNIT));
    assert_eq!(test.staking.withdrawal_liability(), 32 * UNIT);

    let reported = 31_968 * UNIT / 1_000;
    test.staking.update_nodes_balance(&test.updater, &reported);
    assert_eq!(test.staking.total_assets(), 0);
    assert_eq!(test.staking.total_supply(), UNIT / 100);

    assert_eq!(test.staking.max_withdraw(&minnow), 0);
    assert_eq!(test.staking.max_redeem(&minnow), 0);
    assert_eq!(test.staking.redeem(&0, &minnow, &minnow), 0);
    assert_eq!(test.staking.withdraw(&0, &minnow, &minnow), 0);
    assert_eq!(
        test.staking.try_redeem(&1, &minnow, &minnow),
        Err(Ok(contract_error(StakingError::RedeemMoreThanMax as u32)))
    );

    let late = test.funded_user(UNIT);
    assert_eq!(
        test.staking.try_deposit_native(&late, &late, &UNIT),
        Err(Ok(contract_error(StakingError::VaultInsolvent as u32)))
    );
    assert_eq!(
        test.staking.try_preview_deposit(&UNIT),
        Err(Ok(contract_error(StakingError::VaultInsolvent as u32)))
    );
    assert_eq!(test.native.balance(&late), UNIT);

    // exits still settle and the queue keeps the unfunded remainder
    test.staking.request_validator_exits(&test.activator, &1);
    test.native_admin.mint(&test.activator, &reported);
    test.staking
        .settle_validator_exits(&test.activator, &1, &reported);

    assert_eq!(test.withdrawal.pending_shortfall(), 32 * UNIT / 1_000);
    assert_eq!(test.staking.withdrawal_liability(), 32 * UNIT / 1_000);
    assert_eq!(test.staking.staking_balance(), UNIT / 100);
    assert_eq!(test.staking.total_assets(), 0);
}
