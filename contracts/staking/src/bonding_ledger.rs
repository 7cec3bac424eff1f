use normal::{math::safe_math::SafeMath, validate};
use soroban_sdk::{contracttype, Env};

use crate::errors::{StakingError, StakingResult};

/// Aggregate bonded capital across validators, from activation through exit.
///
/// `nodes_and_withdrawal_balance` is the oracle-tracked balance of active
/// validators plus validators mid-exit. Bonding adds to it, reports replace
/// it, and settled exit proceeds leave it.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BondingLedger {
    pub nodes_and_withdrawal_balance: i128,
    pub total_nodes_activated: u32,
    pub active_validators: u32,
    pub exiting_validators: u32,
    pub exited_validators: u32,
}

impl BondingLedger {
    pub fn record_bonding(&mut self, env: &Env, count: u32, amount: i128) -> StakingResult {
        self.nodes_and_withdrawal_balance = self.nodes_and_withdrawal_balance.safe_add(amount, env)?;
        self.total_nodes_activated = self.total_nodes_activated.safe_add(count, env)?;
        self.active_validators = self.active_validators.safe_add(count, env)?;
        Ok(())
    }

    pub fn record_report(&mut self, new_total: i128) -> i128 {
        let previous = self.nodes_and_withdrawal_balance;
        self.nodes_and_withdrawal_balance = new_total;
        previous
    }

    pub fn record_exit_request(&mut self, env: &Env, count: u32) -> StakingResult {
        validate!(
            env,
            count > 0 && count <= self.active_validators,
            StakingError::NotEnoughActiveValidators,
            "Staking: {} exits requested with {} active validators",
            count,
            self.active_validators
        )?;

        self.active_validators -= count;
        self.exiting_validators = self.exiting_validators.safe_add(count, env)?;
        Ok(())
    }

    pub fn record_exit_settlement(&mut self, env: &Env, count: u32, proceeds: i128) -> StakingResult {
        validate!(
            env,
            count <= self.exiting_validators,
            StakingError::NotEnoughExitingValidators,
            "Staking: {} exits settled with {} exiting validators",
            count,
            self.exiting_validators
        )?;
        validate!(
            env,
            proceeds >= 0 && proceeds <= self.nodes_and_withdrawal_balance,
            StakingError::ProceedsExceedBondedBalance,
            "Staking: proceeds {} exceed bonded balance {}",
            proceeds,
            self.nodes_and_withdrawal_balance
        )?;

        self.exiting_validators -= count;
        self.exited_validators = self.exited_validators.safe_add(count, env)?;
        self.nodes_and_withdrawal_balance -= proceeds;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use normal::constants::ONE_UNIT;
    use pretty_assertions::assert_eq;

    #[test]
    fn bonding_then_full_exit_cycle() {
        let env = Env::default();
        let mut ledger = BondingLedger::default();

        ledger.record_bonding(&env, 2, 64 * ONE_UNIT).unwrap();
        ledger.record_exit_request(&env, 1).unwrap();
        ledger.record_exit_settlement(&env, 1, 32 * ONE_UNIT).unwrap();

        assert_eq!(
            ledger,
            BondingLedger {
                nodes_and_withdrawal_balance: 32 * ONE_UNIT,
                total_nodes_activated: 2,
                active_validators: 1,
                exiting_validators: 0,
                exited_validators: 1,
            }
        );
    }

    #[test]
    fn exits_are_bounded_by_validator_counts() {
        let env = Env::default();
        let mut ledger = BondingLedger::default();
        ledger.record_bonding(&env, 1, 32 * ONE_UNIT).unwrap();

        assert_eq!(
            ledger.record_exit_request(&env, 2),
            Err(StakingError::NotEnoughActiveValidators)
        );
        assert_eq!(
            ledger.record_exit_request(&env, 0),
            Err(StakingError::NotEnoughActiveValidators)
        );
        assert_eq!(
            ledger.record_exit_settlement(&env, 1, ONE_UNIT),
            Err(StakingError::NotEnoughExitingValidators)
        );
    }

    #[test]
    fn proceeds_cannot_exceed_tracked_balance() {
        let env = Env::default();
        let mut ledger = BondingLedger::default();
        ledger.record_bonding(&env, 1, 32 * ONE_UNIT).unwrap();
        ledger.record_exit_request(&env, 1).unwrap();

        assert_eq!(
            ledger.record_exit_settlement(&env, 1, 33 * ONE_UNIT),
            Err(StakingError::ProceedsExceedBondedBalance)
        );
        assert_eq!(ledger.nodes_and_withdrawal_balance, 32 * ONE_UNIT);
    }

    #[test]
    fn report_replaces_tracked_balance() {
        let mut ledger = BondingLedger::default();
        ledger.nodes_and_withdrawal_balance = 640;

        assert_eq!(ledger.record_report(641), 640);
        assert_eq!(ledger.nodes_and_withdrawal_balance, 641);
    }
}
