use normal::error::ErrorCode;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum StakingError {
    DepositTooLow = 100,
    UserNotWhitelisted = 101,
    WithdrawMoreThanMax = 102,
    RedeemMoreThanMax = 103,
    EmptyValidatorSet = 104,
    InvalidPoolAmount = 105,
    NotEnoughToStake = 106,
    UpdateBalanceTimestampNotReached = 107,
    UpdateTooBig = 108,
    NotEnoughActiveValidators = 109,
    NotEnoughExitingValidators = 110,
    ProceedsExceedBondedBalance = 111,
    LiquidPoolNotSet = 112,
    WithdrawalNotSet = 113,
    InvalidAmount = 114,
    MathError = 115,
    VaultInsolvent = 116,
}

impl From<ErrorCode> for StakingError {
    fn from(_: ErrorCode) -> Self {
        StakingError::MathError
    }
}

pub type StakingResult<T = ()> = Result<T, StakingError>;
