use normal::error::ErrorCode;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LiquidPoolError {
    AmountMustBePositive = 200,
    RequestedAmountReachMinProportion = 201,
    SwapMinOut = 202,
    PoolGuardNotMet = 203,
    InsufficientShareReserve = 204,
    InsufficientPoolShares = 205,
    InvalidProportions = 206,
    InvalidFees = 207,
    MathError = 208,
}

impl From<ErrorCode> for LiquidPoolError {
    fn from(_: ErrorCode) -> Self {
        LiquidPoolError::MathError
    }
}

pub type PoolResult<T = ()> = Result<T, LiquidPoolError>;
