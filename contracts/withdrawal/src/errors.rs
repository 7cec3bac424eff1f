use normal::error::ErrorCode;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum WithdrawalError {
    AmountMustBePositive = 300,
    RequestTooSmall = 301,
    RequestNotFound = 302,
    NotRequestOwner = 303,
    AlreadyClaimed = 304,
    RequestNotFunded = 305,
    ClaimDelayNotElapsed = 306,
    MathError = 307,
}

impl From<ErrorCode> for WithdrawalError {
    fn from(_: ErrorCode) -> Self {
        WithdrawalError::MathError
    }
}

pub type WithdrawalResult<T = ()> = Result<T, WithdrawalError>;
