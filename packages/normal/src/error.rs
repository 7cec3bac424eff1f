use soroban_sdk::contracterror;

/// Errors shared by every contract in the workspace. Contract specific
/// errors start at 100.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ErrorCode {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotAuthorized = 3,
    MissingRole = 4,
    MathError = 5,
    NegativeAmount = 6,
    InsufficientBalance = 7,
    InsufficientAllowance = 8,
    InvalidExpirationLedger = 9,
    InvalidBps = 10,
    FailedUnwrap = 11,
}

pub type NormalResult<T = ()> = Result<T, ErrorCode>;
