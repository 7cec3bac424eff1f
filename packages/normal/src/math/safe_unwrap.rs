use soroban_sdk::{log, panic_with_error, Env};

use crate::error::ErrorCode;

/// Turns a failed lookup or a contract error into a contract panic, so the
/// caller sees the underlying error code instead of a host trap.
pub trait SafeUnwrap {
    type Item;

    fn safe_unwrap(self, env: &Env) -> Self::Item;
}

impl<T> SafeUnwrap for Option<T> {
    type Item = T;

    #[track_caller]
    #[inline(always)]
    fn safe_unwrap(self, env: &Env) -> T {
        match self {
            Some(v) => v,
            None => {
                log!(env, "Unwrap error thrown at {}:{}", file!(), line!());
                panic_with_error!(env, ErrorCode::FailedUnwrap)
            }
        }
    }
}

impl<T, E> SafeUnwrap for Result<T, E>
where
    E: Into<soroban_sdk::Error>,
{
    type Item = T;

    #[track_caller]
    #[inline(always)]
    fn safe_unwrap(self, env: &Env) -> T {
        match self {
            Ok(v) => v,
            Err(err) => env.panic_with_error(err),
        }
    }
}
