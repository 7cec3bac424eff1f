/// Returns `Ok(())` when the assertion holds, otherwise logs the error code
/// with its location and returns `Err($err)`.
#[macro_export]
macro_rules! validate {
    ($env:expr, $assert:expr, $err:expr) => {{
        if $assert {
            Ok(())
        } else {
            let error_code = $err;
            soroban_sdk::log!($env, "Error {} thrown at {}:{}", error_code as u32, file!(), line!());
            Err(error_code)
        }
    }};
    ($env:expr, $assert:expr, $err:expr, $($arg:tt)+) => {{
        if $assert {
            Ok(())
        } else {
            let error_code = $err;
            soroban_sdk::log!($env, "Error {} thrown at {}:{}", error_code as u32, file!(), line!());
            soroban_sdk::log!($env, $($arg)+);
            Err(error_code)
        }
    }};
}

/// Panics with `ErrorCode::InvalidBps` when any value falls outside 0..=10_000.
#[macro_export]
macro_rules! validate_bps {
    ($env:expr, $($value:expr),+) => {
        $(
            if $value > $crate::constants::MAX_BPS {
                soroban_sdk::log!(
                    $env,
                    "The value {} is out of range. Must be between 0 and {} bps.",
                    $value,
                    $crate::constants::MAX_BPS
                );
                soroban_sdk::panic_with_error!($env, $crate::error::ErrorCode::InvalidBps);
            }
        )+
    };
}

#[macro_export]
macro_rules! get_then_update_id {
    ($env:expr, $struct:expr, $property:ident) => {{
        let current_id = $struct.$property;
        $struct.$property = $crate::math::safe_math::SafeMath::safe_add(current_id, 1, $env)?;
        current_id
    }};
}
