pub mod safe_math;
pub mod safe_unwrap;
pub mod share_math;
