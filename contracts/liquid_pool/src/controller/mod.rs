pub mod lending;
pub mod liquidity;
pub mod swap;
