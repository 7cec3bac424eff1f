mod lending;
mod liquidity;
mod setup;
mod swap;
