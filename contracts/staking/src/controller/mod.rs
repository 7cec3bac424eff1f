pub mod bonding;
pub mod deposit;
pub mod oracle;
pub mod settlement;
pub mod withdraw;
