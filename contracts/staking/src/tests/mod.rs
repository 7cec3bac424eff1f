mod deposit;
mod settlement;
mod withdraw;
