#![no_std]

pub mod access_control;
pub mod constants;
pub mod error;
pub mod interfaces;
pub mod macros;
pub mod math;
pub mod token;
pub mod types;
pub mod utils;
