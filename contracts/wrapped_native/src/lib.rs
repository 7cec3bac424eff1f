#![no_std]

mod contract;
mod errors;
mod events;
mod gateway;
mod storage;

pub use contract::{WrappedNative, WrappedNativeClient};
pub use errors::WrappedNativeError;
