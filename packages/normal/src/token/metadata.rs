use soroban_sdk::{Env, String};
use soroban_token_sdk::{metadata::TokenMetadata, TokenUtils};

use crate::constants::TOKEN_DECIMALS;

pub fn write_metadata(env: &Env, name: &str, symbol: &str) {
    TokenUtils::new(env).metadata().set_metadata(&TokenMetadata {
        decimal: TOKEN_DECIMALS,
        name: String::from_str(env, name),
        symbol: String::from_str(env, symbol),
    });
}

pub fn read_decimal(env: &Env) -> u32 {
    TokenUtils::new(env).metadata().get_metadata().decimal
}

pub fn read_name(env: &Env) -> String {
    TokenUtils::new(env).metadata().get_metadata().name
}

pub fn read_symbol(env: &Env) -> String {
    TokenUtils::new(env).metadata().get_metadata().symbol
}
