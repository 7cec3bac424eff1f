use soroban_sdk::{contracttype, log, panic_with_error, Address, Env};

use normal::error::ErrorCode;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    NativeToken,
    Admin,
}

pub fn save_native_token(env: &Env, native_token: &Address) {
    env.storage()
        .instance()
        .set(&DataKey::NativeToken, native_token);
}

pub fn get_native_token(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::NativeToken)
        .unwrap_or_else(|| {
            log!(env, "Wrapped Native: Native token not set");
            panic_with_error!(env, ErrorCode::NotInitialized)
        })
}

pub fn save_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_admin(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .unwrap_or_else(|| {
            log!(env, "Wrapped Native: Admin not set");
            panic_with_error!(env, ErrorCode::NotInitialized)
        })
}
