use soroban_sdk::{Address, Env};

pub trait AssetGatewayTrait {
    fn initialize(env: Env, admin: Address, native_token: Address);

    /// Locks `amount` of the native asset and mints the same amount of the
    /// wrapped token to `from`.
    fn wrap(env: Env, from: Address, amount: i128);

    /// Burns `amount` of the wrapped token and releases the native asset.
    fn unwrap(env: Env, from: Address, amount: i128);

    /// Hands the gateway admin over to `new_admin`. Only the current admin
    /// may call this.
    fn set_admin(env: Env, new_admin: Address);

    fn admin(env: Env) -> Address;

    fn native_token(env: Env) -> Address;

    fn total_supply(env: Env) -> i128;
}
