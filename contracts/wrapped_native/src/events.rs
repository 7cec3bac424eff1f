use soroban_sdk::{Address, Env, Symbol};

pub struct WrappedNativeEvents {}

impl WrappedNativeEvents {
    /// Emitted when the gateway is initialized
    ///
    /// - topics - `["initialize", admin: Address]`
    /// - data - `[native_token: Address]`
    pub fn initialize(env: &Env, admin: Address, native_token: Address) {
        let topics = (Symbol::new(env, "initialize"), admin);
        env.events().publish(topics, native_token);
    }

    /// - topics - `["wrap", from: Address]`
    /// - data - `[amount: i128]`
    pub fn wrap(env: &Env, from: Address, amount: i128) {
        let topics = (Symbol::new(env, "wrap"), from);
        env.events().publish(topics, amount);
    }

    /// - topics - `["unwrap", from: Address]`
    /// - data - `[amount: i128]`
    pub fn unwrap(env: &Env, from: Address, amount: i128) {
        let topics = (Symbol::new(env, "unwrap"), from);
        env.events().publish(topics, amount);
    }
}
