use soroban_sdk::{Address, Env, Symbol};

pub struct WithdrawalEvents {}

impl WithdrawalEvents {
    /// Emitted when the queue is initialized
    ///
    /// - topics - `["initialize", admin: Address]`
    /// - data - `[staking: Address]`
    pub fn initialize(env: &Env, admin: Address, staking: Address) {
        let topics = (Symbol::new(env, "initialize"), admin);
        env.events().publish(topics, staking);
    }

    /// - topics - `["request", owner: Address, request_id: u64]`
    /// - data - `[shares: i128, assets: i128]`
    pub fn request(env: &Env, owner: Address, request_id: u64, shares: i128, assets: i128) {
        let topics = (Symbol::new(env, "request"), owner, request_id);
        env.events().publish(topics, (shares, assets));
    }

    /// - topics - `["fund"]`
    /// - data - `[amount: i128, total_funded: i128]`
    pub fn fund(env: &Env, amount: i128, total_funded: i128) {
        env.events()
            .publish((Symbol::new(env, "fund"),), (amount, total_funded));
    }

    /// - topics - `["claim", owner: Address, request_id: u64]`
    /// - data - `[assets: i128]`
    pub fn claim(env: &Env, owner: Address, request_id: u64, assets: i128) {
        let topics = (Symbol::new(env, "claim"), owner, request_id);
        env.events().publish(topics, assets);
    }
}
