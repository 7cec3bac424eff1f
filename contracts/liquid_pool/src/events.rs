use soroban_sdk::{Address, Env, Symbol};

pub struct LiquidPoolEvents {}

impl LiquidPoolEvents {
    /// Emitted when the pool is initialized
    ///
    /// - topics - `["initialize", admin: Address]`
    /// - data - `[staking: Address, native_token: Address]`
    pub fn initialize(env: &Env, admin: Address, staking: Address, native_token: Address) {
        let topics = (Symbol::new(env, "initialize"), admin);
        env.events().publish(topics, (staking, native_token));
    }

    /// - topics - `["update_config", sender: Address]`
    /// - data - ()
    pub fn update_config(env: &Env, sender: Address) {
        let topics = (Symbol::new(env, "update_config"), sender);
        env.events().publish(topics, ());
    }

    /// Emitted when a liquidity provider adds base asset
    ///
    /// - topics - `["add_liquidity", sender: Address, receiver: Address]`
    /// - data - `[amount: i128, pool_shares: i128]`
    pub fn add_liquidity(env: &Env, sender: Address, receiver: Address, amount: i128, pool_shares: i128) {
        let topics = (Symbol::new(env, "add_liquidity"), sender, receiver);
        env.events().publish(topics, (amount, pool_shares));
    }

    /// - topics - `["remove_liquidity", sender: Address]`
    /// - data - `[pool_shares: i128, base_out: i128, shares_out: i128]`
    pub fn remove_liquidity(env: &Env, sender: Address, pool_shares: i128, base_out: i128, shares_out: i128) {
        let topics = (Symbol::new(env, "remove_liquidity"), sender);
        env.events().publish(topics, (pool_shares, base_out, shares_out));
    }

    /// Emitted when vault shares are sold to the pool
    ///
    /// - topics - `["swap", sender: Address]`
    /// - data - `[shares_in: i128, base_out: i128, fee_shares: i128, treasury_shares: i128]`
    pub fn swap(
        env: &Env,
        sender: Address,
        shares_in: i128,
        base_out: i128,
        fee_shares: i128,
        treasury_shares: i128,
    ) {
        let topics = (Symbol::new(env, "swap"), sender);
        env.events()
            .publish(topics, (shares_in, base_out, fee_shares, treasury_shares));
    }

    /// - topics - `["lend_to_vault"]`
    /// - data - `[amount: i128, shares: i128]`
    pub fn lend_to_vault(env: &Env, amount: i128, shares: i128) {
        env.events()
            .publish((Symbol::new(env, "lend_to_vault"),), (amount, shares));
    }

    /// - topics - `["repay_from_vault"]`
    /// - data - `[amount: i128, shares: i128]`
    pub fn repay_from_vault(env: &Env, amount: i128, shares: i128) {
        env.events()
            .publish((Symbol::new(env, "repay_from_vault"),), (amount, shares));
    }
}
