use soroban_sdk::{Address, Env, Symbol};

pub struct StakingEvents {}

impl StakingEvents {
    /// Emitted when the vault is initialized
    ///
    /// - topics - `["initialize", admin: Address]`
    /// - data - `[native_token: Address, treasury: Address]`
    pub fn initialize(env: &Env, admin: Address, native_token: Address, treasury: Address) {
        let topics = (Symbol::new(env, "initialize"), admin);
        env.events().publish(topics, (native_token, treasury));
    }

    /// - topics - `["update_config", sender: Address]`
    /// - data - ()
    pub fn update_config(env: &Env, sender: Address) {
        let topics = (Symbol::new(env, "update_config"), sender);
        env.events().publish(topics, ());
    }

    /// Emitted when a user deposits the native asset, directly or wrapped
    ///
    /// - topics - `["deposit", sender: Address, receiver: Address]`
    /// - data - `[assets: i128, shares: i128, shares_from_pool: i128]`
    pub fn deposit(
        env: &Env,
        sender: Address,
        receiver: Address,
        assets: i128,
        shares: i128,
        shares_from_pool: i128,
    ) {
        let topics = (Symbol::new(env, "deposit"), sender, receiver);
        env.events().publish(topics, (assets, shares, shares_from_pool));
    }

    /// Emitted on withdraw and redeem
    ///
    /// - topics - `["withdraw", owner: Address, receiver: Address]`
    /// - data - `[assets: i128, shares: i128]`
    pub fn withdraw(env: &Env, owner: Address, receiver: Address, assets: i128, shares: i128) {
        let topics = (Symbol::new(env, "withdraw"), owner, receiver);
        env.events().publish(topics, (assets, shares));
    }

    /// Emitted when the withdrawal queue burns shares for a delayed withdrawal
    ///
    /// - topics - `["withdrawal_request", owner: Address]`
    /// - data - `[shares: i128, assets: i128]`
    pub fn withdrawal_request(env: &Env, owner: Address, shares: i128, assets: i128) {
        let topics = (Symbol::new(env, "withdrawal_request"), owner);
        env.events().publish(topics, (shares, assets));
    }

    /// - topics - `["bond_validators", activator: Address]`
    /// - data - `[count: u32, amount_from_pool: i128, pool_shares: i128]`
    pub fn bond_validators(
        env: &Env,
        activator: Address,
        count: u32,
        amount_from_pool: i128,
        pool_shares: i128,
    ) {
        let topics = (Symbol::new(env, "bond_validators"), activator);
        env.events()
            .publish(topics, (count, amount_from_pool, pool_shares));
    }

    /// - topics - `["nodes_balance", updater: Address]`
    /// - data - `[previous: i128, new_total: i128, fee_shares: i128, rewards_per_second: i128]`
    pub fn nodes_balance(
        env: &Env,
        updater: Address,
        previous: i128,
        new_total: i128,
        fee_shares: i128,
        rewards_per_second: i128,
    ) {
        let topics = (Symbol::new(env, "nodes_balance"), updater);
        env.events().publish(
            topics,
            (previous, new_total, fee_shares, rewards_per_second),
        );
    }

    /// - topics - `["exit_request", activator: Address]`
    /// - data - `[count: u32]`
    pub fn exit_request(env: &Env, activator: Address, count: u32) {
        let topics = (Symbol::new(env, "exit_request"), activator);
        env.events().publish(topics, count);
    }

    /// - topics - `["exit_settlement", activator: Address]`
    /// - data - `[count: u32, proceeds: i128, to_queue: i128, to_pool: i128, to_idle: i128]`
    #[allow(clippy::too_many_arguments)]
    pub fn exit_settlement(
        env: &Env,
        activator: Address,
        count: u32,
        proceeds: i128,
        to_queue: i128,
        to_pool: i128,
        to_idle: i128,
    ) {
        let topics = (Symbol::new(env, "exit_settlement"), activator);
        env.events()
            .publish(topics, (count, proceeds, to_queue, to_pool, to_idle));
    }

    /// - topics - `["whitelist", account: Address]`
    /// - data - `[listed: bool]`
    pub fn whitelist(env: &Env, account: Address, listed: bool) {
        let topics = (Symbol::new(env, "whitelist"), account);
        env.events().publish(topics, listed);
    }

    /// - topics - `["whitelist_enabled", sender: Address]`
    /// - data - `[enabled: bool]`
    pub fn whitelist_enabled(env: &Env, sender: Address, enabled: bool) {
        let topics = (Symbol::new(env, "whitelist_enabled"), sender);
        env.events().publish(topics, enabled);
    }
}
