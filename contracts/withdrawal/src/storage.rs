use soroban_sdk::{contracttype, log, panic_with_error, Address, Env};

use normal::{
    constants::{PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD},
    error::ErrorCode,
    math::safe_math::SafeMath,
};

use crate::errors::WithdrawalResult;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Config,
    State,
    Request(u64),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub staking: Address,
    pub native_token: Address,
    /// Seconds a request must age before it can be claimed.
    pub claim_delay: u64,
}

pub fn save_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_config(env: &Env) -> Config {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .unwrap_or_else(|| {
            log!(env, "Withdrawal: Config not set");
            panic_with_error!(env, ErrorCode::NotInitialized)
        })
}

// ################################################################
//                              Queue
// ################################################################

/// Running totals of the FIFO queue. A request is funded once
/// `total_funded` reaches its `cumulative_end`.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct QueueState {
    pub next_request_id: u64,
    pub total_requested: i128,
    pub total_funded: i128,
    pub total_claimed: i128,
}

impl QueueState {
    pub fn pending_shortfall(&self) -> i128 {
        self.total_requested.saturating_sub(self.total_funded).max(0)
    }

    pub fn record_funding(&mut self, env: &Env, amount: i128) -> WithdrawalResult {
        self.total_funded = self.total_funded.safe_add(amount, env)?;
        Ok(())
    }

    pub fn record_claim(&mut self, env: &Env, assets: i128) -> WithdrawalResult {
        self.total_claimed = self.total_claimed.safe_add(assets, env)?;
        Ok(())
    }
}

pub fn save_state(env: &Env, state: &QueueState) {
    env.storage().instance().set(&DataKey::State, state);
}

pub fn get_state(env: &Env) -> QueueState {
    env.storage()
        .instance()
        .get(&DataKey::State)
        .unwrap_or_default()
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawalRequest {
    pub id: u64,
    pub owner: Address,
    pub assets: i128,
    pub created_ts: u64,
    pub cumulative_end: i128,
    pub claimed: bool,
}

pub fn save_request(env: &Env, request: &WithdrawalRequest) {
    let key = DataKey::Request(request.id);
    env.storage().persistent().set(&key, request);
    env.storage().persistent().extend_ttl(
        &key,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn get_request(env: &Env, id: u64) -> Option<WithdrawalRequest> {
    let key = DataKey::Request(id);
    let request = env.storage().persistent().get(&key);
    if request.is_some() {
        env.storage().persistent().extend_ttl(
            &key,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );
    }
    request
}
