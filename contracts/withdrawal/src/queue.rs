use soroban_sdk::{Address, Env};

use crate::storage::{QueueState, WithdrawalRequest};

pub trait WithdrawalQueueTrait {
    fn initialize(env: Env, admin: Address, staking: Address, native_token: Address);

    fn update_claim_delay(env: Env, sender: Address, claim_delay: u64);

    /// Burns `shares` at the current vault price and queues the assets
    /// they are worth. Returns the request id.
    fn request_withdrawal(env: Env, owner: Address, shares: i128) -> u64;

    /// Pays out a funded request.
    fn claim_withdrawal(env: Env, owner: Address, request_id: u64) -> i128;

    /// Records exit proceeds the vault has just transferred in.
    fn fund(env: Env, amount: i128);

    fn pending_shortfall(env: Env) -> i128;

    fn get_request(env: Env, request_id: u64) -> WithdrawalRequest;

    fn is_claimable(env: Env, request_id: u64) -> bool;

    fn query_state(env: Env) -> QueueState;
}
