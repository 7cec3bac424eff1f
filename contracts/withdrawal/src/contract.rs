use soroban_sdk::{contract, contractimpl, contractmeta, log, panic_with_error, token, Address, Env};

use normal::{
    access_control::{AccessControl, Role},
    constants::{INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD},
    error::ErrorCode,
    get_then_update_id,
    interfaces::StakingVaultClient,
    math::{safe_math::SafeMath, safe_unwrap::SafeUnwrap},
    utils::{is_initialized, set_initialized},
    validate,
};

use crate::{
    errors::{WithdrawalError, WithdrawalResult},
    events::WithdrawalEvents,
    queue::WithdrawalQueueTrait,
    storage::{
        get_config, get_request, get_state, save_config, save_request, save_state, Config,
        QueueState, WithdrawalRequest,
    },
};

contractmeta!(
    key = "Description",
    val = "Delayed withdrawal queue settled from validator exit proceeds"
);

#[contract]
pub struct Withdrawal;

fn load_request(env: &Env, request_id: u64) -> WithdrawalResult<WithdrawalRequest> {
    get_request(env, request_id).ok_or_else(|| {
        log!(env, "Withdrawal: request {} not found", request_id);
        WithdrawalError::RequestNotFound
    })
}

fn check_claimable(
    env: &Env,
    config: &Config,
    state: &QueueState,
    request: &WithdrawalRequest,
) -> WithdrawalResult {
    validate!(
        env,
        !request.claimed,
        WithdrawalError::AlreadyClaimed,
        "Withdrawal: request {} already claimed",
        request.id
    )?;
    validate!(
        env,
        state.total_funded >= request.cumulative_end,
        WithdrawalError::RequestNotFunded,
        "Withdrawal: request {} needs {} funded, queue has {}",
        request.id,
        request.cumulative_end,
        state.total_funded
    )?;
    let unlock_ts = request.created_ts.saturating_add(config.claim_delay);
    validate!(
        env,
        env.ledger().timestamp() >= unlock_ts,
        WithdrawalError::ClaimDelayNotElapsed,
        "Withdrawal: request {} claimable from {}",
        request.id,
        unlock_ts
    )?;
    Ok(())
}

fn record_request(env: &Env, owner: &Address, assets: i128) -> WithdrawalResult<u64> {
    validate!(
        env,
        assets > 0,
        WithdrawalError::RequestTooSmall,
        "Withdrawal: shares are worth no assets"
    )?;

    let mut state = get_state(env);
    let request_id = get_then_update_id!(env, state, next_request_id);
    state.total_requested = state.total_requested.safe_add(assets, env)?;

    save_request(
        env,
        &WithdrawalRequest {
            id: request_id,
            owner: owner.clone(),
            assets,
            created_ts: env.ledger().timestamp(),
            cumulative_end: state.total_requested,
            claimed: false,
        },
    );
    save_state(env, &state);

    Ok(request_id)
}

#[contractimpl]
impl WithdrawalQueueTrait for Withdrawal {
    fn initialize(env: Env, admin: Address, staking: Address, native_token: Address) {
        if is_initialized(&env) {
            log!(
                &env,
                "Withdrawal: Initialize: initializing contract twice is not allowed"
            );
            panic_with_error!(&env, ErrorCode::AlreadyInitialized);
        }

        set_initialized(&env);
        AccessControl::new(&env).set_role(Role::Admin, &admin);
        save_config(
            &env,
            &Config {
                staking: staking.clone(),
                native_token,
                claim_delay: 0,
            },
        );
        save_state(&env, &QueueState::default());

        WithdrawalEvents::initialize(&env, admin, staking);
    }

    fn update_claim_delay(env: Env, sender: Address, claim_delay: u64) {
        AccessControl::new(&env).require_admin(&sender);
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let mut config = get_config(&env);
        config.claim_delay = claim_delay;
        save_config(&env, &config);
    }

    fn request_withdrawal(env: Env, owner: Address, shares: i128) -> u64 {
        owner.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        if shares <= 0 {
            log!(&env, "Withdrawal: share amount must be positive");
            panic_with_error!(&env, WithdrawalError::AmountMustBePositive);
        }

        let config = get_config(&env);
        let assets = StakingVaultClient::new(&env, &config.staking).burn_for_withdrawal(&owner, &shares);
        let request_id = record_request(&env, &owner, assets).safe_unwrap(&env);

        WithdrawalEvents::request(&env, owner, request_id, shares, assets);

        request_id
    }

    fn claim_withdrawal(env: Env, owner: Address, request_id: u64) -> i128 {
        owner.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env);
        let mut state = get_state(&env);
        let mut request = load_request(&env, request_id).safe_unwrap(&env);

        if request.owner != owner {
            log!(
                &env,
                "Withdrawal: {} does not own request {}",
                owner.clone(),
                request_id
            );
            panic_with_error!(&env, WithdrawalError::NotRequestOwner);
        }
        check_claimable(&env, &config, &state, &request).safe_unwrap(&env);

        request.claimed = true;
        state.record_claim(&env, request.assets).safe_unwrap(&env);
        save_request(&env, &request);
        save_state(&env, &state);

        token::Client::new(&env, &config.native_token).transfer(
            &env.current_contract_address(),
            &owner,
            &request.assets,
        );

        WithdrawalEvents::claim(&env, owner, request_id, request.assets);

        request.assets
    }

    fn fund(env: Env, amount: i128) {
        let config = get_config(&env);
        config.staking.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        if amount <= 0 {
            log!(&env, "Withdrawal: fund amount must be positive");
            panic_with_error!(&env, WithdrawalError::AmountMustBePositive);
        }

        let mut state = get_state(&env);
        state.record_funding(&env, amount).safe_unwrap(&env);
        save_state(&env, &state);

        WithdrawalEvents::fund(&env, amount, state.total_funded);
    }

    fn pending_shortfall(env: Env) -> i128 {
        get_state(&env).pending_shortfall()
    }

    fn get_request(env: Env, request_id: u64) -> WithdrawalRequest {
        load_request(&env, request_id).safe_unwrap(&env)
    }

    fn is_claimable(env: Env, request_id: u64) -> bool {
        match get_request(&env, request_id) {
            Some(request) => {
                check_claimable(&env, &get_config(&env), &get_state(&env), &request).is_ok()
            }
            None => false,
        }
    }

    fn query_state(env: Env) -> QueueState {
        get_state(&env)
    }
}
