use soroban_sdk::{contracttype, log, panic_with_error, Address, Env};

use normal::{
    constants::{ONE_UNIT, PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD},
    error::ErrorCode,
};

use crate::bonding_ledger::BondingLedger;

pub const DEFAULT_MIN_DEPOSIT: i128 = ONE_UNIT / 100;
pub const DEFAULT_BONDING_UNIT: i128 = 32 * ONE_UNIT;
pub const DEFAULT_UPDATE_BALANCE_TIMELOCK: u64 = 4 * 60 * 60;
pub const DEFAULT_MAX_BALANCE_DELTA_BPS: u32 = 10;
pub const DEFAULT_REWARDS_FEE_BPS: u32 = 1_000;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Config,
    State,
    BondingLedger,
    Whitelisted(Address),
}

// ################################################################
//                             Config
// ################################################################

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub native_token: Address,
    pub wrapped_native: Address,
    pub deposit_contract: Address,
    pub treasury: Address,
    pub liquid_pool: Option<Address>,
    pub withdrawal: Option<Address>,
    pub min_deposit: i128,
    pub bonding_unit: i128,
    /// Seconds that must pass between two balance reports.
    pub update_balance_timelock: u64,
    /// Largest move of the reported balance accepted in one report.
    pub max_balance_delta_bps: u32,
    pub rewards_fee_bps: u32,
}

pub fn save_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_config(env: &Env) -> Config {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .unwrap_or_else(|| {
            log!(env, "Staking: Config not set");
            panic_with_error!(env, ErrorCode::NotInitialized)
        })
}

// ################################################################
//                              Vault
// ################################################################

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct VaultState {
    /// Native asset held by the vault and free to withdraw or bond.
    pub staking_balance: i128,
    pub last_report_ts: Option<u64>,
    pub estimated_rewards_per_second: i128,
    /// Assets owed to the withdrawal queue that are still bonded.
    pub withdrawal_liability: i128,
    pub whitelist_enabled: bool,
}

pub fn save_state(env: &Env, state: &VaultState) {
    env.storage().instance().set(&DataKey::State, state);
}

pub fn get_state(env: &Env) -> VaultState {
    env.storage()
        .instance()
        .get(&DataKey::State)
        .unwrap_or_default()
}

pub fn save_bonding_ledger(env: &Env, ledger: &BondingLedger) {
    env.storage().instance().set(&DataKey::BondingLedger, ledger);
}

pub fn get_bonding_ledger(env: &Env) -> BondingLedger {
    env.storage()
        .instance()
        .get(&DataKey::BondingLedger)
        .unwrap_or_default()
}

// ################################################################
//                            Whitelist
// ################################################################

pub fn is_whitelisted(env: &Env, account: &Address) -> bool {
    let key = DataKey::Whitelisted(account.clone());
    let listed = env.storage().persistent().get(&key).unwrap_or(false);
    if listed {
        env.storage().persistent().extend_ttl(
            &key,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );
    }
    listed
}

pub fn add_to_whitelist(env: &Env, account: &Address) {
    let key = DataKey::Whitelisted(account.clone());
    env.storage().persistent().set(&key, &true);
    env.storage().persistent().extend_ttl(
        &key,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn remove_from_whitelist(env: &Env, account: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::Whitelisted(account.clone()));
}
