use soroban_sdk::{contracttype, Env};

#[derive(Clone)]
#[contracttype]
enum InitKey {
    Initialized,
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&InitKey::Initialized)
        .unwrap_or(false)
}

pub fn set_initialized(env: &Env) {
    env.storage().instance().set(&InitKey::Initialized, &true);
}
