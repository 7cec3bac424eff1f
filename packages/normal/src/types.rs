use soroban_sdk::{contracttype, BytesN};

/// Snapshot of the vault's backing used to convert between the native asset
/// and vault shares.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SharePrice {
    pub total_assets: i128,
    pub total_supply: i128,
}

/// Registration data for one validator bonded through the deposit contract.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ValidatorDescriptor {
    pub pubkey: BytesN<48>,
    pub withdrawal_credentials: BytesN<32>,
    pub signature: BytesN<96>,
    pub deposit_data_root: BytesN<32>,
}
