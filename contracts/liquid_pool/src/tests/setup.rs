use normal::constants::ONE_UNIT;
use normal_staking::{Staking, StakingClient};
use normal_wrapped_native::{WrappedNative, WrappedNativeClient};
use soroban_sdk::{
    testutils::Address as _,
    token::{StellarAssetClient, TokenClient},
    Address, Env,
};

use crate::contract::{LiquidUnstakePool, LiquidUnstakePoolClient};

pub const UNIT: i128 = ONE_UNIT;

pub struct PoolTest<'a> {
    pub env: Env,
    pub admin: Address,
    pub treasury: Address,
    pub native: TokenClient<'a>,
    pub native_admin: StellarAssetClient<'a>,
    pub staking: StakingClient<'a>,
    pub pool: LiquidUnstakePoolClient<'a>,
}

impl<'a> PoolTest<'a> {
    /// A vault with no validators, wired to a fresh pool. Vault shares stay
    /// at 1:1 unless a test moves the price.
    pub fn setup() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.budget().reset_unlimited();

        let admin = Address::generate(&env);
        let treasury = Address::generate(&env);

        let sac = env.register_stellar_asset_contract_v2(admin.clone());
        let native = TokenClient::new(&env, &sac.address());
        let native_admin = StellarAssetClient::new(&env, &sac.address());

        let wrapped = WrappedNativeClient::new(&env, &env.register(WrappedNative, ()));
        wrapped.initialize(&admin, &native.address);

        let staking = StakingClient::new(&env, &env.register(Staking, ()));
        staking.initialize(
            &admin,
            &native.address,
            &wrapped.address,
            &Address::generate(&env),
            &treasury,
            &admin,
            &admin,
        );

        let pool = LiquidUnstakePoolClient::new(&env, &env.register(LiquidUnstakePool, ()));
        pool.initialize(&admin, &staking.address, &native.address, &treasury);
        staking.update_liquid_pool(&admin, &pool.address);

        PoolTest {
            env,
            admin,
            treasury,
            native,
            native_admin,
            staking,
            pool,
        }
    }

    pub fn funded_user(&self, amount: i128) -> Address {
        let user = Address::generate(&self.env);
        self.native_admin.mint(&user, &amount);
        user
    }

    pub fn liquidity_provider(&self, amount: i128) -> Address {
        let provider = self.funded_user(amount);
        self.pool.deposit_native(&provider, &provider, &amount);
        provider
    }

    /// A fresh user holding `amount` of vault shares.
    pub fn share_holder(&self, amount: i128) -> Address {
        let user = self.funded_user(amount);
        self.staking.deposit_native(&user, &user, &amount);
        user
    }
}

pub fn contract_error(code: u32) -> soroban_sdk::Error {
    soroban_sdk::Error::from_contract_error(code)
}
