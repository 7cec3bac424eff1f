use soroban_sdk::{contracttype, log, panic_with_error, symbol_short, Address, Env, Symbol};

use crate::constants::{PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD};
use crate::error::ErrorCode;

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Role {
    Admin = 0,
    Updater = 1,
    Activator = 2,
}

impl Role {
    pub fn as_symbol(&self) -> Symbol {
        match self {
            Role::Admin => symbol_short!("ADMIN"),
            Role::Updater => symbol_short!("UPDATER"),
            Role::Activator => symbol_short!("ACTIVATOR"),
        }
    }
}

#[derive(Clone)]
#[contracttype]
enum AccessControlKey {
    Member(Role, Address),
}

/// Role membership for a contract, kept in persistent storage under
/// `(role, account)` keys. Any number of accounts may hold a role.
pub struct AccessControl<'a> {
    env: &'a Env,
}

impl<'a> AccessControl<'a> {
    pub fn new(env: &'a Env) -> Self {
        AccessControl { env }
    }

    pub fn has_role(&self, role: Role, account: &Address) -> bool {
        let key = AccessControlKey::Member(role, account.clone());
        let member = self
            .env
            .storage()
            .persistent()
            .get::<_, bool>(&key)
            .unwrap_or(false);
        if member {
            self.env.storage().persistent().extend_ttl(
                &key,
                PERSISTENT_LIFETIME_THRESHOLD,
                PERSISTENT_BUMP_AMOUNT,
            );
        }
        member
    }

    /// Writes membership without any caller check. Used while initializing.
    pub fn set_role(&self, role: Role, account: &Address) {
        let key = AccessControlKey::Member(role, account.clone());
        self.env.storage().persistent().set(&key, &true);
        self.env.storage().persistent().extend_ttl(
            &key,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );
    }

    /// Requires `account` to authorize the call and to hold `role`.
    pub fn require_role(&self, role: Role, account: &Address) {
        account.require_auth();
        if !self.has_role(role, account) {
            log!(
                self.env,
                "AccessControl: account {} is missing role {}",
                account.clone(),
                role.as_symbol()
            );
            panic_with_error!(self.env, ErrorCode::MissingRole);
        }
    }

    pub fn require_admin(&self, account: &Address) {
        self.require_role(Role::Admin, account);
    }

    pub fn grant_role(&self, sender: &Address, role: Role, account: &Address) {
        self.require_admin(sender);
        self.set_role(role, account);
        self.env.events().publish(
            (Symbol::new(self.env, "role_granted"), role.as_symbol()),
            (account.clone(), sender.clone()),
        );
    }

    pub fn revoke_role(&self, sender: &Address, role: Role, account: &Address) {
        self.require_admin(sender);
        if role == Role::Admin && sender == account {
            log!(self.env, "AccessControl: admins cannot revoke their own role");
            panic_with_error!(self.env, ErrorCode::NotAuthorized);
        }
        self.env
            .storage()
            .persistent()
            .remove(&AccessControlKey::Member(role, account.clone()));
        self.env.events().publish(
            (Symbol::new(self.env, "role_revoked"), role.as_symbol()),
            (account.clone(), sender.clone()),
        );
    }
}
