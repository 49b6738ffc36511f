//! Read-access list gated by the owner.
//!
//! Grants are persistent entries keyed by address. The owner may switch the
//! check off entirely, in which case every address has access.

use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

use crate::{errors::UptimeError, ownable, types::AccessContext};

const ACCESS_ADDED: Symbol = symbol_short!("acc_add");
const ACCESS_REMOVED: Symbol = symbol_short!("acc_rm");
const CHECK_ENABLED: Symbol = symbol_short!("chk_on");
const CHECK_DISABLED: Symbol = symbol_short!("chk_off");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
enum AccessKey {
    CheckDisabled,
    Access(Address),
}

pub fn add_access(env: &Env, caller: &Address, user: &Address) -> Result<(), UptimeError> {
    ownable::require_owner(env, caller)?;

    let key = AccessKey::Access(user.clone());
    if !env.storage().persistent().has(&key) {
        env.storage().persistent().set(&key, &true);
        env.events().publish((ACCESS_ADDED, user.clone()), ());
    }
    Ok(())
}

pub fn remove_access(env: &Env, caller: &Address, user: &Address) -> Result<(), UptimeError> {
    ownable::require_owner(env, caller)?;

    let key = AccessKey::Access(user.clone());
    if env.storage().persistent().has(&key) {
        env.storage().persistent().remove(&key);
        env.events().publish((ACCESS_REMOVED, user.clone()), ());
    }
    Ok(())
}

/// The base policy only looks at the grant list and the global switch;
/// `_data` is accepted for policies that authorize per read.
pub fn has_access(env: &Env, user: &Address, _data: &Option<AccessContext>) -> bool {
    if !check_enabled(env) {
        return true;
    }
    env.storage()
        .persistent()
        .has(&AccessKey::Access(user.clone()))
}

pub fn check_access(env: &Env, user: &Address) -> Result<(), UptimeError> {
    if !has_access(env, user, &None) {
        return Err(UptimeError::AccessDenied.logged(env));
    }
    Ok(())
}

/// Gate for reads that act on behalf of `reader`: the reader signs and must
/// hold a grant.
pub fn require_reader(env: &Env, reader: &Address) -> Result<(), UptimeError> {
    reader.require_auth();
    check_access(env, reader)
}

pub fn check_enabled(env: &Env) -> bool {
    !env.storage()
        .instance()
        .get::<_, bool>(&AccessKey::CheckDisabled)
        .unwrap_or(false)
}

pub fn enable_access_check(env: &Env, caller: &Address) -> Result<(), UptimeError> {
    ownable::require_owner(env, caller)?;

    if !check_enabled(env) {
        env.storage().instance().remove(&AccessKey::CheckDisabled);
        env.events().publish((CHECK_ENABLED,), ());
    }
    Ok(())
}

pub fn disable_access_check(env: &Env, caller: &Address) -> Result<(), UptimeError> {
    ownable::require_owner(env, caller)?;

    if check_enabled(env) {
        env.storage().instance().set(&AccessKey::CheckDisabled, &true);
        env.events().publish((CHECK_DISABLED,), ());
    }
    Ok(())
}
