//! Single-owner administration.
//!
//! The owner lives in the calling contract's instance storage. Every
//! privileged entry point passes the acting address in explicitly; it must
//! authenticate and match the stored owner.

use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

use crate::errors::UptimeError;

const OWNERSHIP_TRANSFERRED: Symbol = symbol_short!("own_xfer");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
enum OwnableKey {
    Owner,
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&OwnableKey::Owner)
}

pub fn initialize(env: &Env, owner: &Address) -> Result<(), UptimeError> {
    if is_initialized(env) {
        return Err(UptimeError::AlreadyInitialized.logged(env));
    }

    env.storage().instance().set(&OwnableKey::Owner, owner);
    env.events()
        .publish((OWNERSHIP_TRANSFERRED, owner.clone()), ());
    Ok(())
}

pub fn owner(env: &Env) -> Result<Address, UptimeError> {
    env.storage()
        .instance()
        .get(&OwnableKey::Owner)
        .ok_or(UptimeError::NotInitialized)
}

pub fn require_owner(env: &Env, caller: &Address) -> Result<(), UptimeError> {
    caller.require_auth();

    if owner(env)? != *caller {
        return Err(UptimeError::Unauthorized.logged(env));
    }
    Ok(())
}

/// Single-step transfer: the new owner takes effect immediately.
pub fn transfer_ownership(
    env: &Env,
    caller: &Address,
    new_owner: &Address,
) -> Result<(), UptimeError> {
    require_owner(env, caller)?;

    env.storage().instance().set(&OwnableKey::Owner, new_owner);
    env.events().publish(
        (OWNERSHIP_TRANSFERRED, new_owner.clone()),
        caller.clone(),
    );
    Ok(())
}
