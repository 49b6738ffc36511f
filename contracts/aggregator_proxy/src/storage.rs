use soroban_sdk::{contracttype, Address, Env};
use uptime_common::UptimeError;

/// Where forwarded calls go, plus the upgrade trail.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProxyBinding {
    pub implementation: Address,
    pub previous_implementation: Option<Address>,
    pub version: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Binding,
}

pub fn get_binding(env: &Env) -> Result<ProxyBinding, UptimeError> {
    env.storage()
        .instance()
        .get(&DataKey::Binding)
        .ok_or(UptimeError::NotInitialized)
}

pub fn set_binding(env: &Env, binding: &ProxyBinding) {
    env.storage().instance().set(&DataKey::Binding, binding);
}
