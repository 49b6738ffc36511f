use soroban_sdk::{contracttype, Address, Env};
use uptime_common::UptimeError;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Bridge,
    L2Feed,
}

pub fn get_bridge(env: &Env) -> Result<Address, UptimeError> {
    env.storage()
        .instance()
        .get(&DataKey::Bridge)
        .ok_or(UptimeError::NotInitialized)
}

pub fn set_bridge(env: &Env, bridge: &Address) {
    env.storage().instance().set(&DataKey::Bridge, bridge);
}

pub fn get_l2_feed(env: &Env) -> Result<Address, UptimeError> {
    env.storage()
        .instance()
        .get(&DataKey::L2Feed)
        .ok_or(UptimeError::NotInitialized)
}

pub fn set_l2_feed(env: &Env, l2_feed: &Address) {
    env.storage().instance().set(&DataKey::L2Feed, l2_feed);
}
