use crate::types::DataKey;
use soroban_sdk::{Address, BytesN, Env, Vec};
use uptime_common::{Round, UptimeError};

/// Number of most recently applied `(status, timestamp)` pairs kept for
/// absorbing redelivery. A pair that has fallen out of the window and is
/// older than the latest round is rejected as stale instead, leaving the
/// rounds untouched either way.
pub const REDELIVERY_WINDOW: u32 = 32;

pub struct Storage;

impl Storage {
    pub fn latest_round_id(env: &Env) -> Result<u64, UptimeError> {
        env.storage()
            .instance()
            .get(&DataKey::LatestRoundId)
            .ok_or(UptimeError::NotInitialized)
    }

    pub fn get_round(env: &Env, round_id: u64) -> Option<Round> {
        env.storage().persistent().get(&DataKey::Round(round_id))
    }

    pub fn latest_round(env: &Env) -> Result<Round, UptimeError> {
        let round_id = Self::latest_round_id(env)?;
        Self::get_round(env, round_id).ok_or(UptimeError::RoundNotFound)
    }

    /// Writes the round and moves the latest pointer to it.
    pub fn set_latest_round(env: &Env, round: &Round) {
        env.storage()
            .persistent()
            .set(&DataKey::Round(round.round_id), round);
        env.storage()
            .instance()
            .set(&DataKey::LatestRoundId, &round.round_id);
    }

    pub fn get_l1_sender(env: &Env) -> Option<BytesN<20>> {
        env.storage().instance().get(&DataKey::L1Sender)
    }

    pub fn set_l1_sender(env: &Env, l1_sender: &BytesN<20>) {
        env.storage().instance().set(&DataKey::L1Sender, l1_sender);
    }

    pub fn get_relayer(env: &Env) -> Option<Address> {
        env.storage().instance().get(&DataKey::Relayer)
    }

    pub fn set_relayer(env: &Env, relayer: &Address) {
        env.storage().instance().set(&DataKey::Relayer, relayer);
    }

    pub fn recent_messages(env: &Env) -> Vec<(u64, u64)> {
        env.storage()
            .instance()
            .get(&DataKey::RecentMessages)
            .unwrap_or_else(|| Vec::new(env))
    }

    pub fn is_applied(env: &Env, status: u64, timestamp: u64) -> bool {
        Self::recent_messages(env)
            .iter()
            .any(|applied| applied == (status, timestamp))
    }

    /// Records the pair, evicting the oldest once the window is full.
    pub fn set_applied(env: &Env, status: u64, timestamp: u64) {
        let mut recent = Self::recent_messages(env);
        if recent.len() >= REDELIVERY_WINDOW {
            recent.pop_front();
        }
        recent.push_back((status, timestamp));
        env.storage()
            .instance()
            .set(&DataKey::RecentMessages, &recent);
    }
}
