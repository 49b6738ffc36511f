#![no_std]

use soroban_sdk::{
    contract, contractimpl, contractmeta, log, symbol_short, Address, Env, Symbol,
};
use uptime_common::{
    access_control, interface::MessengerClient, ownable, payload, payload::StatusUpdate,
    AccessContext, SequencerStatus, UptimeError,
};

mod storage;

contractmeta!(
    key = "Description",
    val = "Relays sequencer health transitions from L1 to the L2 uptime feed"
);

const STATUS_SENT: Symbol = symbol_short!("status");
const BRIDGE_SET: Symbol = symbol_short!("bridge");
const L2_FEED_SET: Symbol = symbol_short!("l2_feed");

#[contract]
pub struct UptimeValidator;

#[contractimpl]
impl UptimeValidator {
    pub fn initialize(
        env: Env,
        owner: Address,
        bridge: Address,
        l2_feed: Address,
    ) -> Result<(), UptimeError> {
        ownable::initialize(&env, &owner)?;
        storage::set_bridge(&env, &bridge);
        storage::set_l2_feed(&env, &l2_feed);
        Ok(())
    }

    /// Called by the L1 health observer after each of its rounds. Sends a
    /// status message to the L2 feed when the answer changed and reports
    /// whether one was sent. Answers follow the feed encoding, 0 = up and
    /// 1 = down.
    pub fn validate(
        env: Env,
        caller: Address,
        previous_round_id: u32,
        previous_answer: i128,
        current_round_id: u32,
        current_answer: i128,
    ) -> Result<bool, UptimeError> {
        access_control::require_reader(&env, &caller)?;

        if previous_answer == current_answer {
            log!(&env, "answer unchanged", previous_round_id, current_round_id);
            return Ok(false);
        }

        let status = SequencerStatus::from_answer(current_answer).map_err(|err| err.logged(&env))?;
        let update = StatusUpdate {
            status,
            timestamp: env.ledger().timestamp(),
        };

        let bridge = storage::get_bridge(&env)?;
        let l2_feed = storage::get_l2_feed(&env)?;
        let index = MessengerClient::new(&env, &bridge).send_message_to_l2(
            &env.current_contract_address(),
            &l2_feed,
            &payload::encode(&env, &update),
        );

        env.events().publish(
            (STATUS_SENT, current_round_id),
            (status.code(), update.timestamp, index),
        );
        Ok(true)
    }

    // Configuration

    pub fn set_bridge(env: Env, caller: Address, bridge: Address) -> Result<(), UptimeError> {
        ownable::require_owner(&env, &caller)?;
        storage::set_bridge(&env, &bridge);
        env.events().publish((BRIDGE_SET,), bridge);
        Ok(())
    }

    pub fn bridge(env: Env) -> Result<Address, UptimeError> {
        storage::get_bridge(&env)
    }

    pub fn set_l2_feed(env: Env, caller: Address, l2_feed: Address) -> Result<(), UptimeError> {
        ownable::require_owner(&env, &caller)?;
        storage::set_l2_feed(&env, &l2_feed);
        env.events().publish((L2_FEED_SET,), l2_feed);
        Ok(())
    }

    pub fn l2_feed(env: Env) -> Result<Address, UptimeError> {
        storage::get_l2_feed(&env)
    }

    // Ownable

    pub fn owner(env: Env) -> Result<Address, UptimeError> {
        ownable::owner(&env)
    }

    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), UptimeError> {
        ownable::transfer_ownership(&env, &caller, &new_owner)
    }

    // Access control over who may report health transitions

    pub fn add_access(env: Env, caller: Address, user: Address) -> Result<(), UptimeError> {
        access_control::add_access(&env, &caller, &user)
    }

    pub fn remove_access(env: Env, caller: Address, user: Address) -> Result<(), UptimeError> {
        access_control::remove_access(&env, &caller, &user)
    }

    pub fn has_access(env: Env, user: Address, data: Option<AccessContext>) -> bool {
        access_control::has_access(&env, &user, &data)
    }

    pub fn check_access(env: Env, user: Address) -> Result<(), UptimeError> {
        access_control::check_access(&env, &user)
    }

    pub fn enable_access_check(env: Env, caller: Address) -> Result<(), UptimeError> {
        access_control::enable_access_check(&env, &caller)
    }

    pub fn disable_access_check(env: Env, caller: Address) -> Result<(), UptimeError> {
        access_control::disable_access_check(&env, &caller)
    }
}
