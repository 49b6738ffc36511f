#![no_std]

use soroban_sdk::{
    contract, contractimpl, contractmeta, log, symbol_short, Address, BytesN, Env, String, Symbol,
};
use uptime_common::{
    access_control, ownable, AccessContext, L1Message, Round, SequencerStatus, UptimeError,
};

mod rounds;
mod storage;
mod types;
mod validator;

use storage::Storage;
use types::UpdateOutcome;
use validator::Delivery;

contractmeta!(
    key = "Description",
    val = "L2 sequencer uptime status feed fed by validated L1 messages"
);

pub const DESCRIPTION: &str = "L2 Sequencer Uptime Status Feed";
pub const TYPE_AND_VERSION: &str = "SequencerUptimeFeed 1.0.0";
pub const DECIMALS: u32 = 0;

const L1_SENDER_SET: Symbol = symbol_short!("l1_sender");
const RELAYER_SET: Symbol = symbol_short!("relayer");

#[contract]
pub struct SequencerUptimeFeed;

#[contractimpl]
impl SequencerUptimeFeed {
    /// Deploys the feed with round 1 carrying `initial_status`
    /// (0 = up, 1 = down).
    pub fn initialize(
        env: Env,
        initial_status: u32,
        owner_address: Address,
    ) -> Result<(), UptimeError> {
        let status = SequencerStatus::from_code(initial_status as u64)
            .map_err(|err| err.logged(&env))?;

        ownable::initialize(&env, &owner_address)?;
        rounds::record_initial_round(&env, status);
        Ok(())
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

    // Access control

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

    // Aggregator interface

    pub fn latest_round_data(env: Env, caller: Address) -> Result<Round, UptimeError> {
        access_control::require_reader(&env, &caller)?;
        Storage::latest_round(&env)
    }

    pub fn round_data(env: Env, caller: Address, round_id: u64) -> Result<Round, UptimeError> {
        access_control::require_reader(&env, &caller)?;
        Storage::get_round(&env, round_id).ok_or(UptimeError::RoundNotFound)
    }

    pub fn description(env: Env) -> String {
        String::from_str(&env, DESCRIPTION)
    }

    pub fn decimals(_env: Env) -> u32 {
        DECIMALS
    }

    pub fn type_and_version(env: Env) -> String {
        String::from_str(&env, TYPE_AND_VERSION)
    }

    // L1 -> L2 messaging

    pub fn set_l1_sender(
        env: Env,
        caller: Address,
        l1_sender: BytesN<20>,
    ) -> Result<(), UptimeError> {
        ownable::require_owner(&env, &caller)?;

        let previous = Storage::get_l1_sender(&env);
        Storage::set_l1_sender(&env, &l1_sender);
        env.events().publish((L1_SENDER_SET,), (previous, l1_sender));
        Ok(())
    }

    pub fn l1_sender(env: Env) -> Option<BytesN<20>> {
        Storage::get_l1_sender(&env)
    }

    /// Sets the bridge endpoint allowed to hand over L1 messages.
    pub fn set_relayer(env: Env, caller: Address, relayer: Address) -> Result<(), UptimeError> {
        ownable::require_owner(&env, &caller)?;

        let previous = Storage::get_relayer(&env);
        Storage::set_relayer(&env, &relayer);
        env.events().publish((RELAYER_SET,), (previous, relayer));
        Ok(())
    }

    pub fn relayer(env: Env) -> Option<Address> {
        Storage::get_relayer(&env)
    }

    /// Applies a status message delivered by the relayer. Duplicates of a
    /// recently applied message succeed without touching the rounds.
    pub fn receive_message(
        env: Env,
        relayer: Address,
        message: L1Message,
    ) -> Result<(), UptimeError> {
        match validator::process_message(&env, &relayer, &message)? {
            Delivery::Applied(UpdateOutcome::NewRound(round_id)) => {
                log!(&env, "status changed", round_id)
            }
            Delivery::Applied(UpdateOutcome::Refreshed(round_id)) => {
                log!(&env, "status confirmed", round_id)
            }
            Delivery::Duplicate => log!(&env, "duplicate message"),
        }
        Ok(())
    }
}
