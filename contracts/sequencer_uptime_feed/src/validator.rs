//! Authentication and decoding of inbound L1 messages.

use soroban_sdk::{symbol_short, Address, Env, Symbol};
use uptime_common::{payload, L1Message, UptimeError};

use crate::{rounds, storage::Storage, types::UpdateOutcome};

const MESSAGE_IGNORED: Symbol = symbol_short!("msg_ignrd");

/// Outcome of a message that passed authentication.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Delivery {
    Applied(UpdateOutcome),
    Duplicate,
}

pub fn process_message(
    env: &Env,
    relayer: &Address,
    message: &L1Message,
) -> Result<Delivery, UptimeError> {
    relayer.require_auth();
    match Storage::get_relayer(env) {
        Some(expected) if expected == *relayer => {}
        _ => return Err(UptimeError::UnauthorizedRelayer.logged(env)),
    }

    match Storage::get_l1_sender(env) {
        Some(expected) if expected == message.from_address => {}
        _ => return Err(UptimeError::UnauthorizedSender.logged(env)),
    }

    let update = payload::decode(&message.payload).map_err(|err| err.logged(env))?;
    let code = update.status.code();

    // Redelivery of a pair still inside the recent window.
    if Storage::is_applied(env, code, update.timestamp) {
        env.events()
            .publish((MESSAGE_IGNORED, code), update.timestamp);
        return Ok(Delivery::Duplicate);
    }

    let outcome = rounds::update_status(env, update.status, update.timestamp)?;
    Storage::set_applied(env, code, update.timestamp);

    Ok(Delivery::Applied(outcome))
}
