//! Cross-contract interfaces on either side of the message bridge.

use soroban_sdk::{contractclient, Address, Bytes, Env};

use crate::{errors::UptimeError, types::L1Message};

/// Entry point a bridge endpoint on L1 exposes to senders.
#[contractclient(name = "MessengerClient")]
pub trait Messenger {
    /// Queues `payload` for delivery to `to`; returns the message index.
    fn send_message_to_l2(
        env: Env,
        from: Address,
        to: Address,
        payload: Bytes,
    ) -> Result<u32, UptimeError>;
}

/// Entry point an L2 contract exposes to the bridge.
#[contractclient(name = "L2ReceiverClient")]
pub trait L2Receiver {
    fn receive_message(env: Env, relayer: Address, message: L1Message) -> Result<(), UptimeError>;
}
