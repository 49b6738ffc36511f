#![no_std]

//! Stand-in for the L1 -> L2 message bridge, used by end-to-end tests.
//!
//! Senders are registered with the L1 address the bridge stamps on their
//! messages. Delivery is manual: a test may deliver a message any number of
//! times and in any order, which is exactly what a real bridge is allowed
//! to do.

use soroban_sdk::{
    contract, contractimpl, contractmeta, contracttype, symbol_short, Address, Bytes, BytesN,
    Env, Symbol,
};
use uptime_common::{interface::L2ReceiverClient, L1Message, UptimeError};

contractmeta!(
    key = "Description",
    val = "Mock L1 to L2 message bridge with manual, repeatable delivery"
);

const MESSAGE_SENT: Symbol = symbol_short!("msg_sent");
const MESSAGE_DELIVERED: Symbol = symbol_short!("msg_dlvr");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PendingMessage {
    pub to: Address,
    pub message: L1Message,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Admin,
    Sender(Address),
    MessageCount,
    Message(u32),
}

#[contract]
pub struct BridgeMock;

#[contractimpl]
impl BridgeMock {
    pub fn initialize(env: Env, admin: Address) -> Result<(), UptimeError> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(UptimeError::AlreadyInitialized.logged(&env));
        }
        env.storage().instance().set(&DataKey::Admin, &admin);
        Ok(())
    }

    /// Binds an L1-side contract to the address its messages carry.
    pub fn register_sender(
        env: Env,
        admin: Address,
        l1_contract: Address,
        l1_address: BytesN<20>,
    ) -> Result<(), UptimeError> {
        Self::require_admin(&env, &admin)?;

        env.storage()
            .persistent()
            .set(&DataKey::Sender(l1_contract), &l1_address);
        Ok(())
    }

    pub fn send_message_to_l2(
        env: Env,
        from: Address,
        to: Address,
        payload: Bytes,
    ) -> Result<u32, UptimeError> {
        from.require_auth();

        let from_address: BytesN<20> = env
            .storage()
            .persistent()
            .get(&DataKey::Sender(from))
            .ok_or_else(|| UptimeError::UnauthorizedSender.logged(&env))?;

        let index = Self::message_count(env.clone());
        let pending = PendingMessage {
            to,
            message: L1Message {
                from_address,
                payload,
            },
        };
        env.storage()
            .persistent()
            .set(&DataKey::Message(index), &pending);
        env.storage()
            .instance()
            .set(&DataKey::MessageCount, &(index + 1));

        env.events().publish((MESSAGE_SENT, index), pending.to);
        Ok(index)
    }

    /// Hands message `index` to its target. Can be repeated.
    pub fn deliver(env: Env, index: u32) -> Result<(), UptimeError> {
        let pending = Self::message(env.clone(), index)
            .ok_or_else(|| UptimeError::MessageNotFound.logged(&env))?;

        L2ReceiverClient::new(&env, &pending.to)
            .receive_message(&env.current_contract_address(), &pending.message);

        env.events().publish((MESSAGE_DELIVERED, index), pending.to);
        Ok(())
    }

    pub fn message(env: Env, index: u32) -> Option<PendingMessage> {
        env.storage().persistent().get(&DataKey::Message(index))
    }

    pub fn message_count(env: Env) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::MessageCount)
            .unwrap_or(0)
    }

    fn require_admin(env: &Env, admin: &Address) -> Result<(), UptimeError> {
        admin.require_auth();

        let stored_admin: Option<Address> = env.storage().instance().get(&DataKey::Admin);
        match stored_admin {
            Some(stored) if stored == *admin => Ok(()),
            Some(_) => Err(UptimeError::Unauthorized.logged(env)),
            None => Err(UptimeError::NotInitialized.logged(env)),
        }
    }
}
