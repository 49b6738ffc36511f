use soroban_sdk::{contracterror, log, Env, String};

pub const NOT_OWNER_REASON: &str = "Ownable: caller is not the owner";
pub const ACCESS_DENIED_REASON: &str = "AccessController: address does not have access";

/// Error codes shared by every contract in the workspace.
///
/// The codes are part of the wire contract: a failure relayed through the
/// proxy or the bridge reaches the caller with the same code it was raised
/// with.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum UptimeError {
    Unauthorized = 1,
    AccessDenied = 2,
    UnauthorizedSender = 3,
    MalformedPayload = 4,
    StaleUpdate = 5,
    RoundNotFound = 6,
    NotInitialized = 7,
    AlreadyInitialized = 8,
    InvalidStatus = 9,
    UnauthorizedRelayer = 10,
    ReservedSelector = 11,
    MessageNotFound = 12,
}

impl UptimeError {
    pub fn reason(&self) -> &'static str {
        match self {
            UptimeError::Unauthorized => NOT_OWNER_REASON,
            UptimeError::AccessDenied => ACCESS_DENIED_REASON,
            UptimeError::UnauthorizedSender => "Message validator: unexpected L1 sender",
            UptimeError::MalformedPayload => "Message validator: malformed payload",
            UptimeError::StaleUpdate => "Aggregator: update older than latest round",
            UptimeError::RoundNotFound => "Aggregator: round not found",
            UptimeError::NotInitialized => "Contract not initialized",
            UptimeError::AlreadyInitialized => "Contract already initialized",
            UptimeError::InvalidStatus => "Aggregator: invalid status",
            UptimeError::UnauthorizedRelayer => "Message validator: caller is not the relayer",
            UptimeError::ReservedSelector => "Proxy: selector is reserved",
            UptimeError::MessageNotFound => "Bridge: unknown message index",
        }
    }

    /// Records the reason in the diagnostic log and hands the error back, so
    /// rejections read `return Err(UptimeError::AccessDenied.logged(env))`.
    pub fn logged(self, env: &Env) -> Self {
        log!(env, "rejected", String::from_str(env, self.reason()));
        self
    }
}
