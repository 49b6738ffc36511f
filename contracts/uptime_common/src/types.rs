use soroban_sdk::{contracttype, Bytes, BytesN, Symbol};

use crate::errors::UptimeError;

/// One recorded observation of sequencer status.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Round {
    pub round_id: u64,
    pub answer: i128,
    pub block_num: u32,
    pub started_at: u64,
    pub updated_at: u64,
}

/// Optional context handed to `has_access`.
///
/// The base policy ignores it; a stricter policy may only look at `selector`,
/// the name of the read being authorized.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccessContext {
    pub selector: Symbol,
}

/// A cross-layer message as handed over by the bridge. `from_address` is
/// stamped by the bridge, not by the sender.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct L1Message {
    pub from_address: BytesN<20>,
    pub payload: Bytes,
}

/// Sequencer health. Encoded as `Up = 0`, `Down = 1` everywhere: in the
/// initial status, in round answers and in message payloads.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SequencerStatus {
    Up,
    Down,
}

impl SequencerStatus {
    pub fn from_code(code: u64) -> Result<Self, UptimeError> {
        match code {
            0 => Ok(SequencerStatus::Up),
            1 => Ok(SequencerStatus::Down),
            _ => Err(UptimeError::InvalidStatus),
        }
    }

    pub fn from_answer(answer: i128) -> Result<Self, UptimeError> {
        match answer {
            0 => Ok(SequencerStatus::Up),
            1 => Ok(SequencerStatus::Down),
            _ => Err(UptimeError::InvalidStatus),
        }
    }

    pub const fn code(self) -> u64 {
        match self {
            SequencerStatus::Up => 0,
            SequencerStatus::Down => 1,
        }
    }

    pub const fn answer(self) -> i128 {
        self.code() as i128
    }
}
