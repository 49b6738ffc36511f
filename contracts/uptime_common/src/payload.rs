//! Status message payload.
//!
//! Two 32-byte big-endian unsigned words, `status` then `timestamp`, the way
//! an L1 contract lays out a pair of uint256 arguments. Both values must fit
//! in 64 bits.

use soroban_sdk::{Bytes, Env};

use crate::{errors::UptimeError, types::SequencerStatus};

pub const WORD_LEN: usize = 32;
pub const PAYLOAD_LEN: usize = 2 * WORD_LEN;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct StatusUpdate {
    pub status: SequencerStatus,
    pub timestamp: u64,
}

pub fn encode(env: &Env, update: &StatusUpdate) -> Bytes {
    let mut buf = [0u8; PAYLOAD_LEN];
    write_word(&mut buf[..WORD_LEN], update.status.code());
    write_word(&mut buf[WORD_LEN..], update.timestamp);
    Bytes::from_array(env, &buf)
}

pub fn decode(payload: &Bytes) -> Result<StatusUpdate, UptimeError> {
    if payload.len() as usize != PAYLOAD_LEN {
        return Err(UptimeError::MalformedPayload);
    }

    let mut buf = [0u8; PAYLOAD_LEN];
    payload.copy_into_slice(&mut buf);

    let code = read_word(&buf[..WORD_LEN]).ok_or(UptimeError::MalformedPayload)?;
    let timestamp = read_word(&buf[WORD_LEN..]).ok_or(UptimeError::MalformedPayload)?;
    let status = SequencerStatus::from_code(code).map_err(|_| UptimeError::MalformedPayload)?;

    Ok(StatusUpdate { status, timestamp })
}

fn write_word(word: &mut [u8], value: u64) {
    word[WORD_LEN - 8..].copy_from_slice(&value.to_be_bytes());
}

// None when the word does not fit in a u64.
fn read_word(word: &[u8]) -> Option<u64> {
    let (high, low) = word.split_at(WORD_LEN - 8);
    if high.iter().any(|b| *b != 0) {
        return None;
    }
    let mut value = [0u8; 8];
    value.copy_from_slice(low);
    Some(u64::from_be_bytes(value))
}

#[cfg(test)]
mod test {
    use super::*;
    use soroban_sdk::Env;

    #[test]
    fn test_encode_layout() {
        let env = Env::default();
        let payload = encode(
            &env,
            &StatusUpdate {
                status: SequencerStatus::Down,
                timestamp: 0x0102,
            },
        );

        assert_eq!(payload.len() as usize, PAYLOAD_LEN);
        assert_eq!(payload.get(31), Some(1));
        assert_eq!(payload.get(62), Some(0x01));
        assert_eq!(payload.get(63), Some(0x02));
        assert_eq!(payload.get(0), Some(0));
    }

    #[test]
    fn test_decode_encoded_update() {
        let env = Env::default();
        let update = StatusUpdate {
            status: SequencerStatus::Up,
            timestamp: 1_700_000_000,
        };

        assert_eq!(decode(&encode(&env, &update)), Ok(update));
    }

    #[test]
    fn test_decode_rejects_wrong_length() {
        let env = Env::default();

        assert_eq!(
            decode(&Bytes::from_array(&env, &[0u8; 63])),
            Err(UptimeError::MalformedPayload)
        );
        assert_eq!(
            decode(&Bytes::new(&env)),
            Err(UptimeError::MalformedPayload)
        );
    }

    #[test]
    fn test_decode_rejects_unknown_status() {
        let env = Env::default();
        let mut buf = [0u8; PAYLOAD_LEN];
        buf[31] = 2;

        assert_eq!(
            decode(&Bytes::from_array(&env, &buf)),
            Err(UptimeError::MalformedPayload)
        );
    }

    #[test]
    fn test_decode_rejects_oversized_timestamp() {
        let env = Env::default();
        let mut buf = [0u8; PAYLOAD_LEN];
        buf[WORD_LEN + 23] = 1;

        assert_eq!(
            decode(&Bytes::from_array(&env, &buf)),
            Err(UptimeError::MalformedPayload)
        );
    }
}
