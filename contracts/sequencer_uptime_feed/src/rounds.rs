//! Round state machine.
//!
//! A status change opens a new round; a repeated status only refreshes the
//! latest one. Timestamps never go backwards.

use soroban_sdk::{symbol_short, Env, Symbol};
use uptime_common::{Round, SequencerStatus, UptimeError};

use crate::{storage::Storage, types::UpdateOutcome};

const NEW_ROUND: Symbol = symbol_short!("new_round");
const ROUND_UPDATED: Symbol = symbol_short!("round_upd");

pub fn record_initial_round(env: &Env, status: SequencerStatus) -> Round {
    let timestamp = env.ledger().timestamp();
    let round = Round {
        round_id: 1,
        answer: status.answer(),
        block_num: env.ledger().sequence(),
        started_at: timestamp,
        updated_at: timestamp,
    };

    Storage::set_latest_round(env, &round);
    env.events()
        .publish((NEW_ROUND, round.round_id), (round.answer, round.started_at));
    round
}

pub fn update_status(
    env: &Env,
    status: SequencerStatus,
    timestamp: u64,
) -> Result<UpdateOutcome, UptimeError> {
    let mut latest = Storage::latest_round(env)?;

    if timestamp < latest.updated_at {
        return Err(UptimeError::StaleUpdate.logged(env));
    }

    if latest.answer == status.answer() {
        latest.updated_at = timestamp;
        latest.block_num = env.ledger().sequence();
        Storage::set_latest_round(env, &latest);

        env.events()
            .publish((ROUND_UPDATED, latest.round_id), (latest.answer, timestamp));
        return Ok(UpdateOutcome::Refreshed(latest.round_id));
    }

    let round = Round {
        round_id: latest.round_id + 1,
        answer: status.answer(),
        block_num: env.ledger().sequence(),
        started_at: timestamp,
        updated_at: timestamp,
    };
    Storage::set_latest_round(env, &round);

    env.events()
        .publish((NEW_ROUND, round.round_id), (round.answer, round.started_at));
    Ok(UpdateOutcome::NewRound(round.round_id))
}
