use soroban_sdk::contracttype;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    LatestRoundId,
    Round(u64),
    L1Sender,
    Relayer,
    RecentMessages,
}

/// What an accepted status update did to the round history.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum UpdateOutcome {
    NewRound(u64),
    Refreshed(u64),
}
