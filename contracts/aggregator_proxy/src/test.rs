#![cfg(test)]

use super::*;
use sequencer_uptime_feed::{SequencerUptimeFeed, SequencerUptimeFeedClient};
use soroban_sdk::{
    testutils::{Address as _, Events},
    Env, TryFromVal,
};

fn create_feed<'a>(
    env: &Env,
    initial_status: u32,
    owner: &Address,
) -> SequencerUptimeFeedClient<'a> {
    let contract_id = env.register_contract(None, SequencerUptimeFeed);
    let client = SequencerUptimeFeedClient::new(env, &contract_id);
    client.initialize(&initial_status, owner);
    client
}

fn create_proxy<'a>(
    env: &Env,
    owner: &Address,
    implementation: &Address,
) -> AggregatorProxyClient<'a> {
    let contract_id = env.register_contract(None, AggregatorProxy);
    let client = AggregatorProxyClient::new(env, &contract_id);
    client.initialize(owner, implementation);
    client
}

fn create_test_env() -> (Env, Address, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let reader = Address::generate(&env);

    (env, owner, reader)
}

#[test]
fn test_interface_through_proxy() {
    let (env, owner, reader) = create_test_env();
    let feed = create_feed(&env, 0, &owner);
    let proxy = create_proxy(&env, &owner, &feed.address);
    feed.add_access(&owner, &reader);

    let round = proxy.latest_round_data(&reader);
    assert_eq!(round.answer, 0);
    assert_eq!(round.round_id, 1);
    assert_eq!(round, feed.latest_round_data(&reader));
    assert_eq!(proxy.round_data(&reader, &1), feed.round_data(&reader, &1));

    assert_eq!(proxy.description(), feed.description());
    assert_eq!(
        proxy.description(),
        String::from_str(&env, "L2 Sequencer Uptime Status Feed")
    );
    assert_eq!(proxy.decimals(), feed.decimals());
    assert_eq!(proxy.decimals(), 0);
    assert_eq!(proxy.type_and_version(), feed.type_and_version());
}

#[test]
fn test_access_denied_through_proxy() {
    let (env, owner, reader) = create_test_env();
    let feed = create_feed(&env, 0, &owner);
    let proxy = create_proxy(&env, &owner, &feed.address);

    let direct = feed.try_latest_round_data(&reader);
    assert_eq!(direct, Err(Ok(UptimeError::AccessDenied)));
    assert_eq!(proxy.try_latest_round_data(&reader), direct);
    assert_eq!(
        proxy.try_round_data(&reader, &1),
        Err(Ok(UptimeError::AccessDenied))
    );

    // Granting the proxy itself does not open the feed to its callers.
    feed.add_access(&owner, &proxy.address);
    assert_eq!(
        proxy.try_latest_round_data(&reader),
        Err(Ok(UptimeError::AccessDenied))
    );
}

#[test]
fn test_round_not_found_through_proxy() {
    let (env, owner, reader) = create_test_env();
    let feed = create_feed(&env, 0, &owner);
    let proxy = create_proxy(&env, &owner, &feed.address);
    feed.add_access(&owner, &reader);

    assert_eq!(
        proxy.try_round_data(&reader, &5),
        Err(Ok(UptimeError::RoundNotFound))
    );
}

#[test]
fn test_upgrade() {
    let (env, owner, reader) = create_test_env();
    let up_feed = create_feed(&env, 0, &owner);
    let down_feed = create_feed(&env, 1, &owner);
    up_feed.add_access(&owner, &reader);
    down_feed.add_access(&owner, &reader);

    let proxy = create_proxy(&env, &owner, &up_feed.address);
    assert_eq!(proxy.version(), 1);
    assert_eq!(proxy.previous_implementation(), None);
    assert_eq!(proxy.latest_round_data(&reader).answer, 0);

    assert_eq!(
        proxy.try_upgrade(&reader, &down_feed.address),
        Err(Ok(UptimeError::Unauthorized))
    );
    assert_eq!(proxy.implementation(), up_feed.address);
    assert_eq!(proxy.latest_round_data(&reader).answer, 0);

    proxy.upgrade(&owner, &down_feed.address);
    assert_eq!(proxy.implementation(), down_feed.address);
    assert_eq!(proxy.previous_implementation(), Some(up_feed.address.clone()));
    assert_eq!(proxy.version(), 2);
    assert_eq!(proxy.latest_round_data(&reader).answer, 1);
    assert_eq!(proxy.latest_round_data(&reader), down_feed.latest_round_data(&reader));
}

#[test]
fn test_proxy_ownership() {
    let (env, owner, reader) = create_test_env();
    let feed = create_feed(&env, 0, &owner);
    let proxy = create_proxy(&env, &owner, &feed.address);
    let new_owner = Address::generate(&env);

    assert_eq!(proxy.proxy_owner(), owner);
    assert_eq!(
        proxy.try_transfer_proxy_ownership(&reader, &reader),
        Err(Ok(UptimeError::Unauthorized))
    );

    proxy.transfer_proxy_ownership(&owner, &new_owner);
    assert_eq!(proxy.proxy_owner(), new_owner);
    assert_eq!(
        proxy.try_upgrade(&owner, &feed.address),
        Err(Ok(UptimeError::Unauthorized))
    );
    proxy.upgrade(&new_owner, &feed.address);
    assert_eq!(proxy.version(), 2);

    // The feed's owner is untouched by the proxy's.
    assert_eq!(feed.owner(), owner);
}

#[test]
fn test_initialize_twice() {
    let (env, owner, _) = create_test_env();
    let feed = create_feed(&env, 0, &owner);
    let proxy = create_proxy(&env, &owner, &feed.address);

    assert_eq!(
        proxy.try_initialize(&owner, &feed.address),
        Err(Ok(UptimeError::AlreadyInitialized))
    );
}

#[test]
fn test_forward_reads_and_writes() {
    let (env, owner, reader) = create_test_env();
    let feed = create_feed(&env, 0, &owner);
    let proxy = create_proxy(&env, &owner, &feed.address);

    let feed_owner = proxy.forward(&reader, &Symbol::new(&env, "owner"), &Vec::new(&env));
    assert_eq!(Address::try_from_val(&env, &feed_owner).unwrap(), owner);

    // Writes keep the caller's identity: only the feed owner can grant.
    let grant: Vec<Val> = vec![&env, reader.into_val(&env), reader.into_val(&env)];
    let denied = proxy.try_forward(&reader, &Symbol::new(&env, "add_access"), &grant);
    assert_eq!(denied.err(), Some(Ok(UptimeError::Unauthorized)));

    let grant: Vec<Val> = vec![&env, owner.into_val(&env), reader.into_val(&env)];
    proxy.forward(&owner, &Symbol::new(&env, "add_access"), &grant);
    assert!(feed.has_access(&reader, &None));
    assert_eq!(proxy.latest_round_data(&reader).round_id, 1);
}

#[test]
fn test_forward_rejects_management_selectors() {
    let (env, owner, _) = create_test_env();
    let feed = create_feed(&env, 0, &owner);
    let proxy = create_proxy(&env, &owner, &feed.address);

    for name in dispatch::MANAGEMENT_SELECTORS.iter() {
        let res = proxy.try_forward(&owner, &Symbol::new(&env, name), &Vec::new(&env));
        // Val has no equality, so compare the error side only.
        assert_eq!(res.err(), Some(Ok(UptimeError::ReservedSelector)));
    }
    assert_eq!(
        dispatch::route(&env, &Symbol::new(&env, "latest_round_data")),
        dispatch::Route::Forward
    );
    assert_eq!(
        dispatch::route(&env, &Symbol::new(&env, "upgrade")),
        dispatch::Route::Management
    );
}

#[test]
fn test_upgrade_event() {
    let (env, owner, reader) = create_test_env();
    let up_feed = create_feed(&env, 0, &owner);
    let down_feed = create_feed(&env, 1, &owner);
    let proxy = create_proxy(&env, &owner, &up_feed.address);

    let before = env.events().all().len();
    let _ = proxy.try_upgrade(&reader, &down_feed.address);
    assert_eq!(env.events().all().len(), before);

    proxy.upgrade(&owner, &down_feed.address);
    assert_eq!(env.events().all().len(), before + 1);

    let (contract, topics, data) = env.events().all().last().unwrap();
    let expected: Vec<Val> = (symbol_short!("upgraded"), 2u32).into_val(&env);
    assert_eq!(contract, proxy.address);
    assert_eq!(topics, expected);
    assert_eq!(Address::try_from_val(&env, &data).unwrap(), down_feed.address);
}
