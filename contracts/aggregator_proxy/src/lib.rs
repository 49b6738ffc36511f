#![no_std]

use soroban_sdk::{
    contract, contractimpl, contractmeta, symbol_short, vec, Address, Env, IntoVal, String,
    Symbol, Val, Vec,
};
use uptime_common::{ownable, Round, UptimeError};

mod dispatch;
mod storage;

use dispatch::Route;
use storage::ProxyBinding;

contractmeta!(
    key = "Description",
    val = "Upgradeable proxy in front of a round-based aggregator"
);

const UPGRADED: Symbol = symbol_short!("upgraded");

#[contract]
pub struct AggregatorProxy;

#[contractimpl]
impl AggregatorProxy {
    pub fn initialize(env: Env, owner: Address, address: Address) -> Result<(), UptimeError> {
        ownable::initialize(&env, &owner)?;
        storage::set_binding(
            &env,
            &ProxyBinding {
                implementation: address,
                previous_implementation: None,
                version: 1,
            },
        );
        Ok(())
    }

    // Management

    pub fn proxy_owner(env: Env) -> Result<Address, UptimeError> {
        ownable::owner(&env)
    }

    pub fn transfer_proxy_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), UptimeError> {
        ownable::transfer_ownership(&env, &caller, &new_owner)
    }

    pub fn implementation(env: Env) -> Result<Address, UptimeError> {
        Ok(storage::get_binding(&env)?.implementation)
    }

    pub fn previous_implementation(env: Env) -> Result<Option<Address>, UptimeError> {
        Ok(storage::get_binding(&env)?.previous_implementation)
    }

    pub fn version(env: Env) -> Result<u32, UptimeError> {
        Ok(storage::get_binding(&env)?.version)
    }

    /// Points the proxy at `new_implementation`; the next forwarded call
    /// already goes there.
    pub fn upgrade(
        env: Env,
        caller: Address,
        new_implementation: Address,
    ) -> Result<(), UptimeError> {
        ownable::require_owner(&env, &caller)?;

        let binding = storage::get_binding(&env)?;
        let upgraded = ProxyBinding {
            implementation: new_implementation.clone(),
            previous_implementation: Some(binding.implementation),
            version: binding.version + 1,
        };
        storage::set_binding(&env, &upgraded);

        env.events()
            .publish((UPGRADED, upgraded.version), new_implementation);
        Ok(())
    }

    /// Default arm of the dispatch table: invokes `selector` on the
    /// implementation with `args` as given. The implementation sees the
    /// principal named in `args`, who must have signed this call.
    pub fn forward(
        env: Env,
        caller: Address,
        selector: Symbol,
        args: Vec<Val>,
    ) -> Result<Val, UptimeError> {
        caller.require_auth();

        match dispatch::route(&env, &selector) {
            Route::Management => Err(UptimeError::ReservedSelector.logged(&env)),
            Route::Forward => dispatch::forward(&env, &selector, args),
        }
    }

    // Aggregator interface, forwarded

    pub fn latest_round_data(env: Env, caller: Address) -> Result<Round, UptimeError> {
        caller.require_auth();

        let args: Vec<Val> = vec![&env, caller.into_val(&env)];
        dispatch::forward(&env, &Symbol::new(&env, "latest_round_data"), args)
    }

    pub fn round_data(env: Env, caller: Address, round_id: u64) -> Result<Round, UptimeError> {
        caller.require_auth();

        let args: Vec<Val> = vec![&env, caller.into_val(&env), round_id.into_val(&env)];
        dispatch::forward(&env, &Symbol::new(&env, "round_data"), args)
    }

    pub fn description(env: Env) -> Result<String, UptimeError> {
        dispatch::forward(&env, &Symbol::new(&env, "description"), Vec::new(&env))
    }

    pub fn decimals(env: Env) -> Result<u32, UptimeError> {
        dispatch::forward(&env, &Symbol::new(&env, "decimals"), Vec::new(&env))
    }

    pub fn type_and_version(env: Env) -> Result<String, UptimeError> {
        dispatch::forward(&env, &Symbol::new(&env, "type_and_version"), Vec::new(&env))
    }
}

mod test;
