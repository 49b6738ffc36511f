//! Selector table for the proxy.
//!
//! Selectors that name the proxy's own management interface are served by
//! the proxy; every other selector falls through to the default arm and is
//! invoked on the current implementation with its arguments untouched.

use soroban_sdk::{Env, Symbol, TryFromVal, Val, Vec};
use uptime_common::UptimeError;

use crate::storage;

/// The proxy's own entry points. Only `initialize` also exists on the feed,
/// and a deployed feed rejects it anyway.
pub const MANAGEMENT_SELECTORS: [&str; 8] = [
    "initialize",
    "proxy_owner",
    "transfer_proxy_ownership",
    "implementation",
    "previous_implementation",
    "version",
    "upgrade",
    "forward",
];

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Route {
    Management,
    Forward,
}

pub fn route(env: &Env, selector: &Symbol) -> Route {
    let reserved = MANAGEMENT_SELECTORS
        .iter()
        .any(|name| Symbol::new(env, name) == *selector);

    if reserved {
        Route::Management
    } else {
        Route::Forward
    }
}

/// Invokes `selector` on the current implementation. A failure inside the
/// implementation aborts this call with the implementation's own error.
pub fn forward<T>(env: &Env, selector: &Symbol, args: Vec<Val>) -> Result<T, UptimeError>
where
    T: TryFromVal<Env, Val>,
{
    let binding = storage::get_binding(env)?;
    Ok(env.invoke_contract(&binding.implementation, selector, args))
}
