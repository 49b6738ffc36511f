#![no_std]

pub mod access_control;
pub mod errors;
pub mod interface;
pub mod ownable;
pub mod payload;
pub mod types;

pub use errors::UptimeError;
pub use types::{AccessContext, L1Message, Round, SequencerStatus};
