//! An in-memory account ledger.
//!
//! The [`ledger`] module is the core: accounts, their balances, and the
//! operations on them, safe to call from many threads at once. The other
//! modules wrap it into a small program that replays a CSV stream of
//! operations and prints the resulting accounts.

pub mod cli;
pub mod config;
pub mod error_handler;
pub mod input;
pub mod ledger;
pub mod output;
pub mod run;
pub mod telemetry;
