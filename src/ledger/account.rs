pub mod account;
pub mod balance;
mod deposit;
mod withdrawal;

pub use account::{Account, AccountGuard, AccountSnapshot};
pub use balance::Balance;
