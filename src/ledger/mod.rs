pub mod account;
pub mod error;
pub mod money;
pub mod operation;
pub mod process;
pub mod service;
pub mod store;

pub use account::account::AccountSnapshot;
pub use error::LedgerError;
pub use money::Money;
pub use operation::{Operation, Outcome};
pub use service::LedgerService;
pub use store::AccountStore;

// Using named types doesn't provide any compiler help, but it helps a lot with
// readability.
// Consider the following, when creating the store HashMap:
// (1) accounts: HashMap<u64, Arc<Account>>
// (2) accounts: HashMap<AccountId, Arc<Account>>
// Implementation (1) would most likely need comments, and could be confusing.
// Implementation (2) is self-explanatory.
// Besides, maintenance is easier: changing account ids e.g. from u64 to u128 is trivial.
pub type AccountId = u64;

// I decided to use a decimal library instead of the built-in f64 type, to be
// safer when dealing with money: amounts are added and compared exactly.
pub type Amount = rust_decimal::Decimal;
