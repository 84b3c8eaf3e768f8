use super::{AccountId, Amount, Money};

use thiserror::Error;

/// Every way a ledger operation can be rejected.
///
/// All of them are detected before anything is mutated, so a failed operation
/// never leaves a partial effect behind.
#[derive(Debug, Error, PartialEq)]
pub enum LedgerError {
    /// A required field of the request is missing.
    #[error("missing required argument `{0}`")]
    InvalidArgument(&'static str),

    /// The amount is zero or negative where that isn't allowed.
    #[error("invalid amount {amount}: must be {requirement}")]
    InvalidAmount {
        amount: Amount,
        requirement: &'static str,
    },

    /// The account never existed, or it has been deleted.
    #[error("no account with id {0}")]
    NoSuchAccount(AccountId),

    /// Funds in the account are insufficient for a withdrawal or a transfer.
    #[error("insufficient funds in account {id}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        id: AccountId,
        balance: Money,
        requested: Money,
    },

    /// Source and destination of a transfer are the same account.
    #[error("cannot transfer from account {0} to itself")]
    TransferToSameAccount(AccountId),

    /// Adding more money to the balance would overflow.
    #[error("crediting account {0} would overflow its balance")]
    Overflow(AccountId),
}

#[cfg(test)]
mod tests {
    use super::LedgerError;
    use crate::ledger::Money;

    use rust_decimal_macros::dec;

    #[test]
    fn test_messages_carry_context() {
        for (err, want) in vec![
            (
                LedgerError::InvalidArgument("account"),
                "missing required argument `account`",
            ),
            (
                LedgerError::InvalidAmount {
                    amount: dec!(-5.00),
                    requirement: "strictly positive",
                },
                "invalid amount -5.00: must be strictly positive",
            ),
            (LedgerError::NoSuchAccount(42), "no account with id 42"),
            (
                LedgerError::InsufficientFunds {
                    id: 7,
                    balance: Money::new(dec!(70.00)).unwrap(),
                    requested: Money::new(dec!(1000.00)).unwrap(),
                },
                "insufficient funds in account 7: balance 70.00, requested 1000.00",
            ),
            (
                LedgerError::TransferToSameAccount(3),
                "cannot transfer from account 3 to itself",
            ),
            (
                LedgerError::Overflow(9),
                "crediting account 9 would overflow its balance",
            ),
        ] {
            assert_eq!(want, err.to_string());
        }
    }
}
