use super::{Amount, LedgerError};

use serde::Serialize;
use std::fmt;

/// A non-negative amount of money, in the single currency of the ledger.
///
/// Money can only be built through [`Money::new`] or [`Money::positive`], so
/// holding one is proof that the amount was validated. All the arithmetic is
/// exact: it either gives the precise result or refuses to give one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Money(Amount);

impl Money {
    pub const ZERO: Money = Money(Amount::ZERO);

    /// Zero or more. Used for balances, e.g. the initial balance of an account.
    pub fn new(amount: Amount) -> Result<Self, LedgerError> {
        if amount < Amount::ZERO {
            return Err(LedgerError::InvalidAmount {
                amount,
                requirement: "zero or positive",
            });
        }

        // -0 is a valid Decimal; drop its sign but keep its scale.
        if amount.is_zero() && amount.is_sign_negative() {
            return Ok(Self(amount.abs()));
        }

        Ok(Self(amount))
    }

    /// Strictly more than zero. Used for withdrawals, deposits and transfers.
    pub fn positive(amount: Amount) -> Result<Self, LedgerError> {
        if amount <= Amount::ZERO {
            return Err(LedgerError::InvalidAmount {
                amount,
                requirement: "strictly positive",
            });
        }

        Ok(Self(amount))
    }

    pub fn amount(&self) -> Amount {
        self.0
    }

    /// `None` when the sum doesn't fit in a decimal.
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// `None` when `other` is bigger than `self`: money never goes negative.
    pub fn checked_sub(self, other: Money) -> Option<Money> {
        if other > self {
            return None;
        }

        self.0.checked_sub(other.0).map(Money)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
