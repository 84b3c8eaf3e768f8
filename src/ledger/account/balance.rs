use crate::ledger::Money;

/// The mutable part of an account, i.e. everything that lives behind the
/// account lock.
///
/// `closed` is set by a delete while it holds the lock. Anyone who resolved
/// the account before it was removed from the store, and was waiting on the
/// lock, will find it closed and must treat the account as gone.
#[derive(Debug, Clone, PartialEq)]
pub struct Balance {
    pub(super) amount: Money,
    pub(super) closed: bool,
}

impl Balance {
    pub const fn new(amount: Money) -> Self {
        Self {
            amount,
            closed: false,
        }
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}
