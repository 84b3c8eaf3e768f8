use crate::ledger::{AccountId, LedgerError, Money};

use super::balance::Balance;
use serde::Serialize;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// An account holds a balance, and guards it with its own lock.
///
/// Every read-modify-write of the balance happens through an [`AccountGuard`],
/// so two operations on the same account are always serialised, while
/// operations on unrelated accounts never wait on each other.
#[derive(Debug)]
pub struct Account {
    id: AccountId,
    balance: Mutex<Balance>,
}

/// What callers get back from the ledger: a copy of an account, taken while
/// its lock was held.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AccountSnapshot {
    #[serde(rename = "account")]
    pub id: AccountId,
    pub balance: Money,
}

/// Exclusive access to an open account.
///
/// Dropping the guard releases the account lock.
pub struct AccountGuard<'a> {
    pub(super) id: AccountId,
    pub(super) balance: MutexGuard<'a, Balance>,
}

impl Account {
    pub fn new(id: AccountId, initial_balance: Money) -> Self {
        Self {
            id,
            balance: Mutex::new(Balance::new(initial_balance)),
        }
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    /// Consistent read of the current balance.
    pub fn balance(&self) -> Money {
        self.lock_balance().amount()
    }

    pub fn snapshot(&self) -> AccountSnapshot {
        AccountSnapshot {
            id: self.id,
            balance: self.balance(),
        }
    }

    /// Wait for exclusive access to the account.
    ///
    /// Fails if the account was deleted while we were waiting for it.
    pub fn lock(&self) -> Result<AccountGuard<'_>, LedgerError> {
        let balance = self.lock_balance();
        if balance.is_closed() {
            return Err(LedgerError::NoSuchAccount(self.id));
        }

        Ok(AccountGuard {
            id: self.id,
            balance,
        })
    }

    // Critical sections compute the new balance before assigning it, so a
    // panic can never leave a half-updated balance behind the lock. It is
    // safe to keep using it after a poisoning.
    fn lock_balance(&self) -> MutexGuard<'_, Balance> {
        self.balance.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl AccountGuard<'_> {
    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn balance(&self) -> Money {
        self.balance.amount()
    }

    pub fn snapshot(&self) -> AccountSnapshot {
        AccountSnapshot {
            id: self.id,
            balance: self.balance(),
        }
    }

    /// Mark the account as closed. Whoever locks it afterwards gets
    /// `NoSuchAccount`.
    pub(crate) fn close(mut self) -> AccountSnapshot {
        self.balance.closed = true;
        self.snapshot()
    }
}
