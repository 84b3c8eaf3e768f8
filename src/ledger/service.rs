//! The ledger's public operations.
//!
//! Every operation is a short transaction over one or two accounts:
//! validate the arguments, resolve the account(s) in the store, lock them,
//! check, mutate, and hand back a snapshot.
//!
//! Locking rules:
//! - a balance is only read-then-written while its account lock is held, in a
//!   single critical section;
//! - when two accounts are needed (transfers), their locks are taken in
//!   ascending id order, whatever the direction of the transfer. Two opposite
//!   transfers between A and B therefore both lock A first, and can never end
//!   up each holding one lock while waiting on the other;
//! - the store's map lock is never held while waiting on an account lock.
//!   Only delete takes both, and in the order account, then map.

use super::account::{Account, AccountGuard, AccountSnapshot};
use super::{AccountId, AccountStore, Amount, LedgerError, Money};

use std::sync::Arc;
use tracing::debug;

pub struct LedgerService {
    store: AccountStore,

    // Initial balance of accounts created without an explicit amount.
    default_initial_balance: Money,
}

impl LedgerService {
    pub fn new(store: AccountStore, default_initial_balance: Money) -> Self {
        Self {
            store,
            default_initial_balance,
        }
    }

    /// Open an account, with `initial_amount` or with the configured default.
    pub fn create(&self, initial_amount: Option<Amount>) -> Result<AccountSnapshot, LedgerError> {
        let initial_balance = match initial_amount {
            Some(amount) => Money::new(amount)?,
            None => self.default_initial_balance,
        };

        let created = self.store.create_with_initial_balance(initial_balance);
        debug!(account = created.id, balance = %created.balance, "account created");

        Ok(created)
    }

    pub fn get(&self, id: AccountId) -> Result<AccountSnapshot, LedgerError> {
        let account = self.store.get(id)?;
        let guard = account.lock()?;

        Ok(guard.snapshot())
    }

    pub fn list_all(&self) -> Vec<AccountSnapshot> {
        self.store.list_all()
    }

    pub fn withdraw(&self, id: AccountId, amount: Amount) -> Result<AccountSnapshot, LedgerError> {
        let amount = Money::positive(amount)?;
        let account = self.store.get(id)?;

        let mut guard = account.lock()?;
        ensure_covers(&guard, amount)?;
        guard.debit_unchecked(amount)?;

        debug!(account = id, amount = %amount, balance = %guard.balance(), "withdrawal applied");
        Ok(guard.snapshot())
    }

    pub fn deposit(&self, id: AccountId, amount: Amount) -> Result<AccountSnapshot, LedgerError> {
        let amount = Money::positive(amount)?;
        let account = self.store.get(id)?;

        let mut guard = account.lock()?;
        guard.credit_unchecked(amount)?;

        debug!(account = id, amount = %amount, balance = %guard.balance(), "deposit applied");
        Ok(guard.snapshot())
    }

    /// Move `amount` from one account to another, atomically.
    ///
    /// Returns the source account, as it is right after the transfer.
    pub fn transfer(
        &self,
        from_id: AccountId,
        to_id: AccountId,
        amount: Amount,
    ) -> Result<AccountSnapshot, LedgerError> {
        let amount = Money::positive(amount)?;
        // Checked before anything else: it doesn't even matter whether the
        // account exists.
        if from_id == to_id {
            return Err(LedgerError::TransferToSameAccount(from_id));
        }

        let from = self.store.get(from_id)?;
        let to = self.store.get(to_id)?;

        let (mut source, mut destination) = lock_pair(&from, &to)?;
        ensure_covers(&source, amount)?;

        // The debit is already covered, so the credit is the only leg that can
        // fail. Doing it first means nothing has been mutated if it does.
        destination.credit_unchecked(amount)?;
        source.debit_unchecked(amount)?;

        debug!(
            from = from_id,
            to = to_id,
            amount = %amount,
            from_balance = %source.balance(),
            to_balance = %destination.balance(),
            "transfer applied"
        );
        Ok(source.snapshot())
    }

    /// Close an account and remove it from the store.
    ///
    /// Returns the account as it was when it got deleted.
    pub fn delete(&self, id: AccountId) -> Result<AccountSnapshot, LedgerError> {
        let account = self.store.get(id)?;

        // Hold the account lock across the removal, so no balance operation
        // can be in flight on it. Closing it makes anyone who was already
        // waiting on the lock fail, rather than update a removed account.
        let guard = account.lock()?;
        self.store.remove(id)?;
        let deleted = guard.close();

        debug!(account = id, balance = %deleted.balance, "account deleted");
        Ok(deleted)
    }
}

fn ensure_covers(guard: &AccountGuard<'_>, amount: Money) -> Result<(), LedgerError> {
    let balance = guard.balance();
    if balance < amount {
        return Err(LedgerError::InsufficientFunds {
            id: guard.id(),
            balance,
            requested: amount,
        });
    }

    Ok(())
}

// Lock both accounts, lowest id first, and return the guards in argument order.
fn lock_pair<'a>(
    from: &'a Arc<Account>,
    to: &'a Arc<Account>,
) -> Result<(AccountGuard<'a>, AccountGuard<'a>), LedgerError> {
    if from.id() < to.id() {
        let from_guard = from.lock()?;
        let to_guard = to.lock()?;
        Ok((from_guard, to_guard))
    } else {
        let to_guard = to.lock()?;
        let from_guard = from.lock()?;
        Ok((from_guard, to_guard))
    }
}
