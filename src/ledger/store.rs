use super::account::{Account, AccountSnapshot};
use super::{AccountId, LedgerError, Money};

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Owns every account of the ledger.
///
/// The map has its own lock, independent from the account locks. It is only
/// held for the duration of a map operation, and never while waiting for an
/// account lock: lookups hand out an `Arc<Account>` and release the map right
/// away.
#[derive(Debug)]
pub struct AccountStore {
    accounts: RwLock<HashMap<AccountId, Arc<Account>>>,

    // Ids are handed out once and never recycled, even after a delete.
    next_id: AtomicU64,
}

impl AccountStore {
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Open a new account with a fresh id.
    pub fn create_with_initial_balance(&self, initial_balance: Money) -> AccountSnapshot {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let account = Arc::new(Account::new(id, initial_balance));
        let snapshot = account.snapshot();

        self.write().insert(id, account);

        snapshot
    }

    pub fn get(&self, id: AccountId) -> Result<Arc<Account>, LedgerError> {
        self.read()
            .get(&id)
            .cloned()
            .ok_or(LedgerError::NoSuchAccount(id))
    }

    /// Point-in-time list of the accounts, in no particular order.
    ///
    /// Each balance is individually consistent, but balances are read one
    /// after the other: this is not an atomic picture of the whole ledger.
    /// Accounts deleted while the list is being built are left out.
    pub fn list_all(&self) -> Vec<AccountSnapshot> {
        let accounts: Vec<Arc<Account>> = self.read().values().cloned().collect();

        accounts
            .iter()
            .filter_map(|account| account.lock().ok().map(|guard| guard.snapshot()))
            .collect()
    }

    pub fn remove(&self, id: AccountId) -> Result<Arc<Account>, LedgerError> {
        self.write()
            .remove(&id)
            .ok_or(LedgerError::NoSuchAccount(id))
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // No code path panics while holding the map lock, but if one ever did,
    // the map itself would still be consistent.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<AccountId, Arc<Account>>> {
        self.accounts.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<AccountId, Arc<Account>>> {
        self.accounts.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for AccountStore {
    fn default() -> Self {
        Self::new()
    }
}
