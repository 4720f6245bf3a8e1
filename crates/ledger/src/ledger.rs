//! The ledger: the in-memory collection of all accounts.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use rust_decimal::Decimal;

use crate::account::Account;
use crate::clock::{Clock, SystemClock};
use crate::error::{LedgerError, LedgerResult};
use crate::id::AccountId;
use crate::transaction::TransactionRecord;

/// In-memory account ledger.
///
/// One instance is owned by the process and shared by reference with the
/// request-handling layer. Every mutation holds the write lock across its
/// whole read-check-write, so operations on an account never interleave and
/// readers never observe a partially-updated account. Reads share the read
/// lock and return owned copies.
pub struct Ledger {
    accounts: RwLock<HashMap<AccountId, Account>>,
    clock: Arc<dyn Clock>,
}

impl Ledger {
    /// Empty ledger stamping transactions with the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
            clock,
        }
    }

    /// Ledger pre-loaded with accounts; seeded accounts start with an empty
    /// history.
    ///
    /// # Errors
    /// - Duplicate identifier in the seed, `LedgerError::AlreadyExists`;
    /// - Negative seed balance, `LedgerError::NegativeBalance`.
    pub fn seeded<I, K>(seed: I) -> LedgerResult<Self>
    where
        I: IntoIterator<Item = (K, Decimal)>,
        K: Into<AccountId>,
    {
        let ledger = Self::new();
        for (id, balance) in seed {
            ledger.seed_account(id, balance)?;
        }
        Ok(ledger)
    }

    /// Inserts a pre-existing account without recording a transaction.
    ///
    /// # Errors
    /// - Identifier already present, `LedgerError::AlreadyExists`;
    /// - Negative balance, `LedgerError::NegativeBalance`.
    pub fn seed_account(&self, id: impl Into<AccountId>, balance: Decimal) -> LedgerResult<()> {
        let id = id.into();
        let mut accounts = self.write();
        if accounts.contains_key(&id) {
            return Err(LedgerError::AlreadyExists(id));
        }

        let account = Account::seeded(id.clone(), balance)?;
        accounts.insert(id, account);
        Ok(())
    }

    /// Retrieves the current balance of an account.
    ///
    /// # Errors
    /// - Account doesn't exist, `LedgerError::NotFound`.
    pub fn balance(&self, id: &str) -> LedgerResult<Decimal> {
        self.read()
            .get(id)
            .map(Account::balance)
            .ok_or_else(|| LedgerError::not_found(id))
    }

    /// Adds `amount` to the account and records a `deposit`.
    ///
    /// Returns the new balance.
    ///
    /// # Errors
    /// - Account doesn't exist, `LedgerError::NotFound`;
    /// - Non-positive amount, `LedgerError::InvalidAmount`;
    /// - Balance would overflow, `LedgerError::BalanceOverflow`;
    /// - Balance would be rounded, `LedgerError::PrecisionLoss`.
    pub fn deposit(&self, id: &str, amount: Decimal) -> LedgerResult<Decimal> {
        let mut accounts = self.write();
        let account = accounts
            .get_mut(id)
            .ok_or_else(|| LedgerError::not_found(id))?;

        account.deposit(amount, self.clock.as_ref())
    }

    /// Subtracts `amount` from the account and records a `withdraw`.
    ///
    /// Checks run in a fixed order: existence, amount positivity, then funds.
    /// Returns the new balance.
    ///
    /// # Errors
    /// - Account doesn't exist, `LedgerError::NotFound`;
    /// - Non-positive amount, `LedgerError::InvalidAmount`;
    /// - Balance lower than `amount`, `LedgerError::InsufficientFunds`;
    /// - Balance would be rounded, `LedgerError::PrecisionLoss`.
    pub fn withdraw(&self, id: &str, amount: Decimal) -> LedgerResult<Decimal> {
        let mut accounts = self.write();
        let account = accounts
            .get_mut(id)
            .ok_or_else(|| LedgerError::not_found(id))?;

        account.withdraw(amount, self.clock.as_ref())
    }

    /// Opens a new account and records a `create` entry with the initial
    /// balance, even when it is zero.
    ///
    /// # Errors
    /// - Identifier already present, `LedgerError::AlreadyExists`;
    /// - Negative initial balance, `LedgerError::NegativeBalance`.
    pub fn create_account(
        &self,
        id: impl Into<AccountId>,
        initial_balance: Decimal,
    ) -> LedgerResult<()> {
        let id = id.into();
        let mut accounts = self.write();
        if accounts.contains_key(&id) {
            return Err(LedgerError::AlreadyExists(id));
        }

        let account = Account::open(id.clone(), initial_balance, self.clock.as_ref())?;
        accounts.insert(id, account);
        Ok(())
    }

    /// Removes an account together with its history.
    ///
    /// # Errors
    /// - Account doesn't exist, `LedgerError::NotFound`.
    pub fn delete_account(&self, id: &str) -> LedgerResult<()> {
        self.write()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| LedgerError::not_found(id))
    }

    /// Full history of an account in chronological order.
    ///
    /// # Errors
    /// - Account doesn't exist, `LedgerError::NotFound`.
    pub fn history(&self, id: &str) -> LedgerResult<Vec<TransactionRecord>> {
        self.read()
            .get(id)
            .map(|account| account.history().to_vec())
            .ok_or_else(|| LedgerError::not_found(id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.read().contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // No operation panics while holding the lock, so a poisoned map is still
    // consistent.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<AccountId, Account>> {
        self.accounts.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<AccountId, Account>> {
        self.accounts.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for Ledger {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Ledger")
            .field("accounts", &*self.read())
            .finish_non_exhaustive()
    }
}
