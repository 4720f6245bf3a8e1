//! Account state and its balance transitions.

use rust_decimal::Decimal;

use crate::clock::Clock;
use crate::error::{LedgerError, LedgerResult};
use crate::id::AccountId;
use crate::transaction::{TransactionKind, TransactionRecord};

/// A named balance with its append-only transaction history.
///
/// The balance is never negative: every transition validates before it
/// mutates, so a failed call leaves both balance and history as they were.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    id: AccountId,
    balance: Decimal,
    history: Vec<TransactionRecord>,
}

impl Account {
    /// Opens an account and records a `create` entry carrying the initial
    /// balance, zero included.
    pub(crate) fn open(
        id: AccountId,
        initial_balance: Decimal,
        clock: &dyn Clock,
    ) -> LedgerResult<Self> {
        ensure_non_negative(initial_balance)?;

        Ok(Self {
            id,
            balance: initial_balance,
            history: vec![TransactionRecord::new(
                TransactionKind::Create,
                initial_balance,
                clock.now(),
            )],
        })
    }

    /// Pre-existing account loaded at startup; its history starts empty.
    pub(crate) fn seeded(id: AccountId, balance: Decimal) -> LedgerResult<Self> {
        ensure_non_negative(balance)?;

        Ok(Self {
            id,
            balance,
            history: Vec::new(),
        })
    }

    pub fn id(&self) -> &AccountId {
        &self.id
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// History in chronological (insertion) order.
    pub fn history(&self) -> &[TransactionRecord] {
        &self.history
    }

    pub(crate) fn deposit(&mut self, amount: Decimal, clock: &dyn Clock) -> LedgerResult<Decimal> {
        ensure_positive(amount)?;

        let balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::BalanceOverflow {
                account: self.id.clone(),
                amount,
            })?;
        // Past 28 significant digits the sum is rounded instead of failing.
        if balance - self.balance != amount {
            return Err(self.precision_loss(amount));
        }

        self.balance = balance;
        self.record(TransactionKind::Deposit, amount, clock);
        Ok(balance)
    }

    pub(crate) fn withdraw(&mut self, amount: Decimal, clock: &dyn Clock) -> LedgerResult<Decimal> {
        ensure_positive(amount)?;

        if self.balance < amount {
            return Err(LedgerError::InsufficientFunds {
                account: self.id.clone(),
                balance: self.balance,
                amount,
            });
        }

        let balance = self.balance - amount;
        if self.balance - balance != amount {
            return Err(self.precision_loss(amount));
        }

        self.balance = balance;
        self.record(TransactionKind::Withdraw, amount, clock);
        Ok(balance)
    }

    fn precision_loss(&self, amount: Decimal) -> LedgerError {
        LedgerError::PrecisionLoss {
            account: self.id.clone(),
            amount,
        }
    }

    fn record(&mut self, kind: TransactionKind, amount: Decimal, clock: &dyn Clock) {
        self.history
            .push(TransactionRecord::new(kind, amount, clock.now()));
    }
}

fn ensure_positive(amount: Decimal) -> LedgerResult<()> {
    if amount <= Decimal::ZERO {
        return Err(LedgerError::InvalidAmount(amount));
    }
    Ok(())
}

fn ensure_non_negative(amount: Decimal) -> LedgerResult<()> {
    if amount < Decimal::ZERO {
        return Err(LedgerError::NegativeBalance(amount));
    }
    Ok(())
}
