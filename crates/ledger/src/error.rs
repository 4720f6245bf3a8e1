//! Ledger error model.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::id::AccountId;

/// Result type used across the ledger.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Failure of a ledger operation.
///
/// Every variant is terminal for the request that caused it and leaves the
/// ledger untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// No account with this identifier exists.
    #[error("account {0} not found")]
    NotFound(AccountId),

    /// A deposit or withdrawal amount was zero or negative.
    #[error("invalid amount {0}: amount must be positive")]
    InvalidAmount(Decimal),

    /// An initial or seed balance was negative.
    #[error("invalid balance {0}: balance must not be negative")]
    NegativeBalance(Decimal),

    /// A withdrawal exceeded the available balance.
    #[error(
        "insufficient funds: current balance is {balance}, attempted to withdraw {amount}"
    )]
    InsufficientFunds {
        account: AccountId,
        balance: Decimal,
        amount: Decimal,
    },

    /// An account with this identifier already exists.
    #[error("account {0} already exists")]
    AlreadyExists(AccountId),

    /// A deposit would push the balance past the representable range.
    #[error("depositing {amount} into account {account} would overflow its balance")]
    BalanceOverflow { account: AccountId, amount: Decimal },

    /// Applying the amount would round the balance, so the recorded amount
    /// and the balance change would disagree.
    #[error("amount {amount} is too precise to apply to the balance of account {account}")]
    PrecisionLoss { account: AccountId, amount: Decimal },
}

impl LedgerError {
    pub fn not_found(id: impl Into<AccountId>) -> Self {
        Self::NotFound(id.into())
    }

    pub fn already_exists(id: impl Into<AccountId>) -> Self {
        Self::AlreadyExists(id.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn insufficient_funds_message_names_balance_and_amount() {
        let err = LedgerError::InsufficientFunds {
            account: AccountId::from("456"),
            balance: dec!(500),
            amount: dec!(10000),
        };

        assert_eq!(
            err.to_string(),
            "insufficient funds: current balance is 500, attempted to withdraw 10000"
        );
    }

    #[test]
    fn negative_balance_message_allows_zero() {
        let err = LedgerError::NegativeBalance(dec!(-5));

        assert_eq!(
            err.to_string(),
            "invalid balance -5: balance must not be negative"
        );
    }
}
