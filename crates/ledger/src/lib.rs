//! `teller-ledger` — in-memory account ledger.
//!
//! Pure domain logic only: no IO, no HTTP, no persistence concerns.

pub mod account;
pub mod clock;
pub mod error;
pub mod id;
pub mod ledger;
pub mod transaction;

pub use account::Account;
pub use clock::{Clock, SystemClock};
pub use error::{LedgerError, LedgerResult};
pub use id::AccountId;
pub use ledger::Ledger;
pub use transaction::{TransactionKind, TransactionRecord};
