//! Process configuration, read from environment variables.

use core::str::FromStr;
use std::net::SocketAddr;

use rust_decimal::Decimal;
use thiserror::Error;

use teller_ledger::{AccountId, Ledger, LedgerResult};
use teller_observability::LogFormat;

pub const BIND_ADDR_VAR: &str = "TELLER_BIND_ADDR";
pub const SEED_ACCOUNTS_VAR: &str = "TELLER_SEED_ACCOUNTS";
pub const LOG_FORMAT_VAR: &str = "TELLER_LOG_FORMAT";

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_SEED_ACCOUNTS: &str = "123=1000,456=500";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: invalid socket address {value:?}")]
    BindAddr { var: &'static str, value: String },

    #[error("{var}: invalid seed entry {entry:?} (expected id=balance)")]
    SeedEntry { var: &'static str, entry: String },

    #[error("{var}: {message}")]
    LogFormat { var: &'static str, message: String },
}

/// Runtime configuration of the API process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// Accounts loaded at startup, in declaration order.
    pub seed_accounts: Vec<(AccountId, Decimal)>,
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration from an arbitrary variable lookup; unset variables
    /// fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = SocketAddr::from_str(bind_addr.trim()).map_err(|_| ConfigError::BindAddr {
            var: BIND_ADDR_VAR,
            value: bind_addr.clone(),
        })?;

        let seed = lookup(SEED_ACCOUNTS_VAR).unwrap_or_else(|| DEFAULT_SEED_ACCOUNTS.to_string());
        let seed_accounts = parse_seed_accounts(&seed)?;

        let log_format = match lookup(LOG_FORMAT_VAR) {
            Some(v) => v.parse::<LogFormat>().map_err(|message| ConfigError::LogFormat {
                var: LOG_FORMAT_VAR,
                message,
            })?,
            None => LogFormat::default(),
        };

        Ok(Self {
            bind_addr,
            seed_accounts,
            log_format,
        })
    }

    /// Build the process ledger from the configured seed accounts.
    pub fn build_ledger(&self) -> LedgerResult<Ledger> {
        Ledger::seeded(self.seed_accounts.iter().cloned())
    }
}

/// Parses `id=balance` pairs separated by commas. Blank input means no seed.
fn parse_seed_accounts(raw: &str) -> Result<Vec<(AccountId, Decimal)>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let invalid = || ConfigError::SeedEntry {
                var: SEED_ACCOUNTS_VAR,
                entry: entry.to_string(),
            };

            let (id, balance) = entry.split_once('=').ok_or_else(invalid)?;
            let id = id.trim();
            if id.is_empty() {
                return Err(invalid());
            }
            let balance = Decimal::from_str(balance.trim()).map_err(|_| invalid())?;

            Ok((AccountId::from(id), balance))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| vars.get(var).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.bind_addr, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(
            config.seed_accounts,
            vec![
                (AccountId::from("123"), dec!(1000)),
                (AccountId::from("456"), dec!(500)),
            ]
        );
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn empty_seed_means_no_accounts() {
        let config = AppConfig::from_lookup(lookup(&[(SEED_ACCOUNTS_VAR, "")])).unwrap();

        assert!(config.seed_accounts.is_empty());
        assert!(config.build_ledger().unwrap().is_empty());
    }

    #[test]
    fn seed_accepts_fractional_balances_and_whitespace() {
        let config =
            AppConfig::from_lookup(lookup(&[(SEED_ACCOUNTS_VAR, " a = 10.25 , b=0 ")])).unwrap();

        assert_eq!(
            config.seed_accounts,
            vec![
                (AccountId::from("a"), dec!(10.25)),
                (AccountId::from("b"), dec!(0)),
            ]
        );
    }

    #[test]
    fn malformed_seed_entry_is_rejected() {
        let err = AppConfig::from_lookup(lookup(&[(SEED_ACCOUNTS_VAR, "123=1000,oops")]))
            .unwrap_err();

        assert_eq!(
            err,
            ConfigError::SeedEntry {
                var: SEED_ACCOUNTS_VAR,
                entry: "oops".to_string(),
            }
        );
    }

    #[test]
    fn invalid_bind_addr_and_log_format_are_rejected() {
        assert!(matches!(
            AppConfig::from_lookup(lookup(&[(BIND_ADDR_VAR, "localhost")])),
            Err(ConfigError::BindAddr { .. })
        ));
        assert!(matches!(
            AppConfig::from_lookup(lookup(&[(LOG_FORMAT_VAR, "xml")])),
            Err(ConfigError::LogFormat { .. })
        ));
    }

    #[test]
    fn duplicate_seed_fails_when_building_ledger() {
        let config = AppConfig::from_lookup(lookup(&[(SEED_ACCOUNTS_VAR, "1=1,1=2")])).unwrap();
        assert!(config.build_ledger().is_err());
    }
}
