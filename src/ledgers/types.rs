use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::QueryParams;

/// Root of a double-entry bookkeeping scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ledger {
    pub id: String,
    #[serde(default)]
    pub custom_data: Option<Value>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body of `POST /ledgers`. The default serializes to `{}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLedgerRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<Value>,
}

/// Account class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AccountType {
    Assets,
    Liabilities,
    Equity,
    Revenue,
    Expenses,
}

/// An account inside a ledger. Accounts cannot be changed or removed once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerAccount {
    #[serde(default)]
    pub ledger_id: Option<String>,
    /// Account number, e.g. "1800" (SKR04 bank).
    pub number: String,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    pub name: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body of `POST /ledgers/{id}/accounts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLedgerAccountRequest {
    pub number: String,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    pub name: String,
}

impl CreateLedgerAccountRequest {
    pub fn new(number: impl Into<String>, account_type: AccountType, name: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            account_type,
            name: name.into(),
        }
    }
}

/// One debit/credit pair of a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    /// Number of the debited account.
    pub debit_account: String,
    /// Number of the credited account.
    pub credit_account: String,
    pub value: Decimal,
}

impl Position {
    pub fn new(debit_account: impl Into<String>, credit_account: impl Into<String>, value: Decimal) -> Self {
        Self {
            debit_account: debit_account.into(),
            credit_account: credit_account.into(),
            value,
        }
    }
}

/// A booked transaction.
///
/// Transactions are immutable. Archiving one books a new transaction with
/// negated positions whose `reverses` field names the original.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerTransaction {
    #[serde(default)]
    pub ledger_id: Option<String>,
    /// Sequential number assigned by the service.
    pub number: u64,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub positions: Vec<Position>,
    /// Number of the transaction this entry reverses.
    #[serde(default)]
    pub reverses: Option<u64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl LedgerTransaction {
    /// `true` if this transaction is the reversal of another one.
    pub fn is_reversal(&self) -> bool {
        self.reverses.is_some()
    }
}

/// Body of `POST /ledgers/{id}/transactions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLedgerTransactionRequest {
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub positions: Vec<Position>,
}

/// Balance of one account over a date range, computed by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerBalance {
    pub account_number: String,
    #[serde(default)]
    pub debit: Decimal,
    #[serde(default)]
    pub credit: Decimal,
    /// Debit minus credit.
    #[serde(default)]
    pub balance: Decimal,
}

/// Date range for `GET /ledgers/{id}/balances`. Both bounds are optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BalanceRange {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl BalanceRange {
    /// No bounds: balances over all transactions.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start_date: Some(start),
            end_date: Some(end),
        }
    }

    pub fn since(start: NaiveDate) -> Self {
        Self {
            start_date: Some(start),
            end_date: None,
        }
    }

    pub fn until(end: NaiveDate) -> Self {
        Self {
            start_date: None,
            end_date: Some(end),
        }
    }
}

impl From<&BalanceRange> for QueryParams {
    fn from(range: &BalanceRange) -> Self {
        QueryParams::new()
            .push("startDate", range.start_date)
            .push("endDate", range.end_date)
    }
}
