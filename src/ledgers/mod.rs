//! Double-entry bookkeeping: ledgers, accounts, transactions and balances.
//!
//! Accounts and transactions are append-only. There is no call to update
//! or delete either; a booked transaction is undone with
//! [`Client::archive_ledger_transaction`](crate::Client::archive_ledger_transaction),
//! which books a reversing entry.
//!
//! ```compile_fail
//! # async fn run(client: rechnungs_api::Client) {
//! client.delete_ledger_account("led_1", "1800").await;
//! # }
//! ```
//!
//! ```compile_fail
//! # async fn run(client: rechnungs_api::Client) {
//! client.update_ledger_transaction("led_1", 1).await;
//! # }
//! ```
//!
//! # Example
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use rechnungs_api::{Client, PageParams};
//! use rechnungs_api::ledgers::*;
//! use rust_decimal_macros::dec;
//!
//! # async fn run(client: Client) -> Result<(), rechnungs_api::ClientError> {
//! let ledger = client.create_ledger().await?;
//! client
//!     .create_ledger_account(&ledger.id, &CreateLedgerAccountRequest::new("1800", AccountType::Assets, "Bank"))
//!     .await?;
//! client
//!     .create_ledger_account(&ledger.id, &CreateLedgerAccountRequest::new("4400", AccountType::Expenses, "Büromaterial"))
//!     .await?;
//!
//! let date = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();
//! let tx = LedgerTransactionBuilder::new(date)
//!     .position("4400", "1800", dec!(100))
//!     .build()?;
//! client.create_ledger_transaction(&ledger.id, &tx).await?;
//!
//! let balances = client
//!     .list_ledger_balances(&ledger.id, &BalanceRange::between(date, date))
//!     .await?;
//! let transactions = client.list_ledger_transactions(&ledger.id, &PageParams::new()).await?;
//! # Ok(())
//! # }
//! ```

mod api;
mod builder;
mod types;

pub use builder::LedgerTransactionBuilder;
pub use types::*;
