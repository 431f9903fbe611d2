//! # rechnungs-api
//!
//! Typed async client for the Rechnungs-API invoicing and bookkeeping service.
//!
//! Build a request value, call a method on [`Client`], get back the decoded
//! response or a [`ClientError`]. Document rendering, ZUGFeRD/XRechnung
//! generation and balance computation all happen on the service.
//!
//! All monetary values use [`rust_decimal::Decimal`] and travel as JSON
//! strings, never floating point.
//!
//! ## Quick Start
//!
//! ```no_run
//! use rechnungs_api::{Client, PageParams};
//!
//! # async fn run() -> Result<(), rechnungs_api::ClientError> {
//! let client = Client::new(std::env::var("RECHNUNGS_API_KEY").unwrap_or_default())?;
//!
//! let ledger = client.create_ledger().await?;
//! let page = client.list_ledgers(&PageParams::new().limit(10)).await?;
//! if let Some(next) = page.next_page(&PageParams::new().limit(10)) {
//!     let _second = client.list_ledgers(&next).await?;
//! }
//! client.delete_ledger(&ledger.id).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Errors
//!
//! Every non-2xx response becomes [`ClientError::RequestFailed`] carrying the
//! HTTP status and the decoded error body. There is no retry logic.
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `documents` (default) | Create and read documents (JSON, XML, PDF) |
//! | `ledgers` (default) | Ledgers, accounts, transactions, balances |
//! | `all` | Everything |

pub mod client;

#[cfg(feature = "documents")]
pub mod documents;

#[cfg(feature = "ledgers")]
pub mod ledgers;

// Re-export client types at crate root for convenience
pub use crate::client::*;
pub use reqwest::Url;
