//! Document creation and retrieval.
//!
//! Documents (invoices, credit notes, offers, ...) are rendered by the
//! service, including ZUGFeRD and XRechnung e-invoices. This module only
//! shapes the request and unwraps the response.
//!
//! # Example
//!
//! ```no_run
//! use rechnungs_api::Client;
//! use rechnungs_api::documents::*;
//!
//! # async fn run(client: Client, request: CreateDocumentRequest) -> Result<(), rechnungs_api::ClientError> {
//! let document = client.create_document(&request).await?;
//! let pdf = client
//!     .read_document(&document.id, DocumentFormat::Pdf)
//!     .await?
//!     .into_pdf();
//! # Ok(())
//! # }
//! ```

mod api;
mod builder;
mod types;

pub use builder::{DocumentBuilder, DocumentPartyBuilder};
pub use types::*;
