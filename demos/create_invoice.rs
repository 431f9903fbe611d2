//! Creates an XRechnung invoice and saves its XML and PDF to the working directory.
//!
//! Run with: `RECHNUNGS_API_KEY=... cargo run --example create_invoice`

use chrono::NaiveDate;
use rechnungs_api::documents::*;
use rechnungs_api::{ClientBuilder, ClientError};
use rust_decimal_macros::dec;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = ClientBuilder::from_env()?.build()?;

    let request = DocumentBuilder::new(
        DocumentType::Invoice,
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
    )
    .due_date(NaiveDate::from_ymd_opt(2024, 7, 15).unwrap())
    .sender(
        DocumentPartyBuilder::new("ACME GmbH", "10115", "Berlin", "DE")
            .street("Friedrichstraße 123")
            .vat_id("DE123456789")
            .email("billing@acme.de")
            .build(),
    )
    .recipient(
        DocumentPartyBuilder::new("Bundesamt für Beispiele", "53113", "Bonn", "DE")
            .street("Musterweg 1")
            .build(),
    )
    .buyer_reference("04011000-12345-67")
    .add_item(DocumentItem::new("Beratung", dec!(10), "HUR", dec!(150), dec!(19)))
    .e_invoice(EInvoiceProfile::XrechnungCii)
    .build()?;

    let document = match client.create_document(&request).await {
        Ok(doc) => doc,
        Err(ClientError::RequestFailed { status, body }) => {
            eprintln!("Service rejected the invoice ({status}): {body}");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    println!(
        "Created {} gross={}",
        document.number.as_deref().unwrap_or("(unnumbered)"),
        document.gross_amount.unwrap_or_default()
    );

    if let Some(xml) = client
        .read_document(&document.id, DocumentFormat::Xml)
        .await?
        .into_xml()
    {
        std::fs::write(format!("{}.xml", document.id), xml)?;
    }
    if let Some(pdf) = client
        .read_document(&document.id, DocumentFormat::Pdf)
        .await?
        .into_pdf()
    {
        std::fs::write(format!("{}.pdf", document.id), pdf)?;
    }
    Ok(())
}
