use chrono::NaiveDate;
use serde_json::Value;

use super::types::*;
use crate::client::ClientError;

/// Builder for [`CreateDocumentRequest`].
///
/// ```
/// use chrono::NaiveDate;
/// use rechnungs_api::documents::*;
/// use rust_decimal_macros::dec;
///
/// let request = DocumentBuilder::new(DocumentType::Invoice, NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
///     .sender(DocumentPartyBuilder::new("ACME GmbH", "10115", "Berlin", "DE").vat_id("DE123456789").build())
///     .recipient(DocumentPartyBuilder::new("Kunde AG", "80331", "München", "DE").build())
///     .add_item(DocumentItem::new("Beratung", dec!(10), "HUR", dec!(150), dec!(19)))
///     .e_invoice(EInvoiceProfile::ZugferdEn16931)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.currency, "EUR");
/// assert!(request.number.is_none());
/// ```
pub struct DocumentBuilder {
    document_type: DocumentType,
    date: NaiveDate,
    number: Option<String>,
    due_date: Option<NaiveDate>,
    delivery_date: Option<NaiveDate>,
    currency: String,
    sender: Option<DocumentParty>,
    recipient: Option<DocumentParty>,
    items: Vec<DocumentItem>,
    buyer_reference: Option<String>,
    notes: Option<String>,
    e_invoice: Option<EInvoiceProfile>,
    custom_data: Option<Value>,
}

impl DocumentBuilder {
    pub fn new(document_type: DocumentType, date: NaiveDate) -> Self {
        Self {
            document_type,
            date,
            number: None,
            due_date: None,
            delivery_date: None,
            currency: "EUR".to_string(),
            sender: None,
            recipient: None,
            items: Vec::new(),
            buyer_reference: None,
            notes: None,
            e_invoice: None,
            custom_data: None,
        }
    }

    /// Explicit document number. Without one the service numbers the document.
    pub fn number(mut self, number: impl Into<String>) -> Self {
        self.number = Some(number.into());
        self
    }

    pub fn due_date(mut self, date: NaiveDate) -> Self {
        self.due_date = Some(date);
        self
    }

    pub fn delivery_date(mut self, date: NaiveDate) -> Self {
        self.delivery_date = Some(date);
        self
    }

    pub fn currency(mut self, code: impl Into<String>) -> Self {
        self.currency = code.into();
        self
    }

    pub fn sender(mut self, party: DocumentParty) -> Self {
        self.sender = Some(party);
        self
    }

    pub fn recipient(mut self, party: DocumentParty) -> Self {
        self.recipient = Some(party);
        self
    }

    pub fn add_item(mut self, item: DocumentItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn buyer_reference(mut self, reference: impl Into<String>) -> Self {
        self.buyer_reference = Some(reference.into());
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn e_invoice(mut self, profile: EInvoiceProfile) -> Self {
        self.e_invoice = Some(profile);
        self
    }

    pub fn custom_data(mut self, data: Value) -> Self {
        self.custom_data = Some(data);
        self
    }

    /// Assemble the request.
    ///
    /// Only presence is checked here; content rules are enforced by the service.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Builder` if sender, recipient or items are missing.
    pub fn build(self) -> Result<CreateDocumentRequest, ClientError> {
        let sender = self
            .sender
            .ok_or_else(|| ClientError::Builder("sender is required".into()))?;
        let recipient = self
            .recipient
            .ok_or_else(|| ClientError::Builder("recipient is required".into()))?;
        if self.items.is_empty() {
            return Err(ClientError::Builder(
                "at least one item is required".into(),
            ));
        }

        Ok(CreateDocumentRequest {
            document_type: self.document_type,
            number: self.number,
            date: self.date,
            due_date: self.due_date,
            delivery_date: self.delivery_date,
            currency: self.currency,
            sender,
            recipient,
            items: self.items,
            buyer_reference: self.buyer_reference,
            notes: self.notes,
            e_invoice: self.e_invoice,
            custom_data: self.custom_data,
        })
    }
}

/// Builder for [`DocumentParty`].
pub struct DocumentPartyBuilder {
    party: DocumentParty,
}

impl DocumentPartyBuilder {
    pub fn new(
        name: impl Into<String>,
        postal_code: impl Into<String>,
        city: impl Into<String>,
        country_code: impl Into<String>,
    ) -> Self {
        Self {
            party: DocumentParty {
                name: name.into(),
                street: None,
                postal_code: postal_code.into(),
                city: city.into(),
                country_code: country_code.into(),
                vat_id: None,
                tax_number: None,
                email: None,
            },
        }
    }

    pub fn street(mut self, street: impl Into<String>) -> Self {
        self.party.street = Some(street.into());
        self
    }

    pub fn vat_id(mut self, vat_id: impl Into<String>) -> Self {
        self.party.vat_id = Some(vat_id.into());
        self
    }

    pub fn tax_number(mut self, tax_number: impl Into<String>) -> Self {
        self.party.tax_number = Some(tax_number.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.party.email = Some(email.into());
        self
    }

    pub fn build(self) -> DocumentParty {
        self.party
    }
}
