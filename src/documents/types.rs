use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Kind of business document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DocumentType {
    Invoice,
    CreditNote,
    /// Storno of a previously issued invoice.
    Cancellation,
    Offer,
    OrderConfirmation,
    DeliveryNote,
}

/// Representation requested from `GET /documents/{id}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    /// Structured document metadata.
    #[default]
    Json,
    /// E-invoice XML (XRechnung / ZUGFeRD payload).
    Xml,
    /// Rendered PDF, with embedded XML for ZUGFeRD profiles.
    Pdf,
}

impl DocumentFormat {
    /// Value of the `format` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Xml => "xml",
            Self::Pdf => "pdf",
        }
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// E-invoice standard the service should generate alongside the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EInvoiceProfile {
    /// ZUGFeRD 2.x BASIC.
    ZugferdBasic,
    /// ZUGFeRD 2.x EN 16931 (COMFORT).
    #[serde(rename = "zugferdEn16931")]
    ZugferdEn16931,
    /// ZUGFeRD 2.x EXTENDED.
    ZugferdExtended,
    /// XRechnung, UN/CEFACT CII syntax.
    XrechnungCii,
    /// XRechnung, OASIS UBL syntax.
    XrechnungUbl,
}

/// Sender or recipient of a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentParty {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    pub postal_code: String,
    pub city: String,
    /// ISO 3166-1 alpha-2.
    pub country_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat_id: Option<String>,
    /// German Steuernummer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// A single line of a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentItem {
    pub description: String,
    pub quantity: Decimal,
    /// UNECE Rec 20 unit code, e.g. "C62" (piece) or "HUR" (hour).
    pub unit: String,
    /// Net price per unit.
    pub unit_price: Decimal,
    /// VAT rate in percent, e.g. 19.
    pub vat_rate: Decimal,
}

impl DocumentItem {
    pub fn new(
        description: impl Into<String>,
        quantity: Decimal,
        unit: impl Into<String>,
        unit_price: Decimal,
        vat_rate: Decimal,
    ) -> Self {
        Self {
            description: description.into(),
            quantity,
            unit: unit.into(),
            unit_price,
            vat_rate,
        }
    }
}

/// Body of `POST /documents`.
///
/// Numbering, totals and e-invoice generation happen on the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDocumentRequest {
    #[serde(rename = "type")]
    pub document_type: DocumentType,
    /// Leave empty to let the service assign the next number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    /// Leistungsdatum.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<NaiveDate>,
    /// ISO 4217.
    pub currency: String,
    pub sender: DocumentParty,
    pub recipient: DocumentParty,
    pub items: Vec<DocumentItem>,
    /// Leitweg-ID for XRechnung recipients.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buyer_reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub e_invoice: Option<EInvoiceProfile>,
    /// Opaque data stored with the document and echoed back.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<Value>,
}

/// A document as stored by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    #[serde(rename = "type")]
    pub document_type: DocumentType,
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub net_amount: Option<Decimal>,
    #[serde(default)]
    pub vat_amount: Option<Decimal>,
    #[serde(default)]
    pub gross_amount: Option<Decimal>,
    #[serde(default)]
    pub e_invoice: Option<EInvoiceProfile>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub custom_data: Option<Value>,
}

/// Result of [`Client::read_document`](crate::Client::read_document).
///
/// The variant always matches the requested [`DocumentFormat`].
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentContent {
    Json(Box<Document>),
    Xml(String),
    Pdf(Vec<u8>),
}

impl DocumentContent {
    pub fn format(&self) -> DocumentFormat {
        match self {
            Self::Json(_) => DocumentFormat::Json,
            Self::Xml(_) => DocumentFormat::Xml,
            Self::Pdf(_) => DocumentFormat::Pdf,
        }
    }

    pub fn as_json(&self) -> Option<&Document> {
        match self {
            Self::Json(doc) => Some(&**doc),
            _ => None,
        }
    }

    pub fn into_json(self) -> Option<Document> {
        match self {
            Self::Json(doc) => Some(*doc),
            _ => None,
        }
    }

    pub fn into_xml(self) -> Option<String> {
        match self {
            Self::Xml(xml) => Some(xml),
            _ => None,
        }
    }

    pub fn into_pdf(self) -> Option<Vec<u8>> {
        match self {
            Self::Pdf(pdf) => Some(pdf),
            _ => None,
        }
    }
}
