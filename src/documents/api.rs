use reqwest::Method;

use super::types::*;
use crate::client::{Client, ClientError, QueryParams, decode_json};

impl Client {
    /// Create a document (`POST /documents`).
    ///
    /// # Errors
    ///
    /// `ClientError::RequestFailed` for any non-2xx answer, e.g. when the
    /// service rejects the request content.
    pub async fn create_document(
        &self,
        request: &CreateDocumentRequest,
    ) -> Result<Document, ClientError> {
        self.post(self.endpoint(&["documents"])?, request).await
    }

    /// Fetch a document in the given representation (`GET /documents/{id}?format=`).
    ///
    /// The body is decoded according to `format` alone: JSON into a
    /// [`Document`], XML as text, PDF as raw bytes. Response headers are
    /// not consulted.
    ///
    /// # Errors
    ///
    /// `ClientError::RequestFailed` if the service cannot produce the
    /// representation (for example a PDF for a document without one).
    pub async fn read_document(
        &self,
        id: &str,
        format: DocumentFormat,
    ) -> Result<DocumentContent, ClientError> {
        let mut url = self.endpoint(&["documents", id])?;
        QueryParams::new()
            .push("format", Some(format.as_str()))
            .apply(&mut url);

        let response = self.send(Method::GET, url).await?;
        let content = match format {
            DocumentFormat::Json => DocumentContent::Json(Box::new(decode_json(response).await?)),
            DocumentFormat::Xml => DocumentContent::Xml(response.text().await?),
            DocumentFormat::Pdf => DocumentContent::Pdf(response.bytes().await?.to_vec()),
        };
        Ok(content)
    }
}
