//! Document API endpoints: bill texts, amendments and supplements.

use crate::client::LegiScanClient;
use crate::error::{LegiScanError, LegiScanResult};
use crate::transport::Params;
use legiscan_core::{process_document, Amendment, BillText, Document, ProcessedDocument, Supplement};
use serde::de::DeserializeOwned;

/// Documents API. Payloads arrive base64 encoded; HTML can be decoded on request.
pub struct DocumentsApi<'a> {
    client: &'a LegiScanClient,
}

impl<'a> DocumentsApi<'a> {
    pub(crate) fn new(client: &'a LegiScanClient) -> Self {
        Self { client }
    }

    /// A bill text version, by `doc_id`.
    pub async fn bill_text(
        &self,
        doc_id: u64,
        decode: bool,
    ) -> LegiScanResult<ProcessedDocument<BillText>> {
        self.fetch_document("getBillText", doc_id, "text", decode)
            .await
    }

    pub async fn amendment(
        &self,
        amendment_id: u64,
        decode: bool,
    ) -> LegiScanResult<ProcessedDocument<Amendment>> {
        self.fetch_document("getAmendment", amendment_id, "amendment", decode)
            .await
    }

    pub async fn supplement(
        &self,
        supplement_id: u64,
        decode: bool,
    ) -> LegiScanResult<ProcessedDocument<Supplement>> {
        self.fetch_document("getSupplement", supplement_id, "supplement", decode)
            .await
    }

    async fn fetch_document<T: Document + DeserializeOwned>(
        &self,
        op: &str,
        id: u64,
        field: &str,
        decode: bool,
    ) -> LegiScanResult<ProcessedDocument<T>> {
        let document: T = self
            .client
            .http
            .fetch(op, Params::new().with("id", id), field)
            .await?;

        process_document(document, decode)
            .map_err(|e| LegiScanError::InvalidResponse(format!("{op}: {e}")))
    }
}
