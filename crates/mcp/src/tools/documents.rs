// Document tools: bill texts, amendments, supplements

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{
    json_schema_boolean, json_schema_integer, json_schema_object, parse_arguments, Tool,
};
use anyhow::Result;
use legiscan_sdk::LegiScanClient;
use serde::Deserialize;
use serde_json::{json, Value};

const DECODE_DESCRIPTION: &str =
    "Decode HTML documents to readable text. PDFs and other formats stay base64 encoded.";

#[derive(Debug, Clone, Copy)]
enum DocumentKind {
    BillText,
    Amendment,
    Supplement,
}

impl DocumentKind {
    fn tool_name(&self) -> &'static str {
        match self {
            Self::BillText => "legiscan_get_bill_text",
            Self::Amendment => "legiscan_get_amendment",
            Self::Supplement => "legiscan_get_supplement",
        }
    }

    fn id_field(&self) -> &'static str {
        match self {
            Self::BillText => "doc_id",
            Self::Amendment => "amendment_id",
            Self::Supplement => "supplement_id",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Self::BillText => {
                "Get one version of a bill's text. Text versions and their doc_id values are \
                 listed in the texts section of legiscan_get_bill. The document arrives base64 \
                 encoded unless decode is set and it is HTML."
            }
            Self::Amendment => {
                "Get a proposed or adopted amendment to a bill. Amendment IDs are listed in the \
                 amendments section of legiscan_get_bill. The document arrives base64 encoded \
                 unless decode is set and it is HTML."
            }
            Self::Supplement => {
                "Get a supporting document for a bill, such as a fiscal note, analysis, or veto \
                 letter. Supplement IDs are listed in the supplements section of \
                 legiscan_get_bill. The document arrives base64 encoded unless decode is set and \
                 it is HTML."
            }
        }
    }

    fn id_description(&self) -> &'static str {
        match self {
            Self::BillText => "Text version ID from the bill's text list",
            Self::Amendment => "Amendment ID from the bill's amendment list",
            Self::Supplement => "Supplement ID from the bill's supplement list",
        }
    }
}

/// Fetches one kind of bill document.
pub struct GetDocumentTool {
    client: LegiScanClient,
    kind: DocumentKind,
}

impl GetDocumentTool {
    pub fn bill_text(client: LegiScanClient) -> Self {
        Self {
            client,
            kind: DocumentKind::BillText,
        }
    }

    pub fn amendment(client: LegiScanClient) -> Self {
        Self {
            client,
            kind: DocumentKind::Amendment,
        }
    }

    pub fn supplement(client: LegiScanClient) -> Self {
        Self {
            client,
            kind: DocumentKind::Supplement,
        }
    }
}

#[derive(Debug, Deserialize)]
struct BillTextArgs {
    doc_id: u64,
    #[serde(default)]
    decode: bool,
}

#[derive(Debug, Deserialize)]
struct AmendmentArgs {
    amendment_id: u64,
    #[serde(default)]
    decode: bool,
}

#[derive(Debug, Deserialize)]
struct SupplementArgs {
    supplement_id: u64,
    #[serde(default)]
    decode: bool,
}

#[async_trait::async_trait]
impl Tool for GetDocumentTool {
    fn schema(&self) -> ToolSchema {
        let mut properties = json!({ "decode": json_schema_boolean(DECODE_DESCRIPTION) });
        properties[self.kind.id_field()] = json_schema_integer(self.kind.id_description());

        ToolSchema {
            name: self.kind.tool_name().to_string(),
            description: self.kind.description().to_string(),
            input_schema: json_schema_object(properties, vec![self.kind.id_field()]),
            annotations: None,
        }
    }

    async fn execute(&self, arguments: Value) -> Result<CallToolResult> {
        let documents = self.client.documents();
        match self.kind {
            DocumentKind::BillText => {
                let args: BillTextArgs = parse_arguments(arguments)?;
                let text = documents.bill_text(args.doc_id, args.decode).await?;
                Ok(CallToolResult::json(&text)?)
            }
            DocumentKind::Amendment => {
                let args: AmendmentArgs = parse_arguments(arguments)?;
                let amendment = documents.amendment(args.amendment_id, args.decode).await?;
                Ok(CallToolResult::json(&amendment)?)
            }
            DocumentKind::Supplement => {
                let args: SupplementArgs = parse_arguments(arguments)?;
                let supplement = documents.supplement(args.supplement_id, args.decode).await?;
                Ok(CallToolResult::json(&supplement)?)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::test_support::client;
    use wiremock::matchers::{method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    // "<p>Hello</p>"
    const HTML_B64: &str = "PHA+SGVsbG88L3A+";

    #[test]
    fn test_schemas_name_their_id_field() {
        let client = LegiScanClient::new("k").unwrap();

        let schema = GetDocumentTool::amendment(client).schema();
        assert_eq!(schema.name, "legiscan_get_amendment");
        assert_eq!(schema.input_schema["required"][0], "amendment_id");
        assert!(!schema.description.contains("[]"));
    }

    #[tokio::test]
    async fn test_bill_text_decoded() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(query_param("op", "getBillText"))
            .and(query_param("id", "42"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "OK",
                "text": { "doc_id": 42, "mime": "text/html", "doc": HTML_B64 }
            })))
            .mount(&server)
            .await;

        let tool = GetDocumentTool::bill_text(client(&server));
        let result = tool
            .execute(json!({ "doc_id": 42, "decode": true }))
            .await
            .unwrap();

        let body: Value = serde_json::from_str(result.text().unwrap()).unwrap();
        assert_eq!(body["doc"], "<p>Hello</p>");
        assert_eq!(body["decoded"], true);
    }

    #[tokio::test]
    async fn test_pdf_supplement_stays_encoded() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(query_param("op", "getSupplement"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "OK",
                "supplement": { "supplement_id": 8, "mime": "application/pdf", "doc": "JVBERi0=" }
            })))
            .mount(&server)
            .await;

        let tool = GetDocumentTool::supplement(client(&server));
        let result = tool
            .execute(json!({ "supplement_id": 8, "decode": true }))
            .await
            .unwrap();

        let body: Value = serde_json::from_str(result.text().unwrap()).unwrap();
        assert_eq!(body["doc"], "JVBERi0=");
        assert!(body.get("decoded").is_none());
    }

    #[tokio::test]
    async fn test_wrong_id_field_rejected() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let tool = GetDocumentTool::amendment(client(&server));
        let err = tool.execute(json!({ "doc_id": 1 })).await.unwrap_err();
        assert!(err.to_string().starts_with("Invalid arguments:"));
    }
}
