// Document payload handling (bill texts, amendments, supplements)

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Serialize;

/// MIME type LegiScan uses for HTML documents.
pub const HTML_MIME: &str = "text/html";

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("Failed to decode document payload: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// A versioned LegiScan document carrying a base64 payload.
pub trait Document {
    /// Declared MIME type, e.g. `text/html` or `application/pdf`.
    fn mime(&self) -> &str;

    /// Base64 payload as received.
    fn payload(&self) -> &str;

    fn replace_payload(&mut self, payload: String);
}

/// A document as returned to callers, with the payload possibly decoded.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessedDocument<T> {
    #[serde(flatten)]
    pub document: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decoded: Option<bool>,
}

/// Whether a declared MIME type is HTML (parameters such as charset ignored).
pub fn is_html(mime: &str) -> bool {
    mime.split(';')
        .next()
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case(HTML_MIME))
}

/// Decode a base64 payload into text, replacing invalid UTF-8 sequences.
pub fn decode_payload(encoded: &str) -> Result<String, DocumentError> {
    let compact: String = encoded.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let bytes = STANDARD.decode(compact)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Optionally decode a document's payload.
///
/// Decoding only happens when `decode` is set, the MIME type is HTML and the
/// payload is non-empty. PDFs and other binary formats always stay base64.
pub fn process_document<T: Document>(
    mut document: T,
    decode: bool,
) -> Result<ProcessedDocument<T>, DocumentError> {
    if decode && is_html(document.mime()) && !document.payload().is_empty() {
        let text = decode_payload(document.payload())?;
        document.replace_payload(text);
        return Ok(ProcessedDocument {
            document,
            decoded: Some(true),
        });
    }

    Ok(ProcessedDocument {
        document,
        decoded: None,
    })
}
