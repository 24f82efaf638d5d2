// Core types and functionality for the LegiScan MCP server

pub mod bill_number;
pub mod document;
pub mod reshape;
pub mod types;
pub mod validate;

pub use document::{process_document, Document, DocumentError, ProcessedDocument};
pub use types::*;
pub use validate::{
    BillIdList, MonitorRecord, SearchState, StateCode, ValidationError, YearFilter,
};
