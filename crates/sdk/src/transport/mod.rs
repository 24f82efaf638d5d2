//! Transport layer for the LegiScan SDK.

pub mod http;

pub use http::{HttpTransport, Params};
