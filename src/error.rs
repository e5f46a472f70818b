//! Error types for the RISPort70 client.

use thiserror::Error;

/// Top-level error type for the `risport70` crate.
///
/// Every failure is surfaced to the immediate caller of an operation
/// method; nothing is swallowed or retried inside the client.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP transport error (connection refused, DNS failure, TLS
    /// failure, timeout exceeded).
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body was not well-formed XML.
    #[error("XML parsing error: {0}")]
    Xml(String),

    /// The namespace-strip round trip produced invalid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The response envelope was missing `Envelope` or `Body`.
    #[error("Invalid SOAP envelope: {0}")]
    InvalidEnvelope(String),

    /// The server returned a SOAP fault instead of a result.
    #[error("SOAP fault {fault_code}: {fault_string}")]
    SoapFault {
        fault_code: String,
        fault_string: String,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error while loading configuration.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns `true` if the underlying transport call timed out.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }
}
